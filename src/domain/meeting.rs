//! Meeting entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, MeetingDocument};

/// A scheduled meeting.
///
/// `room_id` is a weak reference into the room container - nothing
/// enforces that the room still exists, and deleting a room does not
/// cascade here. The nested `documents` are denormalized from the remote
/// read at boot and are not kept in sync with the standalone document
/// container afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    /// Unique meeting identifier
    pub id: String,

    /// Meeting title
    pub title: String,

    /// Scheduled start
    pub start_time: DateTime<Utc>,

    /// Scheduled end
    pub end_time: DateTime<Utc>,

    /// Weak reference to a room
    pub room_id: String,

    /// Host name or identifier, free text
    pub host: String,

    /// Participant labels, shape opaque to the store
    pub participants: Vec<String>,

    /// Free-form status ("scheduled", "ongoing", "pending")
    pub status: String,

    /// Display color for calendar chips
    pub color: String,

    /// Documents attached to this meeting, loaded once at boot
    pub documents: Vec<MeetingDocument>,
}

impl Entity for Meeting {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Meeting {
    /// Whether the meeting overlaps the given calendar day (UTC).
    pub fn is_on_day(&self, day: chrono::NaiveDate) -> bool {
        self.start_time.date_naive() <= day && day <= self.end_time.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_on_day() {
        let meeting = Meeting {
            id: "m-1".to_string(),
            title: "Planning".to_string(),
            start_time: Utc.with_ymd_and_hms(2026, 3, 9, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 3, 9, 10, 30, 0).unwrap(),
            ..Meeting::default()
        };

        let day = chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert!(meeting.is_on_day(day));
        assert!(!meeting.is_on_day(day.succ_opt().unwrap()));
    }

    #[test]
    fn test_meeting_serialization_with_nested_documents() {
        let meeting = Meeting {
            id: "m-2".to_string(),
            title: "Board review".to_string(),
            room_id: "room-1".to_string(),
            documents: vec![MeetingDocument {
                id: "doc-1".to_string(),
                name: "Agenda.pdf".to_string(),
                ..MeetingDocument::default()
            }],
            ..Meeting::default()
        };

        let json = serde_json::to_string(&meeting).unwrap();
        let deserialized: Meeting = serde_json::from_str(&json).unwrap();
        assert_eq!(meeting, deserialized);
        assert_eq!(deserialized.documents.len(), 1);
    }
}
