//! Room entity and status.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A bookable meeting room.
///
/// Capacity and area are display strings ("20 - 30", "42 m²"), not
/// authoritative numbers - they come straight from whoever typed them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Unique room identifier (e.g., "room-1" for seeds, UUIDs for
    /// admin-created rooms)
    pub id: String,

    /// Display name
    pub name: String,

    /// Location label (floor, wing)
    pub location: String,

    /// Capacity range, free text
    pub capacity: String,

    /// Floor area, free text
    pub area: String,

    /// Image reference for the room card
    pub image_url: String,

    /// Current availability
    pub status: RoomStatus,

    /// Amenity labels, unordered, duplicates permitted
    pub amenities: Vec<String>,
}

impl Entity for Room {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Room {
    /// The two rooms every fresh installation starts with.
    pub fn seed_rooms() -> Vec<Room> {
        vec![
            Room {
                id: "room-1".to_string(),
                name: "Aurora".to_string(),
                location: "3rd floor, north wing".to_string(),
                capacity: "20 - 30".to_string(),
                area: "64 m²".to_string(),
                image_url: "/assets/rooms/aurora.jpg".to_string(),
                status: RoomStatus::Available,
                amenities: vec![
                    "Projector".to_string(),
                    "Whiteboard".to_string(),
                    "Video conferencing".to_string(),
                ],
            },
            Room {
                id: "room-2".to_string(),
                name: "Borealis".to_string(),
                location: "5th floor, east wing".to_string(),
                capacity: "8 - 12".to_string(),
                area: "28 m²".to_string(),
                image_url: "/assets/rooms/borealis.jpg".to_string(),
                status: RoomStatus::Available,
                amenities: vec!["Display".to_string(), "Whiteboard".to_string()],
            },
        ]
    }
}

/// Room availability.
///
/// Backends and older data use these values as free-form strings, so
/// parsing is lenient and anything unrecognized falls back to
/// [`RoomStatus::Available`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Busy,
    Maintenance,
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Busy => write!(f, "busy"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

impl From<&str> for RoomStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "busy" | "occupied" | "in use" => Self::Busy,
            "maintenance" | "out of order" => Self::Maintenance,
            _ => Self::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_from_str() {
        assert_eq!(RoomStatus::from("busy"), RoomStatus::Busy);
        assert_eq!(RoomStatus::from("In Use"), RoomStatus::Busy);
        assert_eq!(RoomStatus::from("MAINTENANCE"), RoomStatus::Maintenance);
        assert_eq!(RoomStatus::from("whatever"), RoomStatus::Available);
    }

    #[test]
    fn test_room_status_display_round_trip() {
        for status in [
            RoomStatus::Available,
            RoomStatus::Busy,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(RoomStatus::from(status.to_string().as_str()), status);
        }
    }

    #[test]
    fn test_room_serialization() {
        let room = Room::seed_rooms().remove(0);
        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains("\"status\":\"available\""));

        let deserialized: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(room, deserialized);
    }
}
