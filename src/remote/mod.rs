//! Client for the remote table backend.
//!
//! The backend exposes a PostgREST-style query interface. Roomboard
//! issues exactly two reads, once, at boot: all meetings with their
//! nested documents, and all standalone documents newest-first. There is
//! no write path - local mutations are ephemeral by design.
//!
//! Rows cross the boundary as explicit record types with a validating
//! decode. A malformed payload produces a typed [`RemoteError::Decode`]
//! that gets logged; it never yields partially populated entities.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RemoteSettings;
use crate::domain::{DocumentKind, Meeting, MeetingDocument};

/// Errors from the table backend boundary.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to table backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("table backend returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    #[error("could not decode {path} response: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the table backend.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteClient {
    pub fn new(settings: RemoteSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
        }
    }

    async fn get_rows<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status,
                path: path.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| RemoteError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// All meetings, each joined with its documents.
    pub async fn fetch_meetings(&self) -> Result<Vec<Meeting>, RemoteError> {
        let rows: Vec<MeetingRow> = self
            .get_rows("/rest/v1/meetings?select=*,meeting_documents(*)")
            .await?;
        debug!(count = rows.len(), "fetched meetings from table backend");
        Ok(rows.into_iter().map(Meeting::from).collect())
    }

    /// All standalone documents, newest first.
    pub async fn fetch_documents(&self) -> Result<Vec<MeetingDocument>, RemoteError> {
        let rows: Vec<DocumentRow> = self
            .get_rows("/rest/v1/documents?select=*&order=created_at.desc")
            .await?;
        debug!(count = rows.len(), "fetched documents from table backend");
        Ok(rows.into_iter().map(MeetingDocument::from).collect())
    }
}

/// Wire shape of a meeting row, nested documents included.
#[derive(Debug, Deserialize)]
struct MeetingRow {
    id: String,
    title: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    room_id: String,
    host: String,
    #[serde(default)]
    participants: Vec<String>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    meeting_documents: Vec<DocumentRow>,
}

/// Wire shape of a document row.
#[derive(Debug, Deserialize)]
struct DocumentRow {
    id: String,
    name: String,
    doc_type: String,
    #[serde(default)]
    size: String,
    url: Option<String>,
    pages: Option<u32>,
    // Ordering key on the backend; not carried into the domain model.
    #[allow(dead_code)]
    created_at: Option<DateTime<Utc>>,
}

impl From<MeetingRow> for Meeting {
    fn from(row: MeetingRow) -> Self {
        Meeting {
            id: row.id,
            title: row.title,
            start_time: row.start_time,
            end_time: row.end_time,
            room_id: row.room_id,
            host: row.host,
            participants: row.participants,
            status: row.status,
            color: row.color,
            documents: row
                .meeting_documents
                .into_iter()
                .map(MeetingDocument::from)
                .collect(),
        }
    }
}

impl From<DocumentRow> for MeetingDocument {
    fn from(row: DocumentRow) -> Self {
        MeetingDocument {
            id: row.id,
            name: row.name,
            kind: DocumentKind::from(row.doc_type.as_str()),
            size: row.size,
            url: row.url,
            pages: row.pages,
        }
    }
}

static CLIENT: OnceLock<Option<RemoteClient>> = OnceLock::new();

/// Install the process-wide client. Called once from `main` before the
/// server starts taking requests; server functions read it via
/// [`client`].
pub fn init(settings: Option<RemoteSettings>) {
    match &settings {
        Some(s) => info!(base_url = %s.base_url, "remote sync enabled"),
        None => info!("no table backend configured, remote sync disabled"),
    }
    let _ = CLIENT.set(settings.map(RemoteClient::new));
}

/// The installed client, or None when sync is disabled or `init` has not
/// run yet.
pub fn client() -> Option<&'static RemoteClient> {
    CLIENT.get().and_then(Option::as_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEETING_ROWS: &str = r##"[{
        "id": "m-1",
        "title": "Quarterly board review",
        "start_time": "2026-03-09T09:00:00Z",
        "end_time": "2026-03-09T10:30:00Z",
        "room_id": "room-1",
        "host": "Dana Whitman",
        "participants": ["Lee", "Priya"],
        "status": "scheduled",
        "color": "#2f6fed",
        "meeting_documents": [
            {"id": "doc-1", "name": "Agenda.pdf", "doc_type": "pdf", "size": "1.2 MB",
             "url": "https://files.example.com/agenda.pdf", "pages": 4,
             "created_at": "2026-03-01T08:00:00Z"},
            {"id": "doc-2", "name": "Q4 numbers.xlsx", "doc_type": "xlsx", "size": "340 KB",
             "url": null, "pages": null, "created_at": "2026-03-02T08:00:00Z"}
        ]
    }]"##;

    #[test]
    fn test_meeting_row_decodes_with_nested_documents() {
        let rows: Vec<MeetingRow> = serde_json::from_str(MEETING_ROWS).unwrap();
        let meeting = Meeting::from(rows.into_iter().next().unwrap());

        assert_eq!(meeting.id, "m-1");
        assert_eq!(meeting.room_id, "room-1");
        assert_eq!(meeting.participants.len(), 2);
        assert_eq!(meeting.documents.len(), 2);
        assert_eq!(meeting.documents[0].kind, DocumentKind::Pdf);
        assert_eq!(meeting.documents[0].pages, Some(4));
        assert_eq!(meeting.documents[1].kind, DocumentKind::Xlsx);
    }

    #[test]
    fn test_meeting_row_optional_fields_default() {
        let rows: Vec<MeetingRow> = serde_json::from_str(
            r#"[{"id": "m-2", "title": "1:1",
                 "start_time": "2026-03-10T14:00:00Z", "end_time": "2026-03-10T14:30:00Z",
                 "room_id": "room-2", "host": "Lee"}]"#,
        )
        .unwrap();
        let meeting = Meeting::from(rows.into_iter().next().unwrap());
        assert!(meeting.participants.is_empty());
        assert!(meeting.documents.is_empty());
        assert_eq!(meeting.status, "");
    }

    #[test]
    fn test_document_row_maps_unknown_type_to_other() {
        let rows: Vec<DocumentRow> = serde_json::from_str(
            r#"[{"id": "doc-9", "name": "deck.key", "doc_type": "keynote",
                 "size": "12 MB", "url": "https://files.example.com/deck.key",
                 "pages": null, "created_at": null}]"#,
        )
        .unwrap();
        let doc = MeetingDocument::from(rows.into_iter().next().unwrap());
        assert_eq!(doc.kind, DocumentKind::Other);
        assert!(doc.url.is_some());
    }

    #[test]
    fn test_malformed_row_fails_loudly() {
        // start_time is not a timestamp - the whole decode must fail,
        // not produce a partially populated meeting
        let result: Result<Vec<MeetingRow>, _> = serde_json::from_str(
            r#"[{"id": "m-3", "title": "Broken", "start_time": 42,
                 "end_time": "2026-03-10T15:00:00Z", "room_id": "room-1", "host": ""}]"#,
        );
        assert!(result.is_err());
    }
}
