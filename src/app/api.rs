//! Server functions bridging the client to the table backend.
//!
//! Both reads run once at boot, independently, with no retry and no join
//! between them. Failures are logged on the server; the client treats an
//! error exactly like an empty result and leaves its container alone.

use dioxus::prelude::*;

use crate::domain::{Meeting, MeetingDocument};

/// All meetings with their nested documents.
#[server]
pub async fn fetch_meetings() -> Result<Vec<Meeting>, ServerFnError> {
    let Some(client) = crate::remote::client() else {
        return Ok(Vec::new());
    };
    client.fetch_meetings().await.map_err(|err| {
        tracing::warn!(error = %err, "meeting sync failed");
        ServerFnError::new(err.to_string())
    })
}

/// All standalone documents, newest first.
#[server]
pub async fn fetch_documents() -> Result<Vec<MeetingDocument>, ServerFnError> {
    let Some(client) = crate::remote::client() else {
        return Ok(Vec::new());
    };
    client.fetch_documents().await.map_err(|err| {
        tracing::warn!(error = %err, "document sync failed");
        ServerFnError::new(err.to_string())
    })
}
