//! MeetingDocument entity and the preview kind used for renderer dispatch.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A document attached to a meeting or listed in the document library.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MeetingDocument {
    /// Unique document identifier
    pub id: String,

    /// Filename or title
    pub name: String,

    /// Classification used to pick a preview renderer
    pub kind: DocumentKind,

    /// Human-readable size ("1.2 MB"), not an authoritative byte count
    pub size: String,

    /// Download/source URL, if the backend has one
    pub url: Option<String>,

    /// Page count, where the backend knows it
    pub pages: Option<u32>,
}

impl Entity for MeetingDocument {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Document classification for preview dispatch.
///
/// Anything the backend sends that we do not recognize becomes
/// [`DocumentKind::Other`], which renders as "no preview available" with a
/// download link.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Report,
    Pdf,
    Docx,
    Xlsx,
    #[default]
    Other,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Report => write!(f, "report"),
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
            Self::Xlsx => write!(f, "xlsx"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl From<&str> for DocumentKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "report" => Self::Report,
            "pdf" => Self::Pdf,
            "docx" | "doc" => Self::Docx,
            "xlsx" | "xls" => Self::Xlsx,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_from_str() {
        assert_eq!(DocumentKind::from("pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from("DOC"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from("xls"), DocumentKind::Xlsx);
        assert_eq!(DocumentKind::from("keynote"), DocumentKind::Other);
    }

    #[test]
    fn test_document_serialization() {
        let doc = MeetingDocument {
            id: "doc-7".to_string(),
            name: "Budget.xlsx".to_string(),
            kind: DocumentKind::Xlsx,
            size: "340 KB".to_string(),
            url: Some("https://files.example.com/budget.xlsx".to_string()),
            pages: None,
        };

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"kind\":\"xlsx\""));

        let deserialized: MeetingDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, deserialized);
    }
}
