//! Meeting detail page component.
//!
//! Shows the selected meeting with its denormalized document list and a
//! per-kind preview. The coordinator guarantees a selection exists when
//! this page is current; the fallback branch only covers the impossible
//! case so we never panic in a view.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app;
use crate::domain::{DocumentKind, MeetingDocument};
use crate::session::Page;

/// Meeting detail page component.
#[component]
pub fn MeetingDetail() -> Element {
    let mut state = use_app();

    let snapshot = state.read();
    let Some(meeting) = snapshot.session.selected_meeting().cloned() else {
        drop(snapshot);
        return rsx! {
            Layout {
                title: "Meeting".to_string(),
                nav_active: Page::Dashboard,
                p { "No meeting selected." }
                button {
                    onclick: move |_| state.write().session.back_to_dashboard(),
                    "Back to dashboard"
                }
            }
        };
    };
    let room_name = snapshot
        .store
        .room(&meeting.room_id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "Unknown room".to_string());
    drop(snapshot);

    let documents_content = if meeting.documents.is_empty() {
        rsx! {
            p { "No documents attached to this meeting." }
        }
    } else {
        rsx! {
            for doc in meeting.documents.clone() {
                DocumentPreview { key: "{doc.id}", doc: doc.clone() }
            }
        }
    };

    rsx! {
        Layout {
            title: meeting.title.clone(),
            nav_active: Page::Dashboard,

            button {
                class: "outline",
                onclick: move |_| state.write().session.back_to_dashboard(),
                "< Back to dashboard"
            }

            hgroup {
                h1 { "{meeting.title}" }
                p {
                    {meeting.start_time.format("%A %d %B, %H:%M").to_string()}
                    " - "
                    {meeting.end_time.format("%H:%M").to_string()}
                    "  in {room_name}"
                }
            }

            section { class: "stat-grid",
                article {
                    small { "Host" }
                    p { "{meeting.host}" }
                }
                article {
                    small { "Status" }
                    p { span { class: "chip", style: "background: {meeting.color}; color: #fff;", "{meeting.status}" } }
                }
                article {
                    small { "Participants" }
                    p {
                        if meeting.participants.is_empty() {
                            "Nobody confirmed yet"
                        } else {
                            {meeting.participants.join(", ")}
                        }
                    }
                }
            }

            // Attendance/voting panel is mock data in this release
            section {
                h2 { "Attendance & voting" }
                article { class: "preview-box",
                    p { small { "Voting opens when the meeting starts." } }
                }
            }

            section {
                h2 { "Documents" }
                {documents_content}
            }
        }
    }
}

/// Preview dispatch over the document kind, with an explicit fallback
/// for anything we cannot render inline.
#[component]
fn DocumentPreview(doc: MeetingDocument) -> Element {
    let pages = doc
        .pages
        .map(|p| format!("{p} pages"))
        .unwrap_or_else(|| "length unknown".to_string());

    let preview = match doc.kind {
        DocumentKind::Report => rsx! {
            div { class: "preview-box",
                p { "Report summary - {pages}" }
            }
        },
        DocumentKind::Pdf => rsx! {
            div { class: "preview-box",
                p { "PDF preview - {pages}" }
            }
        },
        DocumentKind::Docx => rsx! {
            div { class: "preview-box",
                p { "Word document preview" }
            }
        },
        DocumentKind::Xlsx => rsx! {
            div { class: "preview-box",
                p { "Spreadsheet preview" }
            }
        },
        DocumentKind::Other => rsx! {
            div { class: "preview-box",
                p { "No preview available for this file type." }
            }
        },
    };

    rsx! {
        article {
            header {
                strong { "{doc.name}" }
                "  "
                small { "{doc.kind} - {doc.size}" }
            }
            {preview}
            if let Some(url) = doc.url.clone() {
                footer {
                    a { href: "{url}", "Download" }
                }
            }
        }
    }
}
