//! Settings page component.
//!
//! Session details and data counts. Named `SettingsPage` because Dioxus
//! already exports a `Settings` in some preludes.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app;
use crate::session::Page;

/// Settings page component.
#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_app();

    let snapshot = state.read();
    let (user_name, user_role) = snapshot
        .session
        .principal()
        .map(|u| (u.name.clone(), u.role.to_string()))
        .unwrap_or_default();
    let room_count = snapshot.store.rooms.len();
    let meeting_count = snapshot.store.meetings.len();
    let document_count = snapshot.store.documents.len();
    drop(snapshot);

    rsx! {
        Layout {
            title: "Settings".to_string(),
            nav_active: Page::Settings,

            h1 { "Settings" }

            article {
                h2 { "Session" }
                p { "Signed in as " strong { "{user_name}" } " ({user_role})" }
                button {
                    class: "secondary",
                    onclick: move |_| state.write().session.logout(),
                    "Sign out"
                }
            }

            article {
                h2 { "Data" }
                p { "{room_count} rooms, {meeting_count} meetings, {document_count} documents in memory." }
                p {
                    small {
                        "Meetings and documents are loaded from the table backend once at startup. "
                        "Rooms, and anything you add or change here, live in this session only and are "
                        "not written back."
                    }
                }
            }
        }
    }
}
