//! Dashboard page component.
//!
//! Counts and an upcoming-meetings list. Renders fine with all-empty
//! containers while the boot sync is still in flight.

use chrono::Utc;
use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app;
use crate::session::Page;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_app();

    let snapshot = state.read();
    let now = Utc::now();
    let today = now.date_naive();

    let room_count = snapshot.store.rooms.len();
    let document_count = snapshot.store.documents.len();
    let today_count = snapshot
        .store
        .meetings
        .iter()
        .filter(|m| m.is_on_day(today))
        .count();

    let mut upcoming: Vec<_> = snapshot
        .store
        .meetings
        .iter()
        .filter(|m| m.end_time >= now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|m| m.start_time);
    upcoming.truncate(5);

    let room_names: Vec<String> = upcoming
        .iter()
        .map(|m| {
            snapshot
                .store
                .room(&m.room_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "Unknown room".to_string())
        })
        .collect();
    drop(snapshot);

    let upcoming_content = if upcoming.is_empty() {
        rsx! {
            p { "No upcoming meetings. The calendar is all yours." }
        }
    } else {
        rsx! {
            table {
                thead {
                    tr {
                        th { "Meeting" }
                        th { "When" }
                        th { "Room" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (meeting, room_name) in upcoming.into_iter().zip(room_names) {
                        tr {
                            class: "meeting-row",
                            key: "{meeting.id}",
                            onclick: {
                                let meeting = meeting.clone();
                                move |_| state.write().session.view_meeting(meeting.clone())
                            },
                            td { "{meeting.title}" }
                            td {
                                {meeting.start_time.format("%a %d %b, %H:%M").to_string()}
                                " - "
                                {meeting.end_time.format("%H:%M").to_string()}
                            }
                            td { "{room_name}" }
                            td { small { "{meeting.status}" } }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: Page::Dashboard,

            h1 { "Dashboard" }

            section { class: "stat-grid",
                article {
                    div { class: "stat-value", "{room_count}" }
                    small { "Rooms" }
                }
                article {
                    div { class: "stat-value", "{today_count}" }
                    small { "Meetings today" }
                }
                article {
                    div { class: "stat-value", "{document_count}" }
                    small { "Documents" }
                }
            }

            section {
                h2 { "Upcoming meetings" }
                {upcoming_content}
            }
        }
    }
}
