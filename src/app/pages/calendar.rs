//! Calendar page component.
//!
//! Meetings grouped by day, plus the admin-only scheduling form.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app;
use crate::domain::Meeting;
use crate::session::Page;

/// Calendar page component.
#[component]
pub fn Calendar() -> Element {
    let mut state = use_app();

    let mut title = use_signal(String::new);
    let mut room_id = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut start = use_signal(|| "09:00".to_string());
    let mut end = use_signal(|| "10:00".to_string());
    let mut color = use_signal(|| "#2f6fed".to_string());

    let snapshot = state.read();
    let is_admin = snapshot.session.is_admin();
    let rooms: Vec<(String, String)> = snapshot
        .store
        .rooms
        .iter()
        .map(|r| (r.id.clone(), r.name.clone()))
        .collect();

    // Group by start day; BTreeMap keeps days sorted
    let mut by_day: BTreeMap<NaiveDate, Vec<Meeting>> = BTreeMap::new();
    for meeting in &snapshot.store.meetings {
        by_day
            .entry(meeting.start_time.date_naive())
            .or_default()
            .push(meeting.clone());
    }
    for meetings in by_day.values_mut() {
        meetings.sort_by_key(|m| m.start_time);
    }
    drop(snapshot);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let (Ok(day), Ok(from), Ok(to)) = (
            NaiveDate::parse_from_str(&date.read(), "%Y-%m-%d"),
            NaiveTime::parse_from_str(&start.read(), "%H:%M"),
            NaiveTime::parse_from_str(&end.read(), "%H:%M"),
        ) else {
            return;
        };
        let mut state = state;
        let host = state
            .read()
            .session
            .principal()
            .map(|u| u.name.clone())
            .unwrap_or_default();
        state.write().store.add_meeting(Meeting {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.read().trim().to_string(),
            start_time: Utc.from_utc_datetime(&day.and_time(from)),
            end_time: Utc.from_utc_datetime(&day.and_time(to)),
            room_id: room_id.read().clone(),
            host,
            participants: Vec::new(),
            status: "scheduled".to_string(),
            color: color.read().clone(),
            documents: Vec::new(),
        });
        title.set(String::new());
    };

    let schedule_form = if is_admin {
        rsx! {
            article {
                h2 { "Schedule a meeting" }
                form { onsubmit: submit,
                    div { class: "grid",
                        label { "Title"
                            input {
                                r#type: "text",
                                required: true,
                                value: "{title}",
                                oninput: move |e| title.set(e.value()),
                            }
                        }
                        label { "Room"
                            select {
                                required: true,
                                onchange: move |e| room_id.set(e.value()),
                                option { value: "", selected: room_id.read().is_empty(), "Pick a room" }
                                for (id, name) in rooms {
                                    option { value: "{id}", selected: *room_id.read() == id, "{name}" }
                                }
                            }
                        }
                    }
                    div { class: "grid",
                        label { "Date"
                            input {
                                r#type: "date",
                                required: true,
                                value: "{date}",
                                oninput: move |e| date.set(e.value()),
                            }
                        }
                        label { "From"
                            input {
                                r#type: "time",
                                value: "{start}",
                                oninput: move |e| start.set(e.value()),
                            }
                        }
                        label { "To"
                            input {
                                r#type: "time",
                                value: "{end}",
                                oninput: move |e| end.set(e.value()),
                            }
                        }
                        label { "Color"
                            input {
                                r#type: "color",
                                value: "{color}",
                                oninput: move |e| color.set(e.value()),
                            }
                        }
                    }
                    button { r#type: "submit", "Add to calendar" }
                }
            }
        }
    } else {
        rsx! {}
    };

    let schedule = if by_day.is_empty() {
        rsx! {
            p { "Nothing scheduled yet." }
        }
    } else {
        rsx! {
            for (day, meetings) in by_day {
                section { key: "{day}",
                    h3 { {day.format("%A, %d %B %Y").to_string()} }
                    for meeting in meetings {
                        article { key: "{meeting.id}",
                            style: "border-left: 4px solid {meeting.color}; padding-left: 1rem;",
                            div { class: "meeting-row",
                                onclick: {
                                    let meeting = meeting.clone();
                                    move |_| state.write().session.view_meeting(meeting.clone())
                                },
                                strong { "{meeting.title}" }
                                p {
                                    {meeting.start_time.format("%H:%M").to_string()}
                                    " - "
                                    {meeting.end_time.format("%H:%M").to_string()}
                                    small { "  hosted by {meeting.host}" }
                                }
                            }
                            if is_admin {
                                button {
                                    class: "secondary outline",
                                    onclick: {
                                        let id = meeting.id.clone();
                                        move |_| state.write().store.remove_meeting(&id)
                                    },
                                    "Cancel meeting"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Calendar".to_string(),
            nav_active: Page::Calendar,

            h1 { "Calendar" }
            {schedule_form}
            {schedule}
        }
    }
}
