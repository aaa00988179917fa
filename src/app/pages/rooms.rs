//! Room management page component.
//!
//! Room cards with status controls, plus the admin-only add form.
//! Deleting a room does not touch meetings that reference it; those
//! render "Unknown room" elsewhere.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app;
use crate::domain::{Room, RoomStatus};
use crate::session::Page;

/// Room management page component.
#[component]
pub fn Rooms() -> Element {
    let mut state = use_app();

    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut area = use_signal(String::new);
    let mut amenities = use_signal(String::new);

    let snapshot = state.read();
    let is_admin = snapshot.session.is_admin();
    let rooms = snapshot.store.rooms.clone();
    drop(snapshot);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let mut state = state;
        state.write().store.add_room(Room {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.read().trim().to_string(),
            location: location.read().trim().to_string(),
            capacity: capacity.read().trim().to_string(),
            area: area.read().trim().to_string(),
            image_url: String::new(),
            status: RoomStatus::Available,
            amenities: amenities
                .read()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        });
        name.set(String::new());
        location.set(String::new());
        capacity.set(String::new());
        area.set(String::new());
        amenities.set(String::new());
    };

    let add_form = if is_admin {
        rsx! {
            article {
                h2 { "Add a room" }
                form { onsubmit: submit,
                    div { class: "grid",
                        label { "Name"
                            input {
                                r#type: "text",
                                required: true,
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                            }
                        }
                        label { "Location"
                            input {
                                r#type: "text",
                                value: "{location}",
                                oninput: move |e| location.set(e.value()),
                            }
                        }
                    }
                    div { class: "grid",
                        label { "Capacity"
                            input {
                                r#type: "text",
                                placeholder: "20 - 30",
                                value: "{capacity}",
                                oninput: move |e| capacity.set(e.value()),
                            }
                        }
                        label { "Area"
                            input {
                                r#type: "text",
                                placeholder: "42 m²",
                                value: "{area}",
                                oninput: move |e| area.set(e.value()),
                            }
                        }
                        label { "Amenities (comma separated)"
                            input {
                                r#type: "text",
                                placeholder: "Projector, Whiteboard",
                                value: "{amenities}",
                                oninput: move |e| amenities.set(e.value()),
                            }
                        }
                    }
                    button { r#type: "submit", "Add room" }
                }
            }
        }
    } else {
        rsx! {}
    };

    let room_cards = if rooms.is_empty() {
        rsx! {
            p { "No rooms yet." }
        }
    } else {
        rsx! {
            div { class: "card-grid",
                for room in rooms {
                    RoomCard { key: "{room.id}", room: room.clone(), is_admin }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Rooms".to_string(),
            nav_active: Page::Rooms,

            h1 { "Rooms" }
            {add_form}
            {room_cards}
        }
    }
}

fn status_chip_class(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "chip chip-available",
        RoomStatus::Busy => "chip chip-busy",
        RoomStatus::Maintenance => "chip chip-maintenance",
    }
}

/// Room card. The status select issues a full-record update through the
/// store, same as any other room edit.
#[component]
fn RoomCard(room: Room, is_admin: bool) -> Element {
    let mut state = use_app();

    let set_status = {
        let room = room.clone();
        move |event: FormEvent| {
            let mut updated = room.clone();
            updated.status = RoomStatus::from(event.value().as_str());
            state.write().store.update_room(updated);
        }
    };

    let delete = {
        let id = room.id.clone();
        move |_| state.write().store.remove_room(&id)
    };

    rsx! {
        article {
            header {
                strong { "{room.name}" }
                " "
                span { class: status_chip_class(room.status), "{room.status}" }
            }
            p { "{room.location}" }
            p {
                small { "Capacity {room.capacity}" }
                "  "
                small { "{room.area}" }
            }
            p {
                for amenity in &room.amenities {
                    span { class: "amenity", "{amenity}" }
                }
            }
            if is_admin {
                footer {
                    select { onchange: set_status,
                        option { value: "available", selected: room.status == RoomStatus::Available, "Available" }
                        option { value: "busy", selected: room.status == RoomStatus::Busy, "Busy" }
                        option { value: "maintenance", selected: room.status == RoomStatus::Maintenance, "Maintenance" }
                    }
                    button { class: "secondary outline", onclick: delete, "Delete room" }
                }
            }
        }
    }
}
