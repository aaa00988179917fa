//! Shared application state for the UI.
//!
//! One struct owns the entity store and the session coordinator. It is
//! provided once at the app root as a Dioxus signal and read through
//! context everywhere else - pages never hold their own copies of domain
//! state.

use dioxus::prelude::*;

use crate::domain::EntityStore;
use crate::session::Session;

/// Everything the pages render from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub store: EntityStore,
    pub session: Session,
}

impl AppState {
    /// Fresh state: seeded rooms, empty meetings/documents, login page.
    pub fn new() -> Self {
        Self {
            store: EntityStore::seeded(),
            session: Session::new(),
        }
    }
}

/// Install the state signal at the app root.
pub fn use_app_provider() -> Signal<AppState> {
    use_context_provider(|| Signal::new(AppState::new()))
}

/// The state signal, from any component below the root.
pub fn use_app() -> Signal<AppState> {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Meeting, MeetingDocument, Role, Room, User};
    use crate::session::Page;

    fn admin() -> User {
        User {
            id: "u-1".to_string(),
            name: "Dana".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_fresh_boot_with_empty_remote_data() {
        // Scenario: remote returns nothing. Dashboard must be renderable
        // with zero counts and the seeded rooms.
        let state = AppState::new();
        assert!(state.store.meetings.is_empty());
        assert!(state.store.documents.is_empty());
        assert_eq!(state.store.rooms.len(), 2);
        assert_eq!(state.session.page(), Page::Login);
    }

    #[test]
    fn test_admin_room_round_trip() {
        // Scenario: login as admin, go to Rooms, add a room, remove it
        // again - state returns to exactly the seeded shape.
        let mut state = AppState::new();
        state.session.login(admin());
        state.session.navigate(Page::Rooms);

        let before = state.store.clone();
        state.store.add_room(Room {
            id: "room-3".to_string(),
            name: "Test".to_string(),
            ..Room::default()
        });
        assert_eq!(state.store.rooms.len(), 3);

        state.store.remove_room("room-3");
        assert_eq!(state.store, before);
    }

    #[test]
    fn test_detail_documents_independent_of_library() {
        // Scenario: a fetched meeting carries two nested documents; the
        // detail page shows those two regardless of the standalone
        // document container.
        let mut state = AppState::new();
        state.session.login(admin());

        let meeting = Meeting {
            id: "m-1".to_string(),
            title: "Review".to_string(),
            documents: vec![
                MeetingDocument {
                    id: "doc-1".to_string(),
                    ..MeetingDocument::default()
                },
                MeetingDocument {
                    id: "doc-2".to_string(),
                    ..MeetingDocument::default()
                },
            ],
            ..Meeting::default()
        };
        state.store.replace_meetings(vec![meeting.clone()]);
        state.store.replace_documents(vec![MeetingDocument {
            id: "doc-99".to_string(),
            ..MeetingDocument::default()
        }]);

        state.session.view_meeting(meeting);
        let selected = state.session.selected_meeting().unwrap();
        let ids: Vec<&str> = selected.documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["doc-1", "doc-2"]);
    }
}
