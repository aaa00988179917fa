//! Domain model: rooms, meetings, documents and the in-memory entity store.
//!
//! These types are shared between the server (SSR, remote sync) and the
//! WASM client, so everything here is plain data plus synchronous
//! mutation helpers. No I/O.
//!
//! # Modules
//! - [`room`] - Room entity and status
//! - [`meeting`] - Meeting entity
//! - [`document`] - MeetingDocument entity and preview kind
//! - [`user`] - Session principal and role

mod document;
mod meeting;
mod room;
mod user;

pub use document::{DocumentKind, MeetingDocument};
pub use meeting::Meeting;
pub use room::{Room, RoomStatus};
pub use user::{Role, User};

/// Anything held in an [`EntityStore`] container.
pub trait Entity {
    fn id(&self) -> &str;
}

/// In-memory holder of the three domain containers.
///
/// Containers are ordered sequences: `add` appends, `update` replaces the
/// first element with a matching id in place, `remove` filters by id.
/// `update` and `remove` are deliberately silent no-ops when the id is
/// absent - the store is an idempotent API, callers never need to check
/// existence first.
///
/// Id uniqueness within a container is the caller's responsibility on
/// `add`; ids minted through [`uuid`] in the UI never collide with seeded
/// or remote ids in practice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    pub rooms: Vec<Room>,
    pub meetings: Vec<Meeting>,
    pub documents: Vec<MeetingDocument>,
}

fn update_in<T: Entity>(items: &mut [T], entity: T) {
    if let Some(slot) = items.iter_mut().find(|e| e.id() == entity.id()) {
        *slot = entity;
    }
}

fn remove_from<T: Entity>(items: &mut Vec<T>, id: &str) {
    items.retain(|e| e.id() != id);
}

impl EntityStore {
    /// Empty store, no seed data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the two office rooms.
    ///
    /// Rooms are local seed data; only meetings and documents come from
    /// the table backend.
    pub fn seeded() -> Self {
        Self {
            rooms: Room::seed_rooms(),
            ..Self::default()
        }
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn update_room(&mut self, room: Room) {
        update_in(&mut self.rooms, room);
    }

    pub fn remove_room(&mut self, id: &str) {
        remove_from(&mut self.rooms, id);
    }

    pub fn add_meeting(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
    }

    pub fn update_meeting(&mut self, meeting: Meeting) {
        update_in(&mut self.meetings, meeting);
    }

    pub fn remove_meeting(&mut self, id: &str) {
        remove_from(&mut self.meetings, id);
    }

    /// Wholesale replacement from the boot-time remote read.
    pub fn replace_meetings(&mut self, meetings: Vec<Meeting>) {
        self.meetings = meetings;
    }

    pub fn add_document(&mut self, document: MeetingDocument) {
        self.documents.push(document);
    }

    pub fn update_document(&mut self, document: MeetingDocument) {
        update_in(&mut self.documents, document);
    }

    pub fn remove_document(&mut self, id: &str) {
        remove_from(&mut self.documents, id);
    }

    /// The UI only changes standalone documents through bulk replace;
    /// the granular operations above exist for symmetry with the other
    /// containers.
    pub fn replace_documents(&mut self, documents: Vec<MeetingDocument>) {
        self.documents = documents;
    }

    /// Room lookup for rendering meeting cards. `room_id` on a meeting is
    /// a weak reference - deleting a room leaves meetings pointing at
    /// nothing, and callers render a placeholder for that.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
