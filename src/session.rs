//! Navigation and session coordination.
//!
//! One state machine tracks the current page, the session principal and
//! the selected meeting. All transitions go through this type; pages
//! never set the current page directly, which is what guarantees that
//! MeetingDetail is unreachable without a selected meeting.

use tracing::debug;

use crate::domain::{Meeting, User};

/// The fixed set of pages. No sub-states, no history stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Calendar,
    Rooms,
    Documents,
    Settings,
    MeetingDetail,
}

impl Page {
    /// Label used by the nav bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Calendar => "Calendar",
            Self::Rooms => "Rooms",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
            Self::MeetingDetail => "Meeting",
        }
    }
}

/// Session coordinator.
///
/// Fields are private on purpose: the only way to reach MeetingDetail is
/// [`Session::view_meeting`], and the only way to get a principal is
/// [`Session::login`]. Rejected transitions are silent no-ops at the
/// state level, logged at debug.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    page: Page,
    principal: Option<User>,
    selected_meeting: Option<Meeting>,
}

impl Session {
    /// Fresh session: Login page, nobody signed in, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn principal(&self) -> Option<&User> {
        self.principal.as_ref()
    }

    pub fn selected_meeting(&self) -> Option<&Meeting> {
        self.selected_meeting.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.principal.as_ref().is_some_and(User::is_admin)
    }

    /// Login -> Dashboard. Ignored if already signed in.
    pub fn login(&mut self, user: User) {
        if self.principal.is_some() {
            debug!(user = %user.name, "login ignored, session already active");
            return;
        }
        debug!(user = %user.name, role = %user.role, "session started");
        self.principal = Some(user);
        self.page = Page::Dashboard;
    }

    /// Any state -> Login. Clears principal and selection.
    pub fn logout(&mut self) {
        debug!("session ended");
        self.principal = None;
        self.selected_meeting = None;
        self.page = Page::Login;
    }

    /// Move to `page`. Rejected while logged out, and MeetingDetail is
    /// rejected here outright - it is only reachable through
    /// [`Session::view_meeting`]. Navigating anywhere else drops the
    /// selection so a stale meeting can never render.
    pub fn navigate(&mut self, page: Page) {
        if self.principal.is_none() {
            debug!(?page, "navigation rejected, not signed in");
            return;
        }
        if page == Page::MeetingDetail && self.selected_meeting.is_none() {
            debug!("navigation to meeting detail rejected, no meeting selected");
            return;
        }
        if page != Page::MeetingDetail {
            self.selected_meeting = None;
        }
        self.page = page;
    }

    /// Select a meeting and open its detail page.
    pub fn view_meeting(&mut self, meeting: Meeting) {
        if self.principal.is_none() {
            debug!(meeting = %meeting.id, "view rejected, not signed in");
            return;
        }
        debug!(meeting = %meeting.id, "viewing meeting");
        self.selected_meeting = Some(meeting);
        self.page = Page::MeetingDetail;
    }

    /// The hardcoded back transition from MeetingDetail.
    pub fn back_to_dashboard(&mut self) {
        self.navigate(Page::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, User};

    fn admin() -> User {
        User {
            id: "u-1".to_string(),
            name: "Dana".to_string(),
            role: Role::Admin,
        }
    }

    fn meeting(id: &str) -> Meeting {
        Meeting {
            id: id.to_string(),
            title: "Standup".to_string(),
            ..Meeting::default()
        }
    }

    #[test]
    fn test_initial_state_is_login() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Login);
        assert!(session.principal().is_none());
        assert!(session.selected_meeting().is_none());
    }

    #[test]
    fn test_login_moves_to_dashboard() {
        let mut session = Session::new();
        session.login(admin());
        assert_eq!(session.page(), Page::Dashboard);
        assert!(session.is_admin());
    }

    #[test]
    fn test_navigate_rejected_while_logged_out() {
        let mut session = Session::new();
        session.navigate(Page::Rooms);
        assert_eq!(session.page(), Page::Login);
    }

    #[test]
    fn test_meeting_detail_unreachable_without_selection() {
        let mut session = Session::new();
        session.login(admin());
        session.navigate(Page::MeetingDetail);
        assert_eq!(session.page(), Page::Dashboard);
    }

    #[test]
    fn test_view_meeting_opens_detail() {
        let mut session = Session::new();
        session.login(admin());
        session.view_meeting(meeting("m-1"));
        assert_eq!(session.page(), Page::MeetingDetail);
        assert_eq!(session.selected_meeting().unwrap().id, "m-1");
    }

    #[test]
    fn test_navigating_away_clears_selection() {
        let mut session = Session::new();
        session.login(admin());
        session.view_meeting(meeting("m-1"));

        session.navigate(Page::Dashboard);
        assert!(session.selected_meeting().is_none());

        // Detail is gated again until a new view_meeting call
        session.navigate(Page::MeetingDetail);
        assert_eq!(session.page(), Page::Dashboard);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::new();
        session.login(admin());
        session.view_meeting(meeting("m-1"));

        session.logout();
        assert_eq!(session.page(), Page::Login);
        assert!(session.principal().is_none());
        assert!(session.selected_meeting().is_none());
    }

    #[test]
    fn test_back_to_dashboard_from_detail() {
        let mut session = Session::new();
        session.login(admin());
        session.view_meeting(meeting("m-1"));
        session.back_to_dashboard();
        assert_eq!(session.page(), Page::Dashboard);
        assert!(session.selected_meeting().is_none());
    }
}
