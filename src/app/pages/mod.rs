//! Page components.
//!
//! Each page is a pure function of the shared state signal: it reads a
//! snapshot of the store and session and emits intents back into the
//! signal. None of them keep domain state of their own.

mod calendar;
mod dashboard;
mod documents;
mod login;
mod meeting_detail;
mod rooms;
mod settings;

pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use documents::Documents;
pub use login::Login;
pub use meeting_detail::MeetingDetail;
pub use rooms::Rooms;
pub use settings::SettingsPage;
