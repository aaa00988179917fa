//! Dioxus fullstack application entry point.
//!
//! The root component installs the shared state signal, kicks off the
//! two boot-time remote reads and switches on the coordinator's current
//! page. There is no URL router: the page enum is the single source of
//! navigation truth, which is what lets the coordinator guard the
//! meeting-detail page.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use crate::session::Page;
use pages::{Calendar, Dashboard, Documents, Login, MeetingDetail, Rooms, SettingsPage};

/// Root app component.
#[component]
pub fn App() -> Element {
    let mut state = state::use_app_provider();

    // Boot-time remote sync: two independent, fire-and-forget reads.
    // Pages render immediately with empty containers in the meantime.
    use_future(move || async move {
        match api::fetch_meetings().await {
            Ok(meetings) => state.write().store.replace_meetings(meetings),
            Err(_) => {} // handled like an empty result, container untouched
        }
    });
    use_future(move || async move {
        match api::fetch_documents().await {
            Ok(documents) => state.write().store.replace_documents(documents),
            Err(_) => {}
        }
    });

    let page = state.read().session.page();
    let body = match page {
        Page::Login => rsx! { Login {} },
        Page::Dashboard => rsx! { Dashboard {} },
        Page::Calendar => rsx! { Calendar {} },
        Page::Rooms => rsx! { Rooms {} },
        Page::Documents => rsx! { Documents {} },
        Page::Settings => rsx! { SettingsPage {} },
        Page::MeetingDetail => rsx! { MeetingDetail {} },
    };

    rsx! {
        {body}
    }
}
