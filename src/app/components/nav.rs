//! Navigation bar emitting coordinator intents.

use dioxus::prelude::*;

use crate::app::state::use_app;
use crate::session::Page;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The page currently shown
    pub active: Page,
}

const NAV_PAGES: [Page; 5] = [
    Page::Dashboard,
    Page::Calendar,
    Page::Rooms,
    Page::Documents,
    Page::Settings,
];

/// Top navigation bar. Links are buttons that go through the session
/// coordinator, never direct page assignments.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut state = use_app();

    let principal_name = state
        .read()
        .session
        .principal()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let nav_link_class = move |page: Page| {
        if props.active == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        nav { class: "topnav",
            span { class: "brand", "Roomboard" }
            div { class: "nav-links",
                for page in NAV_PAGES {
                    button {
                        class: nav_link_class(page),
                        onclick: move |_| state.write().session.navigate(page),
                        {page.title()}
                    }
                }
            }
            div { class: "nav-session",
                span { class: "nav-user", "{principal_name}" }
                button {
                    class: "nav-link",
                    onclick: move |_| state.write().session.logout(),
                    "Sign out"
                }
            }
        }
    }
}
