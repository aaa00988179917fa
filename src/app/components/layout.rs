//! Layout component wrapping all signed-in pages with Pico CSS and the nav bar.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::session::Page;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.topnav { display: flex; align-items: center; gap: 1rem; padding: 0.5rem 0; }
.topnav .brand { font-weight: 700; font-size: 1.1rem; margin-right: 1rem; }
.nav-links { display: flex; gap: 0.25rem; flex: 1; }
.nav-session { display: flex; align-items: center; gap: 0.5rem; }
.nav-user { color: var(--pico-muted-color); font-size: 0.9rem; }
.nav-link { background: none; border: none; margin: 0; padding: 0.4rem 0.8rem; color: var(--pico-muted-color); width: auto; }
.nav-link.active { color: var(--pico-primary); font-weight: 600; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; }
.stat-value { font-size: 2rem; font-weight: 700; }
.chip { display: inline-block; padding: 0.1rem 0.6rem; border-radius: 1rem; font-size: 0.8rem; }
.chip-available { background: var(--pico-ins-color); color: #fff; }
.chip-busy { background: var(--pico-del-color); color: #fff; }
.chip-maintenance { background: var(--pico-muted-color); color: #fff; }
.meeting-row { cursor: pointer; }
.amenity { font-size: 0.8rem; color: var(--pico-muted-color); margin-right: 0.5rem; }
.preview-box { border: 1px dashed var(--pico-muted-border-color); border-radius: 0.5rem; padding: 1rem; margin: 0.5rem 0; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page currently highlighted in the nav
    pub nav_active: Page,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all signed-in pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Roomboard", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        header { class: "container",
            Nav { active: props.nav_active }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "Roomboard v{version} - local changes are not synced back" }
        }
    }
}
