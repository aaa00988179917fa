//! Document library page component.
//!
//! The standalone document container only changes through bulk replace:
//! the boot sync fills it, and the refresh button re-runs the same read.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app;
use crate::session::Page;

/// Document library page component.
#[component]
pub fn Documents() -> Element {
    let mut state = use_app();
    let mut refreshing = use_signal(|| false);

    let documents = state.read().store.documents.clone();

    let refresh = move |_| {
        refreshing.set(true);
        spawn(async move {
            if let Ok(documents) = crate::app::api::fetch_documents().await {
                state.write().store.replace_documents(documents);
            }
            refreshing.set(false);
        });
    };

    let listing = if documents.is_empty() {
        rsx! {
            p { "The library is empty. Documents appear here once the backend has some." }
        }
    } else {
        rsx! {
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Size" }
                        th { "Pages" }
                        th { "" }
                    }
                }
                tbody {
                    for doc in documents {
                        tr { key: "{doc.id}",
                            td { "{doc.name}" }
                            td { small { "{doc.kind}" } }
                            td { small { "{doc.size}" } }
                            td {
                                small {
                                    {doc.pages.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())}
                                }
                            }
                            td {
                                if let Some(url) = &doc.url {
                                    a { href: "{url}", "Download" }
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
            title: "Documents".to_string(),
            nav_active: Page::Documents,

            h1 { "Documents" }
            button {
                class: "outline",
                disabled: refreshing(),
                onclick: refresh,
                if refreshing() { "Refreshing..." } else { "Refresh from backend" }
            }
            {listing}
        }
    }
}
