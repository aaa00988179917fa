//! Login page component.

use dioxus::prelude::*;

use crate::app::state::use_app;
use crate::domain::{Role, User};

/// Login page. The only validation is the HTML-level required flag on
/// the name field; any name signs in, the role select decides what the
/// UI will allow afterwards.
#[component]
pub fn Login() -> Element {
    let mut state = use_app();
    let mut name = use_signal(String::new);
    let mut role = use_signal(|| Role::Member);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let trimmed = name.read().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        state.write().session.login(User {
            id: uuid::Uuid::new_v4().to_string(),
            name: trimmed,
            role: role(),
        });
    };

    rsx! {
        document::Title { "Sign in - Roomboard" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }

        main { class: "container",
            article { style: "max-width: 26rem; margin: 4rem auto;",
                hgroup {
                    h1 { "Roomboard" }
                    p { "Book rooms, plan meetings, find documents." }
                }
                form { onsubmit: submit,
                    label { "Name"
                        input {
                            r#type: "text",
                            required: true,
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    label { "Role"
                        select {
                            onchange: move |e| {
                                role.set(if e.value() == "ADMIN" { Role::Admin } else { Role::Member });
                            },
                            option { value: "MEMBER", selected: role() == Role::Member, "Member" }
                            option { value: "ADMIN", selected: role() == Role::Admin, "Administrator" }
                        }
                    }
                    button { r#type: "submit", "Sign in" }
                }
            }
        }
    }
}
