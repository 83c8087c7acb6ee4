use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;

const SETTINGS: [&str; 6] = [
    "Language",
    "About Us",
    "Legal",
    "Help",
    "Communication Preferences",
    "Lending Partner",
];

/// Account settings: mock profile, account summary, and a settings list.
/// Logout returns control to the caller, which drops back to Welcome.
#[component]
pub fn AccountScreen(on_back: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    rsx! {
        a {
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                on_back.call(());
            },
            "← Back"
        }

        Card {
            div {
                style: "text-align: center;",
                div {
                    style: "width: 100px; height: 100px; margin: 0 auto 1rem auto; \
                            border-radius: 50%; background: var(--pico-muted-border-color); \
                            display: flex; align-items: center; justify-content: center; \
                            font-size: 2.5rem;",
                    "👤"
                }
                h4 { "xyz" }
                p { style: "color: var(--pico-muted-color); margin: 0;", "xyz@example.com" }
                p { style: "color: var(--pico-muted-color); margin: 0;", "+91 999999999" }
            }
        }

        h5 { "Account Summary" }
        Card {
            div {
                style: "display: flex; justify-content: space-between;",
                small { style: "color: var(--pico-muted-color);", "Account Number" }
                small { "XXXX1234" }
            }
            div {
                style: "display: flex; justify-content: space-between;",
                small { style: "color: var(--pico-muted-color);", "Account Type" }
                small { "Savings" }
            }
            div {
                style: "display: flex; justify-content: space-between;",
                small { style: "color: var(--pico-muted-color);", "Available Balance" }
                small { "₹25,000" }
            }
        }

        h5 { "Quick Actions" }
        div {
            style: "display: flex; gap: 1rem; margin-bottom: 1rem;",
            Button { "Edit Profile" }
            Button { "Change Password" }
        }

        h5 { "Settings" }
        Card {
            for (i, setting) in SETTINGS.iter().enumerate() {
                if i > 0 {
                    hr {}
                }
                div {
                    style: "display: flex; justify-content: space-between; padding: 0.25rem 0; \
                            cursor: pointer;",
                    span { "{setting}" }
                    span { "›" }
                }
            }
        }

        Button {
            on_click: move |_| on_logout.call(()),
            "Logout"
        }
    }
}
