use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;

// Mock bureau figures. The displayed score sits on the standard 300-900 band.
const CREDIT_SCORE: u32 = 750;
const MIN_SCORE: u32 = 300;
const MAX_SCORE: u32 = 900;

/// Credit score overview with mock outstanding/available figures.
#[component]
pub fn CreditScreen(on_back: EventHandler<()>) -> Element {
    let progress = CREDIT_SCORE - MIN_SCORE;
    let range = MAX_SCORE - MIN_SCORE;

    rsx! {
        a {
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                on_back.call(());
            },
            "← Back"
        }

        Grid {
            Card {
                div {
                    style: "display: flex; align-items: center; justify-content: center; height: 120px;",
                    strong { "Credit Score" }
                }
            }
            Card {
                div {
                    style: "display: flex; align-items: center; justify-content: center; height: 120px;",
                    strong { "Credit History" }
                }
            }
        }

        div {
            style: "display: flex; gap: 1rem; margin-bottom: 1.5rem;",
            Button { "Pay EMI" }
            Button { "Pay Grace" }
        }

        h5 { "Credit Balance" }
        progress { value: "{progress}", max: "{range}" }
        div {
            style: "display: flex; justify-content: space-between; color: var(--pico-muted-color);",
            small { "Poor" }
            small { "Good" }
            small { "Excellent" }
        }
        p {
            style: "color: #4caf50; margin-top: 1rem;",
            strong { "Your Credit Score: {CREDIT_SCORE}" }
        }

        div {
            style: "display: flex; justify-content: space-between; margin-top: 1rem;",
            div {
                small { style: "color: var(--pico-muted-color);", "Total Outstanding" }
                h4 { "₹25,000" }
            }
            div {
                small { style: "color: var(--pico-muted-color);", "Available" }
                h4 { "₹75,000" }
            }
        }
    }
}
