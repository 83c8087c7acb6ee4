use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;

struct ActiveLoan {
    name: &'static str,
    amount: &'static str,
    emi: &'static str,
    due: &'static str,
}

const ACTIVE_LOANS: [ActiveLoan; 2] = [
    ActiveLoan {
        name: "Personal Loan",
        amount: "₹30,000",
        emi: "₹3,500",
        due: "15th May",
    },
    ActiveLoan {
        name: "Business Loan",
        amount: "₹1,00,000",
        emi: "₹12,000",
        due: "20th May",
    },
];

/// Loan overview: current balance against the limit plus the active loans.
#[component]
pub fn LoanScreen(on_back: EventHandler<()>) -> Element {
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
            small { style: "color: var(--pico-muted-color);", "Loan Amount" }
            h3 { "₹50,000" }
            progress { value: "70", max: "100" }
            small { style: "color: var(--pico-muted-color);", "70% of your limit" }
        }

        h5 { "Quick Actions" }
        div {
            style: "display: flex; gap: 1rem; margin-bottom: 1rem;",
            Button { "Apply for Loan" }
            Button { "Check Eligibility" }
        }

        h5 { "Active Loans" }
        for loan in ACTIVE_LOANS {
            Card {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    strong { "{loan.name}" }
                    span { style: "color: #4caf50;", "Active" }
                }
                div {
                    style: "display: flex; justify-content: space-between; margin-top: 0.5rem;",
                    div {
                        small { style: "color: var(--pico-muted-color);", "Amount" }
                        p { "{loan.amount}" }
                    }
                    div {
                        small { style: "color: var(--pico-muted-color);", "EMI" }
                        p { "{loan.emi}" }
                    }
                    div {
                        small { style: "color: var(--pico-muted-color);", "Due Date" }
                        p { "{loan.due}" }
                    }
                }
            }
        }
    }
}
