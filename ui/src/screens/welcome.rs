use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Container;

/// The entry screen: logo, pitch, and the two account buttons. Which dialog
/// each button opens is the caller's decision.
#[component]
pub fn WelcomeScreen(
    on_create_account: EventHandler<()>,
    on_login: EventHandler<()>,
) -> Element {
    rsx! {
        Container {
            div {
                style: "display: flex; flex-direction: column; align-items: center; \
                        justify-content: center; min-height: 90vh; text-align: center; \
                        gap: 1rem; padding: 1.5rem;",
                div {
                    style: "font-size: 4rem;",
                    "💰"
                }
                h2 { "Loan, Shop and Pay" }
                p {
                    style: "color: var(--pico-muted-color);",
                    "Get instant loans for your shopping needs. Quick approval, flexible \
                     repayment options, and competitive interest rates."
                }
                div {
                    style: "width: 100%; display: flex; flex-direction: column; gap: 1rem;",
                    Button {
                        on_click: move |_| on_create_account.call(()),
                        "Create New Account"
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| on_login.call(()),
                        "I Already Have an Account"
                    }
                }
            }
        }
    }
}
