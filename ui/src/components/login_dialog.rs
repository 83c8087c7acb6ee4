use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::NoTitleModal;
use crate::forms::Login;
use crate::forms::LoginForm;

/// The login dialog. Field state lives here and dies with the dialog; the
/// caller decides what a dismiss request means.
#[component]
pub fn LoginDialog(
    on_dismiss: EventHandler<()>,
    on_login: EventHandler<Login>,
    on_register_click: EventHandler<()>,
) -> Element {
    let mut form = use_signal(LoginForm::default);

    rsx! {
        NoTitleModal {
            on_close: move |_| on_dismiss.call(()),

            h3 { style: "text-align: center;", "Login" }

            Input {
                label: "Email",
                name: "email",
                input_type: "email",
                value: "{form.read().email}",
                on_input: move |evt: FormEvent| form.write().email = evt.value(),
            }
            Input {
                label: "Password",
                name: "password",
                input_type: "password",
                value: "{form.read().password}",
                on_input: move |evt: FormEvent| form.write().password = evt.value(),
            }

            div {
                style: "display: flex; justify-content: center; margin-top: 1rem;",
                Button {
                    on_click: move |_| {
                        let login = form.read().submit();
                        on_login.call(login);
                    },
                    "Login"
                }
            }

            p {
                style: "text-align: center; color: var(--pico-muted-color); margin: 1rem 0;",
                "or sign up using"
            }
            // Social sign-in is cosmetic for now.
            div {
                style: "display: flex; justify-content: space-evenly; margin-bottom: 1rem;",
                Button { button_type: ButtonType::Secondary, outline: true, "Facebook" }
                Button { button_type: ButtonType::Secondary, outline: true, "Google" }
                Button { button_type: ButtonType::Secondary, outline: true, "Twitter" }
            }

            div {
                style: "text-align: center;",
                small { "Don't have an account?" }
                br {}
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_register_click.call(());
                    },
                    "Register here"
                }
            }
        }
    }
}
