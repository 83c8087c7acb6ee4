use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Input;
use crate::components::pico::NoTitleModal;
use crate::forms::RegisterForm;
use crate::forms::RegisterStep;
use crate::forms::Registration;

/// The two-step register dialog: collect details, then the OTP. The first
/// primary-button press reveals the OTP field; the second fires
/// `on_register` with everything collected so far.
#[component]
pub fn RegisterDialog(
    on_dismiss: EventHandler<()>,
    on_register: EventHandler<Registration>,
) -> Element {
    let mut form = use_signal(RegisterForm::default);

    rsx! {
        NoTitleModal {
            on_close: move |_| on_dismiss.call(()),

            h3 { style: "text-align: center;", "Register" }

            Input {
                label: "Full Name",
                name: "name",
                value: "{form.read().name}",
                on_input: move |evt: FormEvent| form.write().name = evt.value(),
            }
            Input {
                label: "Email",
                name: "email",
                input_type: "email",
                value: "{form.read().email}",
                on_input: move |evt: FormEvent| form.write().email = evt.value(),
            }
            Input {
                label: "Phone Number",
                name: "phone",
                input_type: "tel",
                value: "{form.read().phone}",
                on_input: move |evt: FormEvent| form.write().phone = evt.value(),
            }
            Input {
                label: "Password",
                name: "password",
                input_type: "password",
                value: "{form.read().password}",
                on_input: move |evt: FormEvent| form.write().password = evt.value(),
            }

            if form.read().step() == RegisterStep::CollectingOtp {
                Input {
                    label: "OTP",
                    name: "otp",
                    input_type: "number",
                    value: "{form.read().otp}",
                    on_input: move |evt: FormEvent| form.write().otp = evt.value(),
                }
            }

            div {
                style: "display: flex; justify-content: center; margin-top: 1rem;",
                Button {
                    on_click: move |_| {
                        let completed = form.write().submit();
                        if let Some(registration) = completed {
                            on_register.call(registration);
                        }
                    },
                    "{form.read().submit_label()}"
                }
            }

            div {
                style: "text-align: center; margin-top: 1.5rem;",
                small { "Already have an account?" }
                br {}
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_dismiss.call(());
                    },
                    "Login here"
                }
            }
        }
    }
}
