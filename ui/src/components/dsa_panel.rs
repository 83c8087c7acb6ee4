use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Checkbox;
use crate::components::pico::Dropdown;
use crate::components::pico::Input;
use crate::components::pico::NoTitleModal;
use crate::forms::DsaForm;
use crate::forms::DsaRegistration;
use crate::forms::CITIES;
use crate::forms::PROFESSIONS;
use crate::forms::STATES;

/// The "Become a DSA" registration panel. Submission stays disabled until
/// the terms checkbox is ticked.
#[component]
pub fn DsaPanel(
    on_dismiss: EventHandler<()>,
    on_dsa_register: EventHandler<DsaRegistration>,
) -> Element {
    let mut form = use_signal(DsaForm::default);

    rsx! {
        NoTitleModal {
            on_close: move |_| on_dismiss.call(()),

            h3 { style: "text-align: center;", "BECOME A DSA" }
            p {
                style: "text-align: center; color: var(--pico-muted-color);",
                "Earning opportunity for all existing agents with KFin Loan Partner Program"
            }

            Input {
                label: "Enter your full name",
                name: "full_name",
                value: "{form.read().full_name}",
                on_input: move |evt: FormEvent| form.write().full_name = evt.value(),
            }
            Input {
                label: "Your mobile number",
                name: "mobile",
                input_type: "tel",
                value: "{form.read().mobile}",
                on_input: move |evt: FormEvent| form.write().mobile = evt.value(),
            }
            Input {
                label: "Your email",
                name: "email",
                input_type: "email",
                value: "{form.read().email}",
                on_input: move |evt: FormEvent| form.write().email = evt.value(),
            }

            Dropdown {
                label: "Select your profession",
                value: "{form.read().profession}",
                options: PROFESSIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                on_select: move |choice| form.write().profession = choice,
            }
            Dropdown {
                label: "Select your state",
                value: "{form.read().state}",
                options: STATES.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                on_select: move |choice| form.write().state = choice,
            }
            Dropdown {
                label: "Select your city",
                value: "{form.read().city}",
                options: CITIES.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                on_select: move |choice| form.write().city = choice,
            }

            Checkbox {
                label: "I agree to the Terms and Conditions",
                checked: form.read().accepted_terms,
                on_change: move |checked| form.write().accepted_terms = checked,
            }

            div {
                style: "margin-top: 1rem;",
                Button {
                    disabled: !form.read().accepted_terms,
                    on_click: move |_| {
                        let completed = form.read().submit();
                        if let Some(application) = completed {
                            on_dsa_register.call(application);
                        }
                    },
                    "Send OTP"
                }
            }
        }
    }
}
