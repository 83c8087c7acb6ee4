//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = match props.button_type {
        ButtonType::Primary => vec![],
        ButtonType::Secondary => vec!["secondary"],
        ButtonType::Contrast => vec!["contrast"],
    };
    if props.outline {
        classes.push("outline");
    }
    let class_str = classes.join(" ");
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |evt| props.on_input.call(evt),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxProps {
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
}

/// A labeled checkbox reporting its new state on every change.
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |evt| props.on_change.call(evt.checked()),
            }
            "{props.label}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DropdownProps {
    label: String,
    /// The currently selected option, empty until one is picked.
    value: String,
    options: Vec<String>,
    on_select: EventHandler<String>,
}

/// A read-only field that expands into a list of options. The open flag is
/// local; picking an option or tapping the field again collapses it.
pub fn Dropdown(props: DropdownProps) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            label {
                "{props.label}",
                input {
                    r#type: "text",
                    readonly: true,
                    value: "{props.value}",
                    placeholder: "{props.label}",
                    style: "cursor: pointer;",
                    onclick: move |_| is_open.toggle(),
                }
            }
            if is_open() {
                div {
                    style: "border: 1px solid var(--pico-form-element-border-color); \
                            border-radius: var(--pico-border-radius); margin-top: -0.75rem; \
                            margin-bottom: 1rem; overflow: hidden;",
                    for option in props.options.clone() {
                        a {
                            href: "#",
                            style: "display: block; padding: 0.5rem 1rem; text-decoration: none;",
                            onclick: move |evt| {
                                evt.prevent_default();
                                is_open.set(false);
                                props.on_select.call(option.clone());
                            },
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct NoTitleModalProps {
    on_close: EventHandler<()>,
    children: Element,
}

/// A modal with no title bar that asks to close on backdrop click or the
/// Escape key. The owner decides whether the request is honored.
pub fn NoTitleModal(props: NoTitleModalProps) -> Element {
    rsx! {
        dialog {
            open: true,
            // focus this element as soon as it is rendered into the DOM.
            autofocus: true,
            onclick: move |_| props.on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    props.on_close.call(());
                }
            },
            // The <article> tag holds the content and stops the click
            // from propagating to the backdrop and closing the modal.
            article {
                onclick: |evt| evt.stop_propagation(),
                {props.children}
            }
        }
    }
}
