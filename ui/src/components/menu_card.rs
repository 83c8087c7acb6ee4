use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::menu::MenuAction;
use crate::menu::MenuSection;
use crate::shell::Shell;

/// The dropdown menu card under the top bar: a "Become a DSA" shortcut plus
/// four collapsible sections. Section flags live inside the shell's menu
/// overlay, so they vanish when the menu closes.
#[component]
pub fn MenuCard(on_action: EventHandler<MenuAction>) -> Element {
    let mut shell = use_context::<Signal<Shell>>();

    rsx! {
        article {
            style: "margin: 0 1rem 1rem 1rem;",
            a {
                href: "#",
                style: "display: block; padding: 0.5rem 0;",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_action.call(MenuAction::OpenDsaPanel);
                },
                "Become a DSA"
            }
            for section in MenuSection::iter() {
                hr {}
                a {
                    href: "#",
                    style: "display: block; padding: 0.5rem 0;",
                    onclick: move |evt| {
                        evt.prevent_default();
                        shell.write().toggle_menu_section(section);
                    },
                    "{section}"
                }
                if shell.read().menu_section_open(section) {
                    div {
                        style: "padding-left: 2rem;",
                        for item in section.entries() {
                            a {
                                href: "#",
                                style: "display: block; padding: 0.25rem 0;",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    on_action.call(item.action);
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
