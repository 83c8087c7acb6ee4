// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing;

pub mod carousel;
pub mod compat;
mod components;
pub mod forms;
pub mod menu;
pub mod shell;
mod screens;

use components::dsa_panel::DsaPanel;
use components::login_dialog::LoginDialog;
use components::menu_card::MenuCard;
use components::pico::Button;
use components::pico::ButtonType;
use components::register_dialog::RegisterDialog;
use forms::DsaRegistration;
use forms::Login;
use forms::Registration;
use screens::account::AccountScreen;
use screens::credit::CreditScreen;
use screens::home::HomeScreen;
use screens::loan::LoanScreen;
use screens::welcome::WelcomeScreen;
use shell::Overlay;
use shell::Screen;
use shell::Shell;
use shell::ShellConfig;
use shell::TAB_SCREENS;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

const APP_CSS: &str = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--pico-muted-border-color);
    }

    .app-frame {
        max-width: 420px;
        min-height: 100vh;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        background-color: var(--pico-background-color);
    }

    .app-frame .content {
        flex: 1;
        overflow-y: auto;
        padding: 0 1rem;
    }

    .top-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.5rem 1rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
    }

    .bottom-nav {
        display: flex;
        border-top: 1px solid var(--pico-muted-border-color);
    }

    .bottom-nav a {
        flex: 1;
        text-align: center;
        padding: 0.75rem 0;
        font-size: 0.75rem;
        text-decoration: none;
        color: var(--pico-muted-color);
    }

    .bottom-nav a.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
    }
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: PICO_CSS,
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

/// The bottom navigation tabs component.
#[component]
fn BottomNav() -> Element {
    let mut shell = use_context::<Signal<Shell>>();
    let selected = shell.read().selected_tab();

    rsx! {
        nav {
            class: "bottom-nav",
            for (index, screen) in TAB_SCREENS.into_iter().enumerate() {
                a {
                    href: "#",
                    class: if selected == Some(index) { "active-tab" } else { "" },
                    "aria-current": if selected == Some(index) { "page" } else { "false" },
                    onclick: move |evt| {
                        evt.prevent_default();
                        shell.write().navigate_to(screen);
                    },
                    "{screen}"
                }
            }
        }
    }
}

/// Search and menu buttons above the feed. Search is inert today.
#[component]
fn TopBar() -> Element {
    let mut shell = use_context::<Signal<Shell>>();

    rsx! {
        div {
            class: "top-bar",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                "🔍"
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| shell.write().open(Overlay::menu()),
                "≡"
            }
        }
    }
}

/// The tabbed main experience: top bar, dropdown menu, the active tab's
/// screen, and the bottom navigation.
#[component]
fn MainShell() -> Element {
    let mut shell = use_context::<Signal<Shell>>();
    let screen = shell.read().screen();
    let menu_open = shell.read().overlay().is_some_and(Overlay::is_menu);

    rsx! {
        div {
            class: "app-frame",
            TopBar {}
            if menu_open {
                MenuCard {
                    on_action: move |action| shell.write().menu_action(action),
                }
            }
            div {
                class: "content",
                match screen {
                    Screen::Home => rsx! { HomeScreen {} },
                    Screen::Loan => rsx! {
                        LoanScreen {
                            on_back: move |_| shell.write().navigate_to(Screen::Home),
                        }
                    },
                    Screen::Credit => rsx! {
                        CreditScreen {
                            on_back: move |_| shell.write().navigate_to(Screen::Home),
                        }
                    },
                    Screen::Account => rsx! {
                        AccountScreen {
                            on_back: move |_| shell.write().navigate_to(Screen::Home),
                            on_logout: move |_| {
                                tracing::info!("logged out");
                                shell.write().navigate_to(Screen::Welcome);
                            },
                        }
                    },
                    // Welcome is rendered by AppBody, never inside the shell.
                    Screen::Welcome => rsx! {},
                }
            }
            BottomNav {}
        }
    }
}

#[component]
fn AppBody() -> Element {
    let mut shell = use_signal(|| Shell::new(ShellConfig::from_env()));
    use_context_provider(|| shell);

    // Integration points for a future auth/OTP backend. Today they log and
    // drive the navigation state only.
    let on_login = move |login: Login| {
        tracing::info!(email = %login.email, "login submitted");
        shell.write().complete_login();
    };
    let on_register = move |registration: Registration| {
        tracing::info!(email = %registration.email, "registration submitted");
        shell.write().complete_registration();
    };
    let on_dsa_register = move |application: DsaRegistration| {
        tracing::info!(mobile = %application.mobile, "DSA application submitted");
        shell.write().close_overlay();
    };

    let screen = shell.read().screen();
    let overlay = shell.read().overlay().cloned();

    rsx! {
        if screen == Screen::Welcome {
            WelcomeScreen {
                on_create_account: move |_| shell.write().open(Overlay::Register),
                on_login: move |_| shell.write().open(Overlay::Login),
            }
        } else {
            MainShell {}
        }

        match overlay {
            Some(Overlay::Login) => rsx! {
                LoginDialog {
                    on_dismiss: move |_| shell.write().dismiss_login(),
                    on_login,
                    on_register_click: move |_| shell.write().switch_login_to_register(),
                }
            },
            Some(Overlay::Register) => rsx! {
                RegisterDialog {
                    on_dismiss: move |_| shell.write().dismiss_register(),
                    on_register,
                }
            },
            Some(Overlay::DsaPanel) => rsx! {
                DsaPanel {
                    on_dismiss: move |_| shell.write().close_overlay(),
                    on_dsa_register,
                }
            },
            // The menu renders inside MainShell, under the top bar.
            Some(Overlay::Menu(_)) | None => rsx! {},
        }
    }
}
