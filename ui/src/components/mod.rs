//! Shared components: the Pico.css building blocks plus the app's dialogs,
//! panels, and dropdown menu.
pub mod dsa_panel;
pub mod login_dialog;
pub mod menu_card;
pub mod pico;
pub mod register_dialog;
