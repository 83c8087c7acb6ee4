//! The navigation state machine: which screen is active and which overlay
//! (dialog, panel, or dropdown menu) is presented above it.

use serde::Deserialize;
use serde::Serialize;

use crate::menu::MenuAction;
use crate::menu::MenuSection;
use crate::menu::MenuState;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
pub enum Screen {
    #[default]
    Welcome,
    #[strum(serialize = "My Home")]
    Home,
    Loan,
    Credit,
    #[strum(serialize = "My Account")]
    Account,
}

/// The screens reachable from the bottom navigation bar, in tab order.
pub const TAB_SCREENS: [Screen; 4] = [Screen::Home, Screen::Loan, Screen::Credit, Screen::Account];

impl Screen {
    /// Bottom-tab index for this screen, if it has one. `Welcome` sits
    /// outside the tab bar.
    pub fn tab_index(&self) -> Option<usize> {
        TAB_SCREENS.iter().position(|s| s == self)
    }
}

/// A modal surface presented above the active screen. At most one is
/// visible at a time; the dropdown menu carries its submenu flags inside
/// the variant so closing the menu discards them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    Login,
    Register,
    DsaPanel,
    Menu(MenuState),
}

impl Overlay {
    /// A freshly opened dropdown menu with all sections collapsed.
    pub fn menu() -> Self {
        Overlay::Menu(MenuState::default())
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Overlay::Menu(_))
    }
}

/// What the "Login here" dismiss link on the register dialog does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegisterDismiss {
    /// Close the overlay entirely.
    #[default]
    Close,
    /// Swap back to the login dialog.
    ReopenLogin,
}

/// Entry-policy configuration for the shell. The two observed app variants
/// (welcome-gated entry vs. login forced open on first load) collapse into
/// these three knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub initial_screen: Screen,
    pub force_login_on_start: bool,
    pub register_dismiss: RegisterDismiss,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_screen: Screen::Welcome,
            force_login_on_start: false,
            register_dismiss: RegisterDismiss::Close,
        }
    }
}

impl ShellConfig {
    /// Build-time override, in the spirit of the forced-login app variant:
    /// compile with `FORCE_LOGIN=1` to start on the login dialog.
    pub fn from_env() -> Self {
        if option_env!("FORCE_LOGIN") == Some("1") {
            Self {
                initial_screen: Screen::Home,
                force_login_on_start: true,
                register_dismiss: RegisterDismiss::ReopenLogin,
            }
        } else {
            Self::default()
        }
    }
}

/// The top-level UI state: active screen, current overlay, and the entry
/// policy. All transitions are synchronous and total; nothing here can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shell {
    screen: Screen,
    overlay: Option<Overlay>,
    config: ShellConfig,
    login_locked: bool,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            screen: config.initial_screen,
            overlay: config.force_login_on_start.then_some(Overlay::Login),
            login_locked: config.force_login_on_start,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Index of the highlighted bottom tab. Derived from the active screen
    /// so the bar can never disagree with the router.
    pub fn selected_tab(&self) -> Option<usize> {
        self.screen.tab_index()
    }

    /// Switch the active screen. Always succeeds, idempotent when `target`
    /// is already active.
    pub fn navigate_to(&mut self, target: Screen) {
        self.screen = target;
    }

    /// Present an overlay. Non-menu overlays unconditionally replace
    /// whatever is currently shown; opening the menu while the menu is
    /// already open closes it instead (a flip, not a stack push).
    pub fn open(&mut self, overlay: Overlay) {
        if overlay.is_menu() && self.overlay.as_ref().is_some_and(Overlay::is_menu) {
            self.overlay = None;
        } else {
            self.overlay = Some(overlay);
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Dismiss request from the login dialog. A no-op while the forced-login
    /// entry policy still holds the dialog open.
    pub fn dismiss_login(&mut self) {
        if !self.login_locked {
            self.overlay = None;
        }
    }

    /// Dismiss request from the register dialog; behavior is a config
    /// choice, not two ad-hoc code paths.
    pub fn dismiss_register(&mut self) {
        match self.config.register_dismiss {
            RegisterDismiss::Close => self.overlay = None,
            RegisterDismiss::ReopenLogin => self.overlay = Some(Overlay::Login),
        }
    }

    /// "Register here" inside the login dialog: atomically swap dialogs so
    /// the two are never shown together.
    pub fn switch_login_to_register(&mut self) {
        self.overlay = Some(Overlay::Register);
    }

    /// Successful login: unlock dismissal, drop the dialog, land on Home.
    pub fn complete_login(&mut self) {
        self.login_locked = false;
        self.overlay = None;
        self.navigate_to(Screen::Home);
    }

    /// Successful registration behaves like a login.
    pub fn complete_registration(&mut self) {
        self.complete_login();
    }

    /// Flip one of the dropdown menu's section headers. Does nothing when
    /// the menu is not the current overlay.
    pub fn toggle_menu_section(&mut self, section: MenuSection) {
        if let Some(Overlay::Menu(menu)) = &mut self.overlay {
            menu.toggle(section);
        }
    }

    pub fn menu_section_open(&self, section: MenuSection) -> bool {
        match &self.overlay {
            Some(Overlay::Menu(menu)) => menu.is_open(section),
            _ => false,
        }
    }

    /// A leaf menu entry was tapped: the menu closes and the entry's target
    /// overlay opens in its place.
    pub fn menu_action(&mut self, action: MenuAction) {
        self.overlay = Some(match action {
            MenuAction::OpenDsaPanel => Overlay::DsaPanel,
            MenuAction::OpenLogin => Overlay::Login,
            MenuAction::OpenRegister => Overlay::Register,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(ShellConfig::default())
    }

    #[test]
    fn initial_state_is_welcome_with_no_overlay() {
        let s = shell();
        assert_eq!(s.screen(), Screen::Welcome);
        assert_eq!(s.overlay(), None);
        assert_eq!(s.selected_tab(), None);
    }

    #[test]
    fn last_navigation_wins() {
        let mut s = shell();
        s.navigate_to(Screen::Loan);
        s.navigate_to(Screen::Credit);
        s.navigate_to(Screen::Account);
        assert_eq!(s.screen(), Screen::Account);
    }

    #[test]
    fn navigation_is_idempotent() {
        let mut s = shell();
        s.navigate_to(Screen::Home);
        s.navigate_to(Screen::Home);
        assert_eq!(s.screen(), Screen::Home);
        assert_eq!(s.selected_tab(), Some(0));
    }

    #[test]
    fn tab_indices_match_bottom_bar_order() {
        let mut s = shell();
        let expected = [
            (Screen::Home, Some(0)),
            (Screen::Loan, Some(1)),
            (Screen::Credit, Some(2)),
            (Screen::Account, Some(3)),
            (Screen::Welcome, None),
        ];
        for (screen, tab) in expected {
            s.navigate_to(screen);
            assert_eq!(s.selected_tab(), tab, "{screen}");
        }
    }

    #[test]
    fn non_menu_overlays_replace_each_other() {
        let mut s = shell();
        s.open(Overlay::Login);
        s.open(Overlay::DsaPanel);
        assert_eq!(s.overlay(), Some(&Overlay::DsaPanel));
    }

    #[test]
    fn menu_open_is_a_toggle() {
        let mut s = shell();
        s.open(Overlay::menu());
        assert!(s.overlay().is_some_and(Overlay::is_menu));
        s.open(Overlay::menu());
        assert_eq!(s.overlay(), None);
    }

    #[test]
    fn opening_menu_over_dialog_replaces_it() {
        let mut s = shell();
        s.open(Overlay::Login);
        s.open(Overlay::menu());
        assert!(s.overlay().is_some_and(Overlay::is_menu));
    }

    #[test]
    fn reopening_menu_resets_section_flags() {
        let mut s = shell();
        s.open(Overlay::menu());
        s.toggle_menu_section(MenuSection::Loans);
        assert!(s.menu_section_open(MenuSection::Loans));

        // Close and reopen: the submenu flags must not survive.
        s.open(Overlay::menu());
        s.open(Overlay::menu());
        assert!(!s.menu_section_open(MenuSection::Loans));
    }

    #[test]
    fn section_toggle_without_menu_is_ignored() {
        let mut s = shell();
        s.toggle_menu_section(MenuSection::Login);
        assert_eq!(s.overlay(), None);
        assert!(!s.menu_section_open(MenuSection::Login));
    }

    #[test]
    fn menu_action_closes_menu_and_opens_target() {
        let mut s = shell();
        s.open(Overlay::menu());
        s.menu_action(MenuAction::OpenDsaPanel);
        assert_eq!(s.overlay(), Some(&Overlay::DsaPanel));

        s.open(Overlay::menu());
        s.menu_action(MenuAction::OpenRegister);
        assert_eq!(s.overlay(), Some(&Overlay::Register));
    }

    #[test]
    fn login_to_register_swap_leaves_only_register() {
        let mut s = shell();
        s.open(Overlay::Login);
        s.switch_login_to_register();
        assert_eq!(s.overlay(), Some(&Overlay::Register));
    }

    #[test]
    fn register_dismiss_follows_config() {
        let mut closing = Shell::new(ShellConfig::default());
        closing.open(Overlay::Register);
        closing.dismiss_register();
        assert_eq!(closing.overlay(), None);

        let mut reopening = Shell::new(ShellConfig {
            register_dismiss: RegisterDismiss::ReopenLogin,
            ..ShellConfig::default()
        });
        reopening.open(Overlay::Register);
        reopening.dismiss_register();
        assert_eq!(reopening.overlay(), Some(&Overlay::Login));
    }

    #[test]
    fn forced_login_start_blocks_dismissal_until_login() {
        let mut s = Shell::new(ShellConfig {
            initial_screen: Screen::Home,
            force_login_on_start: true,
            register_dismiss: RegisterDismiss::ReopenLogin,
        });
        assert_eq!(s.overlay(), Some(&Overlay::Login));

        s.dismiss_login();
        assert_eq!(s.overlay(), Some(&Overlay::Login), "dismiss must be a no-op");

        s.complete_login();
        assert_eq!(s.overlay(), None);
        assert_eq!(s.screen(), Screen::Home);

        // Once unlocked, a reopened login dialog dismisses normally.
        s.open(Overlay::Login);
        s.dismiss_login();
        assert_eq!(s.overlay(), None);
    }

    #[test]
    fn completing_registration_lands_on_home() {
        let mut s = shell();
        s.open(Overlay::Register);
        s.complete_registration();
        assert_eq!(s.overlay(), None);
        assert_eq!(s.screen(), Screen::Home);
        assert_eq!(s.selected_tab(), Some(0));
    }
}
