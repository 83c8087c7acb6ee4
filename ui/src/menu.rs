//! The dropdown menu shown under the top bar: four collapsible sections,
//! each revealing a fixed list of leaf entries.

/// A collapsible section header in the dropdown menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum MenuSection {
    Loans,
    Investments,
    Insurance,
    Login,
}

/// What tapping a leaf menu entry does. Every leaf carries its own action
/// so each one is independently wireable; today most of them route to the
/// DSA panel, which matches the observed app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    OpenDsaPanel,
    OpenLogin,
    OpenRegister,
}

/// A leaf entry under a section header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
}

const fn entry(label: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry { label, action }
}

impl MenuSection {
    /// The static leaf table for this section.
    pub fn entries(&self) -> &'static [MenuEntry] {
        use MenuAction::*;
        const LOANS: &[MenuEntry] = &[
            entry("Personal Loan", OpenDsaPanel),
            entry("Credit Card", OpenDsaPanel),
            entry("Business Loan", OpenDsaPanel),
        ];
        const INVESTMENTS: &[MenuEntry] = &[
            entry("Mutual Funds", OpenDsaPanel),
            entry("Fixed Deposits", OpenDsaPanel),
            entry("Stocks", OpenDsaPanel),
        ];
        const INSURANCE: &[MenuEntry] = &[
            entry("Life Insurance", OpenDsaPanel),
            entry("Health Insurance", OpenDsaPanel),
            entry("Vehicle Insurance", OpenDsaPanel),
        ];
        const LOGIN: &[MenuEntry] = &[
            entry("Customer Login", OpenLogin),
            entry("DSA Login", OpenLogin),
            entry("Register", OpenRegister),
        ];
        match self {
            MenuSection::Loans => LOANS,
            MenuSection::Investments => INVESTMENTS,
            MenuSection::Insurance => INSURANCE,
            MenuSection::Login => LOGIN,
        }
    }
}

/// Which section headers are currently expanded. Lives inside
/// `Overlay::Menu`, so it is discarded whenever the menu closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    loans: bool,
    investments: bool,
    insurance: bool,
    login: bool,
}

impl MenuState {
    fn flag_mut(&mut self, section: MenuSection) -> &mut bool {
        match section {
            MenuSection::Loans => &mut self.loans,
            MenuSection::Investments => &mut self.investments,
            MenuSection::Insurance => &mut self.insurance,
            MenuSection::Login => &mut self.login,
        }
    }

    pub fn toggle(&mut self, section: MenuSection) {
        let flag = self.flag_mut(section);
        *flag = !*flag;
    }

    pub fn is_open(&self, section: MenuSection) -> bool {
        match section {
            MenuSection::Loans => self.loans,
            MenuSection::Investments => self.investments,
            MenuSection::Insurance => self.insurance,
            MenuSection::Login => self.login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn sections_toggle_independently() {
        let mut menu = MenuState::default();
        menu.toggle(MenuSection::Loans);
        menu.toggle(MenuSection::Insurance);

        assert!(menu.is_open(MenuSection::Loans));
        assert!(!menu.is_open(MenuSection::Investments));
        assert!(menu.is_open(MenuSection::Insurance));
        assert!(!menu.is_open(MenuSection::Login));

        menu.toggle(MenuSection::Loans);
        assert!(!menu.is_open(MenuSection::Loans));
        assert!(menu.is_open(MenuSection::Insurance));
    }

    #[test]
    fn every_section_lists_three_entries() {
        for section in MenuSection::iter() {
            assert_eq!(section.entries().len(), 3, "{section}");
        }
    }

    #[test]
    fn login_section_routes_to_login_and_register() {
        let entries = MenuSection::Login.entries();
        assert_eq!(entries[0].action, MenuAction::OpenLogin);
        assert_eq!(entries[1].action, MenuAction::OpenLogin);
        assert_eq!(entries[2].action, MenuAction::OpenRegister);
    }
}
