//! Local state for the login, register, and DSA registration forms.
//!
//! The forms are deliberately permissive: no field validation exists in the
//! app today, and the only gate anywhere is the DSA terms checkbox. Each
//! form struct is plain data owned by its dialog component; it disappears
//! when the dialog closes.

/// Credentials handed to `on_login`. No validation, by design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Login {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Always succeeds; empty fields are accepted as-is.
    pub fn submit(&self) -> Login {
        Login {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// The register dialog's step cursor: details first, then the OTP entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RegisterStep {
    #[default]
    CollectingDetails,
    CollectingOtp,
}

/// Completed registration handed to `on_register`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub otp: String,
    step: RegisterStep,
}

impl RegisterForm {
    pub fn step(&self) -> RegisterStep {
        self.step
    }

    /// Primary-button label for the current step.
    pub fn submit_label(&self) -> &'static str {
        match self.step {
            RegisterStep::CollectingDetails => "Send OTP",
            RegisterStep::CollectingOtp => "Register",
        }
    }

    /// Primary-button press. The first press reveals the OTP field and
    /// returns nothing; the second yields the completed registration.
    pub fn submit(&mut self) -> Option<Registration> {
        match self.step {
            RegisterStep::CollectingDetails => {
                self.step = RegisterStep::CollectingOtp;
                None
            }
            RegisterStep::CollectingOtp => Some(Registration {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                password: self.password.clone(),
            }),
        }
    }
}

/// Dropdown choices on the DSA panel.
pub const PROFESSIONS: [&str; 5] = [
    "Salaried",
    "Self Employed",
    "Business Owner",
    "Freelancer",
    "Other",
];
pub const STATES: [&str; 6] = [
    "Maharashtra",
    "Delhi",
    "Karnataka",
    "Tamil Nadu",
    "Gujarat",
    "Other",
];
pub const CITIES: [&str; 6] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Ahmedabad",
    "Other",
];

/// Completed DSA application handed to `on_dsa_register`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DsaRegistration {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub profession: String,
    pub state: String,
    pub city: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DsaForm {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub profession: String,
    pub state: String,
    pub city: String,
    pub accepted_terms: bool,
}

impl DsaForm {
    /// Submission is gated on the terms checkbox; everything else is
    /// accepted verbatim, including empty fields.
    pub fn submit(&self) -> Option<DsaRegistration> {
        self.accepted_terms.then(|| DsaRegistration {
            full_name: self.full_name.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
            profession: self.profession.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_passes_fields_through_unvalidated() {
        let form = LoginForm {
            email: String::new(),
            password: "hunter2".into(),
        };
        let login = form.submit();
        assert_eq!(login.email, "");
        assert_eq!(login.password, "hunter2");
    }

    #[test]
    fn register_first_press_only_advances_the_step() {
        let mut form = RegisterForm::default();
        assert_eq!(form.step(), RegisterStep::CollectingDetails);
        assert_eq!(form.submit_label(), "Send OTP");

        assert_eq!(form.submit(), None);
        assert_eq!(form.step(), RegisterStep::CollectingOtp);
        assert_eq!(form.submit_label(), "Register");
    }

    #[test]
    fn register_second_press_yields_the_collected_fields() {
        let mut form = RegisterForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "9999999999".into(),
            password: "pw".into(),
            ..RegisterForm::default()
        };
        assert_eq!(form.submit(), None);

        // Fields typed during the OTP step still count.
        form.otp = "123456".into();
        let registration = form.submit().expect("second press completes");
        assert_eq!(registration.name, "Asha");
        assert_eq!(registration.email, "asha@example.com");
        assert_eq!(registration.phone, "9999999999");
        assert_eq!(registration.password, "pw");
    }

    #[test]
    fn register_accepts_empty_details() {
        let mut form = RegisterForm::default();
        assert_eq!(form.submit(), None);
        let registration = form.submit().expect("no validation blocks progression");
        assert_eq!(registration.name, "");
    }

    #[test]
    fn dsa_submit_requires_accepted_terms() {
        let mut form = DsaForm {
            full_name: "Ravi".into(),
            mobile: "8888888888".into(),
            email: "ravi@example.com".into(),
            profession: "Salaried".into(),
            state: "Maharashtra".into(),
            city: "Mumbai".into(),
            accepted_terms: false,
        };
        assert_eq!(form.submit(), None);

        form.accepted_terms = true;
        let dsa = form.submit().expect("gate open");
        assert_eq!(dsa.full_name, "Ravi");
        assert_eq!(dsa.city, "Mumbai");
    }

    #[test]
    fn dsa_gate_closes_again_when_terms_untoggled() {
        let mut form = DsaForm {
            accepted_terms: true,
            ..DsaForm::default()
        };
        assert!(form.submit().is_some());

        form.accepted_terms = false;
        assert_eq!(form.submit(), None);
    }
}
