//! Signup wizard.
//!
//! ```text
//! RoleSelect ──pick_role──▶ DetailEntry ──submit──▶ Submitting ──succeed──▶ Done
//!      ▲                      │    ▲                    │
//!      └────────back──────────┘    └────────fail────────┘
//! ```
//!
//! `submit` only leaves `DetailEntry` once client-side validation passes, so a
//! password mismatch never produces a request body.

use std::fmt;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::errors::CoreError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    RoleSelect,
    DetailEntry,
    Submitting,
    Done,
}

impl WizardStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoleSelect => "role-select",
            Self::DetailEntry => "detail-entry",
            Self::Submitting => "submitting",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields typed into the detail step. Role-specific fields are ignored for
/// the other role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDetails {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub school_name: String,
    pub school_id: String,
    pub address: String,
}

/// Body of `POST /api/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_type: UserRole,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Where the user goes once the account exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub role: UserRole,
    pub landing: &'static str,
    pub redirect_after: Duration,
}

#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: WizardStep,
    role: Option<UserRole>,
    details: SignupDetails,
    error: Option<String>,
    completion: Option<Completion>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::RoleSelect,
            role: None,
            details: SignupDetails::default(),
            error: None,
            completion: None,
        }
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Inline error from the last failed submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    #[must_use]
    pub const fn details(&self) -> &SignupDetails {
        &self.details
    }

    pub const fn details_mut(&mut self) -> &mut SignupDetails {
        &mut self.details
    }

    pub fn pick_role(&mut self, role: UserRole) -> Result<(), CoreError> {
        self.expect_step(WizardStep::RoleSelect, WizardStep::DetailEntry)?;
        if !role.can_self_register() {
            return Err(CoreError::validation(format!(
                "{} accounts cannot be created through signup",
                role.label()
            )));
        }
        self.role = Some(role);
        self.step = WizardStep::DetailEntry;
        Ok(())
    }

    /// Return to role selection. The picked role and typed details are kept.
    pub fn back(&mut self) -> Result<(), CoreError> {
        self.expect_step(WizardStep::DetailEntry, WizardStep::RoleSelect)?;
        self.step = WizardStep::RoleSelect;
        Ok(())
    }

    /// Validate the details and move to `Submitting`.
    ///
    /// On a validation failure the wizard stays in `DetailEntry` with the
    /// message set as its inline error, and no request is returned.
    pub fn submit(&mut self) -> Result<SignupRequest, CoreError> {
        self.expect_step(WizardStep::DetailEntry, WizardStep::Submitting)?;
        let role = self
            .role
            .ok_or_else(|| CoreError::validation("Please choose an account type"))?;

        match self.build_request(role) {
            Ok(request) => {
                self.error = None;
                self.step = WizardStep::Submitting;
                Ok(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The backend accepted the signup. `role` is the role it reports.
    pub fn succeed(
        &mut self,
        role: UserRole,
        redirect_after: Duration,
    ) -> Result<&Completion, CoreError> {
        self.expect_step(WizardStep::Submitting, WizardStep::Done)?;
        self.step = WizardStep::Done;
        Ok(self.completion.insert(Completion {
            role,
            landing: role.dashboard(),
            redirect_after,
        }))
    }

    /// The backend rejected the signup. Details are kept for a retry.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), CoreError> {
        self.expect_step(WizardStep::Submitting, WizardStep::DetailEntry)?;
        self.error = Some(message.into());
        self.step = WizardStep::DetailEntry;
        Ok(())
    }

    fn expect_step(&self, from: WizardStep, to: WizardStep) -> Result<(), CoreError> {
        if self.step == from {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                machine: "registration wizard".to_string(),
                from: self.step.to_string(),
                to: to.to_string(),
            })
        }
    }

    fn build_request(&self, role: UserRole) -> Result<SignupRequest, CoreError> {
        let d = &self.details;
        required("Name", &d.name)?;
        required("Email", &d.email)?;
        if !d.email.contains('@') {
            return Err(CoreError::validation("Please enter a valid email address"));
        }
        required("Password", &d.password)?;
        required("Confirm password", &d.confirm_password)?;

        let mut request = SignupRequest {
            user_type: role,
            name: d.name.trim().to_string(),
            email: d.email.trim().to_string(),
            password: d.password.clone(),
            confirm_password: d.confirm_password.clone(),
            phone_number: None,
            school_name: None,
            school_id: None,
            address: None,
        };
        match role {
            UserRole::Admin => {
                required("Phone number", &d.phone_number)?;
                request.phone_number = Some(d.phone_number.trim().to_string());
            }
            UserRole::School => {
                required("School name", &d.school_name)?;
                required("School ID", &d.school_id)?;
                required("Address", &d.address)?;
                request.school_name = Some(d.school_name.trim().to_string());
                request.school_id = Some(d.school_id.trim().to_string());
                request.address = Some(d.address.trim().to_string());
            }
            UserRole::Student | UserRole::Sales => {}
        }

        if d.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if d.password != d.confirm_password {
            return Err(CoreError::validation("Passwords do not match"));
        }
        Ok(request)
    }
}

fn required(label: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(format!("{label} is required")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn school_wizard() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        wizard.pick_role(UserRole::School).unwrap();
        let details = wizard.details_mut();
        details.name = "Green Valley".into();
        details.email = "office@greenvalley.edu".into();
        details.password = "s3cretpass".into();
        details.confirm_password = "s3cretpass".into();
        details.school_name = "Green Valley High".into();
        details.school_id = "GV-001".into();
        details.address = "12 Hill Rd".into();
        wizard
    }

    #[test]
    fn mismatched_passwords_block_submission() {
        let mut wizard = school_wizard();
        wizard.details_mut().confirm_password = "different1".into();

        let err = wizard.submit().unwrap_err();
        assert_eq!(err, CoreError::Validation("Passwords do not match".into()));
        assert_eq!(wizard.step(), WizardStep::DetailEntry);
        assert_eq!(wizard.error(), Some("Passwords do not match"));
    }

    #[test]
    fn school_request_carries_only_school_fields() {
        let mut wizard = school_wizard();
        wizard.details_mut().phone_number = "555-0100".into();

        let request = wizard.submit().unwrap();
        assert_eq!(wizard.step(), WizardStep::Submitting);
        assert_eq!(request.school_id.as_deref(), Some("GV-001"));
        assert_eq!(request.phone_number, None);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userType"], "school");
        assert_eq!(json["confirmPassword"], "s3cretpass");
        assert!(json.get("phoneNumber").is_none());
    }

    #[test]
    fn admin_requires_phone_number() {
        let mut wizard = RegistrationWizard::new();
        wizard.pick_role(UserRole::Admin).unwrap();
        let details = wizard.details_mut();
        details.name = "Root".into();
        details.email = "root@example.com".into();
        details.password = "longenough".into();
        details.confirm_password = "longenough".into();

        assert_eq!(
            wizard.submit().unwrap_err().to_string(),
            "Phone number is required"
        );
    }

    #[test]
    fn short_password_is_rejected() {
        let mut wizard = school_wizard();
        wizard.details_mut().password = "short".into();
        wizard.details_mut().confirm_password = "short".into();
        assert_eq!(
            wizard.submit().unwrap_err().to_string(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn back_keeps_picked_role_and_details() {
        let mut wizard = school_wizard();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::RoleSelect);
        assert_eq!(wizard.role(), Some(UserRole::School));
        assert_eq!(wizard.details().school_id, "GV-001");
    }

    #[test]
    fn only_signup_roles_can_be_picked() {
        let mut wizard = RegistrationWizard::new();
        assert!(wizard.pick_role(UserRole::Student).is_err());
        assert_eq!(wizard.step(), WizardStep::RoleSelect);
    }

    #[test]
    fn success_lands_on_role_dashboard() {
        let mut wizard = school_wizard();
        wizard.submit().unwrap();
        let completion = wizard
            .succeed(UserRole::School, Duration::from_secs(2))
            .unwrap()
            .clone();
        assert_eq!(wizard.step(), WizardStep::Done);
        assert_eq!(completion.landing, "school-dashboard");
        assert_eq!(completion.redirect_after, Duration::from_secs(2));
    }

    #[test]
    fn failure_returns_to_detail_entry_with_error() {
        let mut wizard = school_wizard();
        wizard.submit().unwrap();
        wizard.fail("Email already registered").unwrap();
        assert_eq!(wizard.step(), WizardStep::DetailEntry);
        assert_eq!(wizard.error(), Some("Email already registered"));
        assert_eq!(wizard.details().name, "Green Valley");
    }

    #[test]
    fn transitions_out_of_order_are_rejected() {
        let mut wizard = RegistrationWizard::new();
        let err = wizard.submit().unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(wizard.fail("x").is_err());
    }
}
