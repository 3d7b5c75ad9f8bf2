use std::io::BufRead;

use anyhow::Context;
use desk_core::enums::UserRole;
use desk_core::forms::{RegistrationWizard, SignupDetails};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

use super::login::read_password;

#[derive(Serialize)]
struct AuthSignupResponse {
    message: String,
    role: UserRole,
    user_id: Option<String>,
    dashboard: &'static str,
    redirect_after_ms: u128,
}

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut wizard = RegistrationWizard::new();
    wizard.pick_role(parse_enum(&args.role)?)?;
    let (password, confirm_password) = passwords(args, std::io::stdin().lock())?;
    *wizard.details_mut() = details_from_args(args, password, confirm_password);
    let request = wizard.submit()?;

    let response = match ctx.client.signup(&request).await {
        Ok(response) => response,
        Err(error) => {
            wizard.fail(error.to_string())?;
            return Err(error).context("signup failed");
        }
    };

    let completion = wizard
        .succeed(response.user_type, ctx.config.ui.redirect_delay())?
        .clone();

    ctx.session
        .login(response.token.clone(), response.user_type)
        .context("failed to store session")?;
    ctx.session
        .set_profile(Some(request.name.clone()), response.user_id.clone())
        .context("failed to store profile")?;
    ctx.refresh_client();

    output(
        &AuthSignupResponse {
            message: format!(
                "{} account created successfully",
                completion.role.label()
            ),
            role: completion.role,
            user_id: response.user_id,
            dashboard: completion.landing,
            redirect_after_ms: completion.redirect_after.as_millis(),
        },
        flags.format,
    )
}

/// Password and confirmation from the flags, or from two stdin lines with
/// `--password-stdin`. `stdin` is only read in that case.
fn passwords(args: &AuthSignupArgs, mut stdin: impl BufRead) -> anyhow::Result<(String, String)> {
    if args.password_stdin {
        let password = read_password(&mut stdin)?;
        let confirm_password = read_password(&mut stdin)?;
        return Ok((password, confirm_password));
    }
    match (&args.password, &args.confirm_password) {
        (Some(password), Some(confirm)) => Ok((password.clone(), confirm.clone())),
        _ => anyhow::bail!(
            "auth signup: pass --password with --confirm-password, or --password-stdin"
        ),
    }
}

fn details_from_args(
    args: &AuthSignupArgs,
    password: String,
    confirm_password: String,
) -> SignupDetails {
    SignupDetails {
        name: args.name.clone(),
        email: args.email.clone(),
        password,
        confirm_password,
        phone_number: args.phone_number.clone().unwrap_or_default(),
        school_name: args.school_name.clone().unwrap_or_default(),
        school_id: args.school_id.clone().unwrap_or_default(),
        address: args.address.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use desk_core::enums::UserRole;
    use desk_core::forms::{RegistrationWizard, WizardStep};

    use pretty_assertions::assert_eq;

    use super::{details_from_args, passwords};
    use crate::cli::subcommands::auth::AuthSignupArgs;

    fn args(confirm: &str) -> AuthSignupArgs {
        AuthSignupArgs {
            role: "school".to_string(),
            name: "Green Valley".to_string(),
            email: "office@greenvalley.edu".to_string(),
            password: Some("longenough".to_string()),
            confirm_password: Some(confirm.to_string()),
            password_stdin: false,
            phone_number: None,
            school_name: Some("Green Valley High".to_string()),
            school_id: Some("GV-01".to_string()),
            address: Some("1 Valley Road".to_string()),
        }
    }

    fn from_flags(args: &AuthSignupArgs) -> desk_core::forms::SignupDetails {
        let (password, confirm) = passwords(args, &b""[..]).expect("flags carry both");
        details_from_args(args, password, confirm)
    }

    #[test]
    fn stdin_supplies_password_and_confirmation() {
        let args = AuthSignupArgs {
            password: None,
            confirm_password: None,
            password_stdin: true,
            ..args("unused")
        };
        let (password, confirm) =
            passwords(&args, &b"longenough\nlongenough\n"[..]).expect("reads two lines");
        assert_eq!(password, "longenough");
        assert_eq!(confirm, "longenough");

        let mut wizard = RegistrationWizard::new();
        wizard.pick_role(UserRole::School).expect("school may sign up");
        *wizard.details_mut() = details_from_args(&args, password, confirm);
        assert!(wizard.submit().is_ok());
    }

    #[test]
    fn missing_confirmation_line_fails_the_match() {
        let args = AuthSignupArgs {
            password: None,
            confirm_password: None,
            password_stdin: true,
            ..args("unused")
        };
        let (password, confirm) = passwords(&args, &b"longenough\n"[..]).expect("reads");
        assert_eq!(confirm, "");

        let mut wizard = RegistrationWizard::new();
        wizard.pick_role(UserRole::School).expect("school may sign up");
        *wizard.details_mut() = details_from_args(&args, password, confirm);
        assert!(wizard.submit().is_err());
    }

    #[test]
    fn flags_without_a_password_are_rejected() {
        let args = AuthSignupArgs {
            password: None,
            confirm_password: None,
            ..args("unused")
        };
        assert!(passwords(&args, &b""[..]).is_err());
    }

    #[test]
    fn matching_passwords_produce_a_school_request() {
        let mut wizard = RegistrationWizard::new();
        wizard.pick_role(UserRole::School).expect("school may sign up");
        *wizard.details_mut() = from_flags(&args("longenough"));

        let request = wizard.submit().expect("valid details");
        assert_eq!(request.school_id.as_deref(), Some("GV-01"));
        assert_eq!(request.phone_number, None);
        assert_eq!(wizard.step(), WizardStep::Submitting);
    }

    #[test]
    fn mismatched_passwords_stay_on_detail_entry() {
        let mut wizard = RegistrationWizard::new();
        wizard.pick_role(UserRole::School).expect("school may sign up");
        *wizard.details_mut() = from_flags(&args("different1"));

        let err = wizard.submit().expect_err("passwords differ");
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(wizard.step(), WizardStep::DetailEntry);
        assert_eq!(wizard.error(), Some("Passwords do not match"));
    }
}
