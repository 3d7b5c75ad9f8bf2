use anyhow::{Context, bail};
use desk_core::entities::User;
use desk_core::responses::UserUpdate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::user::UserEditArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserUpdateResponse {
    message: String,
    user: User,
}

/// Fold the given flags into the current profile. Blank optional fields
/// clear the stored value; blank name or email is rejected.
fn merge(user: &User, edit: &UserEditArgs) -> anyhow::Result<UserUpdate> {
    if edit.name.is_none()
        && edit.email.is_none()
        && edit.school_name.is_none()
        && edit.phone_number.is_none()
    {
        bail!("nothing to update; pass --name, --email, --school-name or --phone-number");
    }
    let mut update = UserUpdate::from(user);
    for (field, value, label) in [
        (&mut update.name, &edit.name, "Name"),
        (&mut update.email, &edit.email, "Email"),
    ] {
        if let Some(value) = value {
            let value = value.trim();
            if value.is_empty() {
                bail!("{label} cannot be empty");
            }
            *field = value.to_string();
        }
    }
    for (field, value) in [
        (&mut update.school_name, &edit.school_name),
        (&mut update.phone_number, &edit.phone_number),
    ] {
        if let Some(value) = value {
            let value = value.trim();
            *field = (!value.is_empty()).then(|| value.to_string());
        }
    }
    Ok(update)
}

pub async fn run(
    id: &str,
    edit: &UserEditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let current = ctx.client.get_user(id).await?;
    let update = merge(&current, edit)?;
    ctx.client
        .update_user(id, &update)
        .await
        .context("failed to update user")?;
    let user = ctx.client.get_user(id).await?;
    output(
        &UserUpdateResponse {
            message: "User updated successfully".to_string(),
            user,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use desk_core::enums::{AccountStatus, UserRole};
    use pretty_assertions::assert_eq;

    use super::*;

    fn school_user() -> User {
        User {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@school.in".into(),
            user_type: UserRole::School,
            status: AccountStatus::Inactive,
            school_name: Some("DPS".into()),
            phone_number: Some("98450 00000".into()),
        }
    }

    #[test]
    fn untouched_fields_are_sent_back_unchanged() {
        let edit = UserEditArgs {
            name: Some("  Asha Rao ".into()),
            phone_number: Some(String::new()),
            ..UserEditArgs::default()
        };
        let update = merge(&school_user(), &edit).unwrap();
        assert_eq!(
            update,
            UserUpdate {
                name: "Asha Rao".into(),
                email: "asha@school.in".into(),
                user_type: UserRole::School,
                status: AccountStatus::Inactive,
                school_name: Some("DPS".into()),
                phone_number: None,
            }
        );
    }

    #[test]
    fn an_edit_needs_at_least_one_field() {
        let err = merge(&school_user(), &UserEditArgs::default()).unwrap_err();
        assert!(err.to_string().starts_with("nothing to update"));
    }

    #[test]
    fn blank_email_is_rejected() {
        let edit = UserEditArgs {
            email: Some(" ".into()),
            ..UserEditArgs::default()
        };
        let err = merge(&school_user(), &edit).unwrap_err();
        assert_eq!(err.to_string(), "Email cannot be empty");
    }
}
