//! A session written by one context is visible to the next one, as it would
//! be across two CLI invocations.

use std::sync::Arc;

use desk_auth::{FileStorage, SessionContext, SessionSource, SessionStorage};
use desk_core::enums::UserRole;
use pretty_assertions::assert_eq;

fn file_storage(tmp: &tempfile::TempDir) -> Arc<FileStorage> {
    Arc::new(FileStorage::new(tmp.path().join("session.json")))
}

#[test]
fn session_survives_reopen() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    let mut first = SessionContext::open_with_env(file_storage(&tmp), None);
    first.login("jwt-persisted", UserRole::School).unwrap();
    first
        .set_profile(Some("Green Valley".into()), Some("u-1".into()))
        .unwrap();
    drop(first);

    let second = SessionContext::open_with_env(file_storage(&tmp), None);
    assert_eq!(second.token(), Some("jwt-persisted"));
    assert_eq!(second.role(), Some(UserRole::School));
    assert_eq!(second.detect_source(), Some(SessionSource::File));
    assert_eq!(
        second.require().unwrap().user_name.as_deref(),
        Some("Green Valley")
    );
}

#[test]
fn logout_is_visible_to_the_next_context() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    let mut first = SessionContext::open_with_env(file_storage(&tmp), None);
    first.login("jwt", UserRole::Admin).unwrap();
    first.logout().unwrap();

    let second = SessionContext::open_with_env(file_storage(&tmp), None);
    assert!(!second.is_authenticated());
}

#[test]
fn corrupt_file_opens_logged_out_and_login_repairs_it() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let storage = file_storage(&tmp);
    std::fs::write(storage.path(), "{not json").expect("write");

    let mut ctx = SessionContext::open_with_env(storage.clone(), None);
    assert!(!ctx.is_authenticated());

    ctx.login("fresh", UserRole::Sales).unwrap();
    assert_eq!(storage.load().unwrap().unwrap().token, "fresh");
}
