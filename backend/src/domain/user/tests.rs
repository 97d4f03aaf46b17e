//! Tests for account field validation and the login match.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn abbot() -> User {
    User::new(UserDraft {
        id: UserId::random(),
        username: Username::new("abbot").expect("valid username"),
        email: Email::new("Abbot@Temple.OR.TH").expect("valid email"),
        password_hash: PasswordHash::from_encoded("$2b$04$hash"),
        role: UserRole::User,
        created_at: Utc
            .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
            .single()
            .expect("timestamp"),
    })
}

#[rstest]
#[case("", UserValidationError::EmptyUsername)]
#[case("   ", UserValidationError::EmptyUsername)]
#[case("ab", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
#[case("abcdefghijklmnopqrstu", UserValidationError::UsernameTooLong { max: USERNAME_MAX })]
fn rejects_out_of_range_usernames(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  somchai ").expect("valid username");
    assert_eq!(username.as_str(), "somchai");
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("no-at-sign", UserValidationError::InvalidEmail)]
#[case("two@@example.org", UserValidationError::InvalidEmail)]
#[case("spaces in@example.org", UserValidationError::InvalidEmail)]
#[case("สมชาย@example.org", UserValidationError::InvalidEmail)]
#[case("somchai@วัด.org", UserValidationError::InvalidEmail)]
#[case("somchai@example.ไทย", UserValidationError::InvalidEmail)]
fn rejects_malformed_emails(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
#[case("somchai.j@temple.or.th")]
#[case("novice-01@wat_pho.org")]
fn accepts_ascii_emails(#[case] raw: &str) {
    assert_eq!(Email::new(raw).map(|email| email.as_str().to_owned()), Ok(raw.to_owned()));
}

#[rstest]
fn email_is_trimmed_and_lowercased() {
    let email = Email::new("  Admin@Temple.OR.TH ").expect("valid email");
    assert_eq!(email.as_str(), "admin@temple.or.th");
}

#[rstest]
#[case("user", UserRole::User)]
#[case("admin", UserRole::Admin)]
fn role_parses_its_storage_form(#[case] raw: &str, #[case] expected: UserRole) {
    assert_eq!(raw.parse::<UserRole>(), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
fn unknown_role_is_rejected() {
    assert_eq!(
        "Admin".parse::<UserRole>(),
        Err(UserValidationError::UnknownRole("Admin".to_owned()))
    );
}

#[rstest]
#[case("abbot", true)]
#[case(" abbot ", true)]
#[case("ABBOT@temple.or.th", true)]
#[case("abbot@temple.or.th", true)]
#[case("Abbot", false)]
#[case("novice", false)]
fn matches_login_by_username_or_email(abbot: User, #[case] login: &str, #[case] expected: bool) {
    assert_eq!(abbot.matches_login(login), expected);
}

#[rstest]
fn with_role_only_changes_the_role(abbot: User) {
    let promoted = abbot.clone().with_role(UserRole::Admin);
    assert!(promoted.role().is_admin());
    assert_eq!(promoted.id(), abbot.id());
    assert_eq!(promoted.email(), abbot.email());
}

#[rstest]
fn summary_never_carries_the_password_hash(abbot: User) {
    let value = serde_json::to_value(abbot.summary()).expect("serialise summary");
    let object = value.as_object().expect("summary object");
    assert_eq!(object.get("username"), Some(&json!("abbot")));
    assert_eq!(object.get("email"), Some(&json!("abbot@temple.or.th")));
    assert_eq!(object.get("role"), Some(&json!("user")));
    assert!(object.contains_key("createdAt"));
    assert!(!object.keys().any(|key| key.to_lowercase().contains("password")));
}

#[rstest]
fn password_hash_debug_is_redacted() {
    let hash = PasswordHash::from_encoded("$2b$10$secret");
    assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
}
