//! Regression coverage for the form credential parsers.

use rstest::rstest;

use super::*;

fn signup(
    name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
    confirm: Option<&str>,
) -> Result<SignupCredentials, FieldErrors> {
    SignupCredentials::parse(name, email, password, confirm)
}

#[test]
fn signup_accepts_a_valid_form() {
    let creds = signup(
        Some("Morpheus"),
        Some("morpheus@zion.org"),
        Some("RedPill#1999"),
        Some("RedPill#1999"),
    )
    .expect("valid form should parse");
    assert_eq!(creds.name().as_ref(), "Morpheus");
    assert_eq!(creds.email().as_ref(), "morpheus@zion.org");
    assert_eq!(creds.password(), "RedPill#1999");
}

#[test]
fn signup_rejects_short_name_only() {
    let errors = signup(
        Some("Al"),
        Some("a@a.com"),
        Some("Abc12345!"),
        Some("Abc12345!"),
    )
    .expect_err("short name must fail");
    assert_eq!(
        errors.messages("name"),
        Some(&["String must contain at least 3 character(s)"][..])
    );
    assert_eq!(errors.fields().count(), 1);
}

#[test]
fn signup_reports_mismatch_on_confirm_password_only() {
    let errors = signup(
        Some("Morpheus"),
        Some("morpheus@zion.org"),
        Some("RedPill#1999"),
        Some("BluePill#1999"),
    )
    .expect_err("mismatch must fail");
    assert_eq!(
        errors.messages("confirmPassword"),
        Some(&["Passwords must match."][..])
    );
    assert_eq!(errors.fields().count(), 1);
}

#[test]
fn signup_suppresses_mismatch_while_a_field_fails() {
    let errors = signup(
        Some("Al"),
        Some("morpheus@zion.org"),
        Some("RedPill#1999"),
        Some("BluePill#1999"),
    )
    .expect_err("short name must fail");
    assert!(errors.messages("confirmPassword").is_none());
    assert_eq!(errors.fields().count(), 1);
}

#[test]
fn signup_marks_every_absent_field_required() {
    let errors = signup(None, None, None, None).expect_err("empty form must fail");
    for field in ["name", "email", "password", "confirmPassword"] {
        assert_eq!(errors.messages(field), Some(&["Required"][..]), "{field}");
    }
}

#[test]
fn signup_accumulates_password_rule_failures_in_order() {
    let errors = signup(Some("Morpheus"), Some("morpheus@zion.org"), Some("abc"), Some("abc"))
        .expect_err("weak password must fail");
    assert_eq!(
        errors.messages("password"),
        Some(
            &[
                "Password must be at least 8 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character",
            ][..]
        )
    );
}

#[test]
fn signup_rejects_overlong_password() {
    let password = format!("Aa1!{}", "x".repeat(29));
    let errors = signup(
        Some("Morpheus"),
        Some("morpheus@zion.org"),
        Some(&password),
        Some(&password),
    )
    .expect_err("33 characters must fail");
    assert_eq!(
        errors.messages("password"),
        Some(&["Password must be no more than 32 characters long"][..])
    );
}

#[rstest]
#[case(Some("ThisNameIsFarTooLong"), "String must contain at most 16 character(s)")]
#[case(Some("Al"), "String must contain at least 3 character(s)")]
fn signup_maps_name_bounds_to_messages(#[case] name: Option<&str>, #[case] expected: &str) {
    let errors = signup(name, Some("a@a.com"), Some("Abc12345!"), Some("Abc12345!"))
        .expect_err("out-of-bounds name must fail");
    assert_eq!(errors.messages("name"), Some(&[expected][..]));
}

#[test]
fn signup_collects_failures_across_fields() {
    let errors = signup(
        Some("Al"),
        Some("not-an-email"),
        Some("short"),
        Some("short"),
    )
    .expect_err("multiple bad fields must fail");
    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(fields, vec!["email", "name", "password"]);
    assert_eq!(errors.messages("email"), Some(&["Invalid email"][..]));
}

#[test]
fn login_accepts_a_valid_form() {
    let creds = LoginCredentials::parse(Some("neo@matrix.io"), Some("followthewhite"))
        .expect("valid form should parse");
    assert_eq!(creds.email().as_ref(), "neo@matrix.io");
    assert_eq!(creds.password(), "followthewhite");
}

#[test]
fn login_skips_character_class_rules() {
    let errors =
        LoginCredentials::parse(Some("neo@matrix.io"), Some("abc")).expect_err("too short");
    assert_eq!(
        errors.messages("password"),
        Some(&["Password must be at least 8 characters long"][..])
    );
}

#[test]
fn login_rejects_malformed_email() {
    let errors =
        LoginCredentials::parse(Some("not-an-email"), Some("followthewhite")).expect_err("email");
    assert_eq!(errors.messages("email"), Some(&["Invalid email"][..]));
    assert_eq!(errors.fields().count(), 1);
}

#[test]
fn login_marks_absent_fields_required() {
    let errors = LoginCredentials::parse(None, None).expect_err("empty form must fail");
    assert_eq!(errors.messages("email"), Some(&["Required"][..]));
    assert_eq!(errors.messages("password"), Some(&["Required"][..]));
}
