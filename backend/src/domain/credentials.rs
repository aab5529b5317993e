//! Credential parsing for the signup and login forms.
//!
//! Mirrors the submitted form shape: every field arrives optional at the
//! edge, one parse pass checks all fields, and failures are reported
//! together as [`FieldErrors`] keyed by field name. Message text is part of
//! the response contract and is asserted verbatim in tests.
//!
//! The cross-field password match check runs only once every per-field rule
//! has passed, and attaches its failure to `confirmPassword`.

use zeroize::Zeroizing;

use crate::domain::user::{EmailAddress, UserName, UserValidationError};
use crate::domain::validation::{FieldErrors, REQUIRED};

/// Minimum accepted password length.
pub const PASSWORD_MIN: usize = 8;
/// Maximum accepted password length.
pub const PASSWORD_MAX: usize = 32;
/// Characters satisfying the special-character rule at signup.
const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

const INVALID_EMAIL: &str = "Invalid email";
const NAME_TOO_SHORT: &str = "String must contain at least 3 character(s)";
const NAME_TOO_LONG: &str = "String must contain at most 16 character(s)";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
const PASSWORD_TOO_LONG: &str = "Password must be no more than 32 characters long";
const PASSWORD_NO_UPPERCASE: &str = "Password must contain at least one uppercase letter";
const PASSWORD_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";
const PASSWORD_NO_NUMBER: &str = "Password must contain at least one number";
const PASSWORD_NO_SPECIAL: &str = "Password must contain at least one special character";
const PASSWORDS_MISMATCH: &str = "Passwords must match.";

/// Validated login form: a shaped email and the submitted password.
///
/// The password keeps caller-provided whitespace to avoid surprising
/// credential comparisons, and is zeroised on drop.
///
/// # Examples
/// ```
/// use kym_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::parse(Some("neo@matrix.io"), Some("followthewhite"))
///     .expect("valid login form");
/// assert_eq!(creds.email().as_ref(), "neo@matrix.io");
/// assert_eq!(creds.password(), "followthewhite");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Parse the login form fields, collecting every failure.
    ///
    /// Login applies only the length rules to the password; the
    /// character-class rules are a signup concern.
    pub fn parse(email: Option<&str>, password: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = parse_email(email, &mut errors);
        let password = parse_password(password, PasswordRules::LengthOnly, &mut errors);
        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Self { email, password }),
            _ => Err(errors),
        }
    }

    /// Email address used for the user lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string to verify against the stored hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup form: name, email, and a policy-checked password.
///
/// # Examples
/// ```
/// use kym_backend::domain::SignupCredentials;
///
/// let creds = SignupCredentials::parse(
///     Some("Trinity"),
///     Some("trinity@nebuchadnezzar.io"),
///     Some("Unplugged#2199"),
///     Some("Unplugged#2199"),
/// )
/// .expect("valid signup form");
/// assert_eq!(creds.name().as_ref(), "Trinity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    name: UserName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl SignupCredentials {
    /// Parse the signup form fields, collecting every failure.
    ///
    /// Per-field rules run for all four fields in form order; the password
    /// match check runs only when all of them passed, so a mismatch is
    /// never reported alongside a per-field failure.
    pub fn parse(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        confirm_password: Option<&str>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = parse_name(name, &mut errors);
        let email = parse_email(email, &mut errors);
        let password = parse_password(password, PasswordRules::Full, &mut errors);
        if confirm_password.is_none() {
            errors.push("confirmPassword", REQUIRED);
        }

        if errors.is_empty() {
            let mismatch = match (&password, confirm_password) {
                (Some(password), Some(confirm)) => password.as_str() != confirm,
                _ => false,
            };
            if mismatch {
                errors.push("confirmPassword", PASSWORDS_MISMATCH);
            }
        }

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                name,
                email,
                password,
            }),
            _ => Err(errors),
        }
    }

    /// Name chosen for the new account.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address to register.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password to hash before persisting.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Which password rules a form applies.
#[derive(Clone, Copy)]
enum PasswordRules {
    /// Length bounds only (login).
    LengthOnly,
    /// Length bounds plus the four character classes (signup).
    Full,
}

fn parse_name(raw: Option<&str>, errors: &mut FieldErrors) -> Option<UserName> {
    let Some(raw) = raw else {
        errors.push("name", REQUIRED);
        return None;
    };
    match UserName::new(raw) {
        Ok(name) => Some(name),
        Err(UserValidationError::NameTooShort { .. }) => {
            errors.push("name", NAME_TOO_SHORT);
            None
        }
        Err(_) => {
            errors.push("name", NAME_TOO_LONG);
            None
        }
    }
}

fn parse_email(raw: Option<&str>, errors: &mut FieldErrors) -> Option<EmailAddress> {
    let Some(raw) = raw else {
        errors.push("email", REQUIRED);
        return None;
    };
    match EmailAddress::new(raw) {
        Ok(email) => Some(email),
        Err(_) => {
            errors.push("email", INVALID_EMAIL);
            None
        }
    }
}

/// Check a password against the selected rules, recording one message per
/// failed rule in declaration order.
fn parse_password(
    raw: Option<&str>,
    rules: PasswordRules,
    errors: &mut FieldErrors,
) -> Option<Zeroizing<String>> {
    let Some(raw) = raw else {
        errors.push("password", REQUIRED);
        return None;
    };
    let mut valid = true;
    let length = raw.chars().count();
    if length < PASSWORD_MIN {
        errors.push("password", PASSWORD_TOO_SHORT);
        valid = false;
    }
    if length > PASSWORD_MAX {
        errors.push("password", PASSWORD_TOO_LONG);
        valid = false;
    }
    if matches!(rules, PasswordRules::Full) {
        if !raw.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push("password", PASSWORD_NO_UPPERCASE);
            valid = false;
        }
        if !raw.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push("password", PASSWORD_NO_LOWERCASE);
            valid = false;
        }
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            errors.push("password", PASSWORD_NO_NUMBER);
            valid = false;
        }
        if !raw.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
            errors.push("password", PASSWORD_NO_SPECIAL);
            valid = false;
        }
    }
    valid.then(|| Zeroizing::new(raw.to_owned()))
}

#[cfg(test)]
mod tests;
