//! Wallet data model and wallet form parsing.
//!
//! A user owns at most one wallet. The form parser follows the same
//! contract as the credential parsers: optional raw fields in, either a
//! validated draft or [`FieldErrors`] out. The opening balance is submitted
//! under the form field `money` but reported under the error key `value`,
//! matching the response contract asserted in tests.

use std::fmt;

use uuid::Uuid;

use crate::domain::user::UserId;
use crate::domain::validation::{FieldErrors, REQUIRED};

/// Minimum allowed length for a wallet title.
pub const TITLE_MIN: usize = 5;

const TITLE_TOO_SHORT: &str = "String must contain at least 5 character(s)";
const VALUE_NOT_A_NUMBER: &str = "Value must be a number";

/// Validation errors returned by the wallet component constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletValidationError {
    TitleTooShort { min: usize },
}

impl fmt::Display for WalletValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleTooShort { min } => {
                write!(f, "title must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for WalletValidationError {}

/// Stable opaque wallet identifier.
///
/// Minted by the repository; never parsed from client input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletId(String);

impl WalletId {
    /// Wrap an identifier issued by a repository.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random [`WalletId`] (UUIDv4 string).
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for WalletId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<WalletId> for String {
    fn from(value: WalletId) -> Self {
        value.0
    }
}

/// Wallet title entered on the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletTitle(String);

impl WalletTitle {
    /// Validate and construct a [`WalletTitle`] from owned input.
    pub fn new(title: impl Into<String>) -> Result<Self, WalletValidationError> {
        let title = title.into();
        if title.chars().count() < TITLE_MIN {
            return Err(WalletValidationError::TitleTooShort { min: TITLE_MIN });
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for WalletTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WalletTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<WalletTitle> for String {
    fn from(value: WalletTitle) -> Self {
        value.0
    }
}

/// Persisted wallet owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    id: WalletId,
    user_id: UserId,
    title: WalletTitle,
    description: Option<String>,
    balance: f64,
}

impl Wallet {
    /// Build a [`Wallet`] from validated components.
    pub fn new(
        id: WalletId,
        user_id: UserId,
        title: WalletTitle,
        description: Option<String>,
        balance: f64,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            balance,
        }
    }

    /// Stable wallet identifier.
    pub fn id(&self) -> &WalletId {
        &self.id
    }

    /// Owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Title entered at creation.
    pub fn title(&self) -> &WalletTitle {
        &self.title
    }

    /// Optional free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }
}

/// Creation draft handed to the wallet repository.
#[derive(Debug, Clone)]
pub struct NewWallet {
    pub user_id: UserId,
    pub title: WalletTitle,
    pub description: Option<String>,
    pub balance: f64,
}

/// Validated output of the wallet creation form.
///
/// # Examples
/// ```
/// use kym_backend::domain::WalletDraft;
///
/// let draft = WalletDraft::parse(Some("Rainy day fund"), None, Some("  42.5 "))
///     .expect("valid form should parse");
/// assert_eq!(draft.opening_balance(), Some(42.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WalletDraft {
    title: WalletTitle,
    description: Option<String>,
    opening_balance: Option<f64>,
}

impl WalletDraft {
    /// Parse the wallet form fields, collecting every failure.
    ///
    /// `money` is optional: absent or blank means no opening balance.
    /// Anything else must read as a finite number after trimming.
    pub fn parse(
        title: Option<&str>,
        description: Option<&str>,
        money: Option<&str>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = parse_title(title, &mut errors);
        let opening_balance = parse_money(money, &mut errors);
        let description = description
            .filter(|description| !description.is_empty())
            .map(ToOwned::to_owned);
        match (title, opening_balance) {
            (Some(title), Some(opening_balance)) if errors.is_empty() => Ok(Self {
                title,
                description,
                opening_balance,
            }),
            _ => Err(errors),
        }
    }

    /// Validated wallet title.
    pub fn title(&self) -> &WalletTitle {
        &self.title
    }

    /// Optional description, absent when the field was left empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Opening balance, absent when the money field was left empty.
    pub fn opening_balance(&self) -> Option<f64> {
        self.opening_balance
    }

    /// Turn the draft into a repository request for `user_id`.
    ///
    /// An absent opening balance defaults to zero here.
    pub fn into_new_wallet(self, user_id: UserId) -> NewWallet {
        NewWallet {
            user_id,
            title: self.title,
            description: self.description,
            balance: self.opening_balance.unwrap_or(0.0),
        }
    }
}

fn parse_title(raw: Option<&str>, errors: &mut FieldErrors) -> Option<WalletTitle> {
    let Some(raw) = raw else {
        errors.push("title", REQUIRED);
        return None;
    };
    match WalletTitle::new(raw) {
        Ok(title) => Some(title),
        Err(WalletValidationError::TitleTooShort { .. }) => {
            errors.push("title", TITLE_TOO_SHORT);
            None
        }
    }
}

/// Outer [`Option`]: did the field parse; inner: was a balance supplied.
fn parse_money(raw: Option<&str>, errors: &mut FieldErrors) -> Option<Option<f64>> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Some(None);
    }
    match raw.parse::<f64>() {
        // f64 parsing admits textual NaN and infinities; the form does not.
        Ok(value) if value.is_finite() => Some(Some(value)),
        _ => {
            errors.push("value", VALUE_NOT_A_NUMBER);
            None
        }
    }
}
