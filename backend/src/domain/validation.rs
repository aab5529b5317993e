//! Field-keyed validation results shared by the form parsers.
//!
//! Every form endpoint reports failures the same way: a map from field name
//! to the ordered list of messages produced for that field, one pass over
//! all fields. The map serialises as the `fieldErrors` object embedded in
//! `400` responses.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::domain::error::Error;

/// Message reported for a required field absent from the submitted form.
pub(crate) const REQUIRED: &str = "Required";

/// Validation failures keyed by field name.
///
/// ## Invariants
/// - A rejected field carries at least one message.
/// - Messages per field preserve rule declaration order.
///
/// # Examples
/// ```
/// use kym_backend::domain::FieldErrors;
///
/// let mut errors = FieldErrors::default();
/// errors.push("name", "Required");
/// assert_eq!(errors.messages("name"), Some(&["Required"][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<&'static str>>);

impl FieldErrors {
    /// Record a failure message against a field.
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_default().push(message);
    }

    /// True when no field has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, in rule order.
    pub fn messages(&self, field: &str) -> Option<&[&'static str]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the failing fields.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Convert into the domain error carried by a `400` response.
    pub fn into_error(self) -> Error {
        Error::invalid_request("validation failed").with_details(json!({ "fieldErrors": self }))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed for fields: ")?;
        for (index, field) in self.fields().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
