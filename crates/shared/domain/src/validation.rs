//! Field-level validation results and the per-step schema contract.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{ValidateUrl, ValidationErrors};

/// Field-keyed map of human-readable validation messages.
///
/// Keys use the wire (camelCase) field names so that clients can attach the
/// messages to the matching inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0
            .entry(to_camel_case(&field.into()))
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of all failing fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// First message in field order, used as a one-line summary.
    pub fn first_message(&self) -> Option<&str> {
        self.0
            .values()
            .flat_map(|messages| messages.iter())
            .map(String::as_str)
            .next()
    }

    /// Absorb all messages of another error set.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Collect the outcome of several schema checks into one result.
    pub fn collect(results: impl IntoIterator<Item = Result<(), FieldErrors>>) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for result in results {
            if let Err(e) = result {
                errors.merge(e);
            }
        }
        errors.into_result()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for error in errs.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        FieldErrors::from(&errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Schema of one registration step (or of a full payload).
///
/// Implementations run the declarative field rules first and then any
/// cross-field rules owned by the same step.
pub trait Schema {
    fn check(&self) -> Result<(), FieldErrors>;
}

/// Start an error set from the derived `validator` rules.
pub(crate) fn field_rules(result: Result<(), ValidationErrors>) -> FieldErrors {
    match result {
        Ok(()) => FieldErrors::new(),
        Err(errors) => FieldErrors::from(&errors),
    }
}

/// Strictly greater than zero; NaN is not positive.
pub(crate) fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// `true` for absolute http(s) URLs.
pub fn is_http_url(value: &str) -> bool {
    let web_scheme = value.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    });
    web_scheme && value.validate_url()
}

/// `snake_case` → `camelCase`; already camelCase input is returned unchanged.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
