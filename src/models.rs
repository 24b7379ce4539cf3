//! Data model of the validation engine: field kinds, per-field results,
//! caller-supplied inputs and the aggregate report.

use std::collections::BTreeMap;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::engine::ValidationError;
use crate::rules::rule;
use crate::utils::messages::VALID_MESSAGE;

/// One of the fixed set of validated form fields.
///
/// The declaration order is the order in which fields are presented and
/// iterated in reports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("password")]
    Password,
    #[display("nationalId")]
    NationalId,
    #[display("rgId")]
    RgId,
    #[display("phone")]
    Phone,
    #[display("postalCode")]
    PostalCode,
    #[display("dateTime")]
    DateTime,
    #[display("decimalNumber")]
    DecimalNumber,
}

impl FieldKind {
    /// Human friendly name of the field
    pub fn display_name(self) -> &'static str {
        rule(self).display_name()
    }

    /// Message reported when the value does not have the expected shape
    pub fn error_message(self) -> &'static str {
        rule(self).error_message()
    }

    /// Sample values accepted by the field's rule
    pub fn examples(self) -> &'static [&'static str] {
        rule(self).examples()
    }
}

impl FromStr for FieldKind {
    type Err = ValidationError;

    /// Parses an external field identifier. Besides the camelCase form used
    /// by `Display`, the snake_case form and the identifiers of the legacy
    /// Portuguese form are accepted.
    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let kind = match identifier {
            "name" | "nome" => Self::Name,
            "email" => Self::Email,
            "password" | "senha" => Self::Password,
            "nationalId" | "national_id" | "cpf" => Self::NationalId,
            "rgId" | "rg_id" | "rg" => Self::RgId,
            "phone" | "telefone" => Self::Phone,
            "postalCode" | "postal_code" | "cep" => Self::PostalCode,
            "dateTime" | "date_time" | "dataHorario" | "data_horario" => Self::DateTime,
            "decimalNumber" | "decimal_number" | "numeroFlutuante" | "numero_flutuante" => {
                Self::DecimalNumber
            }
            other => return Err(ValidationError::UnknownField(other.to_owned())),
        };
        Ok(kind)
    }
}

impl TryFrom<&str> for FieldKind {
    type Error = ValidationError;

    fn try_from(identifier: &str) -> Result<Self, Self::Error> {
        identifier.parse()
    }
}

/// Outcome of validating one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{message}")]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_owned(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Raw values of the fields the user filled in.
///
/// A value whose trimmed form is empty counts as "not filled" and is never
/// stored, so `len()` is always the number of filled fields. Stored values
/// are trimmed, as a form submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldInput(BTreeMap<FieldKind, String>);

impl FieldInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `kind`, replacing any previous one.
    /// Returns false if the value was blank and therefore ignored.
    pub fn insert(&mut self, kind: FieldKind, value: impl Into<String>) -> bool {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.0.remove(&kind);
            return false;
        }
        self.0.insert(kind, trimmed.to_owned());
        true
    }

    /// Builds an input from raw `(identifier, value)` pairs, as received
    /// from an external form
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut input = Self::new();
        for (identifier, value) in pairs {
            let kind: FieldKind = identifier.as_ref().parse()?;
            input.insert(kind, value);
        }
        Ok(input)
    }

    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        self.0.iter().map(|(kind, value)| (*kind, value.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(FieldKind, S)> for FieldInput {
    fn from_iter<T: IntoIterator<Item = (FieldKind, S)>>(iter: T) -> Self {
        let mut input = Self::new();
        for (kind, value) in iter {
            input.insert(kind, value);
        }
        input
    }
}

/// Example texts shown to the user in each field. A value identical to its
/// field's placeholder is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders(BTreeMap<FieldKind, String>);

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the first sample value of every field as its placeholder
    pub fn examples() -> Self {
        use strum::IntoEnumIterator;

        FieldKind::iter()
            .filter_map(|kind| kind.examples().first().map(|example| (kind, *example)))
            .collect()
    }

    pub fn insert(&mut self, kind: FieldKind, placeholder: impl Into<String>) {
        self.0.insert(kind, placeholder.into());
    }

    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(FieldKind, S)> for Placeholders {
    fn from_iter<T: IntoIterator<Item = (FieldKind, S)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(kind, placeholder)| (kind, placeholder.into()))
                .collect(),
        )
    }
}

/// Final verdict of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Summary {
    #[display("All {total} field(s) are valid!")]
    AllValid { total: usize },
    #[display("{errors} field(s) with errors out of {total} total.")]
    HasErrors { errors: usize, total: usize },
}

/// Aggregate result of validating a set of filled fields.
///
/// Only the fields present in the validated input appear here; unfilled
/// fields are neither counted nor reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    per_field: BTreeMap<FieldKind, ValidationResult>,
    valid_count: usize,
    total_count: usize,
}

impl Report {
    pub(crate) fn new(per_field: BTreeMap<FieldKind, ValidationResult>) -> Self {
        let valid_count = per_field.values().filter(|result| result.valid).count();
        let total_count = per_field.len();
        Self {
            per_field,
            valid_count,
            total_count,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn invalid_count(&self) -> usize {
        self.total_count - self.valid_count
    }

    pub fn all_valid(&self) -> bool {
        self.valid_count == self.total_count
    }

    pub fn get(&self, kind: FieldKind) -> Option<&ValidationResult> {
        self.per_field.get(&kind)
    }

    /// Results in field declaration order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &ValidationResult)> {
        self.per_field.iter().map(|(kind, result)| (*kind, result))
    }

    pub fn summary(&self) -> Summary {
        if self.all_valid() {
            Summary::AllValid {
                total: self.total_count,
            }
        } else {
            Summary::HasErrors {
                errors: self.invalid_count(),
                total: self.total_count,
            }
        }
    }
}
