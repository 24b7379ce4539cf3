//! The fixed rule table: one shape pattern, display name and failure
//! message per field kind.
//!
//! Patterns are shape-only. A date with month 13 or a CPF with a wrong
//! check digit still passes as long as the characters are laid out right.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use strum::IntoEnumIterator;

use crate::models::FieldKind;

/// Character class that must appear somewhere in the value, in any position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredClass {
    Uppercase,
    Digit,
}

impl RequiredClass {
    fn is_present(self, value: &str) -> bool {
        match self {
            RequiredClass::Uppercase => value.chars().any(|c| c.is_ascii_uppercase()),
            RequiredClass::Digit => value.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

/// Matching rule and messages of a single field
#[derive(Debug)]
pub struct FieldRule {
    kind: FieldKind,
    source: &'static str,
    pattern: Regex,
    required: &'static [RequiredClass],
    display_name: &'static str,
    error_message: &'static str,
    examples: &'static [&'static str],
}

static RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| FieldKind::iter().map(FieldRule::build).collect());

/// Returns the rule of `kind`
pub fn rule(kind: FieldKind) -> &'static FieldRule {
    // RULES is built from FieldKind::iter(), so it is indexed by declaration order
    &RULES[kind as usize]
}

/// Every rule, in field declaration order
pub fn rules() -> impl Iterator<Item = &'static FieldRule> {
    RULES.iter()
}

/// Compiles an anchored shape pattern. Unicode is disabled so that `\d`
/// only accepts ASCII digits.
fn compile(shape: &str) -> Regex {
    RegexBuilder::new(shape)
        .unicode(false)
        .build()
        .expect("Failed to compile field regex")
}

impl FieldRule {
    fn build(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Name => Self::simple(
                kind,
                r"^[A-Z][a-z]+ [A-Z][a-z]+$",
                "Full Name",
                "Name must follow the format \"First Last\" with capitalized initials",
                &["Alan Turing", "Noam Chomsky", "Ada Lovelace"],
            ),
            FieldKind::Email => Self::simple(
                kind,
                r"^[a-z]+@[a-z]+\.br$",
                "E-mail",
                "E-mail must follow the format \"user@domain.br\" (lowercase letters only)",
                &["bes@uepa.br", "a@a.br", "test@domain.br"],
            ),
            // The regex crate has no lookaround: the two lookaheads of the
            // displayed pattern are checked as required classes.
            FieldKind::Password => Self {
                kind,
                source: r"^(?=.*[A-Z])(?=.*[0-9])[A-Za-z0-9]{8}$",
                pattern: compile(r"^[A-Za-z0-9]{8}$"),
                required: &[RequiredClass::Uppercase, RequiredClass::Digit],
                display_name: "Password",
                error_message:
                    "Password must have 8 characters with at least 1 uppercase letter and 1 digit",
                examples: &["518R2r5e", "1234567T", "ropsSoq0"],
            },
            FieldKind::NationalId => Self::simple(
                kind,
                r"^\d{3}\.\d{3}\.\d{3}-\d{2}$",
                "CPF",
                "CPF must follow the format \"123.456.789-09\"",
                &["123.456.789-09", "000.111.222-33"],
            ),
            FieldKind::RgId => Self::simple(
                kind,
                r"^\d{6}-\d$",
                "RG",
                "RG must follow the format \"123456-7\"",
                &["875467-2", "123456-7"],
            ),
            FieldKind::Phone => Self::simple(
                kind,
                r"^\(\d{2}\) \d{5}-\d{4}$",
                "Phone",
                "Phone must follow the format \"(91) 99999-9999\"",
                &["(91) 99999-9999", "(11) 98765-4321"],
            ),
            FieldKind::PostalCode => Self::simple(
                kind,
                r"^\d{2}\.\d{3}-\d{3}$",
                "CEP",
                "CEP must follow the format \"66.645-225\"",
                &["66.645-225", "01.234-567"],
            ),
            FieldKind::DateTime => Self::simple(
                kind,
                r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}$",
                "Date and Time",
                "Date/time must follow the format \"dd/mm/yyyy hh:mm:ss\"",
                &["02/09/2025 23:59:59", "01/01/2024 00:00:00"],
            ),
            FieldKind::DecimalNumber => Self::simple(
                kind,
                r"^[+-]?(\d+([.,]\d+)?|\d*[.,]\d+)$",
                "Decimal Number",
                "Number must follow the format \"+/-123.45\" or \"123,45\" (sign optional)",
                &["-25.467", "1", "+64,2", "123.456"],
            ),
        }
    }

    /// A rule whose displayed pattern is exactly the compiled one
    fn simple(
        kind: FieldKind,
        source: &'static str,
        display_name: &'static str,
        error_message: &'static str,
        examples: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            source,
            pattern: compile(source),
            required: &[],
            display_name,
            error_message,
            examples,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Human-readable pattern, as shown in technical reports
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn error_message(&self) -> &'static str {
        self.error_message
    }

    pub fn examples(&self) -> &'static [&'static str] {
        self.examples
    }

    /// Whether the whole value has the shape this rule describes
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
            && self
                .required
                .iter()
                .all(|class| class.is_present(value))
    }
}
