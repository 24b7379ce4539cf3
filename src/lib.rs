//! Validation of form fields against fixed format rules: full name, e-mail,
//! password, CPF, RG, phone, CEP, date and time, and decimal number.

pub mod config;
pub mod engine;
pub mod models;
pub mod report;
pub mod rules;
pub mod utils;

pub use engine::{validate_all, validate_field, validate_identified, ValidationError};
pub use models::{FieldInput, FieldKind, Placeholders, Report, Summary, ValidationResult};
