//! Text and JSON renditions of a validation report

use std::fmt::{self, Write};

use serde::Serialize;

use crate::models::{FieldInput, FieldKind, Report};
use crate::rules::rule;

const RULER: &str = "============================================================";

fn status_mark(valid: bool) -> &'static str {
    if valid {
        "✓"
    } else {
        "✗"
    }
}

fn status_badge(valid: bool) -> &'static str {
    if valid {
        "VALID"
    } else {
        "INVALID"
    }
}

/// Itemized report followed by the counts and the final verdict
pub fn render_summary(inputs: &FieldInput, report: &Report) -> String {
    let mut out = String::new();
    write_summary(&mut out, inputs, report).expect("Writing to a String cannot fail");
    out
}

/// Detailed report including the pattern each field was checked against
pub fn render_technical(inputs: &FieldInput, report: &Report) -> String {
    let mut out = String::new();
    write_technical(&mut out, inputs, report).expect("Writing to a String cannot fail");
    out
}

fn write_summary(out: &mut impl Write, inputs: &FieldInput, report: &Report) -> fmt::Result {
    writeln!(out, "{RULER}")?;
    writeln!(out, "Validation report")?;
    writeln!(
        out,
        "{} valid / {} total",
        report.valid_count(),
        report.total_count()
    )?;
    writeln!(out, "{RULER}")?;

    for (kind, result) in report.iter() {
        writeln!(out)?;
        writeln!(out, "{} {}", status_mark(result.valid), kind.display_name())?;
        writeln!(out, "  Value: {}", inputs.get(kind).unwrap_or_default())?;
        writeln!(out, "  Status: {}", result.message)?;
    }

    writeln!(out)?;
    writeln!(out, "{RULER}")?;
    writeln!(out, "{}", report.summary())
}

fn write_technical(out: &mut impl Write, inputs: &FieldInput, report: &Report) -> fmt::Result {
    writeln!(out, "{RULER}")?;
    writeln!(out, "Technical validation report")?;
    writeln!(out, "{RULER}")?;
    writeln!(out, "Valid fields:   {}", report.valid_count())?;
    writeln!(out, "Invalid fields: {}", report.invalid_count())?;
    writeln!(out, "Total tested:   {}", report.total_count())?;

    for (kind, result) in report.iter() {
        writeln!(out)?;
        writeln!(
            out,
            "{} {} [{}]",
            status_mark(result.valid),
            kind.display_name(),
            status_badge(result.valid)
        )?;
        writeln!(out, "  Tested value: {}", inputs.get(kind).unwrap_or_default())?;
        writeln!(out, "  Pattern:      {}", rule(kind).source())?;
        writeln!(out, "  Result:       {}", result.message)?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedField<'a> {
    field: FieldKind,
    display_name: &'static str,
    value: &'a str,
    pattern: &'static str,
    valid: bool,
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedReport<'a> {
    valid_count: usize,
    invalid_count: usize,
    total_count: usize,
    all_valid: bool,
    fields: Vec<ExportedField<'a>>,
}

/// Pretty-printed JSON export of the report and the values it was built from
pub fn to_json(inputs: &FieldInput, report: &Report) -> serde_json::Result<String> {
    let fields = report
        .iter()
        .map(|(kind, result)| ExportedField {
            field: kind,
            display_name: kind.display_name(),
            value: inputs.get(kind).unwrap_or_default(),
            pattern: rule(kind).source(),
            valid: result.valid,
            message: &result.message,
        })
        .collect();

    serde_json::to_string_pretty(&ExportedReport {
        valid_count: report.valid_count(),
        invalid_count: report.invalid_count(),
        total_count: report.total_count(),
        all_valid: report.all_valid(),
        fields,
    })
}
