use std::io::{self, Write};

use crate::models::{PredictionOutcome, SubmissionRecord};
use crate::types::{FieldKind, FieldName};

const TITLE: &str = "Fraud Detection Prediction";

pub fn render_banner(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{TITLE}")?;
    writeln!(output, "Type 'help' for the list of commands.")
}

pub fn render_help(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  <field>=<value>  set a field, e.g. purchase_value=100")?;
    writeln!(output, "  show             show the form and the last prediction")?;
    writeln!(output, "  submit           send the form for prediction")?;
    writeln!(output, "  help             show this message")?;
    writeln!(output, "  quit             leave once pending predictions are back")?;
    writeln!(output, "Fields:")?;

    for field in FieldName::ALL {
        match field.kind() {
            FieldKind::Select(options) => {
                let choices: Vec<String> = options.iter()
                    .map(|option| format!("{} ({})", option.value, option.label))
                    .collect();
                writeln!(output, "  {field}: {}", choices.join(", "))?;
            }
            kind => writeln!(output, "  {field}: {kind}")?
        }
    }

    Ok(())
}

/// Writes every field on its own line with its label, key, input hint and value.
pub fn render_form(output: &mut impl Write, record: &SubmissionRecord) -> io::Result<()> {
    writeln!(output, "{TITLE}")?;

    for (field, value) in record.iter() {
        write!(output, "  ")?;
        render_field(output, field, value)?;
    }

    Ok(())
}

pub fn render_field(output: &mut impl Write, field: FieldName, value: &str) -> io::Result<()> {
    match field.kind() {
        FieldKind::Text => writeln!(output, "{} ({field}): {value}", field.label()),
        kind => writeln!(output, "{} ({field}) [{kind}]: {value}", field.label())
    }
}

/// Nothing is written until the first prediction has come back.
pub fn render_outcome(output: &mut impl Write, outcome: Option<PredictionOutcome>) -> io::Result<()> {
    let Some(outcome) = outcome else {
        return Ok(());
    };

    writeln!(output, "Prediction Result:")?;
    writeln!(output, "{outcome}")
}
