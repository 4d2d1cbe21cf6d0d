//! Interactive prediction form
//!
//! A line-oriented session over one input record. Each command is one
//! request producing one response, standing in for one widget interaction
//! in the original single-page form. Prediction failures are reported and
//! the session stays usable.

use std::io::{BufRead, Write};

use crate::predict::Scorer;
use crate::record::{EmployeeRecord, FIELDS};
use crate::Result;

/// One parsed user action
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormAction {
    Set { field: String, value: String },
    Show,
    Fields,
    Predict,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_action(line: &str) -> FormAction {
    let line = line.trim();
    if line.is_empty() {
        return FormAction::Empty;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = tokens[0].to_lowercase();
    match command.as_str() {
        "set" => {
            if tokens.len() < 3 {
                FormAction::Unknown("usage: set <field> <value>".to_string())
            } else {
                FormAction::Set {
                    field: tokens[1].to_string(),
                    value: tokens[2..].join(" "),
                }
            }
        }
        "show" => FormAction::Show,
        "fields" => FormAction::Fields,
        "predict" => FormAction::Predict,
        "help" => FormAction::Help,
        "quit" | "exit" => FormAction::Quit,
        other => FormAction::Unknown(format!("unknown command: {}", other)),
    }
}

/// Render the current record as a table
pub fn render_record(record: &EmployeeRecord) -> String {
    let mut out = String::from("Input Record\n");
    out.push_str("─────────────────────────────────────────────\n");
    for (name, value) in record.rows() {
        out.push_str(&format!("  {:<29} {}\n", name, value));
    }
    out
}

fn render_fields() -> String {
    let mut out = String::from("Fields\n");
    out.push_str("─────────────────────────────────────────────\n");
    for spec in FIELDS.iter() {
        out.push_str(&format!("  {:<29} {}\n", spec.name, spec.kind.describe()));
    }
    out
}

const HELP: &str = "\
Commands:
  set <field> <value>   change one input (numbers clamp to their bounds)
  show                  display the current input record
  fields                list all fields and their accepted values
  predict               run the model on the current record
  help                  this message
  quit                  leave the form
";

/// Run the form session to completion.
///
/// All controls start at their minimum / first option. The model is held
/// read-only behind `scorer`; one predict command is one synchronous call.
pub fn run_session<R: BufRead, W: Write>(
    scorer: &dyn Scorer,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Employee Performance Prediction")?;
    if let Ok(cwd) = std::env::current_dir() {
        writeln!(out, "Working directory: {}", cwd.display())?;
    }
    writeln!(out, "Type 'help' for commands.\n")?;

    let mut record = EmployeeRecord::default();

    for line in input.lines() {
        let line = line?;
        match parse_action(&line) {
            FormAction::Empty => {}
            FormAction::Help => write!(out, "{}", HELP)?,
            FormAction::Fields => write!(out, "{}", render_fields())?,
            FormAction::Show => write!(out, "{}", render_record(&record))?,
            FormAction::Set { field, value } => match record.set(&field, &value) {
                Ok(()) => {
                    // Echo the stored value: clamping may have adjusted it
                    let stored = record.get(&field).unwrap_or_default();
                    writeln!(out, "{} = {}", field, stored)?;
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            FormAction::Predict => {
                write!(out, "{}", render_record(&record))?;
                match scorer.predict(std::slice::from_ref(&record)) {
                    Ok(preds) => match preds.first() {
                        Some(pred) => writeln!(out, "Prediction: {}", pred)?,
                        None => writeln!(out, "Error: model returned no predictions")?,
                    },
                    // Recovered locally: the form stays usable for a retry
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            FormAction::Unknown(message) => writeln!(out, "{}", message)?,
            FormAction::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Department, Gender, YesNo};
    use crate::{PerfError, Prediction};
    use std::io::Cursor;

    /// Stub model returning a fixed single-element result for any input
    struct FixedScorer(f32);

    impl Scorer for FixedScorer {
        fn predict(&self, records: &[EmployeeRecord]) -> Result<Vec<Prediction>> {
            Ok(records.iter().map(|_| Prediction { rating: self.0 }).collect())
        }
    }

    /// Stub model that fails on every invocation
    struct FailingScorer;

    impl Scorer for FailingScorer {
        fn predict(&self, _records: &[EmployeeRecord]) -> Result<Vec<Prediction>> {
            Err(PerfError::Prediction("feature shape mismatch".to_string()))
        }
    }

    fn run(scorer: &dyn Scorer, script: &str) -> String {
        let mut out = Vec::new();
        run_session(scorer, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// A record table line exactly as the renderer prints it
    fn table_line(name: &str, value: &str) -> String {
        format!("  {:<29} {}\n", name, value)
    }

    #[test]
    fn session_header_names_the_working_directory() {
        let output = run(&FixedScorer(3.0), "quit\n");
        assert!(output.contains("Working directory:"));
    }

    #[test]
    fn show_displays_every_field_with_defaults() {
        let output = run(&FixedScorer(3.0), "show\nquit\n");
        assert!(output.contains("Age"));
        assert!(output.contains("Attrition"));
        for spec in FIELDS.iter() {
            assert!(output.contains(spec.name), "missing field {}", spec.name);
        }
    }

    #[test]
    fn predict_displays_the_stub_result() {
        let output = run(&FixedScorer(4.0), "predict\nquit\n");
        assert!(output.contains("Prediction: 4"));
    }

    #[test]
    fn predict_failure_keeps_the_record_display_and_session() {
        let script = "set Age 40\npredict\nshow\nquit\n";
        let output = run(&FailingScorer, script);

        // The record was displayed before the failure and is untouched after
        assert!(output.contains("Error: Prediction failed: feature shape mismatch"));
        let shown = output.matches(table_line("Age", "40").as_str()).count();
        assert_eq!(shown, 2, "record display before predict and after: {}", output);
    }

    #[test]
    fn set_clamps_to_control_bounds() {
        let output = run(&FixedScorer(3.0), "set Age 17\nset Age 99\nquit\n");
        assert!(output.contains("Age = 18"));
        assert!(output.contains("Age = 65"));
    }

    #[test]
    fn invalid_value_reports_and_continues() {
        let output = run(
            &FixedScorer(3.0),
            "set Gender Robot\nset Gender Female\nshow\nquit\n",
        );
        assert!(output.contains("Error: Invalid value for Gender"));
        assert!(output.contains("Gender = Female"));
    }

    #[test]
    fn unknown_field_reports_and_continues() {
        let output = run(&FixedScorer(3.0), "set Salary 100\nshow\nquit\n");
        assert!(output.contains("Error: Unknown field: Salary"));
        assert!(output.contains("Input Record"));
    }

    #[test]
    fn scenario_all_likert_three_stub_one() {
        let script = "\
set Gender Female
set EmpDepartment R&D
set OverTime Yes
set EmpEducationLevel 3
set EmpEnvironmentSatisfaction 3
set EmpJobInvolvement 3
set EmpJobLevel 3
set EmpJobSatisfaction 3
set EmpRelationshipSatisfaction 3
set EmpWorkLifeBalance 3
predict
quit
";
        let output = run(&FixedScorer(1.0), script);

        assert!(output.contains(table_line("Gender", "Female").as_str()));
        assert!(output.contains(table_line("EmpDepartment", "R&D").as_str()));
        assert!(output.contains(table_line("OverTime", "Yes").as_str()));
        assert!(output.contains(table_line("EmpJobSatisfaction", "3").as_str()));
        // Numeric fields stay at their minimum defaults
        assert!(output.contains(table_line("Age", "18").as_str()));
        assert!(output.contains(table_line("EmpHourlyRate", "10").as_str()));
        assert!(output.contains("Prediction: 1"));
    }

    #[test]
    fn record_construction_matches_display() {
        let mut record = EmployeeRecord::default();
        record.gender = Gender::Female;
        record.department = Department::ResearchDev;
        record.overtime = YesNo::Yes;

        let table = render_record(&record);
        for (name, value) in record.rows() {
            assert!(table.contains(name));
            assert!(table.contains(&value));
        }
    }
}
