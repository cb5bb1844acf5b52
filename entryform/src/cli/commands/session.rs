//! Interactive form session
//!
//! Reads one command per line and turns it into an intent, so a whole edit/update cycle
//! can happen inside one session.

use crate::cli::{CliContext, OutputFormatter};
use crate::error::{EntryFormError, EntryFormResult};
use crate::form::{FormField, Intent, Outcome};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const HELP: &str = "\
Commands:
  set <field> <value>   change a field (fullName, email, password, address, city, feedback)
  rate <1-5>            select a rating
  submit                submit the form (adds, or updates while editing)
  edit <index>          load an entry into the form
  delete <index>        remove an entry
  cancel                leave edit mode and clear the form
  show                  print the form and entries
  list                  print the entries
  help                  this text
  quit                  leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Intent(Intent),
    Show,
    List,
    Help,
    Quit,
}

/// Parse one input line. Empty lines parse to `None`.
pub fn parse_line(line: &str) -> EntryFormResult<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(EntryFormError::InvalidInput(
                    "usage: set <field> <value>".to_string(),
                ));
            }
            let field: FormField = name.parse()?;
            if field == FormField::Rating {
                let position = parse_number(value, "rate <1-5>")?;
                SessionCommand::Intent(Intent::RatingClicked { position })
            } else {
                SessionCommand::Intent(Intent::field_changed(field, value))
            }
        }
        "rate" => SessionCommand::Intent(Intent::RatingClicked {
            position: parse_number(rest, "rate <1-5>")?,
        }),
        "submit" => SessionCommand::Intent(Intent::Submit),
        "edit" => SessionCommand::Intent(Intent::EditRequested {
            index: parse_number(rest, "edit <index>")?,
        }),
        "delete" => SessionCommand::Intent(Intent::DeleteRequested {
            index: parse_number(rest, "delete <index>")?,
        }),
        "cancel" => SessionCommand::Intent(Intent::CancelEdit),
        "show" => SessionCommand::Show,
        "list" => SessionCommand::List,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => {
            return Err(EntryFormError::InvalidInput(format!(
                "unknown command '{}', try 'help'",
                other
            )))
        }
    };
    Ok(Some(command))
}

fn parse_number<T: std::str::FromStr>(value: &str, usage: &str) -> EntryFormResult<T> {
    value
        .parse()
        .map_err(|_| EntryFormError::InvalidInput(format!("usage: {}", usage)))
}

pub fn execute(ctx: &CliContext) -> EntryFormResult<()> {
    let formatter = OutputFormatter::new(ctx.output_format);
    let mut session = ctx.open_session()?;
    let mut editor = DefaultEditor::new()
        .map_err(|e| EntryFormError::IoError(format!("Failed to start line editor: {}", e)))?;

    ctx.status("Entry form session. Type 'help' for commands.");
    formatter.form(&session.view());

    loop {
        let line = match editor.readline("entryform> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(EntryFormError::IoError(e.to_string())),
        };
        // history failures are non-fatal
        let _ = editor.add_history_entry(line.as_str());

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                formatter.error(&e.to_string());
                continue;
            }
        };

        match command {
            SessionCommand::Intent(intent) => match session.dispatch(intent) {
                Outcome::DraftUpdated => {}
                Outcome::Rejected { errors } => formatter.field_errors(&errors),
                Outcome::Appended { index } => {
                    formatter.success(&format!("Added entry #{}", index));
                    formatter.form(&session.view());
                }
                Outcome::Replaced { index } => {
                    formatter.success(&format!("Updated entry #{}", index));
                    formatter.form(&session.view());
                }
                Outcome::EditStarted { .. } => formatter.form(&session.view()),
                Outcome::EditCancelled => formatter.success("Form cleared"),
                Outcome::Deleted {
                    index,
                    discarded_edit,
                } => {
                    formatter.success(&format!("Deleted entry #{}", index));
                    if discarded_edit {
                        formatter.warning("The entry being edited was deleted; form cleared");
                    }
                    formatter.records(&session.state().records);
                }
                Outcome::Ignored(reason) => formatter.warning(&format!("Ignored: {:?}", reason)),
            },
            SessionCommand::Show => formatter.form(&session.view()),
            SessionCommand::List => formatter.records(&session.state().records),
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            parse_line("set address 12 Ring Road, Surat").unwrap(),
            Some(SessionCommand::Intent(Intent::field_changed(
                FormField::Address,
                "12 Ring Road, Surat"
            )))
        );
    }

    #[test]
    fn test_parse_set_without_value_clears_field() {
        assert_eq!(
            parse_line("set userCity").unwrap(),
            Some(SessionCommand::Intent(Intent::field_changed(
                FormField::City,
                ""
            )))
        );
    }

    #[test]
    fn test_parse_rating_forms() {
        let expected = Some(SessionCommand::Intent(Intent::RatingClicked { position: 3 }));
        assert_eq!(parse_line("rate 3").unwrap(), expected);
        assert_eq!(parse_line("set rating 3").unwrap(), expected);
        assert!(parse_line("rate three").is_err());
    }

    #[test]
    fn test_parse_index_commands() {
        assert_eq!(
            parse_line("  edit 2 ").unwrap(),
            Some(SessionCommand::Intent(Intent::EditRequested { index: 2 }))
        );
        assert_eq!(
            parse_line("delete 0").unwrap(),
            Some(SessionCommand::Intent(Intent::DeleteRequested { index: 0 }))
        );
        assert!(parse_line("delete -1").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("quit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(
            parse_line("cancel").unwrap(),
            Some(SessionCommand::Intent(Intent::CancelEdit))
        );
        assert!(matches!(
            parse_line("set gender x"),
            Err(EntryFormError::UnknownField(_))
        ));
        assert!(parse_line("frobnicate").is_err());
    }
}
