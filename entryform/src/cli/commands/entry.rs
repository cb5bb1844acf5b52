//! Entry commands - one-shot form interactions

use crate::cli::{CliContext, OutputFormatter};
use crate::error::{EntryFormError, EntryFormResult};
use crate::form::{FormField, FormSession, IgnoreReason, Intent, Outcome};
use crate::storage::{RecordStore, StorageHealth};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum EntryCommand {
    /// Show submitted entries
    List,

    /// Submit a new entry
    Add(EntryFields),

    /// Update an existing entry; only the given fields change
    Edit {
        /// Row index as shown by `list`
        index: usize,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Remove an entry
    Delete {
        /// Row index as shown by `list`
        index: usize,
    },
}

/// Form inputs; each given flag becomes a field change
#[derive(Debug, Clone, Default, Args)]
pub struct EntryFields {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// One of: surat, Rajkot, Mumbai, Rampur
    #[arg(long)]
    pub city: Option<String>,

    /// Position on the 1-5 rating scale
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    #[arg(long)]
    pub feedback: Option<String>,
}

impl EntryFields {
    /// Intents reproducing these inputs on the form, in field order
    pub fn intents(&self) -> Vec<Intent> {
        let text_fields = [
            (FormField::FullName, &self.full_name),
            (FormField::Email, &self.email),
            (FormField::Password, &self.password),
            (FormField::Address, &self.address),
            (FormField::City, &self.city),
            (FormField::Feedback, &self.feedback),
        ];
        let mut intents: Vec<Intent> = text_fields
            .into_iter()
            .filter_map(|(field, value)| {
                value
                    .as_ref()
                    .map(|value| Intent::field_changed(field, value.clone()))
            })
            .collect();
        if let Some(position) = self.rating {
            intents.push(Intent::RatingClicked { position });
        }
        intents
    }
}

pub fn execute(ctx: &CliContext, command: EntryCommand) -> EntryFormResult<()> {
    let formatter = OutputFormatter::new(ctx.output_format);
    let mut session = ctx.open_session()?;

    match command {
        EntryCommand::List => {
            formatter.records(&session.state().records);
            Ok(())
        }
        EntryCommand::Add(fields) => {
            let mut intents = fields.intents();
            intents.push(Intent::Submit);
            let outcome = session.dispatch_all(intents);
            report(ctx, &formatter, &session, outcome)
        }
        EntryCommand::Edit { index, fields } => {
            let outcome = session.dispatch(Intent::EditRequested { index });
            if let Outcome::Ignored(reason) = outcome {
                return Err(ignored_error(&reason));
            }
            let mut intents = fields.intents();
            intents.push(Intent::Submit);
            let outcome = session.dispatch_all(intents);
            report(ctx, &formatter, &session, outcome)
        }
        EntryCommand::Delete { index } => {
            let outcome = session.dispatch(Intent::DeleteRequested { index });
            report(ctx, &formatter, &session, Some(outcome))
        }
    }
}

/// Print the result of the last intent; rejected or ignored intents become errors
fn report<S: RecordStore + ?Sized>(
    ctx: &CliContext,
    formatter: &OutputFormatter,
    session: &FormSession<S>,
    outcome: Option<Outcome>,
) -> EntryFormResult<()> {
    if let StorageHealth::Degraded { reason } = session.health() {
        formatter.warning(&format!("Change was not saved: {}", reason));
    }

    match outcome {
        Some(Outcome::Appended { index }) => {
            formatter.success(&format!("Added entry #{}", index));
            Ok(())
        }
        Some(Outcome::Replaced { index }) => {
            formatter.success(&format!("Updated entry #{}", index));
            Ok(())
        }
        Some(Outcome::Deleted { index, .. }) => {
            formatter.success(&format!("Deleted entry #{}", index));
            if !ctx.quiet {
                formatter.records(&session.state().records);
            }
            Ok(())
        }
        Some(Outcome::Rejected { errors }) => {
            formatter.field_errors(&errors);
            Err(EntryFormError::InvalidInput(format!(
                "submission rejected, {} field(s) need attention",
                errors.len()
            )))
        }
        Some(Outcome::Ignored(reason)) => Err(ignored_error(&reason)),
        Some(other) => {
            ctx.status(&format!("{:?}", other));
            Ok(())
        }
        None => Ok(()),
    }
}

fn ignored_error(reason: &IgnoreReason) -> EntryFormError {
    match reason {
        IgnoreReason::IndexOutOfRange { index, len } => EntryFormError::InvalidInput(format!(
            "no entry #{} (there are {} entries)",
            index, len
        )),
        IgnoreReason::RatingOutOfScale { position } => {
            EntryFormError::InvalidInput(format!("rating {} is outside 1-5", position))
        }
        IgnoreReason::NotATextField { field } => {
            EntryFormError::InvalidInput(format!("{} cannot be typed", field))
        }
    }
}
