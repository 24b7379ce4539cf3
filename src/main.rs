use std::fs;

use anyhow::Result;
use derive_more::Display;
use formcheck::config::Config;
use formcheck::report::{render_summary, render_technical, to_json};
use formcheck::utils::messages::NO_FIELDS_MESSAGE;
use formcheck::{validate_all, validate_field, FieldInput, FieldKind, Placeholders, Report, ValidationError};
use inquire::{Confirm, Select, Text};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns None when the menu wants to end,
    /// Some(()) when it should run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it ends, printing errors instead of stopping
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

/// Outcome of the last full validation, kept for the technical report
struct LastValidation {
    inputs: FieldInput,
    report: Report,
}

pub struct App {
    config: Config,
    placeholders: Option<Placeholders>,
    last: Option<LastValidation>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let placeholders = config.reject_examples.then(Placeholders::examples);
        App {
            config,
            placeholders,
            last: None,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Form field validator");
        println!("Tip: blank answers leave a field unfilled.");
        self.enter_loop();
        println!("\nThanks for using the form field validator!");
        Ok(())
    }

    fn validate_everything(&mut self) -> Result<()> {
        let mut inputs = FieldInput::new();
        for kind in FieldKind::iter() {
            let prompt = format!("{}:", kind.display_name());
            let help = format!("e.g. {}", kind.examples().join(", "));
            let value = Text::new(&prompt).with_help_message(&help).prompt()?;
            inputs.insert(kind, value);
        }

        match validate_all(&inputs, self.placeholders.as_ref()) {
            Ok(report) => {
                println!("\n{}", render_summary(&inputs, &report));
                self.last = Some(LastValidation { inputs, report });
                Ok(())
            }
            Err(ValidationError::NoFieldsProvided) => {
                println!("\n{NO_FIELDS_MESSAGE}");
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
    }

    fn technical_report(&self) -> Result<()> {
        let Some(LastValidation { inputs, report }) = &self.last else {
            println!("Run \"Validate all fields\" first.");
            return Ok(());
        };

        println!("\n{}", render_technical(inputs, report));

        let export = Confirm::new("Export this report as JSON?")
            .with_default(false)
            .with_help_message(&format!("Written to {}", self.config.report_file.display()))
            .prompt()?;

        if export {
            fs::write(&self.config.report_file, to_json(inputs, report)?)?;
            info!("Report exported to {}", self.config.report_file.display());
            println!("Report written to {}", self.config.report_file.display());
        }
        Ok(())
    }

    fn show_examples(&self) {
        println!("\nValid examples");
        for kind in FieldKind::iter() {
            let examples: Vec<String> = kind
                .examples()
                .iter()
                .map(|example| format!("\"{example}\""))
                .collect();
            println!("\n{}:\n  {}", kind.display_name(), examples.join(", "));
        }
        println!();
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Validate one field")]
            ValidateOne,
            #[display("Validate all fields")]
            ValidateAll,
            #[display("Technical report of the last validation")]
            TechnicalReport,
            #[display("Show valid examples")]
            ShowExamples,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::ValidateOne => {
                let kind = Select::new("Which field?", FieldKind::iter().map(FieldChoice).collect())
                    .prompt()?
                    .0;
                FieldMenu {
                    kind,
                    placeholder: self.placeholders.as_ref().and_then(|p| p.get(kind)),
                }
                .enter_loop();
            }
            Choice::ValidateAll => self.validate_everything()?,
            Choice::TechnicalReport => self.technical_report()?,
            Choice::ShowExamples => self.show_examples(),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

/// A field kind as listed in the selection menu
#[derive(Display)]
#[display("{}", _0.display_name())]
struct FieldChoice(FieldKind);

/// Validates values for a single field until the user goes back
struct FieldMenu<'p> {
    kind: FieldKind,
    placeholder: Option<&'p str>,
}

impl Menu for FieldMenu<'_> {
    fn enter(&mut self) -> Result<MenuExit> {
        let prompt = format!("{} (or 'back' to return):", self.kind.display_name());
        let value = Text::new(&prompt).prompt()?;

        if value.eq_ignore_ascii_case("back") {
            return Ok(MENU_EXIT);
        }

        let result = validate_field(self.kind, &value, self.placeholder);
        let status = if result.valid { "✓ VALID" } else { "✗ INVALID" };
        println!("\nResult: {status}");
        println!("Message: {}", result.message);

        let again = Confirm::new("Test another value?")
            .with_default(true)
            .prompt()?;
        Ok(again.then_some(()))
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!("Starting with {config:?}");

    App::new(config).start()
}
