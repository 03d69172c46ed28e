//! REPL (Read-Eval-Print Loop) for interactive voting

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::WidgetFormatter;
use colored::Colorize;
use derby_application::VotingWidget;
use derby_domain::{Car, CodeValidation, ItemId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Enter a code and validate it
    Code(String),
    /// Vote for a car
    Vote(String),
    /// Ask the server whether this session already voted
    Status,
    /// Print the widget
    Show,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a non-empty input line. A leading `/` is accepted.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "code" | "c" => Ok(ReplCommand::Code(arg.to_string())),
            "vote" | "v" => {
                if arg.is_empty() {
                    Err("Usage: vote <car id>".to_string())
                } else {
                    Ok(ReplCommand::Vote(arg.to_string()))
                }
            }
            "status" => Ok(ReplCommand::Status),
            "show" | "s" => Ok(ReplCommand::Show),
            "help" | "h" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            _ => Err(format!("Unknown command: {}", name)),
        }
    }
}

/// Interactive voting REPL
pub struct WidgetRepl {
    widget: Arc<VotingWidget>,
    cars: Vec<Car>,
    formatter: Box<dyn WidgetFormatter>,
    config: ReplConfig,
}

impl WidgetRepl {
    /// Create a new WidgetRepl
    pub fn new(widget: Arc<VotingWidget>, cars: Vec<Car>) -> Self {
        Self {
            widget,
            cars,
            formatter: Box::new(ConsoleFormatter),
            config: ReplConfig::default(),
        }
    }

    /// Set the formatter used by `show` and vote results
    pub fn with_formatter(mut self, formatter: Box<dyn WidgetFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        if let Some(ref path) = self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("vote> ") {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    match ReplCommand::parse(line) {
                        Ok(command) => {
                            if self.execute(command).await {
                                break;
                            }
                        }
                        Err(message) => {
                            println!("{}", message);
                            println!("Type help for available commands");
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Run one command. Returns true if the REPL should exit.
    pub async fn execute(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Code(text) => {
                if self.widget.submit_code(&text) == CodeValidation::Ignored {
                    println!("{}", "Voting is closed for this session".dimmed());
                }
            }
            ReplCommand::Vote(id) => match ItemId::new(&id) {
                Ok(item_id) => {
                    let outcome = self.widget.vote(&item_id).await;
                    println!("{}", self.formatter.format_outcome(&outcome, &self.cars));
                }
                Err(e) => println!("{}", e),
            },
            ReplCommand::Status => match self.widget.check_vote_status().await {
                Ok(true) => println!("This session has already voted"),
                Ok(false) => println!("No vote recorded for this session yet"),
                Err(e) => eprintln!("Error: {}", e),
            },
            ReplCommand::Show => {
                println!(
                    "{}",
                    self.formatter.format_widget(&self.widget.snapshot(), &self.cars)
                );
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
        }
        false
    }

    fn print_welcome(&self) {
        println!();
        println!(
            "{}",
            self.formatter.format_widget(&self.widget.snapshot(), &self.cars)
        );
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  code <digits>  - Enter and validate your 5-digit vote code");
        println!("  vote <car id>  - Vote for a car");
        println!("  status         - Check whether this session already voted");
        println!("  show           - Show the voting widget");
        println!("  help           - Show this help");
        println!("  quit           - Exit");
        println!();
    }
}
