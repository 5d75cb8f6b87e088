//! Shell context and command dispatch.

use std::{env, path::PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm};
use pocketbudget_config::{ConfigError, ConfigManager};
use pocketbudget_core::{CoreError, SaveOutcome, StateStore, TrackerSession};
use pocketbudget_domain::MonthKey;
use pocketbudget_storage_json::JsonStateStore;
use thiserror::Error;
use uuid::Uuid;

use crate::{output, system_clock::SystemClock};

/// Overrides the snapshot directory; used by scripted runs and tests.
pub const DATA_DIR_ENV: &str = "POCKETBUDGET_DATA_DIR";
/// Overrides the config directory; used by scripted runs and tests.
pub const CONFIG_DIR_ENV: &str = "POCKETBUDGET_CONFIG_DIR";

const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Errors that abort the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported to the user without leaving the command loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

struct CommandSpec {
    name: &'static str,
    usage: &'static str,
    description: &'static str,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "budget",
        usage: "budget <amount>",
        description: "Set the total monthly budget",
    },
    CommandSpec {
        name: "add",
        usage: "add <category...> <amount> [--permanent]",
        description: "Record an expense for the selected month",
    },
    CommandSpec {
        name: "delete",
        usage: "delete <id>",
        description: "Delete a visible expense by id (prefixes allowed)",
    },
    CommandSpec {
        name: "category",
        usage: "category <name...>",
        description: "Append a new expense category",
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        description: "List the known categories",
    },
    CommandSpec {
        name: "month",
        usage: "month <YYYY-MM>",
        description: "Select the month to work in",
    },
    CommandSpec {
        name: "months",
        usage: "months",
        description: "List the selectable months",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        description: "List the selected month's expenses",
    },
    CommandSpec {
        name: "summary",
        usage: "summary",
        description: "Show budget, spent, and remaining figures",
    },
    CommandSpec {
        name: "chart",
        usage: "chart",
        description: "Show the expense breakdown",
    },
    CommandSpec {
        name: "dark",
        usage: "dark",
        description: "Toggle dark mode",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Show this overview",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Leave the shell",
    },
];

/// Holds the session and everything the command loop needs around it.
pub struct ShellContext {
    session: TrackerSession,
    clock: SystemClock,
    mode: CliMode,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::with_base_dir(config_base_dir())?.load()?;
        output::set_color_enabled(config.ui_color_enabled);

        let data_dir = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config.resolve_data_root());
        let store = JsonStateStore::new(data_dir)?;
        Ok(Self::with_store(Box::new(store), mode))
    }

    /// Builds a context around an explicit store; entry point for tests.
    pub fn with_store(store: Box<dyn StateStore>, mode: CliMode) -> Self {
        let clock = SystemClock;
        let session = TrackerSession::open(store, &clock);
        Self {
            session,
            clock,
            mode,
            running: true,
        }
    }

    pub fn session(&self) -> &TrackerSession {
        &self.session
    }

    pub fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub fn prompt(&self) -> String {
        format!("pocketbudget {} > ", self.session.selected_month())
    }

    pub fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Leave pocketbudget?")
            .default(true)
            .interact()?)
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err);
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match command {
            "budget" => self.cmd_budget(args)?,
            "add" => self.cmd_add(args)?,
            "delete" => self.cmd_delete(args)?,
            "category" => self.cmd_category(args)?,
            "categories" => self.cmd_categories(),
            "month" => self.cmd_month(args)?,
            "months" => self.cmd_months(),
            "list" => self.cmd_list(),
            "summary" => self.cmd_summary(),
            "chart" => self.cmd_chart(),
            "dark" => self.cmd_dark(),
            "help" => self.cmd_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            unknown => return Err(unknown_command(unknown)),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_budget(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let raw = args.first().ok_or(CommandError::Usage("budget <amount>"))?;
        let value: f64 = raw
            .parse()
            .map_err(|_| CommandError::Input(format!("`{raw}` is not a number")))?;
        self.session.set_total_budget(value);
        output::info(format!("Total budget set to {}.", money(value)));
        self.print_save_notice();
        Ok(())
    }

    fn cmd_add(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let mut is_permanent = false;
        let mut fields: Vec<&str> = Vec::new();
        for arg in args {
            match *arg {
                "--permanent" | "-p" => is_permanent = true,
                other => fields.push(other),
            }
        }
        if fields.len() < 2 {
            return Err(CommandError::Usage("add <category...> <amount> [--permanent]"));
        }
        let raw_amount = fields.pop().unwrap_or_default();
        let category = fields.join(" ");

        match self.session.add_expense(&category, raw_amount, is_permanent) {
            Some(_) => {
                let marker = if is_permanent { " (Permanent)" } else { "" };
                output::info(format!("Added {category}: {raw_amount}{marker}"));
                self.print_save_notice();
            }
            None => output::warning(
                "expense not added; it needs a category and a numeric amount".to_string(),
            ),
        }
        Ok(())
    }

    fn cmd_delete(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let prefix = args.first().ok_or(CommandError::Usage("delete <id>"))?;
        let (id, is_permanent) = self.resolve_expense(prefix)?;
        self.session.delete_expense(id, is_permanent);
        output::info(format!("Deleted expense {}.", short_id(id)));
        self.print_save_notice();
        Ok(())
    }

    fn cmd_category(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::Usage("category <name...>"));
        }
        let name = args.join(" ");
        if self.session.add_category(&name) {
            output::info(format!("Added category `{name}`."));
            self.print_save_notice();
        } else {
            output::warning(format!("category `{name}` is empty or already present"));
        }
        Ok(())
    }

    fn cmd_categories(&self) {
        output::section("Categories");
        for name in &self.session.ledger().categories {
            output::info(format!("  {name}"));
        }
    }

    fn cmd_month(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let raw = args.first().ok_or(CommandError::Usage("month <YYYY-MM>"))?;
        let month: MonthKey = raw
            .parse()
            .map_err(|err| CommandError::Input(format!("`{raw}`: {err}")))?;
        self.session.select_month(month);
        output::info(format!("Selected month {month}."));
        Ok(())
    }

    fn cmd_months(&self) {
        output::section("Months");
        let selected = self.session.selected_month();
        for month in self.session.available_months(&self.clock) {
            let marker = if month == selected { "*" } else { " " };
            output::info(format!("{marker} {month}"));
        }
    }

    fn cmd_list(&self) {
        let month = self.session.selected_month();
        let expenses = self.session.month_expenses();
        if expenses.is_empty() {
            output::info(format!("No expenses recorded for {month}."));
            return;
        }
        output::section(format!("Expenses for {month}"));
        for record in expenses {
            let marker = if record.is_permanent {
                " (Permanent)"
            } else {
                ""
            };
            output::info(format!(
                "{}  {}: {}{marker}",
                short_id(record.id),
                record.category,
                money(record.amount)
            ));
        }
    }

    fn cmd_summary(&self) {
        let summary = self.session.summary();
        output::section(format!("Summary for {}", summary.month));
        output::info(format!("Total Budget: {}", money(summary.total_budget)));
        output::info(format!("Total Spent: {}", money(summary.total_spent)));
        output::info(format!("Remaining: {}", money(summary.remaining)));
    }

    fn cmd_chart(&self) {
        let slices = self.session.chart_slices();
        let total: f64 = slices.iter().map(|slice| slice.value).sum();
        output::section(format!(
            "Expense Breakdown for {}",
            self.session.selected_month()
        ));
        for slice in slices {
            if total > 0.0 {
                output::info(format!(
                    "{:<16} {:>10}  {:>4.0}%",
                    slice.label,
                    money(slice.value),
                    slice.value / total * 100.0
                ));
            } else {
                output::info(format!("{:<16} {:>10}", slice.label, money(slice.value)));
            }
        }
    }

    fn cmd_dark(&mut self) {
        let dark = self.session.toggle_dark_mode();
        let state = if dark { "enabled" } else { "disabled" };
        output::info(format!("Dark mode {state}."));
        self.print_save_notice();
    }

    fn cmd_help(&self) {
        output::section("Commands");
        for spec in COMMANDS {
            output::info(format!("  {:<40} {}", spec.usage, spec.description));
        }
    }

    /// Finds the visible expense whose id starts with `prefix` and reports
    /// which bucket it lives in.
    fn resolve_expense(&self, prefix: &str) -> Result<(Uuid, bool), CommandError> {
        let matches: Vec<_> = self
            .session
            .month_expenses()
            .into_iter()
            .filter(|record| record.id.to_string().starts_with(prefix))
            .collect();
        match matches.as_slice() {
            [] => Err(CommandError::Input(format!(
                "no visible expense with id `{prefix}`; see `list`"
            ))),
            [record] => Ok((record.id, record.is_permanent)),
            _ => Err(CommandError::Input(format!(
                "id `{prefix}` is ambiguous; give more characters"
            ))),
        }
    }

    fn print_save_notice(&mut self) {
        match self.session.take_save_notice() {
            Some(SaveOutcome::Saved) => output::success("Saved"),
            Some(SaveOutcome::Failed) => {
                output::warning("save failed; changes kept for this session")
            }
            None => {}
        }
    }
}

fn unknown_command(raw: &str) -> CommandError {
    let lowered = raw.to_lowercase();
    let suggestion = COMMANDS
        .iter()
        .map(|spec| (spec.name, strsim::jaro_winkler(&lowered, spec.name)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .map(|(name, _)| name);
    match suggestion {
        Some(name) => CommandError::Input(format!(
            "unknown command `{raw}`; did you mean `{name}`?"
        )),
        None => CommandError::Input(format!("unknown command `{raw}`; type `help`")),
    }
}

fn config_base_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pocketbudget")
}

fn money(value: f64) -> String {
    format!("${value}")
}

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
