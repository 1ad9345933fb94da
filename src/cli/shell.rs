use std::io::{self, IsTerminal, Write};

use crate::cli::output::{MessageKind, Styler};
use crate::collect::{collect_budget, collect_expenses, collect_income};
use crate::config::{CliMode, Settings};
use crate::errors::CliError;
use crate::prompt::{Console, EditorSource, LineSource, ScriptSource};
use crate::report::BudgetSummary;

pub const WELCOME_BANNER: &str = "Welcome to the Personal Monthly Budget Assistant";

pub fn run_cli() -> Result<(), CliError> {
    let settings = Settings::from_env(io::stdin().is_terminal());
    let styler = Styler::new(settings.output);

    match settings.mode {
        CliMode::Interactive => {
            let mut console = Console::new(EditorSource::new()?, io::stdout(), styler);
            run_session(&mut console, &settings)?;
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut console = Console::new(ScriptSource::new(stdin.lock()), io::stdout(), styler);
            run_session(&mut console, &settings)?;
        }
    }

    Ok(())
}

/// Runs one full session: income, plan, expenses, then the printed summary.
pub fn run_session<S, W>(
    console: &mut Console<S, W>,
    settings: &Settings,
) -> Result<BudgetSummary, CliError>
where
    S: LineSource,
    W: Write,
{
    tracing::info!(mode = ?settings.mode, "budget session started");

    console.say(MessageKind::Section, WELCOME_BANNER)?;
    console.blank_line()?;

    let income = collect_income(console)?;
    let planned = collect_budget(console, income, &settings.currency, &settings.locale)?;
    let spent = collect_expenses(console, &planned)?;

    let summary = BudgetSummary::compute(income, &planned, &spent);
    let styler = console.styler();
    summary.write_to(console.out(), &settings.currency, &settings.locale, &styler)?;

    tracing::info!(
        categories = planned.len(),
        remaining = summary.remaining,
        "budget session finished"
    );
    Ok(summary)
}
