//! Interactive collection of the month's plan and expenses.

use std::io::Write;

use crate::budget::{PlannedBudget, SpentLedger};
use crate::cli::output::MessageKind;
use crate::currency::{format_currency_value, CurrencyCode, LocaleConfig};
use crate::errors::PromptError;
use crate::prompt::{Console, LineSource, DEFAULT_MIN_COUNT};

/// Reply to the category prompt that ends expense entry.
pub const DONE_SENTINEL: &str = "done";

pub fn is_done(reply: &str) -> bool {
    reply.trim().eq_ignore_ascii_case(DONE_SENTINEL)
}

/// Asks for the monthly take-home income, which must be greater than zero.
pub fn collect_income<S, W>(console: &mut Console<S, W>) -> Result<f64, PromptError>
where
    S: LineSource,
    W: Write,
{
    console.read_amount("Enter monthly take-home income: ", false)
}

/// Asks for a category count, then a name and planned amount per category.
/// Warns, without failing, when the plan exceeds `income`.
pub fn collect_budget<S, W>(
    console: &mut Console<S, W>,
    income: f64,
    currency: &CurrencyCode,
    locale: &LocaleConfig,
) -> Result<PlannedBudget, PromptError>
where
    S: LineSource,
    W: Write,
{
    let mut planned = PlannedBudget::new();
    let count = console.read_integer_at_least("How many budget categories? ", DEFAULT_MIN_COUNT)?;

    for index in 1..=count {
        let name = console.read_non_empty(&format!("Name for category #{index}: "))?;
        let amount = console.read_amount(&format!("Planned amount for {name}: "), true)?;
        planned.add(name, amount);
    }

    let total = planned.total();
    if total > income {
        tracing::info!(total, income, "plan exceeds income");
        console.blank_line()?;
        console.say(
            MessageKind::Warning,
            format!(
                "Warning: Your total planned ({}) exceeds income ({}).",
                format_currency_value(total, currency, locale),
                format_currency_value(income, currency, locale)
            ),
        )?;
    }

    Ok(planned)
}

/// Logs expenses until the category reply is the [`DONE_SENTINEL`].
pub fn collect_expenses<S, W>(
    console: &mut Console<S, W>,
    planned: &PlannedBudget,
) -> Result<SpentLedger, PromptError>
where
    S: LineSource,
    W: Write,
{
    let mut spent = SpentLedger::for_budget(planned);

    console.blank_line()?;
    console.say(
        MessageKind::Info,
        format!("Enter expenses one by one. Type '{DONE_SENTINEL}' as the category to finish."),
    )?;
    console.blank_line()?;

    let mut entries = 0usize;
    loop {
        let reply = console.read_line(&format!("Expense category (or '{DONE_SENTINEL}'): "))?;
        if is_done(&reply) {
            break;
        }
        let amount = console.read_amount("Expense amount: ", true)?;
        let category = reply.trim();
        let allocation = spent.record(planned, category, amount);
        tracing::debug!(category, amount, ?allocation, "expense recorded");
        entries += 1;
    }

    tracing::debug!(entries, total = spent.total(), "expense entry finished");
    Ok(spent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::UNCATEGORIZED;
    use crate::cli::output::Styler;
    use crate::prompt::ScriptSource;
    use std::io::Cursor;

    type TestConsole = Console<ScriptSource<Cursor<String>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(
            ScriptSource::new(Cursor::new(input.to_string())),
            Vec::new(),
            Styler::plain(),
        )
    }

    fn transcript(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn usd() -> (CurrencyCode, LocaleConfig) {
        (CurrencyCode::default(), LocaleConfig::default())
    }

    #[test]
    fn sentinel_is_trimmed_and_case_insensitive() {
        for reply in ["done", "DONE", " Done ", "\tdOnE\t"] {
            assert!(is_done(reply), "{reply:?}");
        }
        for reply in ["", "don", "done!", "d one"] {
            assert!(!is_done(reply), "{reply:?}");
        }
    }

    #[test]
    fn income_rejects_zero() {
        let mut console = console("0\n2000\n");
        assert_eq!(collect_income(&mut console).unwrap(), 2000.0);
        assert!(transcript(console).contains("Please enter a number greater than 0."));
    }

    #[test]
    fn budget_folds_repeated_names() {
        let (currency, locale) = usd();
        let mut console = console("2\nFood\n100\n Food \n50\n");
        let planned = collect_budget(&mut console, 1000.0, &currency, &locale).unwrap();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned.get("Food"), Some(150.0));
        let text = transcript(console);
        assert!(text.contains("Name for category #2: "));
        assert!(text.contains("Planned amount for Food: "));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn budget_over_income_warns_but_continues() {
        let (currency, locale) = usd();
        let mut console = console("1\nRent\n2500\n");
        let planned = collect_budget(&mut console, 2000.0, &currency, &locale).unwrap();
        assert_eq!(planned.total(), 2500.0);
        assert!(transcript(console)
            .contains("\nWarning: Your total planned ($2,500.00) exceeds income ($2,000.00).\n"));
    }

    #[test]
    fn budget_equal_to_income_does_not_warn() {
        let (currency, locale) = usd();
        let mut console = console("1\nRent\n2000\n");
        collect_budget(&mut console, 2000.0, &currency, &locale).unwrap();
        assert!(!transcript(console).contains("Warning"));
    }

    #[test]
    fn expenses_route_unknown_categories() {
        let planned: PlannedBudget = [("Food", 500.0), ("Rent", 1000.0)].into_iter().collect();
        let mut console = console("Food\n600\nRent\n1000\nMisc\n50\n DONE \n");
        let spent = collect_expenses(&mut console, &planned).unwrap();
        assert_eq!(spent.get("Food"), 600.0);
        assert_eq!(spent.get("Rent"), 1000.0);
        assert_eq!(spent.get(UNCATEGORIZED), 50.0);
        assert!(!spent.contains("Misc"));
        assert_eq!(spent.total(), 1650.0);
        assert!(transcript(console)
            .starts_with("\nEnter expenses one by one. Type 'done' as the category to finish.\n\n"));
    }

    #[test]
    fn blank_category_counts_as_uncategorized() {
        let planned: PlannedBudget = [("Food", 10.0)].into_iter().collect();
        let mut console = console("\n5\ndone\n");
        let spent = collect_expenses(&mut console, &planned).unwrap();
        assert_eq!(spent.uncategorized(), 5.0);
    }

    #[test]
    fn category_reply_is_trimmed_before_matching() {
        let planned: PlannedBudget = [("Food", 10.0)].into_iter().collect();
        let mut console = console("  Food  \n7\ndone\n");
        let spent = collect_expenses(&mut console, &planned).unwrap();
        assert_eq!(spent.get("Food"), 7.0);
    }

    #[test]
    fn missing_sentinel_ends_with_closed_input() {
        let planned: PlannedBudget = [("Food", 10.0)].into_iter().collect();
        let mut console = console("Food\n7\n");
        let err = collect_expenses(&mut console, &planned).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }
}
