//! Planned-versus-actual summary for the month.
//!
//! [`BudgetSummary::compute`] does the arithmetic and never touches its
//! inputs; [`BudgetSummary::render`] turns the result into console lines.

mod table;

pub use table::{render_cell, Alignment, Table, TableColumn};

use std::io::{self, Write};

use crate::budget::{PlannedBudget, SpentLedger, UNCATEGORIZED};
use crate::cli::output::{section_title, MessageKind, Styler};
use crate::currency::{
    format_currency_cell, format_currency_value, format_percent, CurrencyCode, LocaleConfig,
};

pub const REPORT_TITLE: &str = "Monthly Budget Summary";
pub const RULE_WIDTH: usize = 70;
pub const OVERAGE_TIP: &str =
    "Tip: Review over-budget categories and cut discretionary costs next month.";
pub const WITHIN_PLAN: &str = "Nice work: All categories are within plan.";

const AMOUNT_WIDTH: usize = 11;
const PLAN_PCT_WIDTH: usize = 13;
const INCOME_PCT_WIDTH: usize = 11;

/// The summary table's layout.
pub fn summary_table() -> Table {
    Table {
        columns: vec![
            TableColumn::new("Category", 18, Alignment::Left),
            TableColumn::new("Planned", 12, Alignment::Right),
            TableColumn::new("Spent", 12, Alignment::Right),
            TableColumn::new("% Plan Used", 14, Alignment::Right),
            TableColumn::new("% Income", 12, Alignment::Right),
        ],
        rule_width: RULE_WIDTH,
    }
}

/// `part` as a percentage of `whole`, or zero when `whole` is not positive.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLine {
    pub name: String,
    pub planned: f64,
    pub actual: f64,
    pub pct_plan_used: f64,
    pub pct_income: f64,
    /// `actual - planned` when spending went past the plan.
    pub overage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UncategorizedLine {
    pub actual: f64,
    pub pct_income: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub income: f64,
    pub total_planned: f64,
    pub total_spent: f64,
    /// `income - total_spent`, negative when overspent.
    pub remaining: f64,
    pub categories: Vec<CategoryLine>,
    pub uncategorized: Option<UncategorizedLine>,
    pub any_overage: bool,
}

/// One line of rendered output and how it should be styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: MessageKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(MessageKind::Info, String::new())
    }
}

impl BudgetSummary {
    pub fn compute(income: f64, planned: &PlannedBudget, spent: &SpentLedger) -> Self {
        let total_planned = planned.total();
        let total_spent = spent.total();

        let categories: Vec<CategoryLine> = planned
            .iter()
            .map(|category| {
                let actual = spent.get(&category.name);
                CategoryLine {
                    name: category.name.clone(),
                    planned: category.amount,
                    actual,
                    pct_plan_used: percent_of(actual, category.amount),
                    pct_income: percent_of(actual, income),
                    overage: (actual > category.amount).then(|| actual - category.amount),
                }
            })
            .collect();

        let uncategorized_spent = spent.uncategorized();
        let uncategorized = (uncategorized_spent > 0.0).then(|| UncategorizedLine {
            actual: uncategorized_spent,
            pct_income: percent_of(uncategorized_spent, income),
        });

        let any_overage = categories.iter().any(|line| line.overage.is_some());

        tracing::debug!(
            income,
            total_planned,
            total_spent,
            any_overage,
            "summary computed"
        );

        Self {
            income,
            total_planned,
            total_spent,
            remaining: income - total_spent,
            categories,
            uncategorized,
            any_overage,
        }
    }

    pub fn render(&self, currency: &CurrencyCode, locale: &LocaleConfig) -> Vec<ReportLine> {
        let money = |amount: f64| format_currency_value(amount, currency, locale);
        let money_cell = |amount: f64| format_currency_cell(amount, currency, locale, AMOUNT_WIDTH);
        let table = summary_table();

        let mut lines = vec![
            ReportLine::blank(),
            ReportLine::new(MessageKind::Section, section_title(REPORT_TITLE)),
            ReportLine::new(MessageKind::Info, format!("Income: {}", money(self.income))),
            ReportLine::new(
                MessageKind::Info,
                format!("Total Planned: {}", money(self.total_planned)),
            ),
            ReportLine::new(
                MessageKind::Info,
                format!("Total Spent:   {}", money(self.total_spent)),
            ),
            ReportLine::new(
                MessageKind::Info,
                format!("Remaining:     {}", money(self.remaining)),
            ),
            ReportLine::blank(),
            ReportLine::new(MessageKind::Info, table.render_header()),
            ReportLine::new(MessageKind::Separator, table.horizontal_rule()),
        ];

        for line in &self.categories {
            lines.push(ReportLine::new(
                MessageKind::Info,
                table.render_row(&[
                    line.name.clone(),
                    money_cell(line.planned),
                    money_cell(line.actual),
                    format_percent(line.pct_plan_used, locale, PLAN_PCT_WIDTH),
                    format_percent(line.pct_income, locale, INCOME_PCT_WIDTH),
                ]),
            ));
            if let Some(over_by) = line.overage {
                lines.push(ReportLine::new(
                    MessageKind::Warning,
                    format!("  WARNING: {} over budget by {}", line.name, money(over_by)),
                ));
            }
        }

        if let Some(bucket) = &self.uncategorized {
            lines.push(ReportLine::new(
                MessageKind::Info,
                table.render_row(&[
                    UNCATEGORIZED.to_string(),
                    "(no plan)".to_string(),
                    money_cell(bucket.actual),
                    "n/a".to_string(),
                    format_percent(bucket.pct_income, locale, INCOME_PCT_WIDTH),
                ]),
            ));
        }

        lines.push(ReportLine::blank());
        lines.push(if self.any_overage {
            ReportLine::new(MessageKind::Tip, OVERAGE_TIP)
        } else {
            ReportLine::new(MessageKind::Success, WITHIN_PLAN)
        });

        lines
    }

    /// Renders and writes the report, one line per entry.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        currency: &CurrencyCode,
        locale: &LocaleConfig,
        styler: &Styler,
    ) -> io::Result<()> {
        for line in self.render(currency, locale) {
            if line.text.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "{}", styler.apply(line.kind, &line.text))?;
            }
        }
        out.flush()
    }
}
