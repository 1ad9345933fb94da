//! Planned and spent amounts per category.

/// Reserved bucket for expenses logged against a category that was never planned.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A category with the amount allocated to it for the month.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCategory {
    pub name: String,
    pub amount: f64,
}

/// Planned amounts keyed by category name, kept in the order names were first
/// entered. Repeated names fold into the existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannedBudget {
    categories: Vec<PlannedCategory>,
}

impl PlannedBudget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `name`, creating the category on first use.
    /// Returns the category's new planned total.
    pub fn add(&mut self, name: impl Into<String>, amount: f64) -> f64 {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                existing.amount += amount;
                tracing::debug!(
                    category = existing.name.as_str(),
                    added = amount,
                    total = existing.amount,
                    "folded duplicate category"
                );
                existing.amount
            }
            None => {
                self.categories.push(PlannedCategory { name, amount });
                amount
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.amount)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedCategory> {
        self.categories.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.categories.iter().map(|c| c.amount).sum()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for PlannedBudget {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut budget = PlannedBudget::new();
        for (name, amount) in iter {
            budget.add(name, amount);
        }
        budget
    }
}

/// Where a logged expense ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    Planned,
    Uncategorized,
}

/// Accumulated spending per planned category plus the [`UNCATEGORIZED`] bucket,
/// in planned order with the bucket last. Totals are summed in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpentLedger {
    totals: Vec<(String, f64)>,
}

impl SpentLedger {
    /// Starts every planned category and the uncategorized bucket at zero.
    /// A planned category named [`UNCATEGORIZED`] doubles as the bucket.
    pub fn for_budget(planned: &PlannedBudget) -> Self {
        let mut totals: Vec<(String, f64)> = planned
            .names()
            .map(|name| (name.to_string(), 0.0))
            .collect();
        if !planned.contains(UNCATEGORIZED) {
            totals.push((UNCATEGORIZED.to_string(), 0.0));
        }
        Self { totals }
    }

    /// Adds an expense to its planned category, or to the uncategorized bucket
    /// when `category` was not planned. Never creates a new key.
    pub fn record(&mut self, planned: &PlannedBudget, category: &str, amount: f64) -> Allocation {
        let (key, allocation) = if planned.contains(category) {
            (category, Allocation::Planned)
        } else {
            (UNCATEGORIZED, Allocation::Uncategorized)
        };
        match self.totals.iter_mut().find(|(name, _)| name == key) {
            Some((_, total)) => *total += amount,
            None => self.totals.push((key.to_string(), amount)),
        }
        allocation
    }

    /// Spent amount for `category`, zero when absent.
    pub fn get(&self, category: &str) -> f64 {
        self.totals
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
            .unwrap_or(0.0)
    }

    pub fn uncategorized(&self) -> f64 {
        self.get(UNCATEGORIZED)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.totals.iter().any(|(name, _)| name == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.totals.iter().fold(0.0, |sum, (_, total)| sum + total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_budget() -> PlannedBudget {
        [("Food", 500.0), ("Rent", 1000.0)].into_iter().collect()
    }

    #[test]
    fn duplicate_names_are_summed_not_overwritten() {
        let mut budget = PlannedBudget::new();
        budget.add("Food", 100.0);
        budget.add("Rent", 900.0);
        assert_eq!(budget.add("Food", 50.0), 150.0);
        assert_eq!(budget.get("Food"), Some(150.0));
        assert_eq!(budget.len(), 2);
        assert_eq!(budget.total(), 1050.0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let budget: PlannedBudget = [("Rent", 1.0), ("Food", 2.0), ("Rent", 3.0), ("Fun", 4.0)]
            .into_iter()
            .collect();
        let names: Vec<&str> = budget.names().collect();
        assert_eq!(names, vec!["Rent", "Food", "Fun"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let budget: PlannedBudget = [("Food", 1.0), ("food", 2.0)].into_iter().collect();
        assert_eq!(budget.len(), 2);
    }

    #[test]
    fn ledger_starts_at_zero_with_uncategorized_bucket() {
        let ledger = SpentLedger::for_budget(&sample_budget());
        assert_eq!(ledger.len(), 3);
        assert!(ledger.contains(UNCATEGORIZED));
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn unknown_categories_route_to_uncategorized() {
        let budget = sample_budget();
        let mut ledger = SpentLedger::for_budget(&budget);
        assert_eq!(ledger.record(&budget, "Food", 600.0), Allocation::Planned);
        assert_eq!(ledger.record(&budget, "Misc", 50.0), Allocation::Uncategorized);
        assert_eq!(ledger.record(&budget, "food", 5.0), Allocation::Uncategorized);
        assert!(!ledger.contains("Misc"));
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.get("Food"), 600.0);
        assert_eq!(ledger.uncategorized(), 55.0);
        assert_eq!(ledger.total(), 655.0);
    }

    #[test]
    fn entries_keep_planned_order_with_bucket_last() {
        let budget: PlannedBudget = [("Rent", 1.0), ("Food", 2.0)].into_iter().collect();
        let mut ledger = SpentLedger::for_budget(&budget);
        ledger.record(&budget, "Taxi", 3.0);
        ledger.record(&budget, "Food", 4.0);
        let entries: Vec<(&str, f64)> = ledger.iter().collect();
        assert_eq!(
            entries,
            vec![("Rent", 0.0), ("Food", 4.0), (UNCATEGORIZED, 3.0)]
        );
    }

    #[test]
    fn total_sums_in_entry_order() {
        let budget: PlannedBudget = [("A", 10.0), ("B", 10.0)].into_iter().collect();
        let mut ledger = SpentLedger::for_budget(&budget);
        ledger.record(&budget, "A", 2.07);
        ledger.record(&budget, "B", 1.612);
        ledger.record(&budget, "X", 2.413);
        assert_eq!(ledger.total(), (0.0 + 2.07) + 1.612 + 2.413);
        assert_eq!(format!("{:.2}", ledger.total()), "6.09");
    }

    #[test]
    fn planned_uncategorized_shares_the_bucket() {
        let budget: PlannedBudget = [("Uncategorized", 20.0), ("Food", 5.0)]
            .into_iter()
            .collect();
        let mut ledger = SpentLedger::for_budget(&budget);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.record(&budget, "Taxi", 3.0), Allocation::Uncategorized);
        assert_eq!(ledger.record(&budget, UNCATEGORIZED, 4.0), Allocation::Planned);
        assert_eq!(ledger.uncategorized(), 7.0);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn missing_category_reads_as_zero() {
        let ledger = SpentLedger::for_budget(&PlannedBudget::new());
        assert_eq!(ledger.get("Anything"), 0.0);
    }
}
