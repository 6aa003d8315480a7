// Cost models for the categorized trip estimate

use crate::models::Money;
use serde::Serialize;

/// Whether the estimated total fits the requested budget.
///
/// A total exactly equal to the budget counts as within budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetVerdict {
    WithinBudget,
    OverBudget,
}

impl BudgetVerdict {
    /// Compares a total against a budget
    pub fn for_total(total: Money, budget: Money) -> Self {
        if total <= budget {
            BudgetVerdict::WithinBudget
        } else {
            BudgetVerdict::OverBudget
        }
    }
}

/// Categorized cost estimate for a trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub transportation: Money,
    pub accommodation: Money,
    pub activities: Money,
    pub food: Money,
    pub misc: Money,
}

impl CostBreakdown {
    /// Sum over all cost categories
    pub fn total(&self) -> Money {
        self.transportation + self.accommodation + self.activities + self.food + self.misc
    }

    /// Category name / amount pairs in presentation order
    pub fn categories(&self) -> [(&'static str, Money); 5] {
        [
            ("Transportation", self.transportation),
            ("Accommodation", self.accommodation),
            ("Activities", self.activities),
            ("Food", self.food),
            ("Misc", self.misc),
        ]
    }
}
