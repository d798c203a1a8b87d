use std::collections::BTreeMap;

/// Outstanding balance at the end of each whole year of the loan.
///
/// Keys are ascending year indices starting at `0`, which always holds the
/// amount borrowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemainingDebtSchedule(BTreeMap<u32, f64>);

impl RemainingDebtSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, year: u32, balance: f64) {
        self.0.insert(year, balance);
    }

    pub fn get(&self, year: u32) -> Option<f64> {
        self.0.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last year in the schedule and its balance.
    pub fn final_year(&self) -> Option<(u32, f64)> {
        self.0.last_key_value().map(|(year, balance)| (*year, *balance))
    }

    /// Iterates `(year, balance)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(year, balance)| (*year, *balance))
    }
}

impl FromIterator<(u32, f64)> for RemainingDebtSchedule {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Every figure derived from one set of loan inputs, at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct RepaymentResult {
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub capital: f64,
    pub interest_paid: f64,
    pub affordable_monthly_payment: f64,
    pub remaining_debt: RemainingDebtSchedule,
}
