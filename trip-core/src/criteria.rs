//! Filter criteria for the trip grid and the edits that change them.
//!
//! The criteria record is the single source of truth for the page. Every
//! user input event becomes a [`CriteriaEdit`] applied through
//! [`FilterCriteria::apply`]; derived views are recomputed from the result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::parse_iso_date;
use crate::error::TripError;

pub const DEFAULT_MAX_TOTAL_BUDGET: f64 = 2500.0;
pub const DEFAULT_DAILY_BUDGET: u32 = 150;
pub const DAILY_BUDGET_MIN: u32 = 0;
pub const DAILY_BUDGET_MAX: u32 = 1000;
/// Amount added or removed by one press of the stepper buttons.
pub const DAILY_BUDGET_STEP: i32 = 10;

/// User-entered filter and display parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of a trip's name or location. Empty disables it.
    pub query: String,
    /// Inclusive cap on a trip's total budget. Zero or non-finite disables it.
    pub max_total_budget: f64,
    /// Display only; never used for filtering.
    pub daily_budget: u32,
    /// Earliest allowed trip start, `YYYY-MM-DD`. Empty disables it.
    pub start_date: String,
    /// Latest allowed trip end, `YYYY-MM-DD`. Empty disables it.
    pub end_date: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_total_budget: DEFAULT_MAX_TOTAL_BUDGET,
            daily_budget: DEFAULT_DAILY_BUDGET,
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// A single user input event against the criteria.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaEdit {
    Query(String),
    /// Raw text of the max-budget field.
    MaxTotalBudget(String),
    /// Signed step for the daily-budget stepper.
    StepDailyBudget(i32),
    StartDate(String),
    EndDate(String),
    /// The Search button. Filtering is already live, so this changes nothing.
    Search,
    Reset,
}

impl FilterCriteria {
    /// Restore the defaults in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply one edit. Returns whether the criteria changed.
    pub fn apply(&mut self, edit: CriteriaEdit) -> bool {
        let before = self.clone();

        match edit {
            CriteriaEdit::Query(q) => self.query = q,
            CriteriaEdit::MaxTotalBudget(raw) => {
                self.max_total_budget = match parse_budget_input(&raw) {
                    Ok(v) => v,
                    Err(e) => {
                        debug!("{}, budget cap disabled", e);
                        0.0
                    }
                };
            }
            CriteriaEdit::StepDailyBudget(delta) => {
                self.daily_budget = adjust_daily_budget(self.daily_budget, delta);
            }
            CriteriaEdit::StartDate(d) => self.start_date = d,
            CriteriaEdit::EndDate(d) => self.end_date = d,
            CriteriaEdit::Search => {}
            CriteriaEdit::Reset => self.reset(),
        }

        let changed = *self != before;
        if changed {
            debug!(criteria = ?self, "Criteria updated");
        }
        changed
    }

    /// Whether the budget cap takes part in filtering.
    pub fn budget_cap(&self) -> Option<f64> {
        let cap = self.max_total_budget;
        (cap.is_finite() && cap != 0.0).then_some(cap)
    }

    /// The start date filter as entered.
    pub fn start_bound(&self) -> DateBound {
        DateBound::from_input(&self.start_date, "start")
    }

    /// The end date filter as entered.
    pub fn end_bound(&self) -> DateBound {
        DateBound::from_input(&self.end_date, "end")
    }
}

/// State of a date filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// Field is empty; every trip passes.
    Open,
    At(NaiveDate),
    /// Field holds text that is not a date; no trip passes.
    Unparseable,
}

impl DateBound {
    fn from_input(raw: &str, which: &str) -> Self {
        match parse_date_bound(raw) {
            None => DateBound::Open,
            Some(Ok(date)) => DateBound::At(date),
            Some(Err(e)) => {
                debug!("{}, {} bound matches no trip", e, which);
                DateBound::Unparseable
            }
        }
    }

    /// Whether `date` passes this bound, given how it compares to the bound date.
    pub fn admits(self, date: NaiveDate, ok: impl FnOnce(NaiveDate, NaiveDate) -> bool) -> bool {
        match self {
            DateBound::Open => true,
            DateBound::At(bound) => ok(date, bound),
            DateBound::Unparseable => false,
        }
    }
}

/// `clamp(current + delta, 0, 1000)`.
pub fn adjust_daily_budget(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(DAILY_BUDGET_MIN), i64::from(DAILY_BUDGET_MAX)) as u32
}

/// Parse the text of the max-budget field.
///
/// Empty text is zero, which leaves the cap disabled.
pub fn parse_budget_input(raw: &str) -> Result<f64, TripError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TripError::InvalidAmount(raw.to_string())),
    }
}

/// Parse a date filter field. `None` when the field is empty.
pub fn parse_date_bound(raw: &str) -> Option<Result<NaiveDate, TripError>> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(parse_iso_date(raw))
    }
}
