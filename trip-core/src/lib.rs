//! Filter engine and data model for the Trip Tracker page.
//!
//! The crate has no UI dependency; the Leptos frontend owns a
//! [`FilterCriteria`] signal and recomputes everything else from it:
//!
//! ```
//! use trip_core::{derive_visible_trips, sample_trips, CriteriaEdit, FilterCriteria};
//!
//! let trips = sample_trips();
//! let mut criteria = FilterCriteria::default();
//! criteria.apply(CriteriaEdit::MaxTotalBudget("3000".into()));
//!
//! let visible = derive_visible_trips(&trips, &criteria);
//! assert_eq!(visible.len(), 2);
//! ```

pub mod assets;
pub mod catalog;
pub mod criteria;
pub mod engine;
mod error;
pub mod format;
pub mod types;

pub use catalog::{load_catalog, parse_trips, sample_trips};
pub use criteria::{adjust_daily_budget, CriteriaEdit, DateBound, FilterCriteria};
pub use engine::{derive_visible_trips, matches, spend_percentage, visible_trips};
pub use error::TripError;
pub use format::{format_currency, format_trip_date, progress_legend};
pub use types::{Accent, Badge, Trip, BADGES};
