//! Filter and metrics engine for the trip grid.
//!
//! Every function here is a pure function of its inputs. The caller decides
//! when to recompute; the trip collection is only ever borrowed.

use crate::criteria::FilterCriteria;
use crate::types::Trip;

/// Whether a trip satisfies every active condition of the criteria.
///
/// Conditions:
/// - query: name or location contains it, ignoring case
/// - budget cap: `total_budget <= cap`
/// - start bound: `start >= bound`
/// - end bound: `end <= bound`
///
/// Empty or zero conditions always pass, as does a malformed budget cap.
/// A malformed date bound passes no trip.
pub fn matches(trip: &Trip, criteria: &FilterCriteria) -> bool {
    let needle = criteria.query.to_lowercase();
    matches_with(trip, criteria, &needle)
}

fn matches_with(trip: &Trip, criteria: &FilterCriteria, needle: &str) -> bool {
    let matches_query = needle.is_empty()
        || trip.name.to_lowercase().contains(needle)
        || trip.location.to_lowercase().contains(needle);

    let matches_budget = criteria
        .budget_cap()
        .map_or(true, |cap| f64::from(trip.total_budget) <= cap);

    let matches_start = criteria.start_bound().admits(trip.start, |d, bound| d >= bound);
    let matches_end = criteria.end_bound().admits(trip.end, |d, bound| d <= bound);

    matches_query && matches_budget && matches_start && matches_end
}

/// Trips matching the criteria, borrowed, in their original order.
pub fn visible_trips<'a>(trips: &'a [Trip], criteria: &FilterCriteria) -> Vec<&'a Trip> {
    let needle = criteria.query.to_lowercase();
    trips
        .iter()
        .filter(|t| matches_with(t, criteria, &needle))
        .collect()
}

/// Trips matching the criteria, in their original order.
pub fn derive_visible_trips(trips: &[Trip], criteria: &FilterCriteria) -> Vec<Trip> {
    visible_trips(trips, criteria).into_iter().cloned().collect()
}

/// Share of the budget already spent, as a whole percentage capped at 100.
///
/// Rounds half up. A trip with no budget reports 0.
pub fn spend_percentage(trip: &Trip) -> u8 {
    let total = u64::from(trip.total_budget);
    if total == 0 {
        return 0;
    }
    let spent = u64::from(trip.spent).min(total);
    ((spent * 100 + total / 2) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_trips;
    use crate::types::Accent;
    use chrono::NaiveDate;

    fn trip(total_budget: u32, spent: u32) -> Trip {
        Trip {
            id: 99,
            name: "Test".to_string(),
            location: "Nowhere".to_string(),
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            total_budget,
            spent,
            color: Accent::Blue,
        }
    }

    fn open_criteria() -> FilterCriteria {
        FilterCriteria {
            max_total_budget: 0.0,
            ..FilterCriteria::default()
        }
    }

    fn names(trips: &[Trip]) -> Vec<&str> {
        trips.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_keeps_only_amalfi() {
        let trips = sample_trips();
        let visible = derive_visible_trips(&trips, &FilterCriteria::default());
        assert_eq!(names(&visible), vec!["Amalfi Escape"]);
    }

    #[test]
    fn test_inactive_criteria_keeps_everything_in_order() {
        let trips = sample_trips();
        let visible = derive_visible_trips(&trips, &open_criteria());
        assert_eq!(visible, trips.to_vec());
    }

    #[test]
    fn test_query_matches_location_ignoring_case() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            query: "japan".to_string(),
            ..open_criteria()
        };
        assert_eq!(names(&derive_visible_trips(&trips, &criteria)), vec!["Kyoto & Tokyo"]);

        let criteria = FilterCriteria {
            query: "LOOP".to_string(),
            ..open_criteria()
        };
        assert_eq!(names(&derive_visible_trips(&trips, &criteria)), vec!["Iceland Loop"]);
    }

    #[test]
    fn test_budget_cap_is_inclusive() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            max_total_budget: 2800.0,
            ..open_criteria()
        };
        assert_eq!(
            names(&derive_visible_trips(&trips, &criteria)),
            vec!["Amalfi Escape", "Iceland Loop"]
        );

        let criteria = FilterCriteria {
            max_total_budget: 2799.0,
            ..open_criteria()
        };
        assert_eq!(names(&derive_visible_trips(&trips, &criteria)), vec!["Amalfi Escape"]);
    }

    #[test]
    fn test_start_bound_is_inclusive() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            start_date: "2025-12-10".to_string(),
            ..open_criteria()
        };
        assert_eq!(
            names(&derive_visible_trips(&trips, &criteria)),
            vec!["Iceland Loop", "Patagonia Trek"]
        );

        let criteria = FilterCriteria {
            start_date: "2025-12-11".to_string(),
            ..open_criteria()
        };
        assert_eq!(names(&derive_visible_trips(&trips, &criteria)), vec!["Patagonia Trek"]);
    }

    #[test]
    fn test_end_bound_is_inclusive() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            end_date: "2025-09-14".to_string(),
            ..open_criteria()
        };
        assert_eq!(
            names(&derive_visible_trips(&trips, &criteria)),
            vec!["Kyoto & Tokyo", "Amalfi Escape"]
        );
    }

    #[test]
    fn test_malformed_start_date_matches_no_trip() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            start_date: "not-a-date".to_string(),
            ..open_criteria()
        };
        assert!(derive_visible_trips(&trips, &criteria).is_empty());
    }

    #[test]
    fn test_malformed_end_date_matches_no_trip() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            end_date: "2025/12/31".to_string(),
            ..open_criteria()
        };
        assert!(derive_visible_trips(&trips, &criteria).is_empty());

        // Clearing the field lifts the bound again
        let criteria = FilterCriteria {
            end_date: String::new(),
            ..criteria
        };
        assert_eq!(derive_visible_trips(&trips, &criteria).len(), trips.len());
    }

    #[test]
    fn test_all_conditions_combine() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            query: "a".to_string(),
            max_total_budget: 3500.0,
            start_date: "2025-06-02".to_string(),
            end_date: "2025-12-31".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(
            names(&derive_visible_trips(&trips, &criteria)),
            vec!["Kyoto & Tokyo", "Iceland Loop"]
        );
    }

    #[test]
    fn test_negative_cap_excludes_everything() {
        let trips = sample_trips();
        let criteria = FilterCriteria {
            max_total_budget: -5.0,
            ..open_criteria()
        };
        assert!(visible_trips(&trips, &criteria).is_empty());
    }

    #[test]
    fn test_spend_percentage() {
        assert_eq!(spend_percentage(&trip(1000, 5000)), 100);
        assert_eq!(spend_percentage(&trip(1000, 0)), 0);
        assert_eq!(spend_percentage(&trip(3200, 1680)), 53);
        assert_eq!(spend_percentage(&trip(200, 1)), 1);
        assert_eq!(spend_percentage(&trip(1000, 995)), 100);
        assert_eq!(spend_percentage(&trip(0, 0)), 0);
        assert_eq!(spend_percentage(&trip(0, 50)), 0);
    }

    #[test]
    fn test_spend_percentage_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(spend_percentage(&trip(8, 1)), 13);
        // 2200 budget, 940 spent = 42.7%
        assert_eq!(spend_percentage(&trip(2200, 940)), 43);
    }
}
