pub mod daily_budget_stepper;
pub mod footer;
pub mod hero;
pub mod search_card;
pub mod trip_card;
