pub mod history_filter;
pub mod monitoring;
pub mod patient_intake;
pub mod query_resolver;
pub mod routine_planner;
pub mod seed;
