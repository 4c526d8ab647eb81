pub mod history;
pub mod monitoring;
pub mod navigation;
pub mod patient;
pub mod query;
pub mod routine;
