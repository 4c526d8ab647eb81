//! SIGMA - Sistema Integrado de Gerenciamento e Monitoramento Assistencial.
//!
//! Caregiver dashboard backend: action history by time window, canned
//! answers to caregiver questions, routine calendar, patient intake and
//! camera monitoring settings. All state is in memory.

pub mod commands;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use errors::SigmaError;
pub use services::history_filter::filter_actions;
pub use services::query_resolver::{resolve, FALLBACK_ANSWER};
pub use state::AppState;
