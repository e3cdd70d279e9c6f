pub mod cli;
pub mod config;
pub mod load;

pub use config::{Applicability, ConfigRecord, RuleParam, RuleSpec, Severity};
