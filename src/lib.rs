pub mod controller_name;
pub mod convention;
pub mod manifest;

pub use controller_name::{normalize, ControllerName, DerivedNames};
pub use convention::{is_conforming, is_logger_name, is_metrics_name, matches_pattern, Convention};
