pub mod stylize_service;

pub use stylize_service::{JobOutcome, StylizeJob, StylizeService};
