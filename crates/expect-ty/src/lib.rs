pub mod associate;
pub mod directive;
pub mod engine;
pub mod findings;
pub mod host;
pub mod matcher;
pub mod parse;
pub mod reconcile;
pub mod snapshot;

pub use engine::{AssertionChecker, CheckOutcome, Options};
pub use findings::{Finding, FindingKind};
