pub mod collector;
pub mod deducer;
pub mod domain;
pub mod error;
pub mod git;
pub mod picker;
pub mod resolver;
pub mod spec;
pub mod ui;

pub use deducer::VersionDeducer;
pub use domain::DeductedVersion;
pub use error::{AutoverError, Result};
