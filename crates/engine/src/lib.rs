//! Provider dispatch and aggregation engine.
//!
//! Given two prompt variants and a provider configuration set, [`run`]
//! issues one call per (enabled provider, variant) concurrently, contains
//! individual failures as data, and [`assemble`] folds everything into a
//! single immutable [`RunResult`] suitable for display and logging.

pub use aggregate::{REDACTED, assemble};
pub use dispatch::run;
pub use registry::Registry;
pub use result::{ProviderResult, RunInputs, RunOutputs, RunResult};
pub use variant::{SEPARATOR, Variant, resolve_text};

mod aggregate;
mod dispatch;
mod registry;
mod result;
mod variant;
