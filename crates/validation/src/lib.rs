//! Self-validating models and the declarative rule engine behind them.
//!
//! Rules are registered per type as (members, message, predicate) entries;
//! [`Validate`] evaluates them against "self" and reshapes the output into
//! either a list of failures or a single aggregated invalid-argument error.

pub mod model;
pub mod rules;

pub use model::Validate;
pub use rules::{Rule, Rules, ValidationFailure};
