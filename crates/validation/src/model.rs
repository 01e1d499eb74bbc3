//! Self-validation for input and domain models.

use groundwork_core::{DomainError, DomainResult};

use crate::rules::{Rules, ValidationFailure};

/// Self-validation against declaratively registered rules.
///
/// Implementors declare their rule set once in [`rules`](Validate::rules);
/// the provided methods evaluate it against the current state of `self`.
/// A model that validates cleanly is safe to turn into a command or entity.
pub trait Validate {
    /// The declarative rule set for this type.
    fn rules() -> Rules<Self>;

    /// Evaluate every declared rule. Empty means fully valid.
    fn validate(&self) -> Vec<ValidationFailure> {
        Self::rules().evaluate(self)
    }

    /// Return normally when valid; otherwise fail with a single
    /// invalid-argument error.
    ///
    /// `param` names the argument being checked and travels on the error as
    /// structured context. The error message lists every violation as
    /// `<Member>: <Message>`, joined with `"; "`, so all of them stay
    /// enumerable from the message alone.
    fn assert_valid(&self, param: &str) -> DomainResult<()> {
        let failures = self.validate();
        if failures.is_empty() {
            return Ok(());
        }

        let message = failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        tracing::debug!(param, %message, "validation failed");
        Err(DomainError::invalid_argument(param, message))
    }
}
