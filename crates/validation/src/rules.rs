//! Declarative validation rules.
//!
//! A rule binds the member names it covers and a configured message to a
//! predicate over the whole instance. Rule *semantics* (required, range,
//! format, ...) live in the predicate supplied by the registrant; the
//! engine only evaluates and reports.

use serde::Serialize;

/// One violated rule: the members it applies to and its configured message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Names of the members the failure applies to.
    pub members: Vec<&'static str>,
    /// Human-readable, rule-configured message.
    pub message: String,
}

impl core::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.members.join(", "), self.message)
    }
}

/// A single declarative rule.
pub struct Rule<T: ?Sized> {
    members: Vec<&'static str>,
    message: String,
    check: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

/// Ordered rule set for a type.
///
/// Built through the chaining registration methods and evaluated
/// generically; evaluation visits every rule, so a single member may show
/// up in several failures.
pub struct Rules<T: ?Sized> {
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized> Rules<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule covering a single member.
    ///
    /// The predicate returns `true` when the rule holds.
    pub fn field(
        self,
        member: &'static str,
        message: impl Into<String>,
        check: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.members(&[member], message, check)
    }

    /// Register a rule spanning several members (cross-field constraint).
    pub fn members(
        mut self,
        members: &[&'static str],
        message: impl Into<String>,
        check: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            members: members.to_vec(),
            message: message.into(),
            check: Box::new(check),
        });
        self
    }

    /// Evaluate every rule against `instance`, in registration order.
    ///
    /// Never short-circuits: one failure is emitted per violated rule.
    /// Empty output means the instance satisfies every declared rule.
    pub fn evaluate(&self, instance: &T) -> Vec<ValidationFailure> {
        self.rules
            .iter()
            .filter(|rule| !(rule.check)(instance))
            .map(|rule| ValidationFailure {
                members: rule.members.clone(),
                message: rule.message.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}
