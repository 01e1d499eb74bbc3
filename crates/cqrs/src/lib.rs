//! Command and query contracts (CQRS-style seams).
//!
//! These traits fix the shape of the seams only; routing, handler
//! registration and execution policy belong to the consuming application.

pub mod command;
pub mod query;
pub mod sort;

pub use command::Command;
pub use query::{Query, QueryHandler};
pub use sort::SortDirection;
