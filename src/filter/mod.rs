//! Search-query compilation for board views.
//!
//! A viewer's search box feeds a small query language: free-text terms
//! plus structured `key:value` tokens (`assignee:`, `column:`,
//! `swimlane:`, `color:`, `tag:`, `due:` with comparators). The
//! compiled [`FilterExpression`] is a pure predicate over cards; it
//! selects which cards a view shows and never touches the stored
//! order. Malformed input is never an error here, only a literal text
//! term.

mod expression;
mod lexer;

pub use expression::{CellContext, DueComparator, FilterExpression};

#[cfg(test)]
mod tests;
