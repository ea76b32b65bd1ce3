//! Compiled search filters over board cards.

use super::lexer::tokenize;
use crate::board::domain::{Column, Swimlane, TaskCard};
use chrono::NaiveDate;

/// Comparison applied to a card's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueComparator {
    /// Due strictly before the date.
    Before,
    /// Due on or before the date.
    OnOrBefore,
    /// Due exactly on the date.
    On,
    /// Due on or after the date.
    OnOrAfter,
    /// Due strictly after the date.
    After,
}

impl DueComparator {
    fn holds(self, due: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Before => due < reference,
            Self::OnOrBefore => due <= reference,
            Self::On => due == reference,
            Self::OnOrAfter => due >= reference,
            Self::After => due > reference,
        }
    }
}

/// One compiled search criterion; a card must satisfy all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Criterion {
    /// Case-insensitive substring over title and description.
    Text(String),
    /// Card assigned to the named user.
    Assignee(String),
    /// Card not assigned to anyone.
    Unassigned,
    /// Card sitting in the named column.
    Column(String),
    /// Card sitting in the named swimlane.
    Swimlane(String),
    /// Card carrying the color.
    Color(String),
    /// Card carrying the tag.
    Tag(String),
    /// Card due date compared against a reference date.
    Due(DueComparator, NaiveDate),
}

/// Placement context a card is evaluated in.
///
/// Column and swimlane names live on the layout, not on the card, so
/// the view builder supplies the cell the card currently occupies.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    column: &'a Column,
    swimlane: &'a Swimlane,
}

impl<'a> CellContext<'a> {
    /// Creates the evaluation context for one grid cell.
    #[must_use]
    pub const fn new(column: &'a Column, swimlane: &'a Swimlane) -> Self {
        Self { column, swimlane }
    }
}

/// An immutable, compiled search query.
///
/// Compilation never fails: structured `key:value` tokens that cannot
/// be understood (unknown key, empty value, malformed date) degrade to
/// free-text terms instead of erroring, so the filter only ever narrows
/// or widens matches. Compiling the same query twice yields identical
/// matching behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    criteria: Vec<Criterion>,
}

impl FilterExpression {
    /// Compiles a raw search query.
    ///
    /// The empty (or all-whitespace) query compiles to the always-true
    /// filter.
    #[must_use]
    pub fn compile(query: &str) -> Self {
        let criteria = tokenize(query).into_iter().map(compile_token).collect();
        Self { criteria }
    }

    /// Returns whether this filter matches every card.
    #[must_use]
    pub fn matches_all(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Evaluates the filter against one card in its cell.
    #[must_use]
    pub fn is_match(&self, card: &TaskCard, cell: CellContext<'_>) -> bool {
        self.criteria
            .iter()
            .all(|criterion| criterion_matches(criterion, card, cell))
    }
}

fn compile_token(token: String) -> Criterion {
    let Some((key, value)) = token.split_once(':') else {
        return text_criterion(&token);
    };
    if value.is_empty() {
        return text_criterion(&token);
    }

    match key.to_ascii_lowercase().as_str() {
        "assignee" if value.eq_ignore_ascii_case("nobody") => Criterion::Unassigned,
        "assignee" => Criterion::Assignee(value.to_lowercase()),
        "column" => Criterion::Column(value.to_lowercase()),
        "swimlane" => Criterion::Swimlane(value.to_lowercase()),
        "color" => Criterion::Color(value.to_lowercase()),
        "tag" => Criterion::Tag(value.to_lowercase()),
        "due" => parse_due(value).unwrap_or_else(|| text_criterion(&token)),
        _ => text_criterion(&token),
    }
}

fn text_criterion(token: &str) -> Criterion {
    Criterion::Text(token.to_lowercase())
}

/// Parses `due:` values: an optional comparator prefix followed by an
/// ISO `YYYY-MM-DD` date.
fn parse_due(value: &str) -> Option<Criterion> {
    let (comparator, date_text) = if let Some(rest) = value.strip_prefix("<=") {
        (DueComparator::OnOrBefore, rest)
    } else if let Some(rest) = value.strip_prefix(">=") {
        (DueComparator::OnOrAfter, rest)
    } else if let Some(rest) = value.strip_prefix('<') {
        (DueComparator::Before, rest)
    } else if let Some(rest) = value.strip_prefix('>') {
        (DueComparator::After, rest)
    } else {
        (DueComparator::On, value)
    };

    NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
        .ok()
        .map(|date| Criterion::Due(comparator, date))
}

fn criterion_matches(criterion: &Criterion, card: &TaskCard, cell: CellContext<'_>) -> bool {
    match criterion {
        Criterion::Text(needle) => {
            card.title().to_lowercase().contains(needle)
                || card
                    .description()
                    .is_some_and(|text| text.to_lowercase().contains(needle))
        }
        Criterion::Assignee(name) => card
            .assignee()
            .is_some_and(|assignee| assignee.eq_ignore_ascii_case(name)),
        Criterion::Unassigned => card.assignee().is_none(),
        Criterion::Column(title) => cell.column.title().eq_ignore_ascii_case(title),
        Criterion::Swimlane(name) => cell.swimlane.name().eq_ignore_ascii_case(name),
        Criterion::Color(color) => card
            .color()
            .is_some_and(|value| value.eq_ignore_ascii_case(color)),
        Criterion::Tag(tag) => card.tags().iter().any(|value| value.eq_ignore_ascii_case(tag)),
        Criterion::Due(comparator, reference) => card
            .due_date()
            .is_some_and(|due| comparator.holds(due, *reference)),
    }
}
