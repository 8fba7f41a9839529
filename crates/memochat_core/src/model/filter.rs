//! Filter criteria supplied by the presentation layer.
//!
//! Transient state, never persisted; `FilterSpec::default()` is the
//! match-everything spec the chat screen starts with.

use crate::model::message::TagRef;

/// Category clause of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every tag passes, including the Default sentinel.
    #[default]
    All,
    /// Only messages carrying exactly this tag pass. The tag may reference
    /// a shortcut that no longer exists; matching is by value.
    Tag(TagRef),
}

/// Inclusive date bounds compared against the `YYYY-MM-DD` prefix of a
/// message timestamp. `None` means unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Active filter criteria; all clauses are ANDed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring to look for; blank matches everything.
    pub text: String,
    pub category: CategoryFilter,
    /// When true, only messages whose text contains a URL pass.
    pub has_link: bool,
    pub date_range: DateRange,
}
