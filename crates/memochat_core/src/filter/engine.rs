//! Filter predicate evaluation.
//!
//! # Responsibility
//! - Combine text/category/date-range/link clauses into one AND predicate.
//! - Return matches newest-first, ready for display.
//!
//! # Invariants
//! - Purely functional over the snapshot; never mutates the store.
//! - An empty spec (`FilterSpec::default()`) matches every message.

use crate::model::filter::{CategoryFilter, FilterSpec};
use crate::model::message::Message;
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Evaluates `spec` against `messages` (given oldest-first, as the record
/// store keeps them) and returns matching clones newest-first.
pub fn filter_messages(messages: &[Message], spec: &FilterSpec) -> Vec<Message> {
    let needle = spec.text.trim().to_lowercase();
    messages
        .iter()
        .rev()
        .filter(|message| matches(message, spec, &needle))
        .cloned()
        .collect()
}

/// Returns whether `text` contains an `http(s)://` URL.
pub fn contains_link(text: &str) -> bool {
    URL_RE.is_match(text)
}

fn matches(message: &Message, spec: &FilterSpec, needle: &str) -> bool {
    if !needle.is_empty() && !message.text.to_lowercase().contains(needle) {
        return false;
    }

    if let CategoryFilter::Tag(tag) = spec.category {
        if message.shortcut_id != tag {
            return false;
        }
    }

    let day = date_prefix(&message.time);
    if let Some(start) = spec.date_range.start.as_deref() {
        if day < start {
            return false;
        }
    }
    if let Some(end) = spec.date_range.end.as_deref() {
        if day > end {
            return false;
        }
    }

    if spec.has_link && !contains_link(&message.text) {
        return false;
    }

    true
}

fn date_prefix(time: &str) -> &str {
    time.get(..10).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::{contains_link, filter_messages};
    use crate::model::filter::{CategoryFilter, DateRange, FilterSpec};
    use crate::model::message::{Message, TagRef};
    use uuid::Uuid;

    fn message(text: &str, time: &str, tag: TagRef) -> Message {
        Message::with_id(Uuid::new_v4(), text, time, tag)
    }

    #[test]
    fn default_spec_returns_all_newest_first() {
        let older = message("first", "2026-08-01 09:00:00", TagRef::Default);
        let newer = message("second", "2026-08-02 09:00:00", TagRef::Default);
        let result = filter_messages(&[older.clone(), newer.clone()], &FilterSpec::default());
        assert_eq!(result, vec![newer, older]);
    }

    #[test]
    fn text_clause_is_case_insensitive_substring() {
        let hit = message("Buy MILK today", "2026-08-01 09:00:00", TagRef::Default);
        let miss = message("nothing here", "2026-08-01 10:00:00", TagRef::Default);
        let spec = FilterSpec {
            text: "  milk ".to_string(),
            ..FilterSpec::default()
        };
        let result = filter_messages(&[hit.clone(), miss], &spec);
        assert_eq!(result, vec![hit]);
    }

    #[test]
    fn category_clause_matches_exact_tag_only() {
        let id = Uuid::new_v4();
        let tagged = message("a", "2026-08-01 09:00:00", TagRef::Shortcut(id));
        let untagged = message("b", "2026-08-01 10:00:00", TagRef::Default);
        let spec = FilterSpec {
            category: CategoryFilter::Tag(TagRef::Shortcut(id)),
            ..FilterSpec::default()
        };
        let result = filter_messages(&[tagged.clone(), untagged], &spec);
        assert_eq!(result, vec![tagged]);
    }

    #[test]
    fn default_sentinel_is_a_filterable_category() {
        let tagged = message(
            "a",
            "2026-08-01 09:00:00",
            TagRef::Shortcut(Uuid::new_v4()),
        );
        let untagged = message("b", "2026-08-01 10:00:00", TagRef::Default);
        let spec = FilterSpec {
            category: CategoryFilter::Tag(TagRef::Default),
            ..FilterSpec::default()
        };
        let result = filter_messages(&[tagged, untagged.clone()], &spec);
        assert_eq!(result, vec![untagged]);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let before = message("a", "2026-07-31 23:59:59", TagRef::Default);
        let on_start = message("b", "2026-08-01 00:00:00", TagRef::Default);
        let on_end = message("c", "2026-08-03 23:59:59", TagRef::Default);
        let after = message("d", "2026-08-04 00:00:00", TagRef::Default);
        let spec = FilterSpec {
            date_range: DateRange {
                start: Some("2026-08-01".to_string()),
                end: Some("2026-08-03".to_string()),
            },
            ..FilterSpec::default()
        };
        let result = filter_messages(
            &[before, on_start.clone(), on_end.clone(), after],
            &spec,
        );
        assert_eq!(result, vec![on_end, on_start]);
    }

    #[test]
    fn link_clause_requires_a_url() {
        let with_link = message(
            "see https://example.com",
            "2026-08-01 09:00:00",
            TagRef::Default,
        );
        let without = message("no links here", "2026-08-01 10:00:00", TagRef::Default);
        let spec = FilterSpec {
            has_link: true,
            ..FilterSpec::default()
        };
        let result = filter_messages(&[with_link.clone(), without], &spec);
        assert_eq!(result, vec![with_link]);
    }

    #[test]
    fn clauses_are_anded() {
        let id = Uuid::new_v4();
        let full_match = message(
            "report at http://example.com/q3",
            "2026-08-02 12:00:00",
            TagRef::Shortcut(id),
        );
        let wrong_tag = message(
            "report at http://example.com/q3",
            "2026-08-02 12:00:00",
            TagRef::Default,
        );
        let no_link = message("report only", "2026-08-02 12:00:00", TagRef::Shortcut(id));
        let spec = FilterSpec {
            text: "report".to_string(),
            category: CategoryFilter::Tag(TagRef::Shortcut(id)),
            has_link: true,
            date_range: DateRange {
                start: Some("2026-08-02".to_string()),
                end: Some("2026-08-02".to_string()),
            },
        };
        let result = filter_messages(&[full_match.clone(), wrong_tag, no_link], &spec);
        assert_eq!(result, vec![full_match]);
    }

    #[test]
    fn contains_link_matches_http_and_https() {
        assert!(contains_link("go to http://a.io now"));
        assert!(contains_link("https://b.io"));
        assert!(!contains_link("http:// alone is not a url"));
        assert!(!contains_link("ftp://old.example.com"));
    }
}
