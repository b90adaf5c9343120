//! Matcher invariants.

use proptest::prelude::*;
use scour::{search, IndexEntry, MAX_RESULTS};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{1,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..8).prop_map(|words| words.join(" "))
}

fn entry_strategy() -> impl Strategy<Value = IndexEntry> {
    (
        text_strategy(),
        text_strategy(),
        text_strategy(),
        prop::collection::vec(word_strategy(), 0..3),
        prop::collection::vec(word_strategy(), 0..3),
    )
        .prop_map(|(title, body, description, categories, tags)| IndexEntry {
            title,
            body,
            description,
            categories,
            tags,
            url: "/x".to_string(),
            date: String::new(),
        })
}

fn index_strategy() -> impl Strategy<Value = Vec<IndexEntry>> {
    prop::collection::vec(entry_strategy(), 0..30)
}

/// Reference implementation: the haystack spelled out field by field.
fn oracle_matches(entry: &IndexEntry, query: &str) -> bool {
    let haystack = format!(
        "{} {} {} {} {}",
        entry.title,
        entry.body,
        entry.description,
        entry.categories.join(" "),
        entry.tags.join(" ")
    )
    .to_lowercase();
    query
        .to_lowercase()
        .split_whitespace()
        .all(|term| haystack.contains(term))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn never_more_than_ten(index in index_strategy(), query in "[a-z ]{0,12}") {
        prop_assert!(search(Some(&index), &query).len() <= MAX_RESULTS);
    }

    #[test]
    fn short_queries_match_nothing(index in index_strategy(), c in "[a-zA-Z0-9]", pad in "[ \t]{0,3}") {
        let query = format!("{}{}{}", pad, c, pad);
        prop_assert!(search(Some(&index), &query).is_empty());
    }

    #[test]
    fn case_does_not_matter(index in index_strategy(), query in "[a-zA-Z]{2,5}") {
        prop_assert_eq!(
            search(Some(&index), &query.to_uppercase()),
            search(Some(&index), &query.to_lowercase())
        );
    }

    #[test]
    fn substring_of_any_field_is_found(entry in entry_strategy(), field in 0usize..5, start in 0usize..8) {
        let source = match field {
            0 => entry.title.clone(),
            1 => entry.body.clone(),
            2 => entry.description.clone(),
            3 => entry.categories.join(" "),
            _ => entry.tags.join(" "),
        };
        let chars: Vec<char> = source.chars().collect();
        prop_assume!(chars.len() >= 2);
        let start = start.min(chars.len() - 2);
        let query: String = chars[start..start + 2].iter().collect();
        prop_assume!(!query.trim().is_empty() && query.trim().chars().count() >= 2);

        let index = vec![entry];
        prop_assert_eq!(search(Some(&index), &query).len(), 1);
    }

    #[test]
    fn agrees_with_oracle(index in index_strategy(), query in "[a-z0-9]{2,4}( [a-z0-9]{1,3})?") {
        let expected: Vec<&IndexEntry> = index
            .iter()
            .filter(|e| oracle_matches(e, &query))
            .take(MAX_RESULTS)
            .collect();
        prop_assert_eq!(search(Some(&index), &query), expected);
    }

    #[test]
    fn results_are_an_ordered_prefix_of_matches(index in index_strategy(), query in "[a-z]{2,3}") {
        let results = search(Some(&index), &query);
        let mut last = None;
        for r in &results {
            let pos = index.iter().position(|e| std::ptr::eq(e, *r)).unwrap();
            if let Some(prev) = last {
                prop_assert!(pos > prev);
            }
            last = Some(pos);
        }
    }

    #[test]
    fn unloaded_index_never_matches(query in ".{0,20}") {
        prop_assert!(search(None, &query).is_empty());
    }
}
