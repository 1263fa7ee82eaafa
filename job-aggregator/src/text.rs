use std::collections::HashSet;

/// Trim and collapse every run of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapsed text, or `None` when nothing is left.
pub fn clean_text(text: Option<&str>) -> Option<String> {
    text.map(collapse_whitespace).filter(|s| !s.is_empty())
}

pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Capitalise the first letter of every word and lowercase the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Ordered union: `first` then the unseen entries of `second`, exact match.
pub fn union_preserving_order(first: Vec<String>, second: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(first.len() + second.len());

    for item in first.into_iter().chain(second) {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }

    result
}
