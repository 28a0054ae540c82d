const DEFAULT_CONJUNCTION: &str = "and";

/// How [`join_list`] phrases the final item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Word placed before the last item ("and", "or", ...).
    pub conjunction: String,
    /// Put a comma before the conjunction when there are three or more items.
    pub oxford_comma: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            conjunction: DEFAULT_CONJUNCTION.to_string(),
            oxford_comma: true,
        }
    }
}

impl JoinOptions {
    pub fn with_conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = conjunction.into();
        self
    }

    pub fn with_oxford_comma(mut self, enabled: bool) -> Self {
        self.oxford_comma = enabled;
        self
    }
}

/// Joins fragments with "and" and an Oxford comma.
pub fn join<S: AsRef<str>>(fragments: &[S]) -> String {
    join_list(fragments, &JoinOptions::default())
}

/// Joins fragments into a phrase such as `"a, b, and c"`.
///
/// Empty fragments are dropped before counting, so `["a", "", "b"]` reads
/// as a two-item list. Two items never get a comma.
pub fn join_list<S: AsRef<str>>(fragments: &[S], options: &JoinOptions) -> String {
    let items: Vec<&str> = fragments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect();

    match items.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} {} {}", first, options.conjunction, second),
        [head @ .., last] => {
            let separator = if options.oxford_comma { ", " } else { " " };
            format!(
                "{}{}{} {}",
                head.join(", "),
                separator,
                options.conjunction,
                last
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn no_oxford() -> JoinOptions {
        JoinOptions::default().with_oxford_comma(false)
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [&str; 0] = [];
        assert_eq!(join(&empty), "");
        assert_eq!(join(&["a"]), "a");
        assert_eq!(join(&["", "", ""]), "");
    }

    #[test]
    fn test_two_items_never_get_a_comma() {
        assert_eq!(join(&["a", "b"]), "a and b");
        assert_eq!(join_list(&["a", "b"], &no_oxford()), "a and b");
    }

    #[test]
    fn test_three_items() {
        assert_eq!(join(&["a", "b", "c"]), "a, b, and c");
        assert_eq!(join_list(&["a", "b", "c"], &no_oxford()), "a, b and c");
    }

    #[test]
    fn test_empty_fragments_are_skipped() {
        assert_eq!(join(&["a", "", "b"]), "a and b");
        assert_eq!(join(&["", "a"]), "a");
        assert_eq!(join(&["a", "b", ""]), "a and b");
        assert_eq!(join(&["", "a", "", "b", "c", ""]), "a, b, and c");
    }

    #[test]
    fn test_custom_conjunction() {
        let options = JoinOptions::default().with_conjunction("or");
        assert_eq!(join_list(&["tea", "coffee"], &options), "tea or coffee");
        assert_eq!(
            join_list(&["tea", "coffee", "juice"], &options),
            "tea, coffee, or juice"
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let names: Vec<String> = ["Ann", "Bo", "Cy", "Di"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join(&names), "Ann, Bo, Cy, and Di");
    }

    #[test]
    fn test_whitespace_fragments_are_kept() {
        assert_eq!(join(&["a", " ", "b"]), "a,  , and b");
    }

    proptest! {
        #[test]
        fn every_fragment_appears(items in prop::collection::vec("[a-z]{1,6}", 0..8)) {
            let joined = join(&items);
            for item in &items {
                prop_assert!(joined.contains(item.as_str()));
            }
        }

        #[test]
        fn oxford_comma_only_changes_final_separator(items in prop::collection::vec("[a-z]{1,6}", 3..8)) {
            let with = join(&items);
            let without = join_list(&items, &no_oxford());
            let last = &items[items.len() - 1];
            prop_assert_eq!(with.len(), without.len() + 1);
            let oxford_tail = format!(", and {}", last);
            let plain_tail = format!(" and {}", last);
            prop_assert!(with.ends_with(&oxford_tail));
            prop_assert!(without.ends_with(&plain_tail));
        }
    }
}
