use regex::Regex;

/// Occurrences of a pattern inside a text buffer, with a cursor marking the
/// selected match. Offsets are byte positions into the searched text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    occurrences: Vec<(usize, usize)>,
    cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStyle {
    Matched,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub style: HighlightStyle,
}

impl SearchResults {
    /// Indexes all non-overlapping matches of `pattern` in `text`, leftmost
    /// first. The cursor starts on the first match.
    ///
    /// An empty pattern matches nothing. A pattern that does not parse as a
    /// regex also yields an empty set, so live preview never fails while the
    /// user is mid-expression. Zero-width matches are skipped.
    pub fn search(pattern: &str, text: &str) -> Self {
        if pattern.is_empty() {
            return Self::default();
        }
        let Ok(re) = Regex::new(pattern) else {
            return Self::default();
        };
        let occurrences = re
            .find_iter(text)
            .filter(|m| m.start() < m.end())
            .map(|m| (m.start(), m.end()))
            .collect();
        Self {
            occurrences,
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Index of the selected occurrence, if any match exists.
    pub fn selected(&self) -> Option<usize> {
        if self.occurrences.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// Advances the cursor to the next occurrence, wrapping around.
    /// No-op on an empty set.
    pub fn select_next(&mut self) {
        if !self.occurrences.is_empty() {
            self.cursor = (self.cursor + 1) % self.occurrences.len();
        }
    }

    /// Derives the render plan: every occurrence is `Matched`, the one under
    /// the cursor is `Selected` instead. Recomputed on demand; holds no
    /// render state.
    pub fn highlight_plan(&self) -> Vec<HighlightSpan> {
        self.occurrences
            .iter()
            .enumerate()
            .map(|(idx, &(start, end))| HighlightSpan {
                start,
                end,
                style: if idx == self.cursor {
                    HighlightStyle::Selected
                } else {
                    HighlightStyle::Matched
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{HighlightStyle, SearchResults};

    #[test]
    fn matches_are_ordered_left_to_right() {
        let results = SearchResults::search("ab", "xx ab yy ab zz");
        let plan = results.highlight_plan();
        assert_eq!(plan.len(), 2);
        assert!(plan[0].start < plan[1].start);
        assert_eq!((plan[0].start, plan[0].end), (3, 5));
        assert_eq!((plan[1].start, plan[1].end), (9, 11));
    }

    #[test]
    fn first_match_is_selected_after_search() {
        let results = SearchResults::search("ala", r#"{"ala": 1}"#);
        assert_eq!(results.len(), 1);
        assert_eq!(results.selected(), Some(0));
        assert_eq!(results.highlight_plan()[0].style, HighlightStyle::Selected);
    }

    #[test]
    fn select_next_cycles_back_to_start() {
        let mut results = SearchResults::search("a", "a b a b a");
        assert_eq!(results.len(), 3);
        let origin = results.selected();
        for _ in 0..results.len() {
            results.select_next();
        }
        assert_eq!(results.selected(), origin);
    }

    #[test]
    fn select_next_on_empty_set_is_noop() {
        let mut results = SearchResults::search("nope", "text without it");
        assert!(results.is_empty());
        assert_eq!(results.selected(), None);
        results.select_next();
        assert_eq!(results, SearchResults::search("nope", "text without it"));
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        assert!(SearchResults::search("", "anything").is_empty());
    }

    #[test]
    fn zero_width_matches_are_skipped() {
        // `a*` matches the empty string at every position in "bbb".
        assert!(SearchResults::search("a*", "bbb").is_empty());
    }

    #[test]
    fn invalid_pattern_yields_empty_set() {
        assert!(SearchResults::search("(", "(((").is_empty());
    }

    #[test]
    fn regex_alternation_is_supported() {
        let results = SearchResults::search("cat|dog", "a cat and a dog");
        assert_eq!(results.len(), 2);
    }
}
