use std::ops::Range;

use regex::RegexBuilder;

use crate::model::SuggestionOption;

/// Filter candidates against the typed query.
///
/// Keeps every candidate containing `query` (case-insensitive) in registry
/// order. A non-empty query with no case-insensitive whole-string match
/// gets a trailing create option. The query is never trimmed.
pub fn filter(candidates: &[String], query: &str) -> Vec<SuggestionOption> {
    let needle = query.to_lowercase();

    let mut options: Vec<SuggestionOption> = candidates
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .map(|c| SuggestionOption::existing(c.as_str()))
        .collect();

    if !query.is_empty() && !candidates.iter().any(|c| c.to_lowercase() == needle) {
        options.push(SuggestionOption::create(query));
    }

    options
}

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
/// Empty query yields no ranges.
///
/// Matching runs over the same `to_lowercase` folding as [`filter`], so
/// every kept row has a highlight. Ranges cover whole source chars even
/// when one char lowercases to several.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }
    let re = match RegexBuilder::new(&regex::escape(&query.to_lowercase())).build() {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    // Source span of the char behind each byte of the lowercased text.
    // Per-char lowercasing has the same byte lengths as `str::to_lowercase`
    // (final sigma only swaps one two-byte char for another).
    let lowered = text.to_lowercase();
    let mut origin: Vec<Range<usize>> = Vec::with_capacity(lowered.len());
    for (start, c) in text.char_indices() {
        let span = start..start + c.len_utf8();
        let len: usize = c.to_lowercase().map(char::len_utf8).sum();
        origin.extend(std::iter::repeat_n(span, len));
    }

    re.find_iter(&lowered)
        .filter_map(|m| {
            let first = origin.get(m.start())?;
            let last = origin.get(m.end().checked_sub(1)?)?;
            Some(first.start..last.end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let candidates = titles(&["Board games revival", "Comedy trends", "Amusement parks"]);
        let result = filter(&candidates, "");
        assert_eq!(
            result,
            vec![
                SuggestionOption::existing("Board games revival"),
                SuggestionOption::existing("Comedy trends"),
                SuggestionOption::existing("Amusement parks"),
            ]
        );
    }

    #[test]
    fn test_partial_match_appends_create() {
        let candidates = titles(&["Board games revival", "Comedy trends"]);
        let result = filter(&candidates, "comedy");
        assert_eq!(
            result,
            vec![
                SuggestionOption::existing("Comedy trends"),
                SuggestionOption::create("comedy"),
            ]
        );
    }

    #[test]
    fn test_exact_match_suppresses_create() {
        let candidates = titles(&["Robo-advising", "Index funds"]);
        let result = filter(&candidates, "Robo-advising");
        assert_eq!(result, vec![SuggestionOption::existing("Robo-advising")]);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let candidates = titles(&["Fake news", "Fake news today"]);
        let result = filter(&candidates, "FAKE NEWS");
        assert_eq!(
            result,
            vec![
                SuggestionOption::existing("Fake news"),
                SuggestionOption::existing("Fake news today"),
            ]
        );
    }

    #[test]
    fn test_no_match_only_create() {
        let candidates = titles(&["Sports medicine", "Team sociology"]);
        let result = filter(&candidates, "curling");
        assert_eq!(result, vec![SuggestionOption::create("curling")]);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(filter(&[], "").is_empty());
        assert_eq!(filter(&[], "x"), vec![SuggestionOption::create("x")]);
    }

    #[test]
    fn test_whitespace_is_literal() {
        let candidates = titles(&["Index funds"]);
        // Trailing space is kept, so nothing contains the query
        let result = filter(&candidates, "Index funds ");
        assert_eq!(result, vec![SuggestionOption::create("Index funds ")]);
        // Inner space matches as a substring and keeps the create option
        let result = filter(&candidates, "x f");
        assert_eq!(
            result,
            vec![
                SuggestionOption::existing("Index funds"),
                SuggestionOption::create("x f"),
            ]
        );
    }

    #[test]
    fn test_substring_property() {
        let candidates = titles(&[
            "Gamified learning",
            "Education systems",
            "Mobile learning",
            "Tech bootcamps",
        ]);
        for query in ["learn", "LEARN", "e", "sys", "zzz", "n"] {
            let result = filter(&candidates, query);
            for opt in &result {
                if let SuggestionOption::Existing { title } = opt {
                    assert!(
                        title.to_lowercase().contains(&query.to_lowercase()),
                        "{} should contain {}",
                        title,
                        query
                    );
                }
            }
            // Create option, when present, is always last and carries the raw query
            if let Some(pos) = result.iter().position(|o| o.is_create()) {
                assert_eq!(pos, result.len() - 1);
                assert_eq!(result[pos], SuggestionOption::create(query));
            }
        }
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Comedy trends", "comedy"), vec![0..6]);
        assert_eq!(match_ranges("Mobile learning", "E"), vec![5..6, 8..9]);
        assert_eq!(match_ranges("Robo-advising", "o-a"), vec![3..6]);
        assert!(match_ranges("Robo-advising", "").is_empty());
        assert!(match_ranges("Robo-advising", "zzz").is_empty());
        // Regex metacharacters are literal
        assert_eq!(match_ranges("a.b (c)", "(c)"), vec![4..7]);
    }

    #[test]
    fn test_match_ranges_follow_lowercase_folding() {
        // Dotted capital I lowercases to two chars; the range spans the source char
        assert_eq!(match_ranges("\u{0130}stanbul", "i"), vec![0..2]);
        // Final sigma
        assert_eq!(match_ranges("\u{039F}\u{0394}\u{039F}\u{03A3}", "\u{03C2}"), vec![6..8]);
        assert_eq!(match_ranges("Stra\u{00DF}e", "SS"), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_every_kept_row_is_highlighted() {
        let candidates = titles(&[
            "\u{0130}stanbul nights",
            "\u{039F}\u{0394}\u{039F}\u{03A3}",
            "\u{212A}elvin scale",
            "Comedy trends",
        ]);
        for query in ["i", "\u{03C2}", "k", "KEL", "tr", "\u{0130}"] {
            for opt in filter(&candidates, query) {
                if let SuggestionOption::Existing { title } = opt {
                    assert!(
                        !match_ranges(&title, query).is_empty(),
                        "{:?} kept for {:?} but not highlighted",
                        title,
                        query
                    );
                }
            }
        }
    }
}
