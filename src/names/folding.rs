//! Accent- and case-insensitive forms of names for sorting and searching.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercases `text` and strips diacritics, so `"Núñez"` folds to `"nunez"`.
///
/// # Examples
/// ```
/// use user_autocomplete::names::fold_for_comparison;
///
/// assert_eq!(fold_for_comparison("Ångström"), "angstrom");
/// assert_eq!(fold_for_comparison("Émile"), "emile");
/// ```
pub fn fold_for_comparison(text: &str) -> String {
    // NFD splits "é" into "e" plus a combining accent, which is then dropped
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Orders sort keys by their folded form, then by the raw keys to break ties.
pub fn compare_sort_keys(a: &str, b: &str) -> Ordering {
    fold_for_comparison(a)
        .cmp(&fold_for_comparison(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_diacritics_and_case() {
        assert_eq!(fold_for_comparison("José Núñez"), "jose nunez");
        assert_eq!(fold_for_comparison("SELÄNNE"), "selanne");
        assert_eq!(fold_for_comparison("Graham"), "graham");
        assert_eq!(fold_for_comparison(""), "");
    }

    #[test]
    fn test_fold_handles_precomposed_and_decomposed_input() {
        // U+00E9 and "e" + U+0301 fold to the same string
        assert_eq!(
            fold_for_comparison("\u{e9}mile"),
            fold_for_comparison("e\u{301}mile")
        );
    }

    #[test]
    fn test_compare_sort_keys_places_accented_letters_with_base_letter() {
        assert_eq!(compare_sort_keys("ångström", "ebert"), Ordering::Less);
        assert_eq!(compare_sort_keys("émile", "ebert"), Ordering::Greater);
        assert_eq!(compare_sort_keys("émile", "zimmer"), Ordering::Less);
    }

    #[test]
    fn test_compare_sort_keys_breaks_ties_on_raw_key() {
        assert_eq!(compare_sort_keys("muller", "müller"), Ordering::Less);
        assert_eq!(compare_sort_keys("smith", "smith"), Ordering::Equal);
    }
}
