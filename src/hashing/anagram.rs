//! Anagram checks and grouping.
//!
//! Two strings are anagrams when one is a rearrangement of the other. The
//! canonical form of a string is its characters in sorted order, which is
//! identical for all members of an anagram class.

use std::collections::HashMap;

/// Returns the characters of `s` sorted, the grouping key for anagrams.
///
/// Case-sensitive: `"Tea"` and `"eat"` have different canonical forms.
pub fn canonical_form(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Groups `words` by canonical form.
///
/// Groups appear in the order their first member appears in `words`, and
/// members keep their input order.
///
/// ```rust
/// use algokit::hashing::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups, vec![
///     vec!["eat", "tea", "ate"],
///     vec!["tan", "nat"],
///     vec!["bat"],
/// ]);
/// ```
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut slot_of: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for word in words {
        let word = word.as_ref();
        let slot = *slot_of.entry(canonical_form(word)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_owned());
    }
    groups
}

/// Returns `true` if `a` and `b` are anagrams, ignoring case.
///
/// Compares the canonical forms of the lowercased strings.
pub fn is_anagram(a: &str, b: &str) -> bool {
    canonical_form(&a.to_lowercase()) == canonical_form(&b.to_lowercase())
}

/// Returns `true` if `a` and `b` are anagrams, ignoring case, using a single
/// counting map instead of sorting.
///
/// Characters of `a` increment their count and characters of `b` decrement
/// it; the strings are anagrams iff every count ends at zero.
pub fn is_anagram_by_count(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();
    if a.len() != b.len() {
        return false;
    }

    let mut counts: HashMap<char, i64> = HashMap::new();
    for (&x, &y) in a.iter().zip(&b) {
        *counts.entry(x).or_insert(0) += 1;
        *counts.entry(y).or_insert(0) -= 1;
    }
    counts.values().all(|&c| c == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        assert_eq!(canonical_form("listen"), "eilnst");
        assert_eq!(canonical_form("silent"), "eilnst");
        assert_eq!(canonical_form(""), "");
    }

    #[test]
    fn test_group_anagrams_order() {
        let groups = group_anagrams(&["bat", "tab", "cat", "act", "bat"]);
        assert_eq!(groups, vec![vec!["bat", "tab", "bat"], vec!["cat", "act"]]);
    }

    #[test]
    fn test_group_anagrams_empty_strings() {
        let groups = group_anagrams(&["", "a", ""]);
        assert_eq!(groups, vec![vec!["", ""], vec!["a"]]);
        assert!(group_anagrams::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_group_anagrams_owned_input() {
        let words = vec![String::from("ab"), String::from("ba")];
        assert_eq!(group_anagrams(&words), vec![vec!["ab", "ba"]]);
    }

    #[test]
    fn test_is_anagram() {
        assert!(is_anagram("listen", "silent"));
        assert!(is_anagram("Mary", "Army"));
        assert!(!is_anagram("cat", "bat"));
        assert!(!is_anagram("Tamil", "Telugu"));
    }

    #[test]
    fn test_is_anagram_by_count() {
        assert!(is_anagram_by_count("Mary", "Army"));
        assert!(!is_anagram_by_count("Tamil", "Telug"));
        assert!(!is_anagram_by_count("ab", "abc"));
        assert!(is_anagram_by_count("", ""));
    }
}
