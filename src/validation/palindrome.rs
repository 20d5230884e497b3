//! Palindrome check over alphanumeric content.

/// Returns `true` if `s` reads the same in both directions once
/// non-alphanumeric characters are dropped and case is folded.
///
/// Strings with no alphanumeric characters (including `""`) are palindromes.
///
/// ```rust
/// use algokit::validation::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("race a car"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect();

    if chars.is_empty() {
        return true;
    }
    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromes() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("malayalam"));
        assert!(is_palindrome("No 'x' in Nixon"));
        assert!(is_palindrome("a"));
    }

    #[test]
    fn test_not_palindromes() {
        assert!(!is_palindrome("race a car"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_digits_are_significant() {
        assert!(is_palindrome("1a2, 2A1"));
        assert!(!is_palindrome("0P"));
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(is_palindrome(""));
        assert!(is_palindrome(" .,!? "));
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_palindrome("Été"));
        // Lowercases to 'i' plus a combining dot, which is not alphanumeric.
        assert!(is_palindrome("İ"));
        assert!(is_palindrome("İxi"));
    }
}
