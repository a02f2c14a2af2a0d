//! Letter arithmetic for the possibility check

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Each letter of the root can be used at most once: the check walks the
/// candidate in order and removes the first matching letter from a working
/// copy of the root, failing as soon as a letter is missing.
///
/// Both arguments are compared exactly; callers lowercase them first.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("ski", "silkworm"));
/// assert!(!is_possible("catt", "cat"));
/// ```
#[must_use]
pub fn is_possible(candidate: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }

    true
}
