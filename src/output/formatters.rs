//! Formatting utilities for terminal output

/// Spell a word out in capitals with a space between letters
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::spaced_letters;
///
/// assert_eq!(spaced_letters("silkworm"), "S I L K W O R M");
/// ```
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);

    for (i, letter) in word.chars().flat_map(char::to_uppercase).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter);
    }

    result
}

/// "1 word", "3 words"
#[must_use]
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}
