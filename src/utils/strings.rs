/// Characters that close a sentence.
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

pub fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

pub fn ends_with_terminator(w: &str) -> bool {
    w.chars().last().is_some_and(is_terminator)
}

fn is_strippable(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?')
}

/// Lowercases, trims and drops a single trailing `.`, `,`, `!` or `?`.
///
/// Only one character is stripped, so `"end.."` becomes `"end."`.
pub fn normalize_word(word: &str) -> String {
    let mut output = word.to_lowercase().trim().to_string();
    if output.chars().last().is_some_and(is_strippable) {
        output.pop();
    }
    output
}

/// Masks a word down to its first character plus one underscore per
/// remaining normalized character.
///
/// The visible character comes from the raw word, the blank count from the
/// normalized one: `"Dog."` gives `"D__"`.
pub fn word_hint(word: &str) -> String {
    let Some(first) = word.chars().next() else {
        return String::new();
    };
    let blanks = normalize_word(word).chars().count().saturating_sub(1);

    let mut output = String::with_capacity(first.len_utf8() + blanks);
    output.push(first);
    output.push_str(&"_".repeat(blanks));
    output
}

pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_one_mark() {
        assert_eq!(normalize_word("Fox"), "fox");
        assert_eq!(normalize_word("  dog. "), "dog");
        assert_eq!(normalize_word("wait,"), "wait");
        assert_eq!(normalize_word("Really?"), "really");
        assert_eq!(normalize_word("end.."), "end.");
        assert_eq!(normalize_word("it's"), "it's");
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("!"), "");
    }

    #[test]
    fn normalize_is_single_pass() {
        let once = normalize_word("end..");
        assert_eq!(normalize_word(&once), "end");
        for w in ["Fox", "dog.", "Hello,", "WORLD", "?x", "a-b!"] {
            let once = normalize_word(w);
            assert_eq!(normalize_word(&once), once, "{w}");
        }
    }

    #[test]
    fn hint_uses_raw_first_char_and_normalized_length() {
        assert_eq!(word_hint("dog."), "d__");
        assert_eq!(word_hint("Dog."), "D__");
        assert_eq!(word_hint("fox"), "f__");
        assert_eq!(word_hint("a"), "a");
        assert_eq!(word_hint("\"Hi\""), "\"___");
        assert_eq!(word_hint(""), "");
    }

    #[test]
    fn hint_length_matches_normalized_length() {
        for w in ["The", "quick", "dog.", "über,", "Why?", "x"] {
            assert_eq!(
                word_hint(w).chars().count(),
                normalize_word(w).chars().count(),
                "{w}"
            );
        }
    }

    #[test]
    fn hint_of_lone_punctuation_keeps_first_char() {
        // normalizes to "", blanks saturate at zero
        assert_eq!(word_hint("."), ".");
    }

    #[test]
    fn terminators() {
        assert!(ends_with_terminator("dog."));
        assert!(ends_with_terminator("why?!"));
        assert!(!ends_with_terminator("Mr.Smith"));
        assert!(!ends_with_terminator(""));
    }
}
