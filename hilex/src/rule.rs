use regex::{Regex, RegexBuilder};

use crate::Category;

/// how a rule consumes text at the scan position
#[derive(Debug)]
pub enum Matcher {
    /// a regex, compiled anchored so it only matches right at the position
    Pattern(Regex),
    /// literal whole words, tried longest first
    Words(Vec<&'static str>),
    /// matches nothing, for rules that only change state
    Empty,
}

impl Matcher {
    /// how many bytes of `rest` this matcher takes, if it matches at all
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        match self {
            Matcher::Pattern(regex) => regex.find(rest).map(|found| found.end()),
            Matcher::Words(words) => words
                .iter()
                .find(|word| rest.starts_with(**word) && ends_word(rest, word.len()))
                .map(|word| word.len()),
            Matcher::Empty => Some(0),
        }
    }
}

fn ends_word(rest: &str, len: usize) -> bool {
    !rest[len..].starts_with(|c: char| c.is_alphanumeric() || c == '_')
}

/// what happens to the state stack after a rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stay,
    Push(&'static str),
    Pop,
}

/// one entry of a state's table: match some text, classify it, maybe
/// change state
#[derive(Debug)]
pub struct Rule {
    pub(crate) matcher: Matcher,
    pub(crate) category: Category,
    pub(crate) action: Action,
}

impl Rule {
    pub fn token(pattern: &str, category: Category) -> Self {
        Self {
            matcher: Matcher::Pattern(compile(pattern)),
            category,
            action: Action::Stay,
        }
    }

    pub fn push(pattern: &str, category: Category, state: &'static str) -> Self {
        Self {
            matcher: Matcher::Pattern(compile(pattern)),
            category,
            action: Action::Push(state),
        }
    }

    pub fn pop(pattern: &str, category: Category) -> Self {
        Self {
            matcher: Matcher::Pattern(compile(pattern)),
            category,
            action: Action::Pop,
        }
    }

    pub fn words(words: &[&'static str], category: Category) -> Self {
        let mut words = words.to_vec();
        // longest first, a shorter keyword must not shadow one it prefixes
        words.sort_by_key(|word| std::cmp::Reverse(word.len()));
        Self {
            matcher: Matcher::Words(words),
            category,
            action: Action::Stay,
        }
    }

    /// matches nothing and pops, for states that fall back once no rule
    /// of theirs applies
    pub fn default_pop() -> Self {
        Self {
            matcher: Matcher::Empty,
            // never emitted, the empty match produces no token
            category: Category::Text,
            action: Action::Pop,
        }
    }
}

/// patterns only ever match right at the scan position, and `^` and `$`
/// match at line breaks
fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(&format!(r"\A(?:{pattern})"))
        .multi_line(true)
        .build()
        .unwrap_or_else(|err| panic!("malformed pattern `{pattern}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored() {
        let rule = Rule::token("[0-9]+", Category::Number);
        assert_eq!(rule.matcher.match_len("12ab"), Some(2));
        assert_eq!(rule.matcher.match_len("ab12"), None);
    }

    #[test]
    fn dollar_at_line_end() {
        let rule = Rule::token(r"\\$", Category::Keyword);
        assert_eq!(rule.matcher.match_len("\\\nmore"), Some(1));
        assert_eq!(rule.matcher.match_len("\\a"), None);
    }

    #[test]
    fn whole_words() {
        let rule = Rule::words(&["draw", "drawarrow"], Category::Keyword);
        assert_eq!(rule.matcher.match_len("drawarrow a;"), Some(9));
        assert_eq!(rule.matcher.match_len("draw a;"), Some(4));
        assert_eq!(rule.matcher.match_len("drawing"), None);
        assert_eq!(rule.matcher.match_len("redraw"), None);
    }

    #[test]
    #[should_panic]
    fn malformed_pattern() {
        Rule::token("(", Category::Text);
    }
}
