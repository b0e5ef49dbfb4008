//! Query line validation and tokenizing.
//!
//! A query is a line of ASCII letters and whitespace. Each maximal run of
//! letters is a word, lowercased. The literal words `and` / `or` are
//! operators; adjacent bare words are implicitly joined by `and`.

use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

pub const AND: &str = "and";
pub const OR: &str = "or";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    And,
    Or,
}

impl Token {
    fn from_word(word: String) -> Self {
        match word.as_str() {
            AND => Token::And,
            OR => Token::Or,
            _ => Token::Word(word),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => f.write_str(w),
            Token::And => f.write_str(AND),
            Token::Or => f.write_str(OR),
        }
    }
}

/// A validated query: non-empty, starts and ends with a word, and never has
/// two operators side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<Token>,
}

impl Query {
    pub fn parse(input: &str) -> Result<Query, QueryError> {
        let count = check_format(input)?;
        let words = chop(input, count);
        validate_logic(&words)?;
        Ok(Query { tokens: words.into_iter().map(Token::from_word).collect() })
    }

    pub fn tokens(&self) -> &[Token] { &self.tokens }

    /// The lowercase query, words separated by single spaces.
    pub fn normalized(&self) -> String {
        self.tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
    }
}

impl FromStr for Query {
    type Err = QueryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Query::parse(s) }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.normalized()) }
}

/// Number of words in `input`, or why the line is unusable.
pub fn check_format(input: &str) -> Result<usize, QueryError> {
    if let Some(bad) = input.chars().find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace()) {
        return Err(QueryError::InvalidCharacter(bad));
    }
    let count = words_in(input).count();
    if count == 0 {
        return Err(QueryError::Empty);
    }
    Ok(count)
}

/// The first `word_count` words of `input`, lowercased.
pub fn chop(input: &str, word_count: usize) -> Vec<String> {
    words_in(input).take(word_count).map(|w| w.to_ascii_lowercase()).collect()
}

/// `and`/`or` may not open or close the query, nor sit next to each other.
pub fn validate_logic<S: AsRef<str>>(words: &[S]) -> Result<(), QueryError> {
    let is_op = |w: &S| matches!(w.as_ref(), AND | OR);
    match (words.first(), words.last()) {
        (Some(first), Some(last)) if !is_op(first) && !is_op(last) => {}
        _ => return Err(QueryError::InvalidLogic),
    }
    if words.windows(2).any(|pair| is_op(&pair[0]) && is_op(&pair[1])) {
        return Err(QueryError::InvalidLogic);
    }
    Ok(())
}

fn words_in(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words() {
        assert_eq!(check_format("  cat   dog "), Ok(2));
        assert_eq!(check_format("Dartmouth"), Ok(1));
    }

    #[test]
    fn rejects_bad_characters_and_blank_lines() {
        assert_eq!(check_format("cat-dog"), Err(QueryError::InvalidCharacter('-')));
        assert_eq!(check_format("cat 42"), Err(QueryError::InvalidCharacter('4')));
        assert_eq!(check_format(""), Err(QueryError::Empty));
        assert_eq!(check_format(" \t "), Err(QueryError::Empty));
    }

    #[test]
    fn chop_lowercases_in_order() {
        assert_eq!(chop("  Cat\tAND dOg ", 3), vec!["cat", "and", "dog"]);
    }

    #[test]
    fn logic_rules() {
        assert_eq!(validate_logic(&["cat", "and", "or", "dog"]), Err(QueryError::InvalidLogic));
        assert_eq!(validate_logic(&["and", "cat", "dog"]), Err(QueryError::InvalidLogic));
        assert_eq!(validate_logic(&["cat", "or"]), Err(QueryError::InvalidLogic));
        assert_eq!(validate_logic(&["or"]), Err(QueryError::InvalidLogic));
        assert_eq!(validate_logic(&["cat", "or", "or", "dog"]), Err(QueryError::InvalidLogic));
        assert_eq!(validate_logic(&["cat", "dog"]), Ok(()));
        assert_eq!(validate_logic(&["cat", "and", "dog", "or", "bird"]), Ok(()));
    }

    #[test]
    fn parse_builds_tokens() {
        let q: Query = "Cat  OR dog fish".parse().unwrap();
        assert_eq!(
            q.tokens(),
            &[Token::Word("cat".into()), Token::Or, Token::Word("dog".into()), Token::Word("fish".into())]
        );
        assert_eq!(q.normalized(), "cat or dog fish");
    }
}
