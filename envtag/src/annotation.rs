//! Parsing of the per-field annotation micro-format.
//!
//! An annotation is a space-separated list of tokens, each either a bare
//! flag or `name=value`:
//!
//! ```text
//! key=NAME required default=VALUE options=V1,V2,V3
//! ```
//!
//! There is no escaping: values cannot contain spaces, and option values
//! cannot contain commas.

/// One token of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `key=NAME`: lookup key override, before prefixing and uppercasing
    Key(&'a str),
    /// `required`
    Required,
    /// `default=VALUE`: raw default literal
    Default(&'a str),
    /// `options=V1,V2,...`: raw allowed values
    Options(Vec<&'a str>),
    /// Anything else; kept so callers can report it, never an error
    Unknown(&'a str),
}

/// Split an annotation into tokens.
///
/// A token is split at its first `=`, so values may themselves contain
/// `=`. Repeated spaces produce no empty tokens.
pub fn parse(annotation: &str) -> Vec<Token<'_>> {
    annotation
        .split(' ')
        .filter(|raw| !raw.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(raw: &str) -> Token<'_> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, value),
        None => (raw, ""),
    };

    match name {
        "key" => Token::Key(value),
        "required" => Token::Required,
        "default" => Token::Default(value),
        "options" => Token::Options(value.split(',').collect()),
        _ => Token::Unknown(raw),
    }
}
