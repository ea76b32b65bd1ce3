//! Tokenizer for board search queries.
//!
//! Splits a raw query on whitespace while honouring quoted segments, so
//! `assignee:"Jane Doe" urgent` yields two tokens. Tokenization never
//! fails: an unterminated quote simply swallows the rest of the input
//! as literal text.

/// Splits a query into tokens, merging quoted segments.
///
/// Both double and single quotes delimit segments; the quotes
/// themselves are stripped. A quote may open mid-token
/// (`assignee:"Jane Doe"`).
pub(crate) fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;

    for character in input.chars() {
        if let Some(quote_char) = in_quotes {
            if character == quote_char {
                in_quotes = None;
            } else {
                current.push(character);
            }
            continue;
        }

        match character {
            '"' | '\'' => in_quotes = Some(character),
            _ if character.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(character),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
