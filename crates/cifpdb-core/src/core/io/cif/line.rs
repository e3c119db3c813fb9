//! Quote-aware tokenization of mmCIF logical lines.

/// Splits a line on `delimiter`, optionally honoring `'`/`"` quoting so that
/// delimiters inside a quoted token do not separate it.
///
/// Quote characters toggle quoting and are kept in the emitted token;
/// callers strip them with [`trim_quotes`] where the layer matters. A
/// newline or carriage return cancels an open quote, so an unbalanced quote
/// cannot leak across lines. Consecutive delimiters produce no empty tokens.
pub fn split_quoted(line: &str, delimiter: char, honor_quotes: bool) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut within_word = false;
    let mut within_quote = false;
    for ch in line.chars() {
        if honor_quotes && (ch == '"' || ch == '\'') {
            within_quote = !within_quote;
        } else if ch == '\n' || ch == '\r' {
            within_quote = false;
        }
        if ch == delimiter && !within_quote {
            within_word = false;
            continue;
        }
        if !within_word {
            within_word = true;
            tokens.push(String::new());
        }
        tokens.last_mut().unwrap().push(ch);
    }
    tokens
}

/// Strips one matching pair of surrounding quotes from a token.
///
/// Only a matched pair is removed: atom names such as `O5'` carry a bare
/// trailing apostrophe that is part of the name, not a quote layer.
pub fn trim_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &token[1..token.len() - 1]
    } else {
        token
    }
}
