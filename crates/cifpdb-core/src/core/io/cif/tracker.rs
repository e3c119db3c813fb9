//! Category/loop parse state and logical-row completion.
//!
//! mmCIF interleaves three things the scanner must track: whether it is
//! inside a `loop_` (shared column schema, many rows), which category's
//! columns are currently declared, and `;`-delimited multi-line text values
//! that count as a single token. A line consisting solely of `#` ends the
//! current data block, at which point every per-category dictionary must be
//! forgotten so a later same-named category starts fresh instead of
//! inheriting stale column positions.

use super::fields::{AtomSiteDict, ColumnDict};
use super::line::split_quoted;
use super::{CifError, CifParseErrorKind};

/// All parse state scoped to one `#`-delimited block.
///
/// Constructed fresh on every block boundary; nothing is cleared in place.
#[derive(Debug, Default)]
pub struct ParserState {
    pub in_loop: bool,
    pub atom_site: AtomSiteDict,
    pub cell: ColumnDict,
    pub symmetry: ColumnDict,
    pub struct_keywords: ColumnDict,
    pub citation: ColumnDict,
    pub citation_author: ColumnDict,
    pub audit_author: ColumnDict,
    pub entity_poly: ColumnDict,
    pub entity_poly_seq: ColumnDict,
    pub database_status: ColumnDict,
    pub revision_history: ColumnDict,
    pub fract_transf: ColumnDict,
}

/// Extends `tokens` with values from continuation lines until it holds
/// `want` tokens, advancing `cursor` over the consumed lines.
///
/// A continuation line starting with `;` opens a multi-line text value: the
/// text after each `;` marker and every intervening line is concatenated
/// verbatim (internal whitespace preserved) into one token, terminated by a
/// line that is a bare `;`. Any other continuation line contributes its
/// whitespace/quote-delimited tokens. Reaching end of input mid-row is an
/// unrecoverable parse error.
pub fn complete_row(
    lines: &[String],
    cursor: &mut usize,
    tokens: &mut Vec<String>,
    want: usize,
    category: &'static str,
) -> Result<(), CifError> {
    while tokens.len() < want {
        *cursor += 1;
        let Some(line) = lines.get(*cursor) else {
            return Err(CifError::Parse {
                line: *cursor,
                kind: CifParseErrorKind::UnterminatedRow {
                    category,
                    have: tokens.len(),
                    want,
                },
            });
        };
        if let Some(opening) = line.strip_prefix(';') {
            let mut text = opening.to_string();
            loop {
                *cursor += 1;
                let Some(next) = lines.get(*cursor) else {
                    return Err(CifError::Parse {
                        line: *cursor,
                        kind: CifParseErrorKind::UnterminatedText,
                    });
                };
                match next.strip_prefix(';') {
                    Some(_) if next.trim() == ";" => break,
                    Some(rest) => text.push_str(rest),
                    None => text.push_str(next),
                }
            }
            tokens.push(text);
        } else {
            tokens.extend(split_quoted(line, ' ', true));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn short_rows_consume_plain_continuation_lines() {
        let input = lines(&["primary 'Acta Cryst.'", "12 1987"]);
        let mut cursor = 0;
        let mut tokens = split_quoted(&input[0], ' ', true);
        complete_row(&input, &mut cursor, &mut tokens, 4, "_citation").unwrap();
        assert_eq!(cursor, 1);
        assert_eq!(tokens, vec!["primary", "'Acta Cryst.'", "12", "1987"]);
    }

    #[test]
    fn semicolon_blocks_become_one_verbatim_token() {
        let input = lines(&[
            "primary",
            ";A very long title",
            "  split over lines",
            ";",
            "1999",
        ]);
        let mut cursor = 0;
        let mut tokens = split_quoted(&input[0], ' ', true);
        complete_row(&input, &mut cursor, &mut tokens, 3, "_citation").unwrap();
        assert_eq!(tokens[1], "A very long title  split over lines");
        assert_eq!(tokens[2], "1999");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn end_of_file_mid_row_is_a_parse_error() {
        let input = lines(&["primary"]);
        let mut cursor = 0;
        let mut tokens = split_quoted(&input[0], ' ', true);
        let err = complete_row(&input, &mut cursor, &mut tokens, 3, "_citation").unwrap_err();
        assert!(matches!(
            err,
            CifError::Parse {
                kind: CifParseErrorKind::UnterminatedRow { have: 1, want: 3, .. },
                ..
            }
        ));
    }

    #[test]
    fn unclosed_text_field_is_a_parse_error() {
        let input = lines(&["primary", ";never closed", "still going"]);
        let mut cursor = 0;
        let mut tokens = split_quoted(&input[0], ' ', true);
        let err = complete_row(&input, &mut cursor, &mut tokens, 2, "_citation").unwrap_err();
        assert!(matches!(
            err,
            CifError::Parse {
                kind: CifParseErrorKind::UnterminatedText,
                ..
            }
        ));
    }

    #[test]
    fn fresh_state_has_no_declared_categories() {
        let state = ParserState::default();
        assert!(!state.in_loop);
        assert!(state.atom_site.is_empty());
        assert!(state.citation.is_empty());
    }
}
