//! Parser for injection-point citations: `- <path> (lines <spec>)`.
//!
//! A citation may sit anywhere in a line (nested list items are common), so
//! every `- ` occurrence is tried as a start until one matches. The `lines`
//! clause is tokenized into numbers, commas and dashes and then read with
//! the grammar `item ("," item)*`, `item := number ("-" number)?`.
//!
//! Lines whose clause contains anything besides digits, commas, dashes and
//! whitespace are not citations at all. Lines that have the right shape but
//! an unusable spec (reversed range, zero, empty item) are reported as
//! `CitationError` so the caller can surface them.

use crate::models::reference::{LineItem, LineSpec};
use thiserror::Error;

const CLAUSE_OPEN: &str = "(lines ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationError {
    #[error("empty item in line spec")]
    EmptyItem,
    #[error("unexpected '-' in line spec")]
    StrayDash,
    #[error("line numbers start at 1")]
    ZeroLine,
    #[error("range {start}-{end} ends before it starts")]
    ReversedRange { start: u32, end: u32 },
    #[error("line number '{0}' is too large")]
    TooLarge(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of matching one document line.
pub struct Citation {
    pub path: String,
    pub spec: Result<LineSpec, CitationError>,
}

/// Try to read a citation from a single line. Returns `None` for prose.
pub fn parse_citation(line: &str) -> Option<Citation> {
    for (dash, _) in line.match_indices("- ") {
        let rest = &line[dash + 2..];
        let Some(paren) = rest.find('(') else {
            // no clause after this dash, so none after any later dash either
            return None;
        };
        let raw_path = &rest[..paren];
        if raw_path.len() < 2 || !raw_path.ends_with(' ') {
            continue;
        }
        let Some(body) = clause_body(&rest[paren..]) else {
            continue;
        };
        let path = clean_path(&raw_path[..raw_path.len() - 1]);
        if path.is_empty() {
            continue;
        }
        return Some(Citation {
            path,
            spec: parse_line_spec(body),
        });
    }
    None
}

/// Body of `(lines <spec>)` when the clause is well-shaped.
fn clause_body(s: &str) -> Option<&str> {
    let after = s.strip_prefix(CLAUSE_OPEN)?;
    let len = after
        .find(|c: char| !is_spec_char(c))
        .unwrap_or(after.len());
    if len == 0 || !after[len..].starts_with(')') {
        return None;
    }
    Some(&after[..len])
}

fn is_spec_char(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '-' || c.is_whitespace()
}

fn clean_path(p: &str) -> String {
    p.trim().trim_matches('`').trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Comma,
    Dash,
}

fn tokenize(spec: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut chars = spec.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            ',' => out.push(Token::Comma),
            '-' => out.push(Token::Dash),
            d if d.is_ascii_digit() => {
                let mut end = i + 1;
                while let Some(&(j, n)) = chars.peek() {
                    if !n.is_ascii_digit() {
                        break;
                    }
                    end = j + 1;
                    chars.next();
                }
                out.push(Token::Number(&spec[i..end]));
            }
            _ => {}
        }
    }
    out
}

/// Parse the body of a `lines` clause, e.g. `1-20, 45, 50-60`.
pub fn parse_line_spec(spec: &str) -> Result<LineSpec, CitationError> {
    let tokens = tokenize(spec);
    let mut items = Vec::new();
    for group in tokens.split(|t| *t == Token::Comma) {
        items.push(parse_item(group)?);
    }
    Ok(LineSpec { items })
}

fn parse_item(tokens: &[Token<'_>]) -> Result<LineItem, CitationError> {
    match tokens {
        [] => Err(CitationError::EmptyItem),
        [Token::Number(n)] => Ok(LineItem::Single(line_number(n)?)),
        [Token::Number(a), Token::Dash, Token::Number(b)] => {
            let start = line_number(a)?;
            let end = line_number(b)?;
            if end < start {
                return Err(CitationError::ReversedRange { start, end });
            }
            Ok(LineItem::Range { start, end })
        }
        _ => Err(CitationError::StrayDash),
    }
}

fn line_number(digits: &str) -> Result<u32, CitationError> {
    let n: u32 = digits
        .parse()
        .map_err(|_| CitationError::TooLarge(digits.to_string()))?;
    if n == 0 {
        return Err(CitationError::ZeroLine);
    }
    Ok(n)
}
