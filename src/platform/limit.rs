//! Textual OFFSET/FETCH pagination rewriter
//!
//! SQL Server has no LIMIT clause; a SELECT gets a row window by appending
//! `OFFSET n ROWS FETCH NEXT m ROWS ONLY`, and that clause is only legal
//! after an ORDER BY. The input is raw SQL text, not an AST: the contract is
//! that every byte of the original statement survives untouched, with the
//! pagination clause (and, when needed, a synthesized ordering) appended.
//!
//! Recognized boundary tokens are deliberately narrow: `ORDER BY` found at
//! balanced parenthesis depth counts as the statement's outer ordering;
//! anything inside parentheses belongs to a sub-select and is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

static ORDER_BY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+order\s+by\s").expect("static regex"));

/// Rewrites `query` to return at most `limit` rows starting at `offset`.
pub(crate) fn modify_limit_query(query: &str, limit: u64, offset: u64) -> String {
    let mut sql = query.to_string();

    // OFFSET ... FETCH requires an ORDER BY; synthesize a stable no-op
    // ordering when the statement has none of its own.
    if !has_outer_order_by(query) {
        if is_single_column_select(query) {
            // Ordering by ordinal position keeps DISTINCT projections legal.
            sql.push_str(" ORDER BY 1");
        } else {
            sql.push_str(" ORDER BY (SELECT 0)");
        }
    }

    sql.push_str(&format!(
        " OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY"
    ));
    sql
}

/// Whether the statement already ends in an outer ORDER BY clause.
///
/// Scans all `ORDER BY` occurrences from the end of the string backwards. An
/// occurrence is the outer clause when the parentheses from it to the end of
/// the statement are balanced; an excess of closers means the clause sits
/// inside a sub-select.
fn has_outer_order_by(query: &str) -> bool {
    let starts: Vec<usize> = ORDER_BY.find_iter(query).map(|m| m.start()).collect();
    for start in starts.into_iter().rev() {
        let tail = &query[start..];
        let open = tail.bytes().filter(|&b| b == b'(').count();
        let close = tail.bytes().filter(|&b| b == b')').count();
        if open == close {
            return true;
        }
    }
    false
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'#' | b'@')
}

/// Strips a leading keyword plus trailing whitespace, case-insensitively.
fn strip_keyword<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let prefix = s.get(..keyword.len())?;
    if !prefix.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &s[keyword.len()..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    Some(rest.trim_start())
}

/// Byte position of the outermost `FROM` keyword, skipping parenthesized
/// sub-selects and single-quoted literals.
fn top_level_from(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'\'' => {
                // Skip the literal, honoring '' escapes.
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == b'\'' {
                        if bytes.get(i + 1) == Some(&b'\'') {
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
            }
            b'F' | b'f' if depth == 0 => {
                let boundary_before = i == 0 || !is_ident_byte(bytes[i - 1]);
                let is_from = bytes[i..].len() >= 4
                    && s[i..i + 4].eq_ignore_ascii_case("FROM")
                    && bytes.get(i + 4).map_or(true, |&b| !is_ident_byte(b));
                if boundary_before && is_from {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Whether the outermost select list is a single bare (possibly qualified)
/// column reference, making `ORDER BY 1` a valid stable ordering.
fn is_single_column_select(query: &str) -> bool {
    static BARE_COLUMN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*(\.[A-Za-z_][A-Za-z0-9_$]*)*$")
            .expect("static regex")
    });

    let Some(rest) = strip_keyword(query.trim_start(), "SELECT") else {
        return false;
    };
    let rest = strip_keyword(rest, "DISTINCT")
        .or_else(|| strip_keyword(rest, "ALL"))
        .unwrap_or(rest);
    let Some(from) = top_level_from(rest) else {
        return false;
    };
    BARE_COLUMN.is_match(rest[..from].trim())
}
