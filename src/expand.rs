//! Pattern expansion mini-language.
//!
//! A pattern denotes a list of concrete strings. `[a-b]` stands for the
//! inclusive integer range a..b (descending when a > b) and `{x,y,...}` for a
//! literal choice; multiple placeholders compose via cross product with the
//! leftmost varying slowest:
//!
//! ```
//! # use ndl::expand;
//! assert_eq!(expand("C[1-3]{x,z}").unwrap(),
//!            ["C1x", "C1z", "C2x", "C2z", "C3x", "C3z"]);
//! ```

use crate::error::ExpandError;

mod lexer;

use lexer::{Delim, DelimIter, DelimKind};

/// Expand `pattern` into the list of all concrete strings it denotes.
///
/// A pattern without placeholders (including the empty pattern) expands to
/// itself as a singleton.
pub fn expand(pattern: &str) -> Result<Vec<String>, ExpandError> {
    let mut expanded = vec![pattern.to_owned()];

    // Rewrite the first placeholder of every string until a full pass changes
    // nothing.
    loop {
        let mut next = Vec::with_capacity(expanded.len());
        let mut changed = false;
        for item in &expanded {
            match expand_first(item, pattern)? {
                Some(alternatives) => {
                    changed = true;
                    next.extend(alternatives);
                }
                None => next.push(item.clone()),
            }
        }
        if !changed {
            break;
        }
        expanded = next;
    }

    // A lone or mismatched delimiter survives every rewrite pass and is only
    // detectable here.
    if expanded
        .iter()
        .any(|s| s.contains(|c| matches!(c, '[' | ']' | '{' | '}')))
    {
        return Err(ExpandError::Unbalanced(pattern.to_owned()));
    }

    Ok(expanded)
}

/// Resolve only the first placeholder of `item`: the first opening delimiter
/// and the nearest closing delimiter after it, of either kind. Returns `None`
/// when there is nothing to rewrite (no placeholder, or an open/close pair of
/// different kinds, which the caller reports as unbalanced).
///
/// `pattern` is the original input, used for error reporting.
fn expand_first(item: &str, pattern: &str) -> Result<Option<Vec<String>>, ExpandError> {
    let mut delims = DelimIter::new(item);
    let Some(open) = delims.find(Delim::is_open) else {
        return Ok(None);
    };
    let Some(close) = delims.find(Delim::is_close) else {
        return Ok(None);
    };

    let body = &item[open.span.end..close.span.start];
    let prefix = &item[..open.span.start];
    let suffix = &item[close.span.end..];

    match (open.kind, close.kind) {
        (DelimKind::OpenBracket, DelimKind::CloseBracket) => {
            let (start, end) =
                parse_range(body).ok_or_else(|| ExpandError::BadContent(pattern.to_owned()))?;
            let nums: Vec<u64> = if start <= end {
                (start..=end).collect()
            } else {
                (end..=start).rev().collect()
            };
            Ok(Some(
                nums.iter()
                    .map(|n| format!("{prefix}{n}{suffix}"))
                    .collect(),
            ))
        }
        (DelimKind::OpenBrace, DelimKind::CloseBrace) => Ok(Some(
            body.split(',')
                .map(|alt| format!("{prefix}{alt}{suffix}"))
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Parse a range body: two non-negative decimal integers joined by a dash.
fn parse_range(body: &str) -> Option<(u64, u64)> {
    let (start, end) = body.split_once('-')?;
    Some((parse_num(start)?, parse_num(end)?))
}

fn parse_num(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn check(pattern: &str, expected: &[&str]) {
        assert_eq!(expand(pattern).unwrap(), expected);
    }

    #[test]
    fn empty_pattern_is_a_single_empty_string() {
        check("", &[""]);
    }

    #[test]
    fn plain_pattern_is_identity() {
        check("foo", &["foo"]);
    }

    #[rstest]
    #[case("A[1-1]", &["A1"])]
    #[case("A[1-2]", &["A1", "A2"])]
    #[case("A[2-1]", &["A2", "A1"])]
    #[case("[0-3]", &["0", "1", "2", "3"])]
    fn single_range(#[case] pattern: &str, #[case] expected: &[&str]) {
        check(pattern, expected);
    }

    #[rstest]
    #[case("A[0-1][2-3]", &["A02", "A03", "A12", "A13"])]
    #[case("A[0-1][2-3][4-5]", &["A024", "A025", "A034", "A035", "A124", "A125", "A134", "A135"])]
    fn multiple_ranges(#[case] pattern: &str, #[case] expected: &[&str]) {
        check(pattern, expected);
    }

    #[rstest]
    #[case("A{}", &["A"])]
    #[case("A{1}", &["A1"])]
    #[case("A{asd}", &["Aasd"])]
    #[case("A{+,-}", &["A+", "A-"])]
    #[case("A{x,zz}", &["Ax", "Azz"])]
    #[case("A{x,zz,}", &["Ax", "Azz", "A"])]
    fn single_choice(#[case] pattern: &str, #[case] expected: &[&str]) {
        check(pattern, expected);
    }

    #[rstest]
    #[case("A{a,b}{c,d}", &["Aac", "Aad", "Abc", "Abd"])]
    #[case("A{a,b}{c,d}{e,f}", &["Aace", "Aacf", "Aade", "Aadf", "Abce", "Abcf", "Abde", "Abdf"])]
    fn multiple_choices(#[case] pattern: &str, #[case] expected: &[&str]) {
        check(pattern, expected);
    }

    #[rstest]
    #[case("C[1-3]{x,z}", &["C1x", "C1z", "C2x", "C2z", "C3x", "C3z"])]
    #[case("A{a,b}[0-1]", &["Aa0", "Aa1", "Ab0", "Ab1"])]
    #[case("A[0-1]{a,b}", &["A0a", "A0b", "A1a", "A1b"])]
    fn mixed_placeholders(#[case] pattern: &str, #[case] expected: &[&str]) {
        check(pattern, expected);
    }

    #[rstest]
    #[case("[1-2")]
    #[case("1-2]")]
    #[case("[1-2}")]
    #[case("{")]
    #[case("}")]
    #[case("{]")]
    #[case("A{a[b}")]
    fn unbalanced_delimiters(#[case] pattern: &str) {
        assert_eq!(
            expand(pattern),
            Err(ExpandError::Unbalanced(pattern.to_owned()))
        );
    }

    #[rstest]
    #[case("[]")]
    #[case("[-]")]
    #[case("[1-x]")]
    #[case("[1-1x]")]
    #[case("[+1-2]")]
    #[case("A[0-1][2-x]")]
    fn bad_range_body(#[case] pattern: &str) {
        assert_eq!(
            expand(pattern),
            Err(ExpandError::BadContent(pattern.to_owned()))
        );
    }

    #[test]
    fn unbalanced_error_names_the_pattern() {
        let err = expand("B[0-1").unwrap_err();
        assert_eq!(err.to_string(), "unbalanced [...] or {...}: `B[0-1`");
    }

    #[test]
    fn bad_content_error_names_the_pattern() {
        let err = expand("[1-x]").unwrap_err();
        assert_eq!(err.to_string(), "bad content: `[1-x]`");
    }

    #[test]
    fn expansion_is_idempotent_on_its_results() {
        for item in expand("C[1-3]{x,z}").unwrap() {
            assert_eq!(expand(&item).unwrap(), vec![item.clone()]);
        }
    }

    #[test]
    fn descending_range_with_choices() {
        check("OUT[2-0]{,n}", &["OUT2", "OUT2n", "OUT1", "OUT1n", "OUT0", "OUT0n"]);
    }
}
