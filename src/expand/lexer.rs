use logos::{Logos, SpannedIter};

pub(super) struct Delim {
    pub(super) kind: DelimKind,
    pub(super) span: logos::Span,
}

impl Delim {
    pub(super) fn is_open(&self) -> bool {
        matches!(self.kind, DelimKind::OpenBracket | DelimKind::OpenBrace)
    }

    pub(super) fn is_close(&self) -> bool {
        matches!(self.kind, DelimKind::CloseBracket | DelimKind::CloseBrace)
    }
}

/// Iterator over the `[` `]` `{` `}` delimiters of a pattern, skipping all
/// other text.
pub(super) struct DelimIter<'a> {
    iter: SpannedIter<'a, DelimKind>,
}

impl<'a> DelimIter<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            iter: DelimKind::lexer(input).spanned(),
        }
    }
}

impl<'a> Iterator for DelimIter<'a> {
    type Item = Delim;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some((Ok(kind), span)) => Some(Delim { kind, span }),
            // The Text regex covers every non-delimiter character.
            Some((Err(()), _)) => unreachable!(),
            None => None,
        }
    }
}

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum DelimKind {
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[regex(r"[^\[\]{}]+", logos::skip)]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() {
        let input = "C[1-3]{x,z}";
        let it = DelimIter::new(input);

        let expected = vec![
            (DelimKind::OpenBracket, 1),
            (DelimKind::CloseBracket, 5),
            (DelimKind::OpenBrace, 6),
            (DelimKind::CloseBrace, 10),
        ];

        let result: Vec<_> = it.map(|d| (d.kind, d.span.start)).collect();

        assert_eq!(result, expected);
    }

    #[test]
    fn plain_text_yields_no_delimiters() {
        assert!(DelimIter::new("plain, text with-no placeholders").next().is_none());
    }
}
