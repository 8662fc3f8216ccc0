use thiserror::Error;

/// Pattern expansion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The fully-rewritten result still contains a `[` `]` `{` or `}`.
    #[error("unbalanced [...] or {{...}}: `{0}`")]
    Unbalanced(String),
    /// A `[...]` body that is not two non-negative integers joined by a dash.
    #[error("bad content: `{0}`")]
    BadContent(String),
}

/// Netlist description parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing initial section header")]
    MissingSectionHeader { line: usize },
    #[error("line {line}: unknown section `{name}`")]
    UnknownSection { name: String, line: usize },
    #[error("line {line}: pin definition outside a part declaration")]
    PinWithoutPart { line: usize },
    #[error("line {line}: malformed pin definition `{text}`")]
    MalformedPinDef { line: usize, text: String },
    #[error("line {line}: pin/name count mismatch for part(s) {parts}: `{text}`")]
    PinCountMismatch {
        parts: String,
        line: usize,
        text: String,
    },
    #[error("line {line}: malformed component definition `{text}`")]
    MalformedComponentDef { line: usize, text: String },
    #[error("line {line}: unknown part `{name}`")]
    UnknownPart { name: String, line: usize },
    #[error("line {line}: duplicate component `{name}`")]
    DuplicateComponent { name: String, line: usize },
    #[error("line {line}: unknown component `{name}`")]
    UnknownComponent { name: String, line: usize },
    #[error("line {line}: part `{part}` has no pin named `{pin}`")]
    UnknownPin {
        part: String,
        pin: String,
        line: usize,
    },
    #[error("line {line}: net pattern `{net}` expands to {names} names but {terms} terminals")]
    NetTermMismatch {
        net: String,
        names: usize,
        terms: usize,
        line: usize,
    },
    #[error("line {line}: terminal `{term}` is not of the form component/pin-name")]
    MalformedTerm { term: String, line: usize },
    #[error("expansion failed: {0}")]
    Expand(#[from] ExpandError),
}
