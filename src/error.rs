use thiserror::Error;

/// The error type for the ascii2svg crate.
///
/// `ascii_to_svg` never returns an `Err` of this type for well-formed UTF-8
/// input: the pipeline is total by design, and malformed sub-components (a
/// bad `[N]: {json}` blob, an unparseable fill color) degrade silently
/// rather than propagate. This type exists for the internal pipeline
/// stages' own fallible control flow, and so lower-level stages exposed for
/// testing have somewhere to report a real bug if one is ever hit.
#[derive(Error, Debug)]
pub enum AsciiSvgError {
    /// A `[N]: {json}` command-table entry could not be parsed as JSON.
    #[error("command table entry {0} is not valid JSON: {1}")]
    CommandTable(String, String),

    /// A traversal (WallFollower or LineWalker) exceeded the configured
    /// recursion ceiling. Treated like an unclosed candidate: the caller
    /// abandons just that object, not the whole conversion.
    #[error("traversal exceeded max depth of {0} cells")]
    TraversalDepthExceeded(usize),

    /// An internal invariant was violated; indicates a bug in the pipeline
    /// rather than a property of the input.
    #[error("internal error: {0}")]
    Internal(String),
}
