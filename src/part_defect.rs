use std::fmt::{self, Display, Formatter};

/// Why a single part was dropped during decoding.
///
/// A defective part is skipped on its own; the surrounding parts still decode.
/// These reasons are reported through `tracing` only and never surface as
/// errors to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartDefect {
    /// The part has no blank-line separator between its header block and its
    /// body block.
    MissingBlankLine,
    /// The part headers carry no non-empty `name` parameter.
    MissingName,
}

impl Display for PartDefect {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            PartDefect::MissingBlankLine => {
                f.write_str("the part has no header/body separator")
            },
            PartDefect::MissingName => f.write_str("the part headers have no `name` parameter"),
        }
    }
}
