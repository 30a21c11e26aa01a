use smol_str::SmolStr;
use stdx::{impl_display, pretty};
use text_size::TextRange;

use crate::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    UnexpectedToken { expected: pretty::List<Vec<SyntaxKind>>, found: SyntaxKind, range: TextRange },
    UnknownFunction { name: SmolStr, range: TextRange },
    /// The literal does not fit into 64 bits.
    IntegerOverflow { range: TextRange },
    /// An event default (`= time`) on an event that is not marked with `?`.
    DefaultOutsideExistential { range: TextRange },
    NestingTooDeep { limit: u32, range: TextRange },
}

impl SyntaxError {
    pub fn range(&self) -> TextRange {
        match *self {
            SyntaxError::UnexpectedToken { range, .. }
            | SyntaxError::UnknownFunction { range, .. }
            | SyntaxError::IntegerOverflow { range }
            | SyntaxError::DefaultOutsideExistential { range }
            | SyntaxError::NestingTooDeep { range, .. } => range,
        }
    }
}

impl_display! {
    match SyntaxError {
        SyntaxError::UnexpectedToken { expected, found, .. } => "expected {}, found {}", expected, found;
        SyntaxError::UnknownFunction { name, .. } => "unknown function `{}`; expected one of pow2, log2, sin_bits, cos_bits or bit_rev", name;
        SyntaxError::IntegerOverflow { .. } => "integer literal is too large";
        SyntaxError::DefaultOutsideExistential { .. } => "only existential events (`?'E`) may have a default";
        SyntaxError::NestingTooDeep { limit, .. } => "nesting exceeds the maximum depth of {}", limit;
    }
}
