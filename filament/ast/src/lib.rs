//! Typed syntax tree of filament source files.
//!
//! Every node records the [`TextRange`] it was parsed from. Nodes are plain data and are
//! never modified after the parser built them; [`SourceFile::dump`] turns a tree back into
//! canonical source text.

mod command;
mod expr;
mod items;
mod pretty;

#[cfg(test)]
mod tests;

use std::fmt;

use smol_str::SmolStr;
pub use text_size::{TextRange, TextSize};

pub use crate::command::{
    Access, AssignValue, Assignment, Command, Connect, Fact, FactKind, ForLoop, IfStmt,
    Implication, Instance, Invoke, LetValue, ParamLet, Port,
};
pub use crate::expr::{
    BinaryOp, Builtin, Constraint, Expr, ExprCmp, ExprKind, IntLit, IntervalRange,
    OrderConstraint, OrderOp, Radix, Time, TimeKind,
};
pub use crate::items::{
    AbstractVar, AttrBind, AttrValue, Attributes, BundleDef, BundleType, Component,
    Constraints, Delay, EventBind, External, FloatLit, Generate, Import, Io, Item, ParamBind,
    Params, PortDef, SigBind, SigBindings, Signature, SourceFile, StrLit,
};

/// An identifier as written in the source.
///
/// Parameter variables and events are stored without their `#` and `'` sigils.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    pub text: SmolStr,
    pub range: TextRange,
}

impl Name {
    pub fn new(text: impl Into<SmolStr>, range: TextRange) -> Name {
        Name { text: text.into(), range }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
