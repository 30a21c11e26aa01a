use smol_str::SmolStr;
use text_size::TextRange;

use crate::{Command, Constraint, Expr, IntervalRange, Name, Time};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SourceFile {
    pub imports: Vec<Import>,
    pub items: Vec<Item>,
    pub range: TextRange,
}

/// A string literal. `value` has escapes resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrLit {
    pub value: String,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    pub path: StrLit,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Component(Component),
    External(External),
    Generate(Generate),
}

impl Item {
    pub fn range(&self) -> TextRange {
        match self {
            Item::Component(comp) => comp.range,
            Item::External(ext) => ext.range,
            Item::Generate(gen) => gen.range,
        }
    }

    pub fn signatures(&self) -> &[Signature] {
        match self {
            Item::Component(comp) => std::slice::from_ref(&comp.sig),
            Item::External(ext) => &ext.sigs,
            Item::Generate(gen) => &gen.sigs,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    pub sig: Signature,
    pub body: Vec<Command>,
    pub range: TextRange,
}

/// `extern "file.sv" { sigs }`
#[derive(Clone, Debug, PartialEq)]
pub struct External {
    pub path: StrLit,
    pub sigs: Vec<Signature>,
    pub range: TextRange,
}

/// `generate (tool) using "script" { sigs }`
#[derive(Clone, Debug, PartialEq)]
pub struct Generate {
    pub tool: Name,
    pub using: StrLit,
    pub sigs: Vec<Signature>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub attrs: Option<Attributes>,
    pub name: Name,
    pub params: Option<Params>,
    pub events: Option<AbstractVar>,
    pub io: Io,
    pub bindings: Option<SigBindings>,
    pub constraints: Option<Constraints>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attributes {
    pub binds: Vec<AttrBind>,
    pub range: TextRange,
}

/// Attributes keep their source order, duplicates are not rejected here.
#[derive(Clone, Debug, PartialEq)]
pub struct AttrBind {
    pub name: Name,
    pub value: AttrValue,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Flag,
    /// `not(name)`
    Negated,
    Int(u64),
    Float(FloatLit),
}

/// A float keeps its spelling so that it is printed exactly like it was written.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatLit {
    pub value: f64,
    pub text: SmolStr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub binds: Vec<ParamBind>,
    pub range: TextRange,
}

/// `#W` or `?#W = expr`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamBind {
    pub name: Name,
    pub default: Option<Expr>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbstractVar {
    pub binds: Vec<EventBind>,
    pub range: TextRange,
}

/// `'G: delay` or `?'G: delay = default`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventBind {
    pub existential: bool,
    pub event: Name,
    pub delay: Delay,
    pub default: Option<Time>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delay {
    Expr(Expr),
    /// `end - (start)`
    Diff { end: Time, start: Time },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Io {
    pub inputs: Vec<PortDef>,
    pub outputs: Vec<PortDef>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PortDef {
    /// `name: width`
    Scalar { name: Name, width: Expr, range: TextRange },
    Bundle(BundleDef),
    /// `name: interface['G]`
    Interface { name: Name, event: Name, range: TextRange },
}

impl PortDef {
    pub fn name(&self) -> &Name {
        match self {
            PortDef::Scalar { name, .. } | PortDef::Interface { name, .. } => name,
            PortDef::Bundle(bundle) => &bundle.name,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            PortDef::Scalar { range, .. } | PortDef::Interface { range, .. } => *range,
            PortDef::Bundle(bundle) => bundle.range,
        }
    }
}

/// `name[dims]: for<params> [start, end] width`
#[derive(Clone, Debug, PartialEq)]
pub struct BundleDef {
    pub attrs: Option<Attributes>,
    pub name: Name,
    pub dims: Vec<Expr>,
    pub typ: BundleType,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleType {
    pub params: Option<Vec<Name>>,
    pub liveness: IntervalRange,
    pub width: Expr,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigBindings {
    pub binds: Vec<SigBind>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SigBind {
    /// `let #x = expr;`
    Let { name: Name, value: Expr, range: TextRange },
    /// `some #x where ..;` or `opaque #x where ..;`
    Exists { opaque: bool, name: Name, constraints: Vec<Constraint>, range: TextRange },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraints {
    pub list: Vec<Constraint>,
    pub range: TextRange,
}
