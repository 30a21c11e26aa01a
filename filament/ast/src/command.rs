use text_size::TextRange;

use crate::{BundleDef, Expr, ExprCmp, IntervalRange, Name, Time};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Bundle(BundleDef),
    Assign(Assignment),
    Connect(Connect),
    ForLoop(ForLoop),
    If(IfStmt),
    Fact(Fact),
    ParamLet(ParamLet),
}

impl Command {
    pub fn range(&self) -> TextRange {
        match self {
            Command::Bundle(bundle) => bundle.range,
            Command::Assign(assign) => assign.range,
            Command::Connect(connect) => connect.range,
            Command::ForLoop(for_loop) => for_loop.range,
            Command::If(if_stmt) => if_stmt.range,
            Command::Fact(fact) => fact.range,
            Command::ParamLet(param_let) => param_let.range,
        }
    }
}

/// `name := value;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub name: Name,
    pub value: AssignValue,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignValue {
    Instance(Instance),
    Invoke(Invoke),
    Exists(Expr),
}

/// `new Comp[params]<events>(args) in [live ranges]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub component: Name,
    pub params: Option<Vec<Expr>>,
    pub events: Option<Vec<Time>>,
    pub args: Option<Vec<Port>>,
    pub lives: Vec<IntervalRange>,
    pub range: TextRange,
}

/// `Comp<events>(args)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invoke {
    pub component: Name,
    pub events: Vec<Time>,
    pub args: Vec<Port>,
    pub range: TextRange,
}

/// `dst = src;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connect {
    pub dst: Port,
    pub src: Port,
    pub range: TextRange,
}

/// `inst.name{idx}{start..end}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Port {
    pub instance: Option<Name>,
    pub name: Name,
    pub accesses: Vec<Access>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Access {
    pub start: Expr,
    pub end: Option<Expr>,
    pub range: TextRange,
}

/// `for #i in start..end { body }`, `end` is exclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub var: Name,
    pub start: Expr,
    pub end: Expr,
    pub body: Vec<Command>,
    pub range: TextRange,
}

/// `else if` is stored as an else branch that contains exactly one `If` command.
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub cond: ExprCmp,
    pub then_branch: Vec<Command>,
    pub else_branch: Option<Vec<Command>>,
    pub range: TextRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FactKind {
    Assume,
    Assert,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub kind: FactKind,
    pub implication: Implication,
    pub range: TextRange,
}

/// `guard => cons`, or just `cons`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implication {
    pub guard: Option<ExprCmp>,
    pub cons: ExprCmp,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamLet {
    pub name: Name,
    pub value: LetValue,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LetValue {
    Expr(Expr),
    /// `?`, left for inference
    Hole(TextRange),
}
