use std::fmt;

use stdx::impl_display;
use text_size::TextRange;

use crate::Name;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
    If { cond: Box<ExprCmp>, then_val: Box<Expr>, else_val: Box<Expr> },
    Call { func: Builtin, args: Vec<Expr> },
    Paren(Box<Expr>),
    Literal(IntLit),
    /// `Comp::#W`
    Scoped { scope: Name, name: Name },
    Param(Name),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Left and right binding power. All operators are left associative.
    pub fn binding_power(self) -> (u8, u8) {
        match self {
            BinaryOp::Add | BinaryOp::Sub => (2, 3),
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => (4, 5),
        }
    }
}

impl_display! {
    match BinaryOp {
        BinaryOp::Add => "+";
        BinaryOp::Sub => "-";
        BinaryOp::Mul => "*";
        BinaryOp::Div => "/";
        BinaryOp::Rem => "%";
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Pow2,
    Log2,
    SinBits,
    CosBits,
    BitRev,
}

impl Builtin {
    pub const ALL: [Builtin; 5] =
        [Builtin::Pow2, Builtin::Log2, Builtin::SinBits, Builtin::CosBits, Builtin::BitRev];

    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Pow2 => "pow2",
            Builtin::Log2 => "log2",
            Builtin::SinBits => "sin_bits",
            Builtin::CosBits => "cos_bits",
            Builtin::BitRev => "bit_rev",
        }
    }
}

impl_display! {
    match Builtin {
        builtin => "{}", builtin.name();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl Radix {
    pub fn from_char(c: char) -> Option<Radix> {
        let radix = match c {
            'b' => Radix::Bin,
            'o' => Radix::Oct,
            'd' => Radix::Dec,
            'x' => Radix::Hex,
            _ => return None,
        };
        Some(radix)
    }

    pub fn base(self) -> u32 {
        match self {
            Radix::Bin => 2,
            Radix::Oct => 8,
            Radix::Dec => 10,
            Radix::Hex => 16,
        }
    }
}

/// An integer literal. `sized` holds the width and radix of literals like `8'hff`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntLit {
    pub value: u64,
    pub sized: Option<(u64, Radix)>,
}

impl fmt::Display for IntLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;
        match self.sized {
            None => write!(f, "{value}"),
            Some((width, Radix::Bin)) => write!(f, "{width}'b{value:b}"),
            Some((width, Radix::Oct)) => write!(f, "{width}'o{value:o}"),
            Some((width, Radix::Dec)) => write!(f, "{width}'d{value}"),
            Some((width, Radix::Hex)) => write!(f, "{width}'x{value:x}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
}

impl_display! {
    match OrderOp {
        OrderOp::Gt => ">";
        OrderOp::Gte => ">=";
        OrderOp::Lt => "<";
        OrderOp::Lte => "<=";
        OrderOp::Eq => "==";
    }
}

/// `lhs op rhs` where both sides are expressions or both sides are times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderConstraint<T> {
    pub lhs: T,
    pub op: OrderOp,
    pub rhs: T,
    pub range: TextRange,
}

pub type ExprCmp = OrderConstraint<Expr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    Expr(OrderConstraint<Expr>),
    Time(OrderConstraint<Time>),
}

impl Constraint {
    pub fn range(&self) -> TextRange {
        match self {
            Constraint::Expr(cons) => cons.range,
            Constraint::Time(cons) => cons.range,
        }
    }
}

/// A scheduling instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Time {
    pub kind: TimeKind,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeKind {
    /// `'G`
    Event(Name),
    /// `'G + e`
    EventPlus(Name, Expr),
    /// `e + 'G`
    PlusEvent(Expr, Name),
    /// `e`
    Expr(Expr),
}

impl Time {
    pub fn event(&self) -> Option<&Name> {
        match &self.kind {
            TimeKind::Event(event) | TimeKind::EventPlus(event, _) | TimeKind::PlusEvent(_, event) => {
                Some(event)
            }
            TimeKind::Expr(_) => None,
        }
    }

    pub fn offset(&self) -> Option<&Expr> {
        match &self.kind {
            TimeKind::Event(_) => None,
            TimeKind::EventPlus(_, offset)
            | TimeKind::PlusEvent(offset, _)
            | TimeKind::Expr(offset) => Some(offset),
        }
    }

    pub fn into_expr(self) -> Result<Expr, Time> {
        match self.kind {
            TimeKind::Expr(expr) => Ok(expr),
            kind => Err(Time { kind, range: self.range }),
        }
    }
}

/// `[start, end]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalRange {
    pub start: Time,
    pub end: Time,
    pub range: TextRange,
}
