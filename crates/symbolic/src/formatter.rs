//! Prefix text rendering of symbolic nodes.
//!
//! Literals print as `<KIND>VAR(<id>)`, constants carry a kind suffix
//! (`5`, `5L`, `5.0f`, `5.0d`) and operators are `(op lhs rhs)`.

use std::fmt;

use crate::literal::SymLiteral;
use crate::node::{
    ArithOp, BitOp, BoolOp, CmpOp, IntShift, LongShift, MathFn, MathFn2, NumPair, Sym, SymBool,
    SymDouble, SymFloat, SymInt, SymLong, SymNumber,
};
use crate::kind::Kind;
use crate::path_condition::PathCondition;

fn fmt_binop(
    op: &str,
    lhs: &dyn fmt::Display,
    rhs: &dyn fmt::Display,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "({op} {lhs} {rhs})")
}

fn fmt_unop(op: &str, arg: &dyn fmt::Display, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({op} {arg})")
}

fn lit_prefix(kind: Kind) -> &'static str {
    match kind {
        Kind::Bool => "BVAR",
        Kind::Int => "IVAR",
        Kind::Long => "LVAR",
        Kind::Float => "FVAR",
        Kind::Double => "DVAR",
    }
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
        }
    }
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Ge => ">=",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Lt => "<",
        }
    }
}

impl BoolOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BoolOp::And => "and",
            BoolOp::Or => "or",
            BoolOp::Xor => "xor",
        }
    }
}

impl BitOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BitOp::And => "&",
            BitOp::Or => "|",
            BitOp::Xor => "^",
        }
    }
}

impl IntShift {
    pub fn symbol(self) -> &'static str {
        match self {
            IntShift::Shl => "<<",
            IntShift::Shr => ">>",
            IntShift::UShr => ">>>",
        }
    }
}

impl LongShift {
    pub fn symbol(self) -> &'static str {
        match self {
            LongShift::Shl => "<<",
            LongShift::Shr => ">>",
        }
    }
}

impl MathFn {
    pub fn name(self) -> &'static str {
        match self {
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Asin => "asin",
            MathFn::Acos => "acos",
            MathFn::Atan => "atan",
            MathFn::Exp => "exp",
            MathFn::Log => "log",
            MathFn::Log10 => "log10",
            MathFn::Sqrt => "sqrt",
            MathFn::Round => "round",
        }
    }
}

impl MathFn2 {
    pub fn name(self) -> &'static str {
        match self {
            MathFn2::Atan2 => "atan2",
            MathFn2::Pow => "pow",
        }
    }
}

impl fmt::Display for SymBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymBool::Const(b) => write!(f, "{b}"),
            SymBool::Lit(id) => write!(f, "BVAR({id})"),
            SymBool::Not(inner) => fmt_unop("not", inner, f),
            SymBool::Logic(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymBool::Cmp(op, pair) => match pair.as_ref() {
                NumPair::Int(l, r) => fmt_binop(op.symbol(), l, r, f),
                NumPair::Long(l, r) => fmt_binop(op.symbol(), l, r, f),
                NumPair::Float(l, r) => fmt_binop(op.symbol(), l, r, f),
                NumPair::Double(l, r) => fmt_binop(op.symbol(), l, r, f),
            },
        }
    }
}

impl fmt::Display for SymInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymInt::Const(v) => write!(f, "{v}"),
            SymInt::Lit(id) => write!(f, "IVAR({id})"),
            SymInt::Arith(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymInt::Bit(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymInt::Shift(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymInt::AsInt(inner) => fmt_unop("as-int", inner, f),
        }
    }
}

impl fmt::Display for SymLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymLong::Const(v) => write!(f, "{v}L"),
            SymLong::Lit(id) => write!(f, "LVAR({id})"),
            SymLong::Arith(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymLong::Bit(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymLong::Shift(op, l, r) => fmt_binop(op.symbol(), l, r, f),
        }
    }
}

impl fmt::Display for SymFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymFloat::Const(v) => write!(f, "{v:?}f"),
            SymFloat::Lit(id) => write!(f, "FVAR({id})"),
            SymFloat::Arith(op, l, r) => fmt_binop(op.symbol(), l, r, f),
        }
    }
}

impl fmt::Display for SymDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymDouble::Const(v) => write!(f, "{v:?}d"),
            SymDouble::Lit(id) => write!(f, "DVAR({id})"),
            SymDouble::Arith(op, l, r) => fmt_binop(op.symbol(), l, r, f),
            SymDouble::AsDouble(inner) => fmt_unop("as-double", inner, f),
            SymDouble::Apply(func, arg) => fmt_unop(func.name(), arg, f),
            SymDouble::Apply2(func, a, b) => fmt_binop(func.name(), a, b, f),
        }
    }
}

impl fmt::Display for SymNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymNumber::Int(n) => write!(f, "{n}"),
            SymNumber::Long(n) => write!(f, "{n}"),
            SymNumber::Float(n) => write!(f, "{n}"),
            SymNumber::Double(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sym::Bool(b) => write!(f, "{b}"),
            Sym::Num(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for SymLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", lit_prefix(self.kind()), self.id)
    }
}

/// Constraints joined by ` ; `.
impl fmt::Display for PathCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.constraints().iter().enumerate() {
            if i > 0 {
                write!(f, " ; ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::LiteralId;
    use crate::value::SymValue;

    #[test]
    fn constants_carry_kind_suffix() {
        assert_eq!(SymInt::Const(-3).to_string(), "-3");
        assert_eq!(SymLong::Const(7).to_string(), "7L");
        assert_eq!(SymFloat::Const(2.0).to_string(), "2.0f");
        assert_eq!(SymDouble::Const(2.5).to_string(), "2.5d");
    }

    #[test]
    fn comparison_with_conversion() {
        let node = NumPair::Double(
            SymDouble::AsDouble(Box::new(SymNumber::Int(SymInt::Lit(LiteralId(0))))),
            SymDouble::Const(2.5),
        )
        .compare(CmpOp::Eq);
        assert_eq!(node.to_string(), "(== (as-double IVAR(0)) 2.5d)");
    }

    #[test]
    fn functions_and_connectives() {
        let sin = SymDouble::Apply(MathFn::Sin, Box::new(SymDouble::Lit(LiteralId(1))));
        let pow = SymDouble::Apply2(
            MathFn2::Pow,
            Box::new(sin),
            Box::new(SymDouble::Const(2.0)),
        );
        assert_eq!(pow.to_string(), "(pow (sin DVAR(1)) 2.0d)");

        let b = SymBool::logic(BoolOp::Xor, SymBool::Const(true), SymBool::Lit(LiteralId(2)).negate());
        assert_eq!(b.to_string(), "(xor true (not BVAR(2)))");
    }

    #[test]
    fn literal_display() {
        let lit = SymLiteral {
            id: LiteralId(4),
            seed: SymValue::Float(0.0),
        };
        assert_eq!(lit.to_string(), "FVAR(4)");
    }

    #[test]
    fn path_condition_joins_constraints() {
        let pc = PathCondition::with_constraints(vec![SymBool::Const(true), SymBool::Const(false)]);
        assert_eq!(pc.to_string(), "true ; false");
    }
}
