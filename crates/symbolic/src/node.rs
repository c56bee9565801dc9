use crate::kind::Kind;
use crate::literal::LiteralId;

/// Arithmetic operator, available on every numeric kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Remainder with the sign of the dividend.
    Mod,
}

/// Numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
}

/// Boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    Xor,
}

/// Bitwise operator on integral kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOp {
    And,
    Or,
    Xor,
}

/// Shifts on 32-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntShift {
    Shl,
    /// Arithmetic (sign-propagating) right shift
    Shr,
    /// Logical (zero-filling) right shift
    UShr,
}

/// Shifts on 64-bit integers. The engine has no logical right shift here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongShift {
    Shl,
    Shr,
}

/// Unary transcendental functions over doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    /// Natural logarithm
    Log,
    Log10,
    Sqrt,
    Round,
}

/// Binary functions over doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFn2 {
    Atan2,
    Pow,
}

/// Boolean node.
#[derive(Debug, Clone, PartialEq)]
pub enum SymBool {
    Const(bool),
    Lit(LiteralId),
    Not(Box<SymBool>),
    Logic(BoolOp, Box<SymBool>, Box<SymBool>),
    Cmp(CmpOp, Box<NumPair>),
}

/// 32-bit integer node.
#[derive(Debug, Clone, PartialEq)]
pub enum SymInt {
    Const(i32),
    Lit(LiteralId),
    Arith(ArithOp, Box<SymInt>, Box<SymInt>),
    Bit(BitOp, Box<SymInt>, Box<SymInt>),
    Shift(IntShift, Box<SymInt>, Box<SymInt>),
    /// Conversion of any numeric node to int
    AsInt(Box<SymNumber>),
}

/// 64-bit integer node.
#[derive(Debug, Clone, PartialEq)]
pub enum SymLong {
    Const(i64),
    Lit(LiteralId),
    Arith(ArithOp, Box<SymLong>, Box<SymLong>),
    Bit(BitOp, Box<SymLong>, Box<SymLong>),
    Shift(LongShift, Box<SymLong>, Box<SymLong>),
}

/// 32-bit float node.
#[derive(Debug, Clone, PartialEq)]
pub enum SymFloat {
    Const(f32),
    Lit(LiteralId),
    Arith(ArithOp, Box<SymFloat>, Box<SymFloat>),
}

/// 64-bit float node.
#[derive(Debug, Clone, PartialEq)]
pub enum SymDouble {
    Const(f64),
    Lit(LiteralId),
    Arith(ArithOp, Box<SymDouble>, Box<SymDouble>),
    /// Conversion of any numeric node to double
    AsDouble(Box<SymNumber>),
    Apply(MathFn, Box<SymDouble>),
    Apply2(MathFn2, Box<SymDouble>, Box<SymDouble>),
}

/// Any numeric node.
#[derive(Debug, Clone, PartialEq)]
pub enum SymNumber {
    Int(SymInt),
    Long(SymLong),
    Float(SymFloat),
    Double(SymDouble),
}

/// Two operands already of one common kind.
///
/// Binary numeric operators only accept this shape, so a mixed-kind
/// operation cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum NumPair {
    Int(SymInt, SymInt),
    Long(SymLong, SymLong),
    Float(SymFloat, SymFloat),
    Double(SymDouble, SymDouble),
}

/// Any symbolic node.
#[derive(Debug, Clone, PartialEq)]
pub enum Sym {
    Bool(SymBool),
    Num(SymNumber),
}

impl SymBool {
    pub fn negate(self) -> SymBool {
        SymBool::Not(Box::new(self))
    }

    pub fn logic(op: BoolOp, lhs: SymBool, rhs: SymBool) -> SymBool {
        SymBool::Logic(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: SymBool, rhs: SymBool) -> SymBool {
        Self::logic(BoolOp::And, lhs, rhs)
    }
}

impl SymNumber {
    pub fn kind(&self) -> Kind {
        match self {
            SymNumber::Int(_) => Kind::Int,
            SymNumber::Long(_) => Kind::Long,
            SymNumber::Float(_) => Kind::Float,
            SymNumber::Double(_) => Kind::Double,
        }
    }

    /// Explicit conversion to int; identity on ints.
    pub fn into_int(self) -> SymInt {
        match self {
            SymNumber::Int(i) => i,
            other => SymInt::AsInt(Box::new(other)),
        }
    }

    /// Explicit conversion to double; identity on doubles.
    pub fn into_double(self) -> SymDouble {
        match self {
            SymNumber::Double(d) => d,
            other => SymDouble::AsDouble(Box::new(other)),
        }
    }

    /// `-1` of this node's kind.
    pub fn minus_one(kind: Kind) -> Option<SymNumber> {
        match kind {
            Kind::Int => Some(SymNumber::Int(SymInt::Const(-1))),
            Kind::Long => Some(SymNumber::Long(SymLong::Const(-1))),
            Kind::Float => Some(SymNumber::Float(SymFloat::Const(-1.0))),
            Kind::Double => Some(SymNumber::Double(SymDouble::Const(-1.0))),
            Kind::Bool => None,
        }
    }

    /// Pair two operands if they already share a kind.
    pub fn pair(lhs: SymNumber, rhs: SymNumber) -> Result<NumPair, (SymNumber, SymNumber)> {
        match (lhs, rhs) {
            (SymNumber::Int(l), SymNumber::Int(r)) => Ok(NumPair::Int(l, r)),
            (SymNumber::Long(l), SymNumber::Long(r)) => Ok(NumPair::Long(l, r)),
            (SymNumber::Float(l), SymNumber::Float(r)) => Ok(NumPair::Float(l, r)),
            (SymNumber::Double(l), SymNumber::Double(r)) => Ok(NumPair::Double(l, r)),
            (l, r) => Err((l, r)),
        }
    }
}

impl NumPair {
    pub fn kind(&self) -> Kind {
        match self {
            NumPair::Int(..) => Kind::Int,
            NumPair::Long(..) => Kind::Long,
            NumPair::Float(..) => Kind::Float,
            NumPair::Double(..) => Kind::Double,
        }
    }

    /// Apply an arithmetic operator in the pair's kind.
    pub fn arith(self, op: ArithOp) -> SymNumber {
        match self {
            NumPair::Int(l, r) => SymNumber::Int(SymInt::Arith(op, Box::new(l), Box::new(r))),
            NumPair::Long(l, r) => SymNumber::Long(SymLong::Arith(op, Box::new(l), Box::new(r))),
            NumPair::Float(l, r) => {
                SymNumber::Float(SymFloat::Arith(op, Box::new(l), Box::new(r)))
            }
            NumPair::Double(l, r) => {
                SymNumber::Double(SymDouble::Arith(op, Box::new(l), Box::new(r)))
            }
        }
    }

    pub fn compare(self, op: CmpOp) -> SymBool {
        SymBool::Cmp(op, Box::new(self))
    }

    /// Split back into two operands of the pair's kind.
    pub fn into_parts(self) -> (SymNumber, SymNumber) {
        match self {
            NumPair::Int(l, r) => (SymNumber::Int(l), SymNumber::Int(r)),
            NumPair::Long(l, r) => (SymNumber::Long(l), SymNumber::Long(r)),
            NumPair::Float(l, r) => (SymNumber::Float(l), SymNumber::Float(r)),
            NumPair::Double(l, r) => (SymNumber::Double(l), SymNumber::Double(r)),
        }
    }
}

impl Sym {
    pub fn kind(&self) -> Kind {
        match self {
            Sym::Bool(_) => Kind::Bool,
            Sym::Num(n) => n.kind(),
        }
    }
}

impl From<SymBool> for Sym {
    fn from(b: SymBool) -> Self {
        Sym::Bool(b)
    }
}

impl From<SymNumber> for Sym {
    fn from(n: SymNumber) -> Self {
        Sym::Num(n)
    }
}

// ---------------------------------------------------------------------------
// Literal traversal
// ---------------------------------------------------------------------------

/// Calls `f` for every literal occurrence, left to right, with its kind.
pub(crate) trait VisitLiterals {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind));
}

impl VisitLiterals for SymBool {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            SymBool::Const(_) => {}
            SymBool::Lit(id) => f(*id, Kind::Bool),
            SymBool::Not(inner) => inner.visit_literals(f),
            SymBool::Logic(_, l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
            SymBool::Cmp(_, pair) => pair.visit_literals(f),
        }
    }
}

impl VisitLiterals for NumPair {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            NumPair::Int(l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
            NumPair::Long(l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
            NumPair::Float(l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
            NumPair::Double(l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
        }
    }
}

impl VisitLiterals for SymNumber {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            SymNumber::Int(n) => n.visit_literals(f),
            SymNumber::Long(n) => n.visit_literals(f),
            SymNumber::Float(n) => n.visit_literals(f),
            SymNumber::Double(n) => n.visit_literals(f),
        }
    }
}

impl VisitLiterals for SymInt {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            SymInt::Const(_) => {}
            SymInt::Lit(id) => f(*id, Kind::Int),
            SymInt::Arith(_, l, r) | SymInt::Bit(_, l, r) | SymInt::Shift(_, l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
            SymInt::AsInt(inner) => inner.visit_literals(f),
        }
    }
}

impl VisitLiterals for SymLong {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            SymLong::Const(_) => {}
            SymLong::Lit(id) => f(*id, Kind::Long),
            SymLong::Arith(_, l, r) | SymLong::Bit(_, l, r) | SymLong::Shift(_, l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
        }
    }
}

impl VisitLiterals for SymFloat {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            SymFloat::Const(_) => {}
            SymFloat::Lit(id) => f(*id, Kind::Float),
            SymFloat::Arith(_, l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
        }
    }
}

impl VisitLiterals for SymDouble {
    fn visit_literals(&self, f: &mut dyn FnMut(LiteralId, Kind)) {
        match self {
            SymDouble::Const(_) => {}
            SymDouble::Lit(id) => f(*id, Kind::Double),
            SymDouble::Arith(_, l, r) | SymDouble::Apply2(_, l, r) => {
                l.visit_literals(f);
                r.visit_literals(f);
            }
            SymDouble::AsDouble(inner) => inner.visit_literals(f),
            SymDouble::Apply(_, inner) => inner.visit_literals(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_accepts_only_equal_kinds() {
        let ok = SymNumber::pair(
            SymNumber::Int(SymInt::Const(1)),
            SymNumber::Int(SymInt::Lit(LiteralId(0))),
        );
        assert!(matches!(ok, Ok(NumPair::Int(..))));

        let mixed = SymNumber::pair(
            SymNumber::Float(SymFloat::Const(1.0)),
            SymNumber::Double(SymDouble::Const(1.0)),
        );
        assert!(mixed.is_err());
    }

    #[test]
    fn pair_splits_into_same_kind_operands() {
        let pair = NumPair::Double(
            SymDouble::AsDouble(Box::new(SymNumber::Int(SymInt::Lit(LiteralId(0))))),
            SymDouble::Const(0.0),
        );
        let (l, r) = pair.into_parts();
        assert_eq!(l.kind(), Kind::Double);
        assert_eq!(r, SymNumber::Double(SymDouble::Const(0.0)));
    }

    #[test]
    fn conversions_are_identity_on_target_kind() {
        let d = SymNumber::Double(SymDouble::Const(2.0));
        assert_eq!(d.into_double(), SymDouble::Const(2.0));

        let i = SymNumber::Int(SymInt::Const(3));
        assert_eq!(
            i.into_double(),
            SymDouble::AsDouble(Box::new(SymNumber::Int(SymInt::Const(3))))
        );
    }

    #[test]
    fn arith_keeps_pair_kind() {
        let pair = NumPair::Long(SymLong::Const(1), SymLong::Const(2));
        assert_eq!(pair.kind(), Kind::Long);
        assert_eq!(pair.arith(ArithOp::Add).kind(), Kind::Long);
    }

    #[test]
    fn minus_one_has_no_boolean_form() {
        assert!(SymNumber::minus_one(Kind::Bool).is_none());
        assert_eq!(
            SymNumber::minus_one(Kind::Float),
            Some(SymNumber::Float(SymFloat::Const(-1.0)))
        );
    }

    #[test]
    fn literals_visited_in_order() {
        let node = SymBool::and(
            SymBool::Lit(LiteralId(2)),
            NumPair::Double(
                SymDouble::AsDouble(Box::new(SymNumber::Int(SymInt::Lit(LiteralId(0))))),
                SymDouble::Lit(LiteralId(1)),
            )
            .compare(CmpOp::Lt),
        );
        let mut seen = Vec::new();
        node.visit_literals(&mut |id, kind| seen.push((id.0, kind)));
        assert_eq!(
            seen,
            vec![(2, Kind::Bool), (0, Kind::Int), (1, Kind::Double)]
        );
    }
}
