//! Recursive translation of source expressions into symbolic nodes.

use indexmap::IndexMap;
use symlower_expr::{
    BitvectorOperator, Expression, IS_NAN, LogicalOperator, NumericComparator, NumericOperator,
    Type, Value, Variable,
};
use symlower_symbolic::{
    ArithOp, BitOp, BoolOp, CmpOp, IntShift, Kind, LiteralIds, LongShift, MathFn, MathFn2,
    NumPair, PathCondition, Sym, SymBool, SymDouble, SymFloat, SymInt, SymLiteral, SymLong,
    SymNumber,
};

use crate::error::LowerError;
use crate::unify::unify;

/// Variable-to-literal map of one lowering pass, in first-visit order.
pub type Bindings = IndexMap<Variable, SymLiteral>;

/// Translator from source expressions to symbolic path conditions.
///
/// A `Lowering` owns the binding map: every occurrence of a variable lowers
/// to the same literal, and the map only grows. Literal ids come from the
/// borrowed [`LiteralIds`] counter.
pub struct Lowering<'a> {
    ids: &'a LiteralIds,
    bindings: Bindings,
}

impl<'a> Lowering<'a> {
    pub fn new(ids: &'a LiteralIds) -> Self {
        Self {
            ids,
            bindings: Bindings::new(),
        }
    }

    /// Lower a boolean expression into a single-constraint path condition.
    pub fn lower(&mut self, expr: &Expression) -> Result<PathCondition, LowerError> {
        let constraint = self.lower_bool(expr)?;
        Ok(PathCondition::with_constraints(vec![constraint]))
    }

    /// Lower an expression of any type.
    pub fn lower_term(&mut self, expr: &Expression) -> Result<Sym, LowerError> {
        match expr {
            Expression::Constant(value) => constant(value),
            Expression::Variable(var) => self.variable(var),
            Expression::Negation(inner) => Ok(Sym::Bool(self.lower_bool(inner)?.negate())),
            Expression::UnaryMinus(inner) => self.unary_minus(inner),
            Expression::NumericComparison { left, cmp, right } => {
                self.comparison(left, *cmp, right)
            }
            Expression::NumericCompound { left, op, right } => self.compound(left, *op, right),
            Expression::PropositionalCompound { left, op, right } => {
                self.connective(left, *op, right)
            }
            Expression::Cast { expr, target } => self.cast(expr, *target),
            Expression::FunctionCall { name, args } => self.call(name, args),
            Expression::Bitvector { left, op, right } => self.bitvector(left, *op, right),
        }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }

    fn lower_bool(&mut self, expr: &Expression) -> Result<SymBool, LowerError> {
        match self.lower_term(expr)? {
            Sym::Bool(b) => Ok(b),
            Sym::Num(n) => Err(LowerError::NotBoolean(n.kind())),
        }
    }

    fn lower_num(&mut self, expr: &Expression) -> Result<SymNumber, LowerError> {
        match self.lower_term(expr)? {
            Sym::Num(n) => Ok(n),
            Sym::Bool(_) => Err(LowerError::NotNumeric(Kind::Bool)),
        }
    }

    fn variable(&mut self, var: &Variable) -> Result<Sym, LowerError> {
        if let Some(lit) = self.bindings.get(var) {
            return Ok(lit.to_sym());
        }
        let kind = kind_of(var.ty).ok_or_else(|| LowerError::UnsupportedVariableType {
            name: var.name.clone(),
            ty: var.ty,
        })?;
        let lit = SymLiteral::fresh(self.ids, kind);
        tracing::trace!(variable = %var, literal = %lit.id, kind = %kind, "Bound variable");
        self.bindings.insert(var.clone(), lit);
        Ok(lit.to_sym())
    }

    // -----------------------------------------------------------------------
    // Numeric nodes
    // -----------------------------------------------------------------------

    fn unary_minus(&mut self, inner: &Expression) -> Result<Sym, LowerError> {
        let operand = self.lower_num(inner)?;
        let minus_one =
            SymNumber::minus_one(operand.kind()).ok_or(LowerError::NotNumeric(Kind::Bool))?;
        Ok(Sym::Num(unify(operand, minus_one)?.arith(ArithOp::Mul)))
    }

    fn comparison(
        &mut self,
        left: &Expression,
        cmp: NumericComparator,
        right: &Expression,
    ) -> Result<Sym, LowerError> {
        let lhs = self.lower_num(left)?;
        let rhs = self.lower_num(right)?;
        Ok(Sym::Bool(unify(lhs, rhs)?.compare(cmp_op(cmp))))
    }

    fn compound(
        &mut self,
        left: &Expression,
        op: NumericOperator,
        right: &Expression,
    ) -> Result<Sym, LowerError> {
        let lhs = self.lower_num(left)?;
        let rhs = self.lower_num(right)?;
        let pair = unify(lhs, rhs)?;
        if matches!(op, NumericOperator::Plus | NumericOperator::Minus) {
            // Zeros are recognised on the unlowered operands, but the kept
            // operand is the unified one. The left zero wins.
            if is_literal_zero(left) {
                return Ok(Sym::Num(pair.into_parts().1));
            }
            if is_literal_zero(right) {
                return Ok(Sym::Num(pair.into_parts().0));
            }
        }
        Ok(Sym::Num(pair.arith(arith_op(op))))
    }

    fn cast(&mut self, inner: &Expression, target: Type) -> Result<Sym, LowerError> {
        let source = inner.ty();
        if source == target {
            return self.lower_term(inner);
        }
        let unsupported = LowerError::UnsupportedCast {
            from: source,
            to: target,
        };
        if !target.is_integral() && !matches!(target, Type::Float32 | Type::Float64) {
            return Err(unsupported);
        }
        let Sym::Num(operand) = self.lower_term(inner)? else {
            return Err(unsupported);
        };
        if target.is_integral() {
            if target == Type::Int64 {
                tracing::warn!(from = %source, "Cast to sint64 lowered as a cast to int");
            }
            Ok(Sym::Num(SymNumber::Int(operand.into_int())))
        } else {
            Ok(Sym::Num(SymNumber::Double(operand.into_double())))
        }
    }

    fn call(&mut self, name: &str, args: &[Expression]) -> Result<Sym, LowerError> {
        let builtin =
            Builtin::from_name(name).ok_or_else(|| LowerError::UnknownFunction(name.to_string()))?;
        let arity_error = || LowerError::FunctionArity {
            name: name.to_string(),
            expected: builtin.arity(),
            found: args.len(),
        };
        if args.len() != builtin.arity() {
            return Err(arity_error());
        }
        let mut lowered = Vec::with_capacity(args.len());
        for arg in args {
            lowered.push(self.lower_num(arg)?.into_double());
        }
        let applied = match (builtin, lowered.as_slice()) {
            (Builtin::IsNaN, [x]) => {
                return Ok(Sym::Bool(
                    NumPair::Double(x.clone(), x.clone()).compare(CmpOp::Ne),
                ));
            }
            (Builtin::Unary(f), [x]) => SymDouble::Apply(f, Box::new(x.clone())),
            (Builtin::Binary(f), [x, y]) => {
                SymDouble::Apply2(f, Box::new(x.clone()), Box::new(y.clone()))
            }
            _ => return Err(arity_error()),
        };
        Ok(Sym::Num(SymNumber::Double(applied)))
    }

    fn bitvector(
        &mut self,
        left: &Expression,
        op: BitvectorOperator,
        right: &Expression,
    ) -> Result<Sym, LowerError> {
        let lhs = self.lower_num(left)?;
        let rhs = self.lower_num(right)?;
        let mismatch = |l: &SymNumber, r: &SymNumber| LowerError::BitvectorMismatch {
            op,
            left: l.kind(),
            right: r.kind(),
        };

        let node = match (op, lhs, rhs) {
            (BitvectorOperator::ShiftUR, SymNumber::Long(_), SymNumber::Long(_)) => {
                return Err(LowerError::UnsupportedOperator {
                    op,
                    kind: Kind::Long,
                });
            }
            (op, SymNumber::Int(l), SymNumber::Int(r)) => SymNumber::Int(match op {
                BitvectorOperator::And => SymInt::Bit(BitOp::And, Box::new(l), Box::new(r)),
                BitvectorOperator::Or => SymInt::Bit(BitOp::Or, Box::new(l), Box::new(r)),
                BitvectorOperator::Xor => SymInt::Bit(BitOp::Xor, Box::new(l), Box::new(r)),
                BitvectorOperator::ShiftL => SymInt::Shift(IntShift::Shl, Box::new(l), Box::new(r)),
                BitvectorOperator::ShiftR => SymInt::Shift(IntShift::Shr, Box::new(l), Box::new(r)),
                BitvectorOperator::ShiftUR => {
                    SymInt::Shift(IntShift::UShr, Box::new(l), Box::new(r))
                }
            }),
            (op, SymNumber::Long(l), SymNumber::Long(r)) => SymNumber::Long(match op {
                BitvectorOperator::And => SymLong::Bit(BitOp::And, Box::new(l), Box::new(r)),
                BitvectorOperator::Or => SymLong::Bit(BitOp::Or, Box::new(l), Box::new(r)),
                BitvectorOperator::Xor => SymLong::Bit(BitOp::Xor, Box::new(l), Box::new(r)),
                BitvectorOperator::ShiftL => {
                    SymLong::Shift(LongShift::Shl, Box::new(l), Box::new(r))
                }
                // ShiftUR on longs was rejected above.
                _ => SymLong::Shift(LongShift::Shr, Box::new(l), Box::new(r)),
            }),
            (_, l, r) => return Err(mismatch(&l, &r)),
        };
        Ok(Sym::Num(node))
    }

    // -----------------------------------------------------------------------
    // Boolean nodes
    // -----------------------------------------------------------------------

    fn connective(
        &mut self,
        left: &Expression,
        op: LogicalOperator,
        right: &Expression,
    ) -> Result<Sym, LowerError> {
        let op = match op {
            LogicalOperator::And => BoolOp::And,
            LogicalOperator::Or => BoolOp::Or,
            LogicalOperator::Xor => BoolOp::Xor,
            LogicalOperator::Equiv | LogicalOperator::Imply => {
                return Err(LowerError::UnsupportedConnective(op));
            }
        };
        let lhs = self.lower_bool(left)?;
        let rhs = self.lower_bool(right)?;
        Ok(Sym::Bool(SymBool::logic(op, lhs, rhs)))
    }
}

/// Engine kind of a source type; decimals have none.
pub fn kind_of(ty: Type) -> Option<Kind> {
    match ty {
        Type::Bool => Some(Kind::Bool),
        Type::Int32 => Some(Kind::Int),
        Type::Int64 => Some(Kind::Long),
        Type::Float32 => Some(Kind::Float),
        Type::Float64 => Some(Kind::Double),
        Type::Decimal => None,
    }
}

fn constant(value: &Value) -> Result<Sym, LowerError> {
    Ok(match value {
        Value::Bool(b) => Sym::Bool(SymBool::Const(*b)),
        Value::Int32(v) => Sym::Num(SymNumber::Int(SymInt::Const(*v))),
        Value::Int64(v) => Sym::Num(SymNumber::Long(SymLong::Const(*v))),
        Value::Float32(v) => Sym::Num(SymNumber::Float(SymFloat::Const(*v))),
        Value::Float64(v) => Sym::Num(SymNumber::Double(SymDouble::Const(*v))),
        Value::Decimal(d) => {
            let narrowed = value
                .as_f64()
                .ok_or_else(|| LowerError::UnrepresentableConstant(d.to_string()))?;
            tracing::warn!(decimal = %d, double = narrowed, "Decimal constant narrowed to double");
            Sym::Num(SymNumber::Double(SymDouble::Const(narrowed)))
        }
    })
}

fn is_literal_zero(expr: &Expression) -> bool {
    matches!(expr, Expression::Constant(v) if v.is_exact_zero())
}

fn cmp_op(cmp: NumericComparator) -> CmpOp {
    match cmp {
        NumericComparator::Eq => CmpOp::Eq,
        NumericComparator::Ne => CmpOp::Ne,
        NumericComparator::Ge => CmpOp::Ge,
        NumericComparator::Gt => CmpOp::Gt,
        NumericComparator::Le => CmpOp::Le,
        NumericComparator::Lt => CmpOp::Lt,
    }
}

fn arith_op(op: NumericOperator) -> ArithOp {
    match op {
        NumericOperator::Plus => ArithOp::Add,
        NumericOperator::Minus => ArithOp::Sub,
        NumericOperator::Mul => ArithOp::Mul,
        NumericOperator::Div => ArithOp::Div,
        NumericOperator::Rem => ArithOp::Mod,
    }
}

/// Functions the engine evaluates natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Unary(MathFn),
    Binary(MathFn2),
    IsNaN,
}

impl Builtin {
    fn from_name(name: &str) -> Option<Self> {
        let builtin = match name {
            "sin" => Builtin::Unary(MathFn::Sin),
            "cos" => Builtin::Unary(MathFn::Cos),
            "tan" => Builtin::Unary(MathFn::Tan),
            "asin" => Builtin::Unary(MathFn::Asin),
            "acos" => Builtin::Unary(MathFn::Acos),
            "atan" => Builtin::Unary(MathFn::Atan),
            "exp" => Builtin::Unary(MathFn::Exp),
            "log" => Builtin::Unary(MathFn::Log),
            "log10" => Builtin::Unary(MathFn::Log10),
            "sqrt" => Builtin::Unary(MathFn::Sqrt),
            "round" => Builtin::Unary(MathFn::Round),
            "atan2" => Builtin::Binary(MathFn2::Atan2),
            "pow" => Builtin::Binary(MathFn2::Pow),
            IS_NAN => Builtin::IsNaN,
            _ => return None,
        };
        Some(builtin)
    }

    fn arity(self) -> usize {
        match self {
            Builtin::Binary(_) => 2,
            Builtin::Unary(_) | Builtin::IsNaN => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(text: &str) -> Expression {
        Expression::Constant(Value::parse(Type::Decimal, text).unwrap())
    }

    fn lower(expr: &Expression) -> Result<String, LowerError> {
        let ids = LiteralIds::new();
        Lowering::new(&ids).lower(expr).map(|pc| pc.to_string())
    }

    fn term(expr: &Expression) -> Result<String, LowerError> {
        let ids = LiteralIds::new();
        Lowering::new(&ids).lower_term(expr).map(|s| s.to_string())
    }

    fn var(name: &str, ty: Type) -> Expression {
        Expression::var(Variable::new(name, ty))
    }

    #[test]
    fn int_compared_with_double_constant() {
        let e = Expression::compare(
            var("x", Type::Int32),
            NumericComparator::Eq,
            Expression::constant(2.5f64),
        );
        assert_eq!(lower(&e).unwrap(), "(== (as-double IVAR(0)) 2.5d)");
    }

    #[test]
    fn long_narrowed_against_int() {
        let e = Expression::compound(
            var("l", Type::Int64),
            NumericOperator::Mul,
            var("i", Type::Int32),
        );
        assert_eq!(term(&e).unwrap(), "(* (as-int LVAR(0)) IVAR(1))");
    }

    #[test]
    fn float_widened_against_double() {
        let e = Expression::compare(
            var("f", Type::Float32),
            NumericComparator::Lt,
            var("d", Type::Float64),
        );
        assert_eq!(lower(&e).unwrap(), "(< (as-double FVAR(0)) DVAR(1))");
    }

    #[test]
    fn float_against_int_is_rejected() {
        let e = Expression::compare(
            var("f", Type::Float32),
            NumericComparator::Lt,
            var("i", Type::Int32),
        );
        assert_eq!(
            lower(&e),
            Err(LowerError::IncompatibleOperands {
                left: Kind::Float,
                right: Kind::Double,
            })
        );
    }

    #[test]
    fn additive_zero_is_dropped() {
        let x = var("x", Type::Int32);
        let plus = Expression::compound(x.clone(), NumericOperator::Plus, Expression::constant(0));
        assert_eq!(term(&plus).unwrap(), "IVAR(0)");

        let minus = Expression::compound(Expression::constant(0), NumericOperator::Minus, x.clone());
        assert_eq!(term(&minus).unwrap(), "IVAR(0)");

        let long_zero = Expression::compound(x.clone(), NumericOperator::Plus, Expression::constant(0i64));
        assert_eq!(term(&long_zero).unwrap(), "IVAR(0)");

        // A decimal zero is not an exact zero.
        let dec = Expression::compound(x, NumericOperator::Plus, decimal("0"));
        assert_eq!(term(&dec).unwrap(), "(+ (as-double IVAR(0)) 0.0d)");
    }

    #[test]
    fn additive_zero_keeps_unified_operand() {
        let x = var("x", Type::Int32);
        let plus_double_zero =
            Expression::compound(x.clone(), NumericOperator::Plus, Expression::constant(0.0f64));
        assert_eq!(term(&plus_double_zero).unwrap(), "(as-double IVAR(0))");

        let halved = Expression::compare(
            Expression::compound(plus_double_zero.clone(), NumericOperator::Div, Expression::constant(2)),
            NumericComparator::Eq,
            Expression::constant(1.5f64),
        );
        assert_eq!(
            lower(&halved).unwrap(),
            "(== (/ (as-double IVAR(0)) (as-double 2)) 1.5d)"
        );

        let against_float = Expression::compare(
            plus_double_zero,
            NumericComparator::Lt,
            var("f", Type::Float32),
        );
        assert_eq!(
            lower(&against_float).unwrap(),
            "(< (as-double IVAR(0)) (as-double FVAR(1)))"
        );

        let long_plus_int_zero =
            Expression::compound(var("l", Type::Int64), NumericOperator::Plus, Expression::constant(0));
        assert_eq!(term(&long_plus_int_zero).unwrap(), "(as-int LVAR(0))");

        let zero_minus = Expression::compound(Expression::constant(0.0f64), NumericOperator::Minus, x);
        assert_eq!(term(&zero_minus).unwrap(), "(as-double IVAR(0))");
    }

    #[test]
    fn multiplicative_zero_is_kept() {
        let e = Expression::compound(
            var("x", Type::Float64),
            NumericOperator::Mul,
            Expression::constant(0.0f64),
        );
        assert_eq!(term(&e).unwrap(), "(* DVAR(0) 0.0d)");
    }

    #[test]
    fn unary_minus_multiplies_by_minus_one() {
        let cases = [
            (Type::Int32, "(* IVAR(0) -1)"),
            (Type::Int64, "(* LVAR(0) -1L)"),
            (Type::Float32, "(* FVAR(0) -1.0f)"),
            (Type::Float64, "(* DVAR(0) -1.0d)"),
        ];
        for (ty, expected) in cases {
            let e = Expression::unary_minus(var("v", ty));
            assert_eq!(term(&e).unwrap(), expected, "{ty}");
        }
        let b = Expression::unary_minus(var("b", Type::Bool));
        assert_eq!(term(&b), Err(LowerError::NotNumeric(Kind::Bool)));
    }

    #[test]
    fn casts_pick_int_or_double() {
        let x = var("x", Type::Float64);
        assert_eq!(
            term(&Expression::cast(x.clone(), Type::Int64)).unwrap(),
            "(as-int DVAR(0))"
        );
        assert_eq!(
            term(&Expression::cast(var("i", Type::Int32), Type::Float32)).unwrap(),
            "(as-double IVAR(0))"
        );
        assert_eq!(term(&Expression::cast(x.clone(), Type::Float64)).unwrap(), "DVAR(0)");
        assert_eq!(
            term(&Expression::cast(x, Type::Bool)),
            Err(LowerError::UnsupportedCast {
                from: Type::Float64,
                to: Type::Bool,
            })
        );
        assert_eq!(
            term(&Expression::cast(var("b", Type::Bool), Type::Int32)),
            Err(LowerError::UnsupportedCast {
                from: Type::Bool,
                to: Type::Int32,
            })
        );
    }

    #[test]
    fn function_arguments_become_doubles() {
        let e = Expression::call(
            "pow",
            vec![var("i", Type::Int32), Expression::constant(2.0f32)],
        );
        assert_eq!(
            term(&e).unwrap(),
            "(pow (as-double IVAR(0)) (as-double 2.0f))"
        );
    }

    #[test]
    fn nan_check_is_self_inequality() {
        let e = Expression::call(IS_NAN, vec![var("d", Type::Float64)]);
        assert_eq!(lower(&e).unwrap(), "(!= DVAR(0) DVAR(0))");
    }

    #[test]
    fn function_errors() {
        assert_eq!(
            term(&Expression::call("cbrt", vec![])),
            Err(LowerError::UnknownFunction("cbrt".into()))
        );
        assert_eq!(
            term(&Expression::call("sin", vec![])),
            Err(LowerError::FunctionArity {
                name: "sin".into(),
                expected: 1,
                found: 0,
            })
        );
        assert_eq!(
            term(&Expression::call("sqrt", vec![var("b", Type::Bool)])),
            Err(LowerError::NotNumeric(Kind::Bool))
        );
    }

    #[test]
    fn bitvector_same_width() {
        let e = Expression::bitvector(
            var("x", Type::Int32),
            BitvectorOperator::ShiftUR,
            Expression::constant(3),
        );
        assert_eq!(term(&e).unwrap(), "(>>> IVAR(0) 3)");
        let e = Expression::bitvector(
            var("l", Type::Int64),
            BitvectorOperator::Xor,
            Expression::constant(1i64),
        );
        assert_eq!(term(&e).unwrap(), "(^ LVAR(0) 1L)");
    }

    #[test]
    fn long_shifts_take_long_distances() {
        let l = var("l", Type::Int64);
        let e = Expression::bitvector(l.clone(), BitvectorOperator::ShiftL, Expression::constant(2i64));
        assert_eq!(term(&e).unwrap(), "(<< LVAR(0) 2L)");
        let e = Expression::bitvector(l, BitvectorOperator::ShiftR, Expression::constant(2i64));
        assert_eq!(term(&e).unwrap(), "(>> LVAR(0) 2L)");
    }

    #[test]
    fn bitvector_width_mismatch_is_rejected() {
        let e = Expression::bitvector(
            var("l", Type::Int64),
            BitvectorOperator::ShiftL,
            Expression::constant(2),
        );
        assert_eq!(
            term(&e),
            Err(LowerError::BitvectorMismatch {
                op: BitvectorOperator::ShiftL,
                left: Kind::Long,
                right: Kind::Int,
            })
        );
        let e = Expression::bitvector(
            var("d", Type::Float64),
            BitvectorOperator::And,
            var("d", Type::Float64),
        );
        assert!(matches!(term(&e), Err(LowerError::BitvectorMismatch { .. })));
    }

    #[test]
    fn long_unsigned_shift_is_rejected() {
        let e = Expression::bitvector(
            var("l", Type::Int64),
            BitvectorOperator::ShiftUR,
            Expression::constant(1i64),
        );
        assert_eq!(
            term(&e),
            Err(LowerError::UnsupportedOperator {
                op: BitvectorOperator::ShiftUR,
                kind: Kind::Long,
            })
        );
    }

    #[test]
    fn connectives() {
        let a = var("a", Type::Bool);
        let b = var("b", Type::Bool);
        let xor = Expression::logic(a.clone(), LogicalOperator::Xor, Expression::negation(b.clone()));
        assert_eq!(lower(&xor).unwrap(), "(xor BVAR(0) (not BVAR(1)))");
        let imply = Expression::logic(a, LogicalOperator::Imply, b);
        assert_eq!(
            lower(&imply),
            Err(LowerError::UnsupportedConnective(LogicalOperator::Imply))
        );
    }

    #[test]
    fn top_level_must_be_boolean() {
        assert_eq!(
            lower(&var("x", Type::Int32)),
            Err(LowerError::NotBoolean(Kind::Int))
        );
        assert_eq!(
            lower(&Expression::negation(Expression::constant(1.5f64))),
            Err(LowerError::NotBoolean(Kind::Double))
        );
    }

    #[test]
    fn decimals() {
        let d = decimal("2.5");
        let e = Expression::compare(var("x", Type::Float64), NumericComparator::Gt, d);
        assert_eq!(lower(&e).unwrap(), "(> DVAR(0) 2.5d)");

        let dv = var("m", Type::Decimal);
        assert_eq!(
            term(&dv),
            Err(LowerError::UnsupportedVariableType {
                name: "m".into(),
                ty: Type::Decimal,
            })
        );
    }

    #[test]
    fn variables_bind_once_in_visit_order() {
        let ids = LiteralIds::new();
        let mut lowering = Lowering::new(&ids);
        let x = var("x", Type::Int32);
        let y = var("y", Type::Float64);
        let e = Expression::compare(
            Expression::compound(y.clone(), NumericOperator::Mul, x.clone()),
            NumericComparator::Le,
            Expression::compound(x, NumericOperator::Mul, y),
        );
        let pc = lowering.lower(&e).unwrap();
        assert_eq!(
            pc.to_string(),
            "(<= (* DVAR(0) (as-double IVAR(1))) (* (as-double IVAR(1)) DVAR(0)))"
        );
        let names: Vec<_> = lowering.bindings().keys().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["y", "x"]);
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn fresh_literals_carry_kind_seed() {
        let ids = LiteralIds::new();
        let mut lowering = Lowering::new(&ids);
        lowering.lower(&var("b", Type::Bool)).unwrap();
        let bindings = lowering.into_bindings();
        let lit = bindings[&Variable::bool("b")];
        assert_eq!(lit.kind(), Kind::Bool);
        assert_eq!(lit.seed, symlower_symbolic::SymValue::Bool(true));
    }
}
