//! Reference evaluator for source expressions.
//!
//! Binary numeric operands are promoted to their common type before the
//! operator runs. Integer arithmetic wraps, float-to-integer conversion
//! saturates and shift distances are masked to the value's width.

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use thiserror::Error;

use crate::expression::{Expression, IS_NAN};
use crate::operator::{BitvectorOperator, LogicalOperator, NumericComparator, NumericOperator};
use crate::types::Type;
use crate::valuation::Valuation;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("variable '{0}' has no value")]
    Unbound(String),

    #[error("expected {expected} operand, found {found}")]
    TypeMismatch { expected: &'static str, found: Type },

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot cast {from} to {to}")]
    Cast { from: Type, to: Type },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{name}' expects {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl Value {
    /// Convert to `target`, `None` if the value has no representation there.
    pub fn cast(&self, target: Type) -> Option<Value> {
        if self.ty() == target {
            return Some(self.clone());
        }
        let value = match (self, target) {
            (Value::Bool(_), _) | (_, Type::Bool) => return None,
            (Value::Decimal(d), Type::Int32) => Value::Int32(d.to_i64()? as i32),
            (Value::Decimal(d), Type::Int64) => Value::Int64(d.to_i64()?),
            (Value::Float32(f), Type::Int32) => Value::Int32(*f as i32),
            (Value::Float64(f), Type::Int32) => Value::Int32(*f as i32),
            (v, Type::Int32) => Value::Int32(integral_of(v)? as i32),
            (v, Type::Int64) => Value::Int64(integral_of(v)?),
            (v, Type::Float32) => Value::Float32(v.as_f64()? as f32),
            (v, Type::Float64) => Value::Float64(v.as_f64()?),
            (Value::Int32(v), Type::Decimal) => Value::Decimal(BigDecimal::from(*v)),
            (Value::Int64(v), Type::Decimal) => Value::Decimal(BigDecimal::from(*v)),
            (v, Type::Decimal) => Value::Decimal(BigDecimal::from_f64(v.as_f64()?)?),
        };
        Some(value)
    }
}

fn integral_of(v: &Value) -> Option<i64> {
    match v {
        Value::Int32(i) => Some(i64::from(*i)),
        Value::Int64(i) => Some(*i),
        Value::Float32(f) => Some(*f as i64),
        Value::Float64(f) => Some(*f as i64),
        Value::Bool(_) | Value::Decimal(_) => None,
    }
}

fn expect_bool(v: Value) -> Result<bool, EvaluateError> {
    match v {
        Value::Bool(b) => Ok(b),
        other => Err(EvaluateError::TypeMismatch {
            expected: "boolean",
            found: other.ty(),
        }),
    }
}

fn promote(l: Value, r: Value) -> Result<(Value, Value), EvaluateError> {
    let (lt, rt) = (l.ty(), r.ty());
    let Some(common) = lt.promote(rt) else {
        let found = if lt == Type::Bool { lt } else { rt };
        return Err(EvaluateError::TypeMismatch {
            expected: "numeric",
            found,
        });
    };
    let cast = |v: Value| {
        let from = v.ty();
        v.cast(common)
            .ok_or(EvaluateError::Cast { from, to: common })
    };
    Ok((cast(l)?, cast(r)?))
}

macro_rules! integral_arith {
    ($op:expr, $a:expr, $b:expr, $variant:path) => {{
        let (a, b) = ($a, $b);
        let v = match $op {
            NumericOperator::Plus => a.wrapping_add(b),
            NumericOperator::Minus => a.wrapping_sub(b),
            NumericOperator::Mul => a.wrapping_mul(b),
            NumericOperator::Div if b == 0 => return Err(EvaluateError::DivisionByZero),
            NumericOperator::Div => a.wrapping_div(b),
            NumericOperator::Rem if b == 0 => return Err(EvaluateError::DivisionByZero),
            NumericOperator::Rem => a.wrapping_rem(b),
        };
        $variant(v)
    }};
}

macro_rules! real_arith {
    ($op:expr, $a:expr, $b:expr, $variant:path) => {{
        let (a, b) = ($a, $b);
        $variant(match $op {
            NumericOperator::Plus => a + b,
            NumericOperator::Minus => a - b,
            NumericOperator::Mul => a * b,
            NumericOperator::Div => a / b,
            NumericOperator::Rem => a % b,
        })
    }};
}

fn arith(op: NumericOperator, l: Value, r: Value) -> Result<Value, EvaluateError> {
    let value = match promote(l, r)? {
        (Value::Int32(a), Value::Int32(b)) => integral_arith!(op, a, b, Value::Int32),
        (Value::Int64(a), Value::Int64(b)) => integral_arith!(op, a, b, Value::Int64),
        (Value::Float32(a), Value::Float32(b)) => real_arith!(op, a, b, Value::Float32),
        (Value::Float64(a), Value::Float64(b)) => real_arith!(op, a, b, Value::Float64),
        (Value::Decimal(a), Value::Decimal(b)) => {
            if matches!(op, NumericOperator::Div | NumericOperator::Rem) && b.is_zero() {
                return Err(EvaluateError::DivisionByZero);
            }
            real_arith!(op, a, b, Value::Decimal)
        }
        (l, _) => {
            return Err(EvaluateError::TypeMismatch {
                expected: "numeric",
                found: l.ty(),
            });
        }
    };
    Ok(value)
}

fn holds<T: PartialOrd>(cmp: NumericComparator, a: &T, b: &T) -> bool {
    match cmp {
        NumericComparator::Eq => a == b,
        NumericComparator::Ne => a != b,
        NumericComparator::Ge => a >= b,
        NumericComparator::Gt => a > b,
        NumericComparator::Le => a <= b,
        NumericComparator::Lt => a < b,
    }
}

fn compare(cmp: NumericComparator, l: Value, r: Value) -> Result<bool, EvaluateError> {
    Ok(match promote(l, r)? {
        (Value::Int32(a), Value::Int32(b)) => holds(cmp, &a, &b),
        (Value::Int64(a), Value::Int64(b)) => holds(cmp, &a, &b),
        (Value::Float32(a), Value::Float32(b)) => holds(cmp, &a, &b),
        (Value::Float64(a), Value::Float64(b)) => holds(cmp, &a, &b),
        (Value::Decimal(a), Value::Decimal(b)) => holds(cmp, &a, &b),
        (l, _) => {
            return Err(EvaluateError::TypeMismatch {
                expected: "numeric",
                found: l.ty(),
            });
        }
    })
}

fn bitvector(op: BitvectorOperator, l: Value, r: Value) -> Result<Value, EvaluateError> {
    for v in [&l, &r] {
        if !v.ty().is_integral() && !(v.ty() == Type::Bool && !op.is_shift()) {
            return Err(EvaluateError::TypeMismatch {
                expected: "integral",
                found: v.ty(),
            });
        }
    }
    if op.is_shift() {
        // Distance is masked to the width of the value operand.
        let distance = integral_of(&r).unwrap_or(0) as u32;
        return Ok(match (l, op) {
            (Value::Int32(a), BitvectorOperator::ShiftL) => Value::Int32(a.wrapping_shl(distance)),
            (Value::Int32(a), BitvectorOperator::ShiftR) => Value::Int32(a.wrapping_shr(distance)),
            (Value::Int32(a), _) => Value::Int32((a as u32).wrapping_shr(distance) as i32),
            (Value::Int64(a), BitvectorOperator::ShiftL) => Value::Int64(a.wrapping_shl(distance)),
            (Value::Int64(a), BitvectorOperator::ShiftR) => Value::Int64(a.wrapping_shr(distance)),
            (Value::Int64(a), _) => Value::Int64((a as u64).wrapping_shr(distance) as i64),
            (other, _) => {
                return Err(EvaluateError::TypeMismatch {
                    expected: "integral",
                    found: other.ty(),
                });
            }
        });
    }

    macro_rules! bits {
        ($a:expr, $b:expr) => {
            match op {
                BitvectorOperator::And => $a & $b,
                BitvectorOperator::Or => $a | $b,
                _ => $a ^ $b,
            }
        };
    }
    if let (Value::Bool(a), Value::Bool(b)) = (&l, &r) {
        return Ok(Value::Bool(bits!(*a, *b)));
    }
    match promote(l, r)? {
        (Value::Int32(a), Value::Int32(b)) => Ok(Value::Int32(bits!(a, b))),
        (Value::Int64(a), Value::Int64(b)) => Ok(Value::Int64(bits!(a, b))),
        (l, _) => Err(EvaluateError::TypeMismatch {
            expected: "integral",
            found: l.ty(),
        }),
    }
}

fn call(name: &str, args: Vec<Value>) -> Result<Value, EvaluateError> {
    let expected = match name {
        "atan2" | "pow" => 2,
        "sin" | "cos" | "tan" | "asin" | "acos" | "atan" | "exp" | "log" | "log10" | "sqrt"
        | "round" | IS_NAN => 1,
        _ => return Err(EvaluateError::UnknownFunction(name.to_string())),
    };
    if args.len() != expected {
        return Err(EvaluateError::Arity {
            name: name.to_string(),
            expected,
            found: args.len(),
        });
    }
    let xs = args
        .iter()
        .map(|a| {
            a.as_f64().ok_or(EvaluateError::TypeMismatch {
                expected: "numeric",
                found: a.ty(),
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    let x = xs[0];
    let y = xs.get(1).copied().unwrap_or_default();
    let result = match name {
        IS_NAN => return Ok(Value::Bool(x.is_nan())),
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        "asin" => x.asin(),
        "acos" => x.acos(),
        "atan" => x.atan(),
        "exp" => x.exp(),
        "log" => x.ln(),
        "log10" => x.log10(),
        "sqrt" => x.sqrt(),
        "round" => (x + 0.5).floor(),
        "atan2" => x.atan2(y),
        _ => x.powf(y),
    };
    Ok(Value::Float64(result))
}

impl Expression {
    /// Evaluate under `valuation`.
    ///
    /// Numeric compounds yield a value of the promoted operand type.
    pub fn evaluate(&self, valuation: &Valuation) -> Result<Value, EvaluateError> {
        match self {
            Expression::Constant(v) => Ok(v.clone()),
            Expression::Variable(var) => valuation
                .get(var)
                .cloned()
                .ok_or_else(|| EvaluateError::Unbound(var.name.clone())),
            Expression::Negation(e) => Ok(Value::Bool(!expect_bool(e.evaluate(valuation)?)?)),
            Expression::UnaryMinus(e) => match e.evaluate(valuation)? {
                Value::Int32(v) => Ok(Value::Int32(v.wrapping_neg())),
                Value::Int64(v) => Ok(Value::Int64(v.wrapping_neg())),
                Value::Float32(v) => Ok(Value::Float32(-v)),
                Value::Float64(v) => Ok(Value::Float64(-v)),
                Value::Decimal(d) => Ok(Value::Decimal(-d)),
                Value::Bool(_) => Err(EvaluateError::TypeMismatch {
                    expected: "numeric",
                    found: Type::Bool,
                }),
            },
            Expression::NumericComparison { left, cmp, right } => Ok(Value::Bool(compare(
                *cmp,
                left.evaluate(valuation)?,
                right.evaluate(valuation)?,
            )?)),
            Expression::NumericCompound { left, op, right } => {
                arith(*op, left.evaluate(valuation)?, right.evaluate(valuation)?)
            }
            Expression::PropositionalCompound { left, op, right } => {
                let a = expect_bool(left.evaluate(valuation)?)?;
                let b = expect_bool(right.evaluate(valuation)?)?;
                Ok(Value::Bool(match op {
                    LogicalOperator::And => a && b,
                    LogicalOperator::Or => a || b,
                    LogicalOperator::Xor => a ^ b,
                    LogicalOperator::Equiv => a == b,
                    LogicalOperator::Imply => !a || b,
                }))
            }
            Expression::Cast { expr, target } => {
                let v = expr.evaluate(valuation)?;
                let from = v.ty();
                v.cast(*target).ok_or(EvaluateError::Cast {
                    from,
                    to: *target,
                })
            }
            Expression::FunctionCall { name, args } => {
                let values = args
                    .iter()
                    .map(|a| a.evaluate(valuation))
                    .collect::<Result<Vec<_>, _>>()?;
                call(name, values)
            }
            Expression::Bitvector { left, op, right } => {
                bitvector(*op, left.evaluate(valuation)?, right.evaluate(valuation)?)
            }
        }
    }

    /// Evaluate a boolean expression.
    pub fn holds(&self, valuation: &Valuation) -> Result<bool, EvaluateError> {
        expect_bool(self.evaluate(valuation)?)
    }
}
