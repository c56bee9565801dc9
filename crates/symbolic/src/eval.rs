//! Ground evaluation of symbolic nodes under a solution environment.
//!
//! Integer arithmetic wraps on overflow and shift distances are masked to
//! the operand width, matching the JVM semantics the engine models.
//! Literal values of a foreign kind are converted to the literal's kind.

use thiserror::Error;

use crate::env::Env;
use crate::kind::Kind;
use crate::literal::LiteralId;
use crate::node::{
    ArithOp, BitOp, BoolOp, CmpOp, IntShift, LongShift, MathFn, MathFn2, NumPair, SymBool,
    SymDouble, SymFloat, SymInt, SymLong, SymNumber,
};
use crate::path_condition::PathCondition;
use crate::value::SymValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("literal {0} has no value in the environment")]
    Unbound(LiteralId),
    #[error("literal {id} is {expected} but the environment holds a {found}")]
    KindMismatch {
        id: LiteralId,
        expected: Kind,
        found: Kind,
    },
    #[error("integer division by zero")]
    DivisionByZero,
}

fn lookup(env: &Env, id: LiteralId) -> Result<SymValue, EvalError> {
    env.get(id).ok_or(EvalError::Unbound(id))
}

fn mismatch(id: LiteralId, expected: Kind, found: SymValue) -> EvalError {
    EvalError::KindMismatch {
        id,
        expected,
        found: found.kind(),
    }
}

impl PathCondition {
    /// True iff every constraint holds under `env`.
    pub fn eval(&self, env: &Env) -> Result<bool, EvalError> {
        for c in self.constraints() {
            if !c.eval(env)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl SymBool {
    pub fn eval(&self, env: &Env) -> Result<bool, EvalError> {
        match self {
            SymBool::Const(b) => Ok(*b),
            SymBool::Lit(id) => {
                let v = lookup(env, *id)?;
                v.as_bool().ok_or_else(|| mismatch(*id, Kind::Bool, v))
            }
            SymBool::Not(inner) => Ok(!inner.eval(env)?),
            SymBool::Logic(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                Ok(match op {
                    BoolOp::And => l && r,
                    BoolOp::Or => l || r,
                    BoolOp::Xor => l ^ r,
                })
            }
            SymBool::Cmp(op, pair) => pair.eval_cmp(*op, env),
        }
    }
}

fn compare<T: PartialOrd>(op: CmpOp, l: T, r: T) -> bool {
    match op {
        CmpOp::Eq => l == r,
        CmpOp::Ne => l != r,
        CmpOp::Ge => l >= r,
        CmpOp::Gt => l > r,
        CmpOp::Le => l <= r,
        CmpOp::Lt => l < r,
    }
}

impl NumPair {
    fn eval_cmp(&self, op: CmpOp, env: &Env) -> Result<bool, EvalError> {
        Ok(match self {
            NumPair::Int(l, r) => compare(op, l.eval(env)?, r.eval(env)?),
            NumPair::Long(l, r) => compare(op, l.eval(env)?, r.eval(env)?),
            NumPair::Float(l, r) => compare(op, l.eval(env)?, r.eval(env)?),
            NumPair::Double(l, r) => compare(op, l.eval(env)?, r.eval(env)?),
        })
    }
}

impl SymNumber {
    pub fn eval(&self, env: &Env) -> Result<SymValue, EvalError> {
        Ok(match self {
            SymNumber::Int(n) => SymValue::Int(n.eval(env)?),
            SymNumber::Long(n) => SymValue::Long(n.eval(env)?),
            SymNumber::Float(n) => SymValue::Float(n.eval(env)?),
            SymNumber::Double(n) => SymValue::Double(n.eval(env)?),
        })
    }
}

macro_rules! integral_arith {
    ($op:expr, $l:expr, $r:expr, $zero:expr) => {
        match $op {
            ArithOp::Add => Ok($l.wrapping_add($r)),
            ArithOp::Sub => Ok($l.wrapping_sub($r)),
            ArithOp::Mul => Ok($l.wrapping_mul($r)),
            ArithOp::Div if $r == $zero => Err(EvalError::DivisionByZero),
            ArithOp::Div => Ok($l.wrapping_div($r)),
            ArithOp::Mod if $r == $zero => Err(EvalError::DivisionByZero),
            ArithOp::Mod => Ok($l.wrapping_rem($r)),
        }
    };
}

fn bitwise<T>(op: BitOp, l: T, r: T) -> T
where
    T: std::ops::BitAnd<Output = T> + std::ops::BitOr<Output = T> + std::ops::BitXor<Output = T>,
{
    match op {
        BitOp::And => l & r,
        BitOp::Or => l | r,
        BitOp::Xor => l ^ r,
    }
}

impl SymInt {
    pub fn eval(&self, env: &Env) -> Result<i32, EvalError> {
        match self {
            SymInt::Const(v) => Ok(*v),
            SymInt::Lit(id) => {
                let v = lookup(env, *id)?;
                v.as_i32().ok_or_else(|| mismatch(*id, Kind::Int, v))
            }
            SymInt::Arith(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                integral_arith!(op, l, r, 0)
            }
            SymInt::Bit(op, l, r) => Ok(bitwise(*op, l.eval(env)?, r.eval(env)?)),
            SymInt::Shift(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                let distance = (r & 0x1f) as u32;
                Ok(match op {
                    IntShift::Shl => l.wrapping_shl(distance),
                    IntShift::Shr => l.wrapping_shr(distance),
                    IntShift::UShr => ((l as u32) >> distance) as i32,
                })
            }
            SymInt::AsInt(inner) => {
                let v = inner.eval(env)?;
                // numeric by construction
                Ok(v.as_i32().unwrap_or_default())
            }
        }
    }
}

impl SymLong {
    pub fn eval(&self, env: &Env) -> Result<i64, EvalError> {
        match self {
            SymLong::Const(v) => Ok(*v),
            SymLong::Lit(id) => {
                let v = lookup(env, *id)?;
                v.as_i64().ok_or_else(|| mismatch(*id, Kind::Long, v))
            }
            SymLong::Arith(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                integral_arith!(op, l, r, 0)
            }
            SymLong::Bit(op, l, r) => Ok(bitwise(*op, l.eval(env)?, r.eval(env)?)),
            SymLong::Shift(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                let distance = (r & 0x3f) as u32;
                Ok(match op {
                    LongShift::Shl => l.wrapping_shl(distance),
                    LongShift::Shr => l.wrapping_shr(distance),
                })
            }
        }
    }
}

macro_rules! real_arith {
    ($op:expr, $l:expr, $r:expr) => {
        match $op {
            ArithOp::Add => $l + $r,
            ArithOp::Sub => $l - $r,
            ArithOp::Mul => $l * $r,
            ArithOp::Div => $l / $r,
            ArithOp::Mod => $l % $r,
        }
    };
}

impl SymFloat {
    pub fn eval(&self, env: &Env) -> Result<f32, EvalError> {
        match self {
            SymFloat::Const(v) => Ok(*v),
            SymFloat::Lit(id) => {
                let v = lookup(env, *id)?;
                v.as_f32().ok_or_else(|| mismatch(*id, Kind::Float, v))
            }
            SymFloat::Arith(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                Ok(real_arith!(op, l, r))
            }
        }
    }
}

/// `Math.round` semantics: halves round towards positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

impl SymDouble {
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        match self {
            SymDouble::Const(v) => Ok(*v),
            SymDouble::Lit(id) => {
                let v = lookup(env, *id)?;
                v.as_f64().ok_or_else(|| mismatch(*id, Kind::Double, v))
            }
            SymDouble::Arith(op, l, r) => {
                let (l, r) = (l.eval(env)?, r.eval(env)?);
                Ok(real_arith!(op, l, r))
            }
            SymDouble::AsDouble(inner) => Ok(inner.eval(env)?.as_f64().unwrap_or_default()),
            SymDouble::Apply(f, arg) => {
                let x = arg.eval(env)?;
                Ok(match f {
                    MathFn::Sin => x.sin(),
                    MathFn::Cos => x.cos(),
                    MathFn::Tan => x.tan(),
                    MathFn::Asin => x.asin(),
                    MathFn::Acos => x.acos(),
                    MathFn::Atan => x.atan(),
                    MathFn::Exp => x.exp(),
                    MathFn::Log => x.ln(),
                    MathFn::Log10 => x.log10(),
                    MathFn::Sqrt => x.sqrt(),
                    MathFn::Round => round_half_up(x),
                })
            }
            SymDouble::Apply2(f, a, b) => {
                let (a, b) = (a.eval(env)?, b.eval(env)?);
                Ok(match f {
                    MathFn2::Atan2 => a.atan2(b),
                    MathFn2::Pow => a.powf(b),
                })
            }
        }
    }
}
