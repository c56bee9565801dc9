//! Translation of an engine environment back into a source valuation.
//!
//! The engine may answer with a value of another kind than the literal it
//! assigns (an integral literal compared against a double can come back as
//! a double). Such values are converted to the variable's declared type
//! before parsing: float and double declarations take the numeric value at
//! their width, integer declarations truncate.

use symlower_expr::{Type, Valuation, Value, ValueParseError};
use symlower_lowering::Bindings;
use symlower_symbolic::{Env, SymValue};

/// Text form of `value` for a variable declared as `ty`.
fn solved_text(ty: Type, value: SymValue) -> String {
    let converted = match (ty, value) {
        (Type::Float32, v) if !matches!(v, SymValue::Float(_)) => v.as_f32().map(|x| x.to_string()),
        (Type::Float64, v) if !matches!(v, SymValue::Double(_)) => {
            v.as_f64().map(|x| x.to_string())
        }
        (Type::Int32, v) if !matches!(v, SymValue::Int(_)) => v.as_i32().map(|x| x.to_string()),
        (Type::Int64, v) if !matches!(v, SymValue::Long(_)) => v.as_i64().map(|x| x.to_string()),
        _ => None,
    };
    converted.unwrap_or_else(|| value.to_string())
}

/// Write one value per bound variable into `valuation`.
///
/// Literals the engine left unassigned keep their seed value. If any value
/// does not parse as its variable's type, `valuation` is left untouched.
pub fn translate(
    bindings: &Bindings,
    env: &Env,
    valuation: &mut Valuation,
) -> Result<(), ValueParseError> {
    let mut solved = Vec::with_capacity(bindings.len());
    for (var, lit) in bindings {
        let value = env.get(lit.id).unwrap_or_else(|| {
            tracing::debug!(variable = %var, literal = %lit.id, "Literal not assigned; using seed");
            lit.seed
        });
        let parsed = Value::parse(var.ty, &solved_text(var.ty, value))?;
        solved.push((var.clone(), parsed));
    }
    for (var, value) in solved {
        valuation.set(var, value);
    }
    Ok(())
}
