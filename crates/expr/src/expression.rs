use std::fmt;

use crate::operator::{BitvectorOperator, LogicalOperator, NumericComparator, NumericOperator};
use crate::types::Type;
use crate::value::Value;
use crate::variable::Variable;

/// Name of the built-in NaN check; the only function returning `Bool`.
pub const IS_NAN: &str = "isNaN";

/// A typed source expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(Value),
    Variable(Variable),
    /// Boolean negation
    Negation(Box<Expression>),
    /// Arithmetic negation
    UnaryMinus(Box<Expression>),
    NumericComparison {
        left: Box<Expression>,
        cmp: NumericComparator,
        right: Box<Expression>,
    },
    NumericCompound {
        left: Box<Expression>,
        op: NumericOperator,
        right: Box<Expression>,
    },
    PropositionalCompound {
        left: Box<Expression>,
        op: LogicalOperator,
        right: Box<Expression>,
    },
    Cast {
        expr: Box<Expression>,
        target: Type,
    },
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    Bitvector {
        left: Box<Expression>,
        op: BitvectorOperator,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Declared type of this expression.
    pub fn ty(&self) -> Type {
        match self {
            Expression::Constant(v) => v.ty(),
            Expression::Variable(v) => v.ty,
            Expression::Negation(_)
            | Expression::NumericComparison { .. }
            | Expression::PropositionalCompound { .. } => Type::Bool,
            Expression::UnaryMinus(inner) => inner.ty(),
            Expression::NumericCompound { left, .. } | Expression::Bitvector { left, .. } => {
                left.ty()
            }
            Expression::Cast { target, .. } => *target,
            Expression::FunctionCall { name, .. } => {
                if name == IS_NAN {
                    Type::Bool
                } else {
                    Type::Float64
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    pub fn var(var: Variable) -> Self {
        Expression::Variable(var)
    }

    pub fn negation(expr: Expression) -> Self {
        Expression::Negation(Box::new(expr))
    }

    pub fn unary_minus(expr: Expression) -> Self {
        Expression::UnaryMinus(Box::new(expr))
    }

    pub fn compare(left: Expression, cmp: NumericComparator, right: Expression) -> Self {
        Expression::NumericComparison {
            left: Box::new(left),
            cmp,
            right: Box::new(right),
        }
    }

    pub fn compound(left: Expression, op: NumericOperator, right: Expression) -> Self {
        Expression::NumericCompound {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn logic(left: Expression, op: LogicalOperator, right: Expression) -> Self {
        Expression::PropositionalCompound {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn cast(expr: Expression, target: Type) -> Self {
        Expression::Cast {
            expr: Box::new(expr),
            target,
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    pub fn bitvector(left: Expression, op: BitvectorOperator, right: Expression) -> Self {
        Expression::Bitvector {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::logic(left, LogicalOperator::And, right)
    }
}

/// Left-nested conjunction of `exprs`; the empty conjunction is `true`.
pub fn and_all<I>(exprs: I) -> Expression
where
    I: IntoIterator<Item = Expression>,
{
    exprs
        .into_iter()
        .reduce(Expression::and)
        .unwrap_or(Expression::Constant(Value::Bool(true)))
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(v) => write!(f, "{v}"),
            Expression::Variable(v) => write!(f, "{v}"),
            Expression::Negation(e) => write!(f, "!{e}"),
            Expression::UnaryMinus(e) => write!(f, "-{e}"),
            Expression::NumericComparison { left, cmp, right } => {
                write!(f, "({left} {cmp} {right})")
            }
            Expression::NumericCompound { left, op, right } => write!(f, "({left} {op} {right})"),
            Expression::PropositionalCompound { left, op, right } => {
                write!(f, "({left} {op} {right})")
            }
            Expression::Bitvector { left, op, right } => write!(f, "({left} {op} {right})"),
            Expression::Cast { expr, target } => write!(f, "(({target}) {expr})"),
            Expression::FunctionCall { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
