//! Operator tags of source expressions.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericComparator {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericOperator {
    Plus,
    Minus,
    Mul,
    Div,
    /// Remainder with the sign of the dividend
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
    Equiv,
    Imply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitvectorOperator {
    And,
    Or,
    Xor,
    ShiftL,
    /// Arithmetic right shift
    ShiftR,
    /// Logical right shift
    ShiftUR,
}

impl BitvectorOperator {
    pub fn is_shift(self) -> bool {
        matches!(
            self,
            BitvectorOperator::ShiftL | BitvectorOperator::ShiftR | BitvectorOperator::ShiftUR
        )
    }
}

impl fmt::Display for NumericComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NumericComparator::Eq => "==",
            NumericComparator::Ne => "!=",
            NumericComparator::Ge => ">=",
            NumericComparator::Gt => ">",
            NumericComparator::Le => "<=",
            NumericComparator::Lt => "<",
        };
        f.write_str(s)
    }
}

impl fmt::Display for NumericOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NumericOperator::Plus => "+",
            NumericOperator::Minus => "-",
            NumericOperator::Mul => "*",
            NumericOperator::Div => "/",
            NumericOperator::Rem => "%",
        };
        f.write_str(s)
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
            LogicalOperator::Xor => "^",
            LogicalOperator::Equiv => "<=>",
            LogicalOperator::Imply => "=>",
        };
        f.write_str(s)
    }
}

impl fmt::Display for BitvectorOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BitvectorOperator::And => "&",
            BitvectorOperator::Or => "|",
            BitvectorOperator::Xor => "^",
            BitvectorOperator::ShiftL => "<<",
            BitvectorOperator::ShiftR => ">>",
            BitvectorOperator::ShiftUR => ">>>",
        };
        f.write_str(s)
    }
}
