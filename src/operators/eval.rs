use super::table::BinaryOp;

/// Evaluates the binary operator `name` over two scalars.
///
/// # Panics
///
/// Panics if `name` is not a binary operator. Callers validate names with
/// `is_binary_op` before evaluating.
pub fn evaluate(name: &str, left: f64, right: f64, is_bool: bool) -> f64 {
    match BinaryOp::from_name(name) {
        Some(op) => op.evaluate(left, right, is_bool),
        None => panic!("BUG: unexpected binary op: {:?}", name),
    }
}

impl BinaryOp {
    /// Evaluates the operator over two scalars.
    ///
    /// Comparisons return `left` when they hold and NaN otherwise, or
    /// 1/0 when `is_bool` is set. `and` and `or` have no scalar meaning and
    /// return 0; `unless` returns NaN.
    pub fn evaluate(&self, left: f64, right: f64, is_bool: bool) -> f64 {
        let compared = |holds: bool| match (is_bool, holds) {
            (true, true) => 1.0,
            (true, false) => 0.0,
            (false, true) => left,
            (false, false) => f64::NAN,
        };

        match self {
            BinaryOp::Plus => left + right,
            BinaryOp::Minus => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
            BinaryOp::Mod => left % right,
            BinaryOp::Pow => left.powf(right),
            BinaryOp::Eq => compared(eq(left, right)),
            BinaryOp::Neq => compared(neq(left, right)),
            BinaryOp::Gt => compared(gt(left, right)),
            BinaryOp::Lt => compared(lt(left, right)),
            BinaryOp::Gte => compared(gte(left, right)),
            BinaryOp::Lte => compared(lte(left, right)),
            // Set operators are resolved over series by the caller
            BinaryOp::And | BinaryOp::Or => 0.0,
            BinaryOp::Unless => f64::NAN,
            BinaryOp::Default => default_value(left, right),
            BinaryOp::If => if_value(left, right),
            BinaryOp::IfNot => ifnot_value(left, right),
        }
    }
}

/// A scalar counts as present for the conditional operators unless it is NaN.
pub fn is_truthy(value: f64) -> bool {
    !value.is_nan()
}

pub fn eq(left: f64, right: f64) -> bool {
    left == right
}

pub fn neq(left: f64, right: f64) -> bool {
    left != right
}

pub fn gt(left: f64, right: f64) -> bool {
    left > right
}

pub fn lt(left: f64, right: f64) -> bool {
    left < right
}

pub fn gte(left: f64, right: f64) -> bool {
    left >= right
}

pub fn lte(left: f64, right: f64) -> bool {
    left <= right
}

/// `left default right`: `left`, falling back to `right` when `left` is absent.
pub fn default_value(left: f64, right: f64) -> f64 {
    if is_truthy(left) {
        left
    } else {
        right
    }
}

/// `left if right`: `left` when `right` is present, NaN otherwise.
pub fn if_value(left: f64, right: f64) -> f64 {
    if is_truthy(right) {
        left
    } else {
        f64::NAN
    }
}

/// `left ifnot right`: `left` when `right` is absent, NaN otherwise.
pub fn ifnot_value(left: f64, right: f64) -> f64 {
    if is_truthy(right) {
        f64::NAN
    } else {
        left
    }
}
