use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Every binary operator keyed by its lowercase spelling.
    pub static ref BINARY_OPS: HashMap<&'static str, BinaryOp> = {
        let mut map = HashMap::new();
        // Arithmetic
        map.insert("+", BinaryOp::Plus);
        map.insert("-", BinaryOp::Minus);
        map.insert("*", BinaryOp::Mul);
        map.insert("/", BinaryOp::Div);
        map.insert("%", BinaryOp::Mod);
        map.insert("^", BinaryOp::Pow);

        // Comparison
        map.insert("==", BinaryOp::Eq);
        map.insert("!=", BinaryOp::Neq);
        map.insert(">", BinaryOp::Gt);
        map.insert("<", BinaryOp::Lt);
        map.insert(">=", BinaryOp::Gte);
        map.insert("<=", BinaryOp::Lte);

        // Logical set
        map.insert("and", BinaryOp::And);
        map.insert("or", BinaryOp::Or);
        map.insert("unless", BinaryOp::Unless);

        // Conditional
        map.insert("if", BinaryOp::If);
        map.insert("ifnot", BinaryOp::IfNot);
        map.insert("default", BinaryOp::Default);
        map
    };

    /// Keywords that may follow a binary operator, keyed by lowercase spelling.
    pub static ref MODIFIERS: HashMap<&'static str, ModifierKind> = {
        let mut map = HashMap::new();
        map.insert("on", ModifierKind::Group);
        map.insert("ignoring", ModifierKind::Group);
        map.insert("group_left", ModifierKind::Join);
        map.insert("group_right", ModifierKind::Join);
        map.insert("bool", ModifierKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow,

    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,

    And,
    Or,
    Unless,

    If,
    IfNot,
    Default,
}

impl BinaryOp {
    /// Looks up an operator by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<BinaryOp> {
        BINARY_OPS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Gte => ">=",
            BinaryOp::Lte => "<=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Unless => "unless",
            BinaryOp::If => "if",
            BinaryOp::IfNot => "ifnot",
            BinaryOp::Default => "default",
        }
    }

    /// Precedence of the operator; higher binds tighter.
    ///
    /// See https://prometheus.io/docs/prometheus/latest/querying/operators/#binary-operator-precedence
    pub fn priority(&self) -> i32 {
        match self {
            BinaryOp::Default => -1,
            BinaryOp::If | BinaryOp::IfNot => 0,
            BinaryOp::Or => 1,
            BinaryOp::And | BinaryOp::Unless => 2,
            BinaryOp::Eq
            | BinaryOp::Neq
            | BinaryOp::Gt
            | BinaryOp::Lt
            | BinaryOp::Gte
            | BinaryOp::Lte => 3,
            BinaryOp::Plus | BinaryOp::Minus => 4,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 5,
            BinaryOp::Pow => 6,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        *self == BinaryOp::Pow
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Neq | BinaryOp::Gt | BinaryOp::Lt | BinaryOp::Gte | BinaryOp::Lte
        )
    }

    pub fn is_logical_set(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Unless)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a modifier keyword changes about a binary operation.
///
/// See https://prometheus.io/docs/prometheus/latest/querying/operators/#vector-matching
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ModifierKind {
    /// `on`, `ignoring`
    Group,
    /// `group_left`, `group_right`
    Join,
    /// `bool`
    Bool,
}

pub fn modifier_kind(name: &str) -> Option<ModifierKind> {
    MODIFIERS.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn is_binary_op(name: &str) -> bool {
    BinaryOp::from_name(name).is_some()
}

/// Returns the precedence of `name`, or 0 for unknown names. Callers check
/// `is_binary_op` first.
pub fn binary_op_priority(name: &str) -> i32 {
    BinaryOp::from_name(name).map_or(0, |op| op.priority())
}

pub fn is_right_associative_binary_op(name: &str) -> bool {
    name == "^"
}

pub fn is_binary_op_comparison(name: &str) -> bool {
    BinaryOp::from_name(name).is_some_and(|op| op.is_comparison())
}

pub fn is_binary_op_logical_set(name: &str) -> bool {
    BinaryOp::from_name(name).is_some_and(|op| op.is_logical_set())
}

pub fn is_binary_op_group_modifier(name: &str) -> bool {
    modifier_kind(name) == Some(ModifierKind::Group)
}

pub fn is_binary_op_join_modifier(name: &str) -> bool {
    modifier_kind(name) == Some(ModifierKind::Join)
}

pub fn is_binary_op_bool_modifier(name: &str) -> bool {
    modifier_kind(name) == Some(ModifierKind::Bool)
}

/// Returns the length of the longest binary operator that is a
/// case-insensitive prefix of `s`, or 0 when none is.
pub fn scan_binary_op_prefix(s: &str) -> usize {
    let bytes = s.as_bytes();

    BINARY_OPS
        .keys()
        .filter(|op| op.len() <= bytes.len())
        .filter(|op| bytes[..op.len()].eq_ignore_ascii_case(op.as_bytes()))
        .map(|op| op.len())
        .max()
        .unwrap_or(0)
}
