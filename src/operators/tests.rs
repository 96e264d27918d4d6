//! Unit tests for the operator table and scalar evaluation.

use pretty_assertions::assert_eq;

use super::{
    eval::{default_value, evaluate, if_value, ifnot_value, is_truthy},
    table::*,
};

#[test]
fn test_is_binary_op() {
    for op in [
        "+", "-", "*", "/", "%", "^", "==", "!=", ">", "<", ">=", "<=", "and", "or", "unless",
        "if", "ifnot", "default",
    ] {
        assert!(is_binary_op(op), "{} should be a binary op", op);
    }

    for name in ["=", "=~", "!~", "!", "on", "bool", "sum", "", "andx"] {
        assert!(!is_binary_op(name), "{} should not be a binary op", name);
    }
}

#[test]
fn test_binary_op_case_insensitive() {
    assert!(is_binary_op("AND"));
    assert!(is_binary_op("And"));
    assert!(is_binary_op("IfNot"));
    assert_eq!(binary_op_priority("AND"), 2);
    assert_eq!(binary_op_priority("and"), 2);
    assert_eq!(binary_op_priority("And"), 2);
    assert_eq!(BinaryOp::from_name("UNLESS"), Some(BinaryOp::Unless));
}

#[test]
fn test_binary_op_priority() {
    assert_eq!(binary_op_priority("default"), -1);
    assert_eq!(binary_op_priority("if"), 0);
    assert_eq!(binary_op_priority("ifnot"), 0);
    assert_eq!(binary_op_priority("or"), 1);
    assert_eq!(binary_op_priority("and"), 2);
    assert_eq!(binary_op_priority("unless"), 2);
    for op in ["==", "!=", ">", "<", ">=", "<="] {
        assert_eq!(binary_op_priority(op), 3);
    }
    assert_eq!(binary_op_priority("+"), 4);
    assert_eq!(binary_op_priority("-"), 4);
    assert_eq!(binary_op_priority("*"), 5);
    assert_eq!(binary_op_priority("/"), 5);
    assert_eq!(binary_op_priority("%"), 5);
    assert_eq!(binary_op_priority("^"), 6);
}

#[test]
fn test_unknown_priority_defaults_to_zero() {
    assert_eq!(binary_op_priority("sum"), 0);
    assert_eq!(binary_op_priority(""), 0);
}

#[test]
fn test_right_associativity() {
    assert!(is_right_associative_binary_op("^"));
    assert!(BinaryOp::Pow.is_right_associative());

    for op in ["+", "-", "*", "/", "%", "==", "and", "or", "default"] {
        assert!(!is_right_associative_binary_op(op));
    }
}

#[test]
fn test_comparison_and_logical_set() {
    for op in ["==", "!=", ">", "<", ">=", "<="] {
        assert!(is_binary_op_comparison(op));
        assert!(!is_binary_op_logical_set(op));
    }
    for op in ["and", "OR", "Unless"] {
        assert!(is_binary_op_logical_set(op));
        assert!(!is_binary_op_comparison(op));
    }
    assert!(!is_binary_op_comparison("+"));
    assert!(!is_binary_op_logical_set("if"));
}

#[test]
fn test_modifiers() {
    assert!(is_binary_op_group_modifier("on"));
    assert!(is_binary_op_group_modifier("IGNORING"));
    assert!(is_binary_op_join_modifier("group_left"));
    assert!(is_binary_op_join_modifier("Group_Right"));
    assert!(is_binary_op_bool_modifier("bool"));
    assert!(is_binary_op_bool_modifier("BOOL"));

    assert!(!is_binary_op_group_modifier("group_left"));
    assert!(!is_binary_op_join_modifier("on"));
    assert!(!is_binary_op_bool_modifier("and"));

    assert_eq!(modifier_kind("ignoring"), Some(ModifierKind::Group));
    assert_eq!(modifier_kind("without"), None);
}

#[test]
fn test_scan_binary_op_prefix() {
    assert_eq!(scan_binary_op_prefix(">=5"), 2);
    assert_eq!(scan_binary_op_prefix("> 5"), 1);
    assert_eq!(scan_binary_op_prefix("==x"), 2);
    assert_eq!(scan_binary_op_prefix("!=x"), 2);
    assert_eq!(scan_binary_op_prefix("=~x"), 0);
    assert_eq!(scan_binary_op_prefix("ifnot foo"), 5);
    assert_eq!(scan_binary_op_prefix("IFNOT foo"), 5);
    assert_eq!(scan_binary_op_prefix("if foo"), 2);
    assert_eq!(scan_binary_op_prefix("x"), 0);
    assert_eq!(scan_binary_op_prefix(""), 0);
}

#[test]
fn test_scan_binary_op_prefix_multibyte_input() {
    assert_eq!(scan_binary_op_prefix("é+"), 0);
    assert_eq!(scan_binary_op_prefix("+é"), 1);
}

#[test]
fn test_display_round_trips_names() {
    for (name, op) in BINARY_OPS.iter() {
        assert_eq!(op.as_str(), *name);
        assert_eq!(op.to_string(), *name);
    }
}

#[test]
fn test_evaluate_comparison() {
    assert_eq!(evaluate("==", 3.0, 3.0, false), 3.0);
    assert!(evaluate("==", 3.0, 4.0, false).is_nan());
    assert_eq!(evaluate("==", 3.0, 4.0, true), 0.0);
    assert_eq!(evaluate("==", 3.0, 3.0, true), 1.0);

    assert_eq!(evaluate("!=", 3.0, 4.0, false), 3.0);
    assert_eq!(evaluate(">", 5.0, 4.0, false), 5.0);
    assert!(evaluate("<", 5.0, 4.0, false).is_nan());
    assert_eq!(evaluate(">=", 4.0, 4.0, true), 1.0);
    assert_eq!(evaluate("<=", 5.0, 4.0, true), 0.0);
}

#[test]
fn test_every_comparison_honors_bool() {
    for op in BINARY_OPS.values().filter(|op| op.is_comparison()) {
        let as_bool = op.evaluate(5.0, 4.0, true);
        assert!(as_bool == 0.0 || as_bool == 1.0, "{} gave {}", op, as_bool);

        let filtered = op.evaluate(5.0, 4.0, false);
        assert!(filtered == 5.0 || filtered.is_nan(), "{} gave {}", op, filtered);
        assert_eq!(filtered.is_nan(), as_bool == 0.0, "{}", op);
    }

    assert_eq!(BinaryOp::Lte.evaluate(4.0, 4.0, false), 4.0);
    assert!(BinaryOp::Lte.evaluate(5.0, 4.0, false).is_nan());
}

#[test]
fn test_evaluate_comparison_with_nan() {
    assert!(evaluate("==", f64::NAN, f64::NAN, false).is_nan());
    assert_eq!(evaluate("==", f64::NAN, 1.0, true), 0.0);
    assert_eq!(evaluate("!=", f64::NAN, 1.0, true), 1.0);
}

#[test]
fn test_evaluate_arithmetic() {
    assert_eq!(evaluate("+", 2.0, 3.0, false), 5.0);
    assert_eq!(evaluate("-", 2.0, 3.0, false), -1.0);
    assert_eq!(evaluate("*", 2.0, 3.0, false), 6.0);
    assert_eq!(evaluate("/", 3.0, 2.0, false), 1.5);
    assert_eq!(evaluate("%", 7.0, 3.0, false), 1.0);
    assert_eq!(evaluate("%", -7.0, 3.0, false), -1.0);
    assert_eq!(evaluate("^", 2.0, 10.0, false), 1024.0);

    // bool only affects comparisons
    assert_eq!(evaluate("+", 2.0, 3.0, true), 5.0);
}

#[test]
fn test_evaluate_ieee_semantics() {
    assert_eq!(evaluate("/", 1.0, 0.0, false), f64::INFINITY);
    assert_eq!(evaluate("/", -1.0, 0.0, false), f64::NEG_INFINITY);
    assert!(evaluate("/", 0.0, 0.0, false).is_nan());
    assert!(evaluate("%", 1.0, 0.0, false).is_nan());
    assert_eq!(evaluate("^", 0.0, 0.0, false), 1.0);
}

#[test]
fn test_evaluate_logical_set() {
    assert_eq!(evaluate("and", 1.0, 2.0, false), 0.0);
    assert_eq!(evaluate("or", 1.0, 2.0, false), 0.0);
    assert!(evaluate("unless", 1.0, 2.0, false).is_nan());
}

#[test]
fn test_evaluate_conditional() {
    assert_eq!(evaluate("default", 1.0, 2.0, false), 1.0);
    assert_eq!(evaluate("default", f64::NAN, 2.0, false), 2.0);

    assert_eq!(evaluate("if", 1.0, 0.0, false), 1.0);
    assert!(evaluate("if", 1.0, f64::NAN, false).is_nan());

    assert!(evaluate("ifnot", 1.0, 0.0, false).is_nan());
    assert_eq!(evaluate("ifnot", 1.0, f64::NAN, false), 1.0);
}

#[test]
fn test_evaluate_case_insensitive_names() {
    assert!(evaluate("UNLESS", 1.0, 2.0, false).is_nan());
    assert_eq!(evaluate("Default", f64::NAN, 2.0, false), 2.0);
}

#[test]
#[should_panic(expected = "BUG: unexpected binary op")]
fn test_evaluate_unknown_op_panics() {
    evaluate("=~", 1.0, 2.0, false);
}

#[test]
fn test_conditional_helpers() {
    assert!(is_truthy(0.0));
    assert!(is_truthy(f64::INFINITY));
    assert!(!is_truthy(f64::NAN));

    assert_eq!(default_value(3.0, 4.0), 3.0);
    assert_eq!(if_value(3.0, 4.0), 3.0);
    assert!(ifnot_value(3.0, 4.0).is_nan());
}
