mod common;
use common::*;
use srpn::mach::Runtime;

#[test]
fn test_push_order() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "1 2 3 d"), "1\n2\n3\n");
}

#[test]
fn test_dump_empty() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "d"), "-2147483648\n");
}

#[test]
fn test_twenty_fourth_push_overflows() {
    let mut r = Runtime::default();
    for n in 1..=23 {
        assert_eq!(eval(&mut r, &n.to_string()), "");
    }
    assert_eq!(eval(&mut r, "24"), "Stack overflow.\n");
    // still exactly the first 23 values, in order
    let expected = (1..=23).map(|n| format!("{}\n", n)).collect::<String>();
    assert_eq!(eval(&mut r, "d"), expected);
}

#[test]
fn test_operator_at_capacity_overflows() {
    let mut r = Runtime::default();
    for n in 1..=23 {
        r.enter(&n.to_string());
    }
    assert_eq!(eval(&mut r, "+"), "Stack overflow.\n");
    assert_eq!(eval(&mut r, "="), "23\n");
}

#[test]
fn test_equals_empty() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "="), "Stack empty.\n");
}

#[test]
fn test_equals_is_idempotent() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "5 = = ="), "5\n5\n5\n");
    assert_eq!(eval(&mut r, "d"), "5\n");
}

#[test]
fn test_operator_underflow() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "5 +"), "Stack underflow.\n");
    assert_eq!(eval(&mut r, "d"), "5\n");
}

#[test]
fn test_underflow_on_empty_stack() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "*"), "Stack underflow.\n");
}

#[test]
fn test_state_persists_across_lines() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "10"), "");
    assert_eq!(eval(&mut r, "20"), "");
    assert_eq!(eval(&mut r, "+"), "");
    assert_eq!(eval(&mut r, "="), "30\n");
}

#[test]
fn test_diagnostics_do_not_abort_the_line() {
    let mut r = Runtime::default();
    assert_eq!(eval(&mut r, "+ 1 2 + ="), "Stack underflow.\n3\n");
}
