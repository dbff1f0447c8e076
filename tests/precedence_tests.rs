use tinytac::evaluate_expression;

#[test]
fn arithmetic_precedence_mul_before_add() {
  // 1 + 2 * 3 = 7 (mul before add)
  assert_eq!(evaluate_expression("1 + 2 * 3").unwrap().value, 7);
}

#[test]
fn parentheses_override() {
  // (1 + 2) * 3 = 9 (parentheses override)
  assert_eq!(evaluate_expression("(1 + 2) * 3").unwrap().value, 9);
}

#[test]
fn left_associativity_sub() {
  // 10 - 2 - 3 = (10 - 2) - 3 = 5
  assert_eq!(evaluate_expression("10 - 2 - 3").unwrap().value, 5);
}

#[test]
fn left_associativity_div() {
  // 100 / 10 / 5 = (100 / 10) / 5 = 2
  assert_eq!(evaluate_expression("100 / 10 / 5").unwrap().value, 2);
}

#[test]
fn mixed_chain_folds_left() {
  // 2 + 3 * 4 - 5 = (2 + 12) - 5 = 9
  assert_eq!(evaluate_expression("2 + 3 * 4 - 5").unwrap().value, 9);
}

#[test]
fn division_truncates() {
  assert_eq!(evaluate_expression("7 / 2").unwrap().value, 3);
  assert_eq!(evaluate_expression("9 / 4 / 2").unwrap().value, 1);
}

#[test]
fn nested_groups() {
  assert_eq!(evaluate_expression("((2 + 3) * (4 - 1)) / 5").unwrap().value, 3);
}
