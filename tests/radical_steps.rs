//! Pins the derivation-step and display-format text the tools render.

use calcforge::core::radical::{self, Term};

#[test]
fn derivation_steps_for_72() {
    let s = radical::simplify(72, 2);
    assert_eq!(s.steps.len(), 5);
    insta::assert_snapshot!(&s.steps[0], @"72 = 2 × 2 × 2 × 3 × 3");
    insta::assert_snapshot!(&s.steps[1], @"Prime powers: 2^3 × 3^2");
    insta::assert_snapshot!(&s.steps[2], @"Outside the root: 2 × 3 = 6");
    insta::assert_snapshot!(&s.steps[3], @"Under the root: 2");
    insta::assert_snapshot!(&s.steps[4], @"√72 = 6√2");
}

#[test]
fn derivation_steps_for_perfect_square() {
    let s = radical::simplify(64, 2);
    assert_eq!(s.steps.len(), 4);
    insta::assert_snapshot!(&s.steps[0], @"64 = 2 × 2 × 2 × 2 × 2 × 2");
    insta::assert_snapshot!(&s.steps[1], @"Prime powers: 2^6");
    insta::assert_snapshot!(&s.steps[2], @"Outside the root: 2^3 = 8");
    insta::assert_snapshot!(&s.steps[3], @"√64 = 8");
}

#[test]
fn derivation_steps_for_irreducible() {
    let s = radical::simplify(15, 2);
    assert_eq!(s.steps.len(), 3);
    insta::assert_snapshot!(&s.steps[2], @"No prime appears 2 or more times, so √15 cannot be simplified further");
}

#[test]
fn derivation_steps_for_cube_root() {
    let s = radical::simplify(54, 3);
    insta::assert_snapshot!(s.steps.last().unwrap(), @"∛54 = 3∛2");
}

#[test]
fn term_display_forms() {
    insta::assert_snapshot!(radical::format_term(&Term::new(2.5, 7)), @"2.5√7");
    insta::assert_snapshot!(radical::format_term(&Term::new(-1.0, 3)), @"-√3");
    insta::assert_snapshot!(radical::format_term(&Term::new(6.0, 1)), @"6");
    insta::assert_snapshot!(radical::format_term(&Term::new(0.0, 5)), @"0");
}

#[test]
fn fractional_division_display() {
    let outcome = radical::divide(Term::new(1.0, 2), Term::new(1.0, 3));
    insta::assert_snapshot!(outcome.display(), @"1√(2/3) ≈ 0.8165");
}
