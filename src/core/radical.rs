//! Radical (nth-root) simplification engine.
//!
//! Factorization by trial division, coefficient/remainder extraction with a
//! human-readable derivation, decimal root evaluation with perfect-root
//! detection, and add/sub/mul/div over `coefficient·√radicand` terms
//! (arithmetic is fixed at index 2).

use std::collections::BTreeMap;

use serde::Serialize;

/// Canonical decomposition of a radical: `coefficient^index * radicand`
/// reconstructs the original value, and no prime factor of `radicand` has
/// multiplicity >= `index`. Re-simplifying the output changes nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simplified {
    pub index: u32,
    pub coefficient: i64,
    pub radicand: i64,
    /// Derivation steps in display order.
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootValue {
    pub value: f64,
    /// Set when `value` is a whole number whose `index`-th power
    /// reconstructs the radicand.
    pub exact: Option<i64>,
}

/// One `coefficient · √radicand` term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Term {
    pub coefficient: f64,
    pub radicand: i64,
}

impl Term {
    pub fn new(coefficient: f64, radicand: i64) -> Self {
        Self { coefficient, radicand }
    }
}

/// Outcome of a binary operation on two terms. `Uncombined` and `Undefined`
/// are expected terminal states, not failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArithOutcome {
    Exact { term: Term, display: String },
    Uncombined { display: String },
    Undefined { reason: String },
}

impl ArithOutcome {
    pub fn display(&self) -> &str {
        match self {
            ArithOutcome::Exact { display, .. } => display,
            ArithOutcome::Uncombined { display } => display,
            ArithOutcome::Undefined { reason } => reason,
        }
    }
}

/// Prime factors of `n` with multiplicity, in non-decreasing order, by trial
/// division up to sqrt(n). `n` is absolute-valued first; `n <= 1` returns
/// the degenerate single-element list `[n]`.
pub fn prime_factors(n: i64) -> Vec<i64> {
    let mut n = n.abs();
    if n <= 1 {
        return vec![n];
    }
    let mut factors = Vec::new();
    let mut d = 2i64;
    while d * d <= n {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Root glyph for an index: √, ∛, ∜, then `n√` for higher indices.
pub fn root_symbol(index: u32) -> String {
    match index {
        2 => "√".to_string(),
        3 => "∛".to_string(),
        4 => "∜".to_string(),
        n => format!("{n}√"),
    }
}

/// Decomposes `radicand` under the given root index. Each prime's
/// multiplicity is split by integer division against `index`: the quotient
/// powers multiply into the coefficient, the remainder powers stay under
/// the root. A non-positive radicand yields the `(0, radicand)` degenerate
/// with an explanatory step instead of panicking.
pub fn simplify(radicand: i64, index: u32) -> Simplified {
    let symbol = root_symbol(index);
    if index < 2 {
        return Simplified {
            index,
            coefficient: 0,
            radicand,
            steps: vec!["the root index must be 2 or greater".to_string()],
        };
    }
    if radicand <= 0 {
        return Simplified {
            index,
            coefficient: 0,
            radicand,
            steps: vec![format!(
                "{symbol}{radicand} cannot be simplified; the radicand must be a positive integer"
            )],
        };
    }
    if radicand == 1 {
        return Simplified {
            index,
            coefficient: 1,
            radicand: 1,
            steps: vec![format!("{symbol}1 = 1")],
        };
    }

    let factors = prime_factors(radicand);
    let mut steps = vec![format!(
        "{} = {}",
        radicand,
        factors.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(" × ")
    )];

    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    for f in &factors {
        *counts.entry(*f).or_insert(0) += 1;
    }
    steps.push(format!(
        "Prime powers: {}",
        counts
            .iter()
            .map(|(p, c)| format!("{p}^{c}"))
            .collect::<Vec<_>>()
            .join(" × ")
    ));

    let mut coefficient = 1i64;
    let mut remaining = 1i64;
    let mut extracted: Vec<String> = Vec::new();
    for (&p, &c) in &counts {
        let out = c / index;
        let left = c % index;
        if out > 0 {
            coefficient *= p.pow(out);
            extracted.push(if out == 1 { p.to_string() } else { format!("{p}^{out}") });
        }
        if left > 0 {
            remaining *= p.pow(left);
        }
    }

    if coefficient == 1 {
        steps.push(format!(
            "No prime appears {index} or more times, so {symbol}{radicand} cannot be simplified further"
        ));
        return Simplified { index, coefficient: 1, radicand, steps };
    }

    let extracted_list = extracted.join(" × ");
    if extracted_list == coefficient.to_string() {
        steps.push(format!("Outside the root: {extracted_list}"));
    } else {
        steps.push(format!("Outside the root: {extracted_list} = {coefficient}"));
    }
    if remaining > 1 {
        steps.push(format!("Under the root: {remaining}"));
    }

    let mut result = Simplified { index, coefficient, radicand: remaining, steps };
    let final_form = format_simplified(&result);
    result.steps.push(format!("{symbol}{radicand} = {final_form}"));
    result
}

/// Renders a simplified radical: `6√2`, `√15`, `8`.
pub fn format_simplified(s: &Simplified) -> String {
    let symbol = root_symbol(s.index);
    if s.radicand == 1 {
        s.coefficient.to_string()
    } else if s.coefficient == 1 {
        format!("{symbol}{}", s.radicand)
    } else {
        format!("{}{symbol}{}", s.coefficient, s.radicand)
    }
}

/// Decimal value of `radicand^(1/index)`.
///
/// The perfect-root check rounds the float result and accepts it as exact
/// when its `index`-th power reconstructs the radicand within an absolute
/// 0.0001, which absorbs the round-trip error of `powf` (√64 is exactly 8,
/// √72 stays ≈ 8.4853).
pub fn evaluate(radicand: f64, index: u32) -> Result<RootValue, &'static str> {
    if index < 2 {
        return Err("the root index must be 2 or greater");
    }
    if radicand < 0.0 && index % 2 == 0 {
        return Err("cannot take an even root of a negative number");
    }
    let magnitude = radicand.abs().powf(1.0 / f64::from(index));
    let value = if radicand < 0.0 { -magnitude } else { magnitude };
    let rounded = value.round();
    if (rounded.powi(index as i32) - radicand).abs() < 0.0001 {
        Ok(RootValue { value: rounded, exact: Some(rounded as i64) })
    } else {
        Ok(RootValue { value, exact: None })
    }
}

pub fn add(a: Term, b: Term) -> ArithOutcome {
    combine(a, b, '+')
}

pub fn subtract(a: Term, b: Term) -> ArithOutcome {
    combine(a, b, '-')
}

// Like terms (equal radicands) combine on the coefficient; unlike terms stay
// an expression.
fn combine(a: Term, b: Term, op: char) -> ArithOutcome {
    if a.radicand <= 0 || b.radicand <= 0 {
        return ArithOutcome::Undefined {
            reason: "term radicands must be positive integers".to_string(),
        };
    }
    if a.radicand == b.radicand {
        let coefficient = if op == '+' {
            a.coefficient + b.coefficient
        } else {
            a.coefficient - b.coefficient
        };
        let term = Term::new(coefficient, a.radicand);
        ArithOutcome::Exact { display: format_term(&term), term }
    } else {
        ArithOutcome::Uncombined {
            display: format!("{} {op} {}", format_term(&a), format_term(&b)),
        }
    }
}

pub fn multiply(a: Term, b: Term) -> ArithOutcome {
    if a.radicand <= 0 || b.radicand <= 0 {
        return ArithOutcome::Undefined {
            reason: "term radicands must be positive integers".to_string(),
        };
    }
    let product = simplify(a.radicand * b.radicand, 2);
    let term = Term::new(
        a.coefficient * b.coefficient * product.coefficient as f64,
        product.radicand,
    );
    ArithOutcome::Exact { display: format_term(&term), term }
}

pub fn divide(a: Term, b: Term) -> ArithOutcome {
    if b.coefficient == 0.0 || b.radicand == 0 {
        return ArithOutcome::Undefined { reason: "cannot divide by zero".to_string() };
    }
    if a.radicand <= 0 || b.radicand < 0 {
        return ArithOutcome::Undefined {
            reason: "term radicands must be positive integers".to_string(),
        };
    }
    let coefficient = a.coefficient / b.coefficient;
    if a.radicand % b.radicand == 0 {
        let quotient = simplify(a.radicand / b.radicand, 2);
        let term = Term::new(coefficient * quotient.coefficient as f64, quotient.radicand);
        ArithOutcome::Exact { display: format_term(&term), term }
    } else {
        let approx = coefficient * (a.radicand as f64 / b.radicand as f64).sqrt();
        ArithOutcome::Uncombined {
            display: format!(
                "{}√({}/{}) ≈ {:.4}",
                format_coefficient(coefficient),
                a.radicand,
                b.radicand,
                approx
            ),
        }
    }
}

/// Renders a term: `6√2`, `-√3`, `2.5√7`, `0`.
pub fn format_term(t: &Term) -> String {
    if t.coefficient == 0.0 {
        return "0".to_string();
    }
    if t.radicand == 1 {
        return format_coefficient(t.coefficient);
    }
    if (t.coefficient - 1.0).abs() < f64::EPSILON {
        format!("√{}", t.radicand)
    } else if (t.coefficient + 1.0).abs() < f64::EPSILON {
        format!("-√{}", t.radicand)
    } else {
        format!("{}√{}", format_coefficient(t.coefficient), t.radicand)
    }
}

// Whole coefficients print without a decimal point; everything else is
// trimmed to at most four places. Cosmetic only.
fn format_coefficient(c: f64) -> String {
    if (c - c.round()).abs() < 1e-9 {
        format!("{}", c.round() as i64)
    } else {
        let s = format!("{c:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(72), vec![2, 2, 2, 3, 3]);
        assert_eq!(prime_factors(13), vec![13]);
        assert_eq!(prime_factors(1), vec![1]);
        assert_eq!(prime_factors(0), vec![0]);
        assert_eq!(prime_factors(-18), vec![2, 3, 3]);
    }

    #[test]
    fn test_simplify_worked_example() {
        let s = simplify(72, 2);
        assert_eq!(s.coefficient, 6);
        assert_eq!(s.radicand, 2);
        assert_eq!(format_simplified(&s), "6√2");
    }

    #[test]
    fn test_simplify_perfect_power() {
        let s = simplify(64, 2);
        assert_eq!((s.coefficient, s.radicand), (8, 1));
        assert_eq!(format_simplified(&s), "8");
    }

    #[test]
    fn test_simplify_cube() {
        let s = simplify(54, 3);
        assert_eq!((s.coefficient, s.radicand), (3, 2));
        assert_eq!(format_simplified(&s), "3∛2");
    }

    #[test]
    fn test_simplify_irreducible() {
        let s = simplify(15, 2);
        assert_eq!((s.coefficient, s.radicand), (1, 15));
        assert!(s.steps.last().unwrap().contains("cannot be simplified further"));
    }

    #[test]
    fn test_simplify_degenerates() {
        assert_eq!(simplify(1, 2).coefficient, 1);
        let neg = simplify(-5, 2);
        assert_eq!((neg.coefficient, neg.radicand), (0, -5));
        let zero = simplify(0, 3);
        assert_eq!((zero.coefficient, zero.radicand), (0, 0));
        assert_eq!(simplify(8, 1).coefficient, 0);
        assert_eq!(simplify(8, 0).coefficient, 0);
    }

    #[test]
    fn test_evaluate_perfect_and_inexact() {
        let exact = evaluate(64.0, 2).unwrap();
        assert_eq!(exact.exact, Some(8));
        assert_eq!(exact.value, 8.0);

        let inexact = evaluate(72.0, 2).unwrap();
        assert_eq!(inexact.exact, None);
        assert!((inexact.value - 8.4853).abs() < 0.001);
    }

    #[test]
    fn test_evaluate_negative_radicands() {
        assert!(evaluate(-16.0, 2).is_err());
        let cube = evaluate(-8.0, 3).unwrap();
        assert_eq!(cube.exact, Some(-2));
        assert_eq!(cube.value, -2.0);
    }

    #[test]
    fn test_add_like_and_unlike() {
        match add(Term::new(3.0, 5), Term::new(2.0, 5)) {
            ArithOutcome::Exact { term, display } => {
                assert_eq!(term, Term::new(5.0, 5));
                assert_eq!(display, "5√5");
            }
            other => panic!("expected exact sum, got {other:?}"),
        }
        match add(Term::new(3.0, 5), Term::new(2.0, 3)) {
            ArithOutcome::Uncombined { display } => assert_eq!(display, "3√5 + 2√3"),
            other => panic!("expected uncombined, got {other:?}"),
        }
    }

    #[test]
    fn test_multiply_resimplifies() {
        match multiply(Term::new(2.0, 3), Term::new(4.0, 5)) {
            ArithOutcome::Exact { term, display } => {
                assert_eq!(term, Term::new(8.0, 15));
                assert_eq!(display, "8√15");
            }
            other => panic!("expected exact product, got {other:?}"),
        }
        // 3√6 × 2√6: the product radicand 36 collapses entirely.
        match multiply(Term::new(3.0, 6), Term::new(2.0, 6)) {
            ArithOutcome::Exact { term, .. } => assert_eq!(term, Term::new(36.0, 1)),
            other => panic!("expected exact product, got {other:?}"),
        }
    }

    #[test]
    fn test_divide_guards_and_paths() {
        assert!(matches!(
            divide(Term::new(4.0, 6), Term::new(0.0, 2)),
            ArithOutcome::Undefined { .. }
        ));
        assert!(matches!(
            divide(Term::new(4.0, 6), Term::new(2.0, 0)),
            ArithOutcome::Undefined { .. }
        ));
        match divide(Term::new(4.0, 8), Term::new(2.0, 2)) {
            ArithOutcome::Exact { term, display } => {
                assert_eq!(term, Term::new(4.0, 1));
                assert_eq!(display, "4");
            }
            other => panic!("expected exact quotient, got {other:?}"),
        }
        match divide(Term::new(1.0, 2), Term::new(1.0, 3)) {
            ArithOutcome::Uncombined { display } => assert!(display.contains("√(2/3)")),
            other => panic!("expected fractional radical, got {other:?}"),
        }
    }
}
