//! src/commands/radical.rs
//! Radical tool output: quick answer, derivation steps, decimal value.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::core::radical::{self, ArithOutcome, Term};

#[derive(Copy, Clone, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    fn glyph(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "×",
            ArithOp::Div => "÷",
        }
    }
}

pub fn simplify(radicand: i64, index: u32, cfg: &Config, json: bool) -> Result<()> {
    let s = radical::simplify(radicand, index);
    if json {
        println!("{}", serde_json::to_string_pretty(&s)?);
        return Ok(());
    }
    // Degenerate inputs (non-positive radicand, index below 2) carry their
    // explanation as the only step.
    if s.coefficient == 0 {
        println!("{} {}", "cannot compute:".yellow().bold(), s.steps[0]);
        return Ok(());
    }
    let symbol = radical::root_symbol(index);
    println!(
        "{} {symbol}{radicand} = {}",
        "Quick answer:".cyan().bold(),
        radical::format_simplified(&s).bold()
    );
    for (i, step) in s.steps.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), step);
    }
    if let Ok(root) = radical::evaluate(radicand as f64, index) {
        match root.exact {
            Some(n) => println!("{} {n} (exact)", "Decimal:".bold()),
            None => println!("{} {:.*}", "Decimal:".bold(), cfg.precision, root.value),
        }
    }
    Ok(())
}

pub fn evaluate(radicand: f64, index: u32, cfg: &Config, json: bool) -> Result<()> {
    let symbol = radical::root_symbol(index);
    match radical::evaluate(radicand, index) {
        Ok(root) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&root)?);
            } else {
                match root.exact {
                    Some(n) => println!(
                        "{symbol}{radicand} = {} {}",
                        n.to_string().bold(),
                        "(perfect root)".green()
                    ),
                    None => {
                        println!("{symbol}{radicand} ≈ {:.*}", cfg.precision, root.value)
                    }
                }
            }
        }
        Err(msg) => {
            if json {
                println!("{}", serde_json::json!({ "error": msg }));
            } else {
                println!("{} {}", "cannot compute:".yellow().bold(), msg);
            }
        }
    }
    Ok(())
}

pub fn arith(
    op: ArithOp,
    coef1: f64,
    rad1: i64,
    coef2: f64,
    rad2: i64,
    cfg: &Config,
    json: bool,
) -> Result<()> {
    let a = Term::new(coef1, rad1);
    let b = Term::new(coef2, rad2);
    let outcome = match op {
        ArithOp::Add => radical::add(a, b),
        ArithOp::Sub => radical::subtract(a, b),
        ArithOp::Mul => radical::multiply(a, b),
        ArithOp::Div => radical::divide(a, b),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    let lhs = format!(
        "{} {} {}",
        radical::format_term(&a),
        op.glyph(),
        radical::format_term(&b)
    );
    match &outcome {
        ArithOutcome::Exact { term, display } => {
            println!("{lhs} = {}", display.bold());
            if term.radicand > 1 {
                let approx = term.coefficient * (term.radicand as f64).sqrt();
                println!("{} {:.*}", "Decimal:".bold(), cfg.precision, approx);
            }
        }
        ArithOutcome::Uncombined { display } => {
            println!("{lhs} = {display}");
            println!("{} the terms cannot be combined further", "note:".yellow().bold());
        }
        ArithOutcome::Undefined { reason } => {
            println!("{} {}", "cannot compute:".yellow().bold(), reason);
        }
    }
    Ok(())
}
