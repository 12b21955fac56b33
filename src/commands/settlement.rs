//! src/commands/settlement.rs

use anyhow::Result;
use colored::Colorize;

use crate::core::settlement::{self, Severity};
use crate::core::tables;

pub fn main(
    medical: f64,
    wages: f64,
    property: f64,
    severity: Severity,
    json: bool,
) -> Result<()> {
    let estimate = match settlement::estimate(medical, wages, property, severity) {
        Ok(e) => e,
        Err(msg) => {
            if json {
                println!("{}", serde_json::json!({ "error": msg }));
            } else {
                println!("{} {}", "cannot compute:".yellow().bold(), msg);
            }
            return Ok(());
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "severity": severity.label(),
                "estimate": estimate,
            }))?
        );
        return Ok(());
    }

    println!(
        "{} ${:.2} – ${:.2}",
        "Estimated settlement range:".cyan().bold(),
        estimate.low,
        estimate.high
    );
    println!(
        "{} ${:.2} medical + wages, ${property:.2} property damage",
        "Basis:".bold(),
        estimate.specials
    );
    println!();
    println!("{}", "Severity multipliers".bold());
    for (label, low, high) in tables::SETTLEMENT_MULTIPLIERS {
        let marker = if *label == severity.label() { "▸" } else { " " };
        println!("  {marker} {label:<13} {low:.1}× – {high:.1}×");
    }
    println!(
        "{}",
        "Planning estimate only; outcomes depend on liability and policy limits.".dimmed()
    );
    Ok(())
}
