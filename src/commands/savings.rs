//! src/commands/savings.rs

use anyhow::Result;
use colored::Colorize;

use crate::core::finance;

pub fn main(initial: f64, monthly: f64, rate: f64, years: u32, json: bool) -> Result<()> {
    let rows = match finance::savings_projection(initial, monthly, rate, years) {
        Ok(rows) => rows,
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
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} ${initial:.2} plus ${monthly:.2}/month at {rate}% for {years} years",
        "Savings:".cyan().bold()
    );
    println!(
        "{}",
        format!("{:>5}{:>15}{:>15}{:>15}", "year", "contributed", "interest", "balance").dimmed()
    );
    for row in &rows {
        println!(
            "{:>5}{:>15.2}{:>15.2}{:>15.2}",
            row.year, row.contributed, row.interest, row.balance
        );
    }
    if let Some(last) = rows.last() {
        println!(
            "{} ${:.2} ({} contributed, {} earned)",
            "Final balance:".bold(),
            last.balance,
            format!("${:.2}", last.contributed),
            format!("${:.2}", last.interest).green()
        );
    }
    Ok(())
}
