//! src/commands/mortgage.rs
//! Payment summary, rate presets, and the optional amortization schedule.

use anyhow::Result;
use chrono::{Local, Months};
use colored::Colorize;

use crate::core::finance;
use crate::core::tables;

pub fn main(principal: f64, rate: f64, years: u32, schedule: bool, json: bool) -> Result<()> {
    let summary = match finance::mortgage_summary(principal, rate, years) {
        Ok(s) => s,
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
        if schedule {
            let rows = finance::amortization_schedule(principal, rate, years)
                .map_err(anyhow::Error::msg)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "summary": summary,
                    "schedule": rows,
                }))?
            );
        } else {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        return Ok(());
    }

    println!(
        "{} ${principal:.2} at {rate}% over {years} years",
        "Mortgage:".cyan().bold()
    );
    println!("{} ${:.2}", "Monthly payment:".bold(), summary.monthly_payment);
    println!("{} ${:.2}", "Total paid:".bold(), summary.total_paid);
    println!("{} ${:.2}", "Total interest:".bold(), summary.total_interest);

    if schedule {
        let rows = finance::amortization_schedule(principal, rate, years)
            .map_err(anyhow::Error::msg)?;
        let start = Local::now().date_naive();
        println!();
        println!(
            "{}",
            format!(
                "{:>5}  {:<9}{:>12}{:>12}{:>14}",
                "month", "date", "interest", "principal", "balance"
            )
            .dimmed()
        );
        for row in &rows {
            let label = start
                .checked_add_months(Months::new(row.month))
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default();
            println!(
                "{:>5}  {:<9}{:>12.2}{:>12.2}{:>14.2}",
                row.month, label, row.interest, row.principal, row.balance
            );
        }
    } else {
        println!();
        println!("{}", "Sample rates (reference only)".bold());
        for (label, apr) in tables::RATE_PRESETS {
            println!("  {label:<15} {apr:.2}%");
        }
    }
    Ok(())
}
