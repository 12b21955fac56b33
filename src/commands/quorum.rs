//! src/commands/quorum.rs
//! The one tool whose validation blocks: an out-of-range percentage fails
//! the command instead of printing an inline note.

use anyhow::Result;
use colored::Colorize;

use crate::core::quorum;

pub fn main(members: u64, percent: f64, attending: Option<u64>, json: bool) -> Result<()> {
    let result = quorum::check(members, percent, attending)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {} of {} members ({percent}%)",
        "Quorum required:".cyan().bold(),
        result.required.to_string().bold(),
        result.members
    );
    if let (Some(attending), Some(met)) = (result.attending, result.met) {
        if met {
            println!("{} {attending} attending — quorum met", "✓".green().bold());
        } else {
            println!(
                "{} {attending} attending — {} short",
                "✗".red().bold(),
                result.required - attending
            );
        }
    }
    Ok(())
}
