//! src/commands/related.rs

use anyhow::Result;
use colored::Colorize;

use crate::core::related;
use crate::core::tables;

pub fn main(slug: &str, json: bool) -> Result<()> {
    if tables::find_tool(slug).is_none() && !json {
        println!(
            "{} unknown tool '{slug}'; listing other calculators",
            "note:".yellow().bold()
        );
    }
    let picks = related::related_tools(slug, 3);

    if json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    for tool in picks {
        println!(
            "  {}  [{}] {}",
            tool.slug.bold(),
            tool.category.label(),
            tool.blurb
        );
    }
    Ok(())
}
