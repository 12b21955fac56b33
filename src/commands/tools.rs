//! src/commands/tools.rs
//! Tool registry listing and per-tool FAQ rendering.

use anyhow::Result;
use colored::Colorize;

use crate::core::tables::{self, Category};

pub fn list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&tables::TOOLS)?);
        return Ok(());
    }
    for category in [Category::Math, Category::Finance, Category::Legal] {
        println!("{}", category.label().cyan().bold());
        for tool in tables::TOOLS.iter().filter(|t| t.category == category) {
            println!("  {}  {} — {}", tool.slug.bold(), tool.name, tool.blurb);
        }
    }
    Ok(())
}

pub fn faq(slug: &str, json: bool) -> Result<()> {
    let Some(entries) = tables::faq_for(slug) else {
        if json {
            println!("{}", serde_json::json!({ "error": "unknown tool" }));
        } else {
            println!("{} no FAQ for '{slug}' (try `calcforge tools`)", "note:".yellow().bold());
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (question, answer) in entries {
        println!("{} {}", "Q:".cyan().bold(), question.bold());
        println!("{} {}", "A:".dimmed(), answer);
        println!();
    }
    Ok(())
}
