use colored::Colorize;
use std::io::{self, Write};

use crate::commands;
use crate::commands::radical::ArithOp;
use crate::config::Config;
use crate::core::input::{parse_int_or_zero, parse_or_zero};
use crate::core::settlement::Severity;
use crate::tui;

pub fn start(cfg: Config) -> anyhow::Result<()> {
    banner();

    loop {
        // Prompt
        print!(
            "{} {} ",
            "⟦CALC⟧".bold().truecolor(0, 210, 190),
            "›".truecolor(255, 200, 0)
        );
        io::stdout().flush().ok();

        // Read line
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Parse
        let mut parts = shell_words(line);
        if parts.is_empty() {
            continue;
        }
        let cmd = parts.remove(0);

        match cmd.as_str() {
            "help" | "?" => print_help(),
            "exit" | "quit" => break,

            "clear" | "cls" => {
                use crossterm::{cursor, execute, terminal::{Clear, ClearType}};
                let _ = execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0));
                banner();
            }

            // Radical tool
            "simplify" => {
                if parts.is_empty() {
                    usage("simplify <radicand> [index]");
                    continue;
                }
                let radicand = parse_int_or_zero(&parts[0]);
                let index = root_index(parts.get(1));
                if let Err(e) = commands::radical::simplify(radicand, index, &cfg, false) {
                    err(e);
                }
            }
            "eval" | "evaluate" => {
                if parts.is_empty() {
                    usage("eval <radicand> [index]");
                    continue;
                }
                let radicand = parse_or_zero(&parts[0]);
                let index = root_index(parts.get(1));
                if let Err(e) = commands::radical::evaluate(radicand, index, &cfg, false) {
                    err(e);
                }
            }
            "add" | "sub" | "mul" | "div" => {
                if parts.len() < 4 {
                    usage(&format!("{cmd} <coef1> <rad1> <coef2> <rad2>"));
                    continue;
                }
                let op = match cmd.as_str() {
                    "add" => ArithOp::Add,
                    "sub" => ArithOp::Sub,
                    "mul" => ArithOp::Mul,
                    _ => ArithOp::Div,
                };
                if let Err(e) = commands::radical::arith(
                    op,
                    parse_or_zero(&parts[0]),
                    parse_int_or_zero(&parts[1]),
                    parse_or_zero(&parts[2]),
                    parse_int_or_zero(&parts[3]),
                    &cfg,
                    false,
                ) {
                    err(e);
                }
            }

            // Money tools
            "mortgage" => {
                if parts.len() < 3 {
                    usage("mortgage <principal> <rate> <years> [--schedule]");
                    continue;
                }
                let schedule = parts.iter().any(|p| p == "--schedule");
                if let Err(e) = commands::mortgage::main(
                    parse_or_zero(&parts[0]),
                    parse_or_zero(&parts[1]),
                    parse_int_or_zero(&parts[2]).max(0) as u32,
                    schedule,
                    false,
                ) {
                    err(e);
                }
            }
            "savings" => {
                if parts.len() < 4 {
                    usage("savings <initial> <monthly> <rate> <years>");
                    continue;
                }
                if let Err(e) = commands::savings::main(
                    parse_or_zero(&parts[0]),
                    parse_or_zero(&parts[1]),
                    parse_or_zero(&parts[2]),
                    parse_int_or_zero(&parts[3]).max(0) as u32,
                    false,
                ) {
                    err(e);
                }
            }
            "settlement" => {
                if parts.len() < 3 {
                    usage("settlement <medical> <wages> <property> [minor|moderate|severe|catastrophic]");
                    continue;
                }
                let severity = match parts.get(3).map(|s| s.as_str()) {
                    Some("minor") => Severity::Minor,
                    Some("severe") => Severity::Severe,
                    Some("catastrophic") => Severity::Catastrophic,
                    _ => Severity::Moderate,
                };
                if let Err(e) = commands::settlement::main(
                    parse_or_zero(&parts[0]),
                    parse_or_zero(&parts[1]),
                    parse_or_zero(&parts[2]),
                    severity,
                    false,
                ) {
                    err(e);
                }
            }
            "quorum" => {
                if parts.len() < 2 {
                    usage("quorum <members> <percent> [attending]");
                    continue;
                }
                let members = parse_int_or_zero(&parts[0]).max(0) as u64;
                let percent = parse_or_zero(&parts[1]);
                let attending = parts.get(2).map(|s| parse_int_or_zero(s).max(0) as u64);
                if let Err(e) = commands::quorum::main(members, percent, attending, false) {
                    err(e);
                }
            }

            // Discovery
            "tools" => {
                if let Err(e) = commands::tools::list(false) {
                    err(e);
                }
            }
            "related" => {
                if let Some(slug) = parts.first() {
                    if let Err(e) = commands::related::main(slug, false) {
                        err(e);
                    }
                } else {
                    usage("related <tool-slug>");
                }
            }
            "faq" => {
                if let Some(slug) = parts.first() {
                    if let Err(e) = commands::tools::faq(slug, false) {
                        err(e);
                    }
                } else {
                    usage("faq <tool-slug>");
                }
            }

            "workbench" | "wb" => {
                if let Err(e) = tui::workbench::run(None, None, &cfg) {
                    err(e);
                } else {
                    banner();
                }
            }

            other => {
                eprintln!(
                    "{} unknown command '{other}' (try 'help')",
                    "err:".red().bold()
                );
            }
        }
    }
    Ok(())
}

// Root index input coerces to the default like every other field, but stays
// inside the selectable 2–6 range.
fn root_index(part: Option<&String>) -> u32 {
    let index = part.map(|s| parse_int_or_zero(s)).unwrap_or(2);
    if (2..=6).contains(&index) {
        index as u32
    } else {
        2
    }
}

fn banner() {
    println!(
        "{}",
        "  C A L C F O R G E  "
            .bold()
            .truecolor(0, 0, 0)
            .on_truecolor(0, 210, 190)
    );
    println!(
        "{}",
        "Financial, home, and math calculators. Type 'help' for commands.".dimmed()
    );
}

fn print_help() {
    let h = r#"
Radical tool:
  simplify <radicand> [index]            6√2 form with the derivation
  eval <radicand> [index]                decimal value, flags perfect roots
  add|sub|mul|div <c1> <r1> <c2> <r2>    combine c1·√r1 and c2·√r2

Money tools:
  mortgage <principal> <rate> <years> [--schedule]
  savings <initial> <monthly> <rate> <years>
  settlement <medical> <wages> <property> [severity]
  quorum <members> <percent> [attending]

Discovery:
  tools                                  list every calculator
  related <tool-slug>                    tools related to one slug
  faq <tool-slug>                        frequently asked questions

  workbench                              full-screen radical workbench
  clear                                  clear screen
  exit | quit                            leave Calcforge
"#;
    print!("{}", h.truecolor(190, 190, 200));
}

fn usage(u: &str) {
    eprintln!("{} {}", "usage:".yellow().bold(), u);
}

fn err(e: anyhow::Error) {
    eprintln!("{} {}", "err:".red().bold(), e);
}

// very simple splitter; supports quotes
fn shell_words(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_q = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_q = !in_q;
            }
            ' ' | '\t' if !in_q => {
                if !cur.is_empty() {
                    out.push(std::mem::take(&mut cur));
                }
            }
            _ => cur.push(ch),
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_words_quotes() {
        assert_eq!(shell_words("faq \"radical simplifier\""), vec!["faq", "radical simplifier"]);
        assert_eq!(shell_words("  simplify   72 "), vec!["simplify", "72"]);
    }

    #[test]
    fn test_root_index_coercion() {
        assert_eq!(root_index(Some(&"3".to_string())), 3);
        assert_eq!(root_index(Some(&"9".to_string())), 2);
        assert_eq!(root_index(Some(&"abc".to_string())), 2);
        assert_eq!(root_index(None), 2);
    }
}
