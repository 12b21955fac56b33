//! Calcforge main — subcommands + the calculator shell by default.
use clap::Parser;

use calcforge::cli::{CalcforgeCli, Command, RadicalAction};
use calcforge::commands;
use calcforge::commands::radical::ArithOp;
use calcforge::config;
use calcforge::shell;
use calcforge::tui;

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    let _ = execute!(std::io::stdout(), SetTitle("Calcforge"));
}

fn main() -> anyhow::Result<()> {
    let args = CalcforgeCli::parse();
    let cfg = config::load(&args.config)?;

    // No subcommand: open the interactive calculator shell. The title escape
    // stays out of one-shot command output so piped/--json stdout is clean.
    let Some(cmd) = args.cmd else {
        set_console_title();
        return shell::start(cfg);
    };

    match cmd {
        Command::Radical { action } => match action {
            RadicalAction::Simplify { radicand, index } => {
                commands::radical::simplify(radicand, index, &cfg, args.json)
            }
            RadicalAction::Evaluate { radicand, index } => {
                commands::radical::evaluate(radicand, index, &cfg, args.json)
            }
            RadicalAction::Add { coef1, rad1, coef2, rad2 } => {
                commands::radical::arith(ArithOp::Add, coef1, rad1, coef2, rad2, &cfg, args.json)
            }
            RadicalAction::Sub { coef1, rad1, coef2, rad2 } => {
                commands::radical::arith(ArithOp::Sub, coef1, rad1, coef2, rad2, &cfg, args.json)
            }
            RadicalAction::Mul { coef1, rad1, coef2, rad2 } => {
                commands::radical::arith(ArithOp::Mul, coef1, rad1, coef2, rad2, &cfg, args.json)
            }
            RadicalAction::Div { coef1, rad1, coef2, rad2 } => {
                commands::radical::arith(ArithOp::Div, coef1, rad1, coef2, rad2, &cfg, args.json)
            }
        },
        Command::Mortgage { principal, rate, years, schedule } => {
            commands::mortgage::main(principal, rate, years, schedule, args.json)
        }
        Command::Savings { initial, monthly, rate, years } => {
            commands::savings::main(initial, monthly, rate, years, args.json)
        }
        Command::Settlement { medical, wages, property, severity } => {
            commands::settlement::main(medical, wages, property, severity.to_severity(), args.json)
        }
        Command::Quorum { members, percent, attending } => {
            commands::quorum::main(members, percent, attending, args.json)
        }
        Command::Related { slug } => commands::related::main(&slug, args.json),
        Command::Tools => commands::tools::list(args.json),
        Command::Faq { slug } => commands::tools::faq(&slug, args.json),
        Command::Workbench { radicand, index } => tui::workbench::run(radicand, index, &cfg),
    }
}
