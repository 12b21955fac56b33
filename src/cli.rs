use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::settlement::Severity;

#[derive(Copy, Clone, Debug, ValueEnum)]
#[derive(Default)]
pub enum SeverityKind {
    #[clap(alias = "min")]
    Minor,
    #[clap(alias = "mod")]
    #[default]
    Moderate,
    #[clap(alias = "sev")]
    Severe,
    #[clap(alias = "cat")]
    Catastrophic,
}

impl SeverityKind {
    pub fn to_severity(self) -> Severity {
        match self {
            SeverityKind::Minor => Severity::Minor,
            SeverityKind::Moderate => Severity::Moderate,
            SeverityKind::Severe => Severity::Severe,
            SeverityKind::Catastrophic => Severity::Catastrophic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "calcforge",
    about = "Calcforge — financial, home, and math calculators in one shell",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct CalcforgeCli {
    /// Global: machine-readable JSON output instead of styled text
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: path to config (TOML); default: ~/.calcforge/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Radical simplifier: simplify, evaluate, and combine nth roots
    ///
    /// Examples:
    ///   calcforge radical simplify 72
    ///   calcforge radical evaluate -8 --index 3
    ///   calcforge radical add 3 5 2 5
    Radical {
        #[command(subcommand)]
        action: RadicalAction,
    },

    /// Monthly mortgage payment, with an optional amortization schedule
    #[command(allow_negative_numbers = true)]
    Mortgage {
        /// Loan principal
        #[arg(value_name = "PRINCIPAL")]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(value_name = "RATE")]
        rate: f64,
        /// Term in years
        #[arg(value_name = "YEARS")]
        years: u32,
        /// Print the month-by-month schedule
        #[arg(long = "schedule", action = ArgAction::SetTrue)]
        schedule: bool,
    },

    /// Compound growth of a deposit plus monthly contributions
    #[command(allow_negative_numbers = true)]
    Savings {
        /// Starting balance
        #[arg(value_name = "INITIAL")]
        initial: f64,
        /// Contribution added at the end of each month
        #[arg(value_name = "MONTHLY")]
        monthly: f64,
        /// Annual interest rate in percent
        #[arg(value_name = "RATE")]
        rate: f64,
        /// Horizon in years
        #[arg(value_name = "YEARS")]
        years: u32,
    },

    /// Multiplier-based injury settlement range
    #[command(allow_negative_numbers = true)]
    Settlement {
        /// Medical costs to date
        #[arg(value_name = "MEDICAL")]
        medical: f64,
        /// Lost wages
        #[arg(value_name = "WAGES")]
        wages: f64,
        /// Property damage
        #[arg(value_name = "PROPERTY")]
        property: f64,
        /// Injury severity band
        #[arg(long = "severity", value_enum, default_value_t = SeverityKind::Moderate)]
        severity: SeverityKind,
    },

    /// Required head-count for a meeting or vote
    Quorum {
        /// Total voting members
        #[arg(value_name = "MEMBERS")]
        members: u64,
        /// Quorum percentage (0 < percent <= 100)
        #[arg(value_name = "PERCENT")]
        percent: f64,
        /// Attendance to check against the requirement
        #[arg(long = "attending", value_name = "N")]
        attending: Option<u64>,
    },

    /// Tools related to the given tool slug
    Related {
        #[arg(value_name = "SLUG")]
        slug: String,
    },

    /// List every calculator in this binary
    Tools,

    /// Frequently asked questions for a tool
    Faq {
        #[arg(value_name = "SLUG")]
        slug: String,
    },

    /// Full-screen radical workbench (recomputes on every keystroke)
    Workbench {
        /// Starting radicand
        #[arg(long = "radicand", value_name = "N")]
        radicand: Option<i64>,
        /// Starting root index (2–6)
        #[arg(long = "index", value_name = "I")]
        index: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RadicalAction {
    /// Simplify √N into coefficient · root form with the derivation
    #[command(allow_negative_numbers = true)]
    Simplify {
        #[arg(value_name = "RADICAND")]
        radicand: i64,
        /// Root index (2 = square root, 3 = cube root, ...)
        #[arg(long = "index", value_name = "I", default_value_t = 2)]
        index: u32,
    },
    /// Decimal value of the root, flagging perfect roots
    #[command(allow_negative_numbers = true)]
    Evaluate {
        #[arg(value_name = "RADICAND")]
        radicand: f64,
        #[arg(long = "index", value_name = "I", default_value_t = 2)]
        index: u32,
    },
    /// Add two terms: COEF1·√RAD1 + COEF2·√RAD2
    #[command(allow_negative_numbers = true)]
    Add {
        coef1: f64,
        rad1: i64,
        coef2: f64,
        rad2: i64,
    },
    /// Subtract two terms
    #[command(allow_negative_numbers = true)]
    Sub {
        coef1: f64,
        rad1: i64,
        coef2: f64,
        rad2: i64,
    },
    /// Multiply two terms (the product is re-simplified)
    #[command(allow_negative_numbers = true)]
    Mul {
        coef1: f64,
        rad1: i64,
        coef2: f64,
        rad2: i64,
    },
    /// Divide two terms
    #[command(allow_negative_numbers = true)]
    Div {
        coef1: f64,
        rad1: i64,
        coef2: f64,
        rad2: i64,
    },
}
