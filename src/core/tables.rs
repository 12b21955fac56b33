//! Static reference data: the tool registry, perfect-power tables, rate
//! presets, settlement multiplier bands, and per-tool FAQ entries. All
//! read-only, initialized once.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Math,
    Finance,
    Legal,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Math => "Math",
            Category::Finance => "Finance",
            Category::Legal => "Legal",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tool {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub blurb: &'static str,
}

/// Every calculator this binary ships, in registry order. Backs both the
/// `tools` listing and the related-tool rotation.
pub const TOOLS: &[Tool] = &[
    Tool {
        slug: "radical-simplifier",
        name: "Radical Simplifier",
        category: Category::Math,
        blurb: "simplify nth roots and combine radical terms",
    },
    Tool {
        slug: "mortgage-calculator",
        name: "Mortgage Calculator",
        category: Category::Finance,
        blurb: "monthly payment and amortization schedule",
    },
    Tool {
        slug: "savings-calculator",
        name: "Savings Calculator",
        category: Category::Finance,
        blurb: "compound growth of deposits and contributions",
    },
    Tool {
        slug: "settlement-estimator",
        name: "Settlement Estimator",
        category: Category::Legal,
        blurb: "multiplier-based injury settlement range",
    },
    Tool {
        slug: "quorum-calculator",
        name: "Quorum Calculator",
        category: Category::Legal,
        blurb: "required head-count for a meeting or vote",
    },
];

pub fn find_tool(slug: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.slug == slug)
}

/// First twenty perfect squares.
pub const PERFECT_SQUARES: &[(i64, i64)] = &[
    (1, 1),
    (2, 4),
    (3, 9),
    (4, 16),
    (5, 25),
    (6, 36),
    (7, 49),
    (8, 64),
    (9, 81),
    (10, 100),
    (11, 121),
    (12, 144),
    (13, 169),
    (14, 196),
    (15, 225),
    (16, 256),
    (17, 289),
    (18, 324),
    (19, 361),
    (20, 400),
];

/// First twelve perfect cubes.
pub const PERFECT_CUBES: &[(i64, i64)] = &[
    (1, 1),
    (2, 8),
    (3, 27),
    (4, 64),
    (5, 125),
    (6, 216),
    (7, 343),
    (8, 512),
    (9, 729),
    (10, 1000),
    (11, 1331),
    (12, 1728),
];

/// Sample quoted APRs shown next to the mortgage tool. Reference data, not
/// live quotes.
pub const RATE_PRESETS: &[(&str, f64)] = &[
    ("30-year fixed", 6.75),
    ("20-year fixed", 6.45),
    ("15-year fixed", 6.00),
    ("10-year fixed", 5.85),
];

/// Severity bands for the settlement estimator: (label, low multiplier,
/// high multiplier) applied to medical costs plus lost wages.
pub const SETTLEMENT_MULTIPLIERS: &[(&str, f64, f64)] = &[
    ("minor", 1.5, 2.0),
    ("moderate", 2.0, 3.0),
    ("severe", 3.0, 4.0),
    ("catastrophic", 4.0, 5.0),
];

const RADICAL_FAQ: &[(&str, &str)] = &[
    (
        "What does it mean to simplify a radical?",
        "Rewriting √n as c·√m where m has no factor repeated as many times as the root index. √72 becomes 6√2 because 72 = 36 × 2 and √36 = 6.",
    ),
    (
        "When can two radicals be added?",
        "Only when their radicands are identical after simplification: 3√5 + 2√5 = 5√5, but 3√5 + 2√3 cannot be combined further.",
    ),
    (
        "Why is the even root of a negative number undefined?",
        "No real number multiplied by itself an even number of times is negative. Odd roots of negatives are fine: ∛-8 = -2.",
    ),
];

const MORTGAGE_FAQ: &[(&str, &str)] = &[
    (
        "How is the monthly payment computed?",
        "With the standard amortization formula M = P·r·(1+r)^n / ((1+r)^n - 1), where r is the monthly rate and n the number of monthly payments.",
    ),
    (
        "What happens at a 0% rate?",
        "The formula degenerates to principal divided by the number of payments.",
    ),
];

const SAVINGS_FAQ: &[(&str, &str)] = &[
    (
        "How often is interest compounded?",
        "Monthly. Contributions are deposited at the end of each month, after that month's interest.",
    ),
];

const SETTLEMENT_FAQ: &[(&str, &str)] = &[
    (
        "What is the multiplier method?",
        "Medical costs plus lost wages are multiplied by a severity factor between 1.5 and 5 to approximate pain-and-suffering damages; property damage is added on top.",
    ),
    (
        "Is this a legal valuation?",
        "No. It is a rough planning estimate; settlements depend on liability, insurance limits, and jurisdiction.",
    ),
];

const QUORUM_FAQ: &[(&str, &str)] = &[
    (
        "How is the quorum rounded?",
        "Up. A 50% quorum of 15 members requires 8 attendees, not 7.5.",
    ),
];

static FAQS: Lazy<HashMap<&'static str, &'static [(&'static str, &'static str)]>> =
    Lazy::new(|| {
        let mut m: HashMap<&'static str, &'static [(&'static str, &'static str)]> =
            HashMap::new();
        m.insert("radical-simplifier", RADICAL_FAQ);
        m.insert("mortgage-calculator", MORTGAGE_FAQ);
        m.insert("savings-calculator", SAVINGS_FAQ);
        m.insert("settlement-estimator", SETTLEMENT_FAQ);
        m.insert("quorum-calculator", QUORUM_FAQ);
        m
    });

pub fn faq_for(slug: &str) -> Option<&'static [(&'static str, &'static str)]> {
    FAQS.get(slug).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_has_a_faq() {
        for tool in TOOLS {
            assert!(faq_for(tool.slug).is_some(), "missing FAQ for {}", tool.slug);
        }
    }

    #[test]
    fn test_perfect_tables_are_consistent() {
        for &(n, sq) in PERFECT_SQUARES {
            assert_eq!(n * n, sq);
        }
        for &(n, cube) in PERFECT_CUBES {
            assert_eq!(n * n * n, cube);
        }
    }

    #[test]
    fn test_find_tool() {
        assert!(find_tool("radical-simplifier").is_some());
        assert!(find_tool("no-such-tool").is_none());
    }
}
