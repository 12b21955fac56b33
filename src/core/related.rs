//! Deterministic related-tool selection keyed by the current tool's slug.

use crate::core::tables::{self, Tool};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a. Same key, same hash, on every platform.
pub fn fnv1a(key: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in key.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Up to `count` tools related to `slug`: the registry rotated by the slug's
/// hash, same-category entries first, then filled from the remaining
/// categories in rotated order. Never includes the tool itself.
pub fn related_tools(slug: &str, count: usize) -> Vec<&'static Tool> {
    let tools = tables::TOOLS;
    if tools.is_empty() || count == 0 {
        return Vec::new();
    }
    let start = (fnv1a(slug) % tools.len() as u64) as usize;
    let rotated: Vec<&'static Tool> =
        (0..tools.len()).map(|i| &tools[(start + i) % tools.len()]).collect();

    let category = tables::find_tool(slug).map(|t| t.category);
    let mut picks: Vec<&'static Tool> = rotated
        .iter()
        .copied()
        .filter(|t| t.slug != slug && Some(t.category) == category)
        .collect();
    for tool in rotated {
        if picks.len() >= count {
            break;
        }
        if tool.slug != slug && !picks.iter().any(|p| p.slug == tool.slug) {
            picks.push(tool);
        }
    }
    picks.truncate(count);
    picks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_vectors() {
        // Standard FNV-1a 64 test vectors.
        assert_eq!(fnv1a(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_rotation_is_stable() {
        let first = related_tools("mortgage-calculator", 3);
        let second = related_tools("mortgage-calculator", 3);
        let slugs: Vec<_> = first.iter().map(|t| t.slug).collect();
        assert_eq!(slugs, second.iter().map(|t| t.slug).collect::<Vec<_>>());
    }

    #[test]
    fn test_never_recommends_self() {
        for tool in tables::TOOLS {
            let picks = related_tools(tool.slug, tables::TOOLS.len());
            assert!(picks.iter().all(|p| p.slug != tool.slug));
        }
    }

    #[test]
    fn test_same_category_leads() {
        // Savings shares the Finance category only with the mortgage tool,
        // so that one must come first.
        let picks = related_tools("savings-calculator", 3);
        assert_eq!(picks[0].slug, "mortgage-calculator");
        assert_eq!(picks.len(), 3);
    }
}
