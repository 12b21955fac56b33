use calcforge::core::related::{fnv1a, related_tools};
use calcforge::core::tables::{self, Category};

#[test]
fn rotation_is_deterministic_per_slug() {
    for tool in tables::TOOLS {
        let first: Vec<_> = related_tools(tool.slug, 3).iter().map(|t| t.slug).collect();
        let second: Vec<_> = related_tools(tool.slug, 3).iter().map(|t| t.slug).collect();
        assert_eq!(first, second, "rotation for {} must be stable", tool.slug);
    }
}

#[test]
fn never_recommends_the_current_tool() {
    for tool in tables::TOOLS {
        let picks = related_tools(tool.slug, tables::TOOLS.len());
        assert!(picks.iter().all(|p| p.slug != tool.slug));
    }
}

#[test]
fn same_category_tools_come_first() {
    let picks = related_tools("mortgage-calculator", 3);
    assert_eq!(picks[0].slug, "savings-calculator");
    assert_eq!(picks.len(), 3);
}

#[test]
fn single_entry_category_falls_back_to_others() {
    // The radical tool is alone in Math, so its picks all come from the
    // cross-category fill.
    let picks = related_tools("radical-simplifier", 3);
    assert_eq!(picks.len(), 3);
    assert!(picks.iter().all(|p| p.category != Category::Math));
}

#[test]
fn unknown_slug_still_yields_tools() {
    let picks = related_tools("no-such-tool", 3);
    assert_eq!(picks.len(), 3);
}

#[test]
fn hash_is_the_standard_fnv1a() {
    assert_eq!(fnv1a(""), 0xcbf29ce484222325);
    assert_eq!(fnv1a("foobar"), 0x85944171f73967e8);
}
