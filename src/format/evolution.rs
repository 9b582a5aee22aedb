use super::{array_or, title_case, u64_or};
use serde_json::Value;

/// Chains from the API are at most a handful of stages deep; the bound only
/// guards against a malformed payload.
const MAX_CHAIN_DEPTH: usize = 16;

/// Render a `/evolution-chain/{id}` response as an indented tree,
/// parent before child, two spaces per level.
pub fn format_evolution_chain(data: &Value) -> String {
    let mut result = format!("🔄 **Evolution Chain** (ID: {})\n\n", u64_or(data, "id", 0));
    if let Some(chain) = data.get("chain") {
        render_node(chain, 0, &mut result);
    }
    result
}

fn render_node(node: &Value, level: usize, out: &mut String) {
    if level > MAX_CHAIN_DEPTH {
        return;
    }

    let name = node
        .pointer("/species/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    out.push_str(&"  ".repeat(level));
    out.push_str("🔸 ");
    out.push_str(&title_case(name));
    out.push('\n');

    for child in array_or(node, "evolves_to") {
        render_node(child, level + 1, out);
    }
}
