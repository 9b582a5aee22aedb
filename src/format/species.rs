use super::{array_or, str_or, title_case, u64_or};
use serde_json::Value;

/// Render a `/pokemon-species/{id}` response as a text block.
pub fn format_species_data(data: &Value) -> String {
    let name = title_case(str_or(data, "name", "Unknown"));
    let mut result = format!("🔬 **{} Species Data**\n\n", name);

    let genus = array_or(data, "genera")
        .first()
        .and_then(|g| g.get("genus"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    result += &format!("📝 **Genus:** {}\n", genus);

    let color = data
        .pointer("/color/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    result += &format!("🎨 **Color:** {}\n", color);

    let habitat = data
        .pointer("/habitat/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    result += &format!("🏠 **Habitat:** {}\n\n", habitat);

    if let Some(flavor) = english_flavor_text(data) {
        result += &format!("📖 **Description:** {}\n\n", flavor);
    }

    result += &format!("🎣 **Capture Rate:** {}/255\n\n", u64_or(data, "capture_rate", 0));

    if let Some(url) = data
        .pointer("/evolution_chain/url")
        .and_then(Value::as_str)
    {
        if let Some(chain_id) = url.trim_end_matches('/').rsplit('/').next() {
            result += &format!("🔄 **Evolution Chain ID:** {}\n\n", chain_id);
        }
    }

    result
}

/// First English flavor-text entry, with embedded newlines and form feeds
/// flattened to spaces.
fn english_flavor_text(data: &Value) -> Option<String> {
    array_or(data, "flavor_text_entries")
        .iter()
        .find(|entry| {
            entry.pointer("/language/name").and_then(Value::as_str) == Some("en")
        })
        .and_then(|entry| entry.get("flavor_text"))
        .and_then(Value::as_str)
        .map(|text| text.replace(['\n', '\u{c}'], " "))
}
