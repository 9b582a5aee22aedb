use super::{array_or, str_or, title_case, PREVIEW_LIMIT};
use serde_json::Value;

/// Render a `/type/{id}` response: damage relations plus a member preview.
pub fn format_type_data(data: &Value) -> String {
    let name = title_case(str_or(data, "name", "Unknown"));
    let mut result = format!("🎯 **{} Type**\n\n", name);

    let relations = data.get("damage_relations").unwrap_or(&Value::Null);
    let sections = [
        ("double_damage_from", "❌ **Weak to (2x):**"),
        ("double_damage_to", "✅ **Strong against (2x):**"),
        ("half_damage_from", "🛡️ **Resistant to (0.5x):**"),
        ("half_damage_to", "⚡ **Weak against (0.5x):**"),
        ("no_damage_from", "🚫 **Immune to:**"),
        ("no_damage_to", "🔒 **No effect on:**"),
    ];
    for (key, label) in sections {
        let types: Vec<&str> = array_or(relations, key)
            .iter()
            .filter_map(|t| t.get("name").and_then(Value::as_str))
            .collect();
        if !types.is_empty() {
            result += &format!("{} {}\n", label, types.join(", "));
        }
    }
    result += "\n";

    let members = array_or(data, "pokemon");
    if !members.is_empty() {
        let preview: Vec<&str> = members
            .iter()
            .take(PREVIEW_LIMIT)
            .filter_map(|p| p.pointer("/pokemon/name").and_then(Value::as_str))
            .collect();
        result += &format!("🔍 **Sample Pokémon:** {}\n", preview.join(", "));
        if members.len() > PREVIEW_LIMIT {
            result += &format!("  (and {} more...)\n", members.len() - PREVIEW_LIMIT);
        }
    }

    result
}
