use super::{array_or, title_case, u64_or};
use serde_json::Value;

/// Render a `/pokemon?limit=&offset=` page: bullet list plus pagination info.
///
/// `limit` must be non-zero; the dispatch layer clamps it before fetching.
pub fn format_pokemon_list(data: &Value, limit: usize, offset: usize) -> String {
    let mut result = format!(
        "🔍 **Pokémon List** (showing {} starting from {})\n\n",
        limit, offset
    );

    for entry in array_or(data, "results") {
        let name = entry.get("name").and_then(Value::as_str).unwrap_or("Unknown");
        result += &format!("• {}\n", title_case(name));
    }

    let count = u64_or(data, "count", 0) as usize;
    result += &format!("\n📊 **Total Pokémon:** {}\n", count);
    result += &format!(
        "📄 **Current page:** {} of {}\n",
        offset / limit + 1,
        count.div_ceil(limit)
    );

    result
}

/// Render a `/type?limit=&offset=` page as a plain bullet list.
pub fn format_type_list(data: &Value) -> String {
    let mut result = String::from("🎯 **Type List**\n\n");
    for entry in array_or(data, "results") {
        let name = entry.get("name").and_then(Value::as_str).unwrap_or("Unknown");
        result += &format!("• {}\n", title_case(name));
    }
    result
}

/// Render the member list of a `/type/{name}` response, bounded by `limit`.
pub fn format_type_members(type_name: &str, data: &Value, limit: usize) -> String {
    let mut result = format!("🔍 **{} Type Pokémon**\n\n", title_case(type_name));

    let members = array_or(data, "pokemon");
    for member in members.iter().take(limit) {
        let name = member
            .pointer("/pokemon/name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        result += &format!("• {}\n", title_case(name));
    }

    if members.len() > limit {
        result += &format!("\n📊 Showing {} of {} Pokémon\n", limit, members.len());
    }

    result
}
