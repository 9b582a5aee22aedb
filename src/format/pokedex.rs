use super::{array_or, str_or, title_case, u64_or};
use serde_json::Value;

/// Index entries shown before truncating.
const ENTRY_PREVIEW_LIMIT: usize = 20;

/// Render a `/pokedex/{id}` response: description, region, entry preview.
pub fn format_pokedex_data(data: &Value) -> String {
    let name = title_case(str_or(data, "name", "Unknown"));
    let mut result = format!("📚 **{} Pokédex**\n\n", name);

    let description = array_or(data, "descriptions")
        .first()
        .and_then(|d| d.get("description"))
        .and_then(Value::as_str)
        .unwrap_or("No description available");
    result += &format!("📝 **Description:** {}\n\n", description);

    if let Some(region) = data.get("region").filter(|r| !r.is_null()) {
        let region_name = str_or(region, "name", "Unknown");
        result += &format!("🌍 **Region:** {}\n\n", region_name);
    }

    let entries = array_or(data, "pokemon_entries");
    if !entries.is_empty() {
        result += "🔍 **Pokémon Entries** (showing first 20):\n";
        for entry in entries.iter().take(ENTRY_PREVIEW_LIMIT) {
            let species_name = entry
                .pointer("/pokemon_species/name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            result += &format!(
                "  {:>3}. {}\n",
                u64_or(entry, "entry_number", 0),
                title_case(species_name)
            );
        }
        if entries.len() > ENTRY_PREVIEW_LIMIT {
            result += &format!("\n  ... and {} more entries\n", entries.len() - ENTRY_PREVIEW_LIMIT);
        }
    }

    result
}
