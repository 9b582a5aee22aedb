use super::{array_or, scale_tenths, str_or, title_case, u64_or, PREVIEW_LIMIT};
use serde_json::Value;

/// Render a `/pokemon/{id}` response as a text block.
pub fn format_pokemon_data(data: &Value) -> String {
    let name = title_case(str_or(data, "name", "Unknown"));
    let mut result = format!("🔍 **{}** (ID: {})\n\n", name, u64_or(data, "id", 0));

    result += &format!("📏 **Height:** {}m\n", scale_tenths(u64_or(data, "height", 0)));
    result += &format!("⚖️ **Weight:** {}kg\n\n", scale_tenths(u64_or(data, "weight", 0)));

    let types: Vec<&str> = array_or(data, "types")
        .iter()
        .filter_map(|t| t.pointer("/type/name").and_then(Value::as_str))
        .collect();
    result += &format!("🎯 **Types:** {}\n\n", types.join(", "));

    let abilities: Vec<String> = array_or(data, "abilities")
        .iter()
        .map(|a| {
            let ability_name = a
                .pointer("/ability/name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            if a.get("is_hidden").and_then(Value::as_bool).unwrap_or(false) {
                format!("{} (Hidden)", ability_name)
            } else {
                ability_name.to_string()
            }
        })
        .collect();
    result += &format!("✨ **Abilities:** {}\n\n", abilities.join(", "));

    result += "📊 **Base Stats:**\n";
    for stat in array_or(data, "stats") {
        let stat_name = stat
            .pointer("/stat/name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        let stat_name = title_case(&stat_name.replace('-', " "));
        result += &format!("  - {}: {}\n", stat_name, u64_or(stat, "base_stat", 0));
    }
    result += "\n";

    let sprites = data.get("sprites").unwrap_or(&Value::Null);
    if let Some(front) = sprites.get("front_default").and_then(Value::as_str) {
        result += "🖼️ **Sprites:**\n";
        result += &format!("  - Front: {}\n", front);
        if let Some(back) = sprites.get("back_default").and_then(Value::as_str) {
            result += &format!("  - Back: {}\n", back);
        }
        if let Some(art) = sprites
            .pointer("/other/official-artwork/front_default")
            .and_then(Value::as_str)
        {
            result += &format!("  - Official Art: {}\n", art);
        }
        result += "\n";
    }

    let moves = array_or(data, "moves");
    if !moves.is_empty() {
        let preview: Vec<&str> = moves
            .iter()
            .take(PREVIEW_LIMIT)
            .filter_map(|m| m.pointer("/move/name").and_then(Value::as_str))
            .collect();
        result += &format!("⚔️ **Sample Moves:** {}\n", preview.join(", "));
        if moves.len() > PREVIEW_LIMIT {
            result += &format!("  (and {} more...)\n", moves.len() - PREVIEW_LIMIT);
        }
        result += "\n";
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_pokemon() -> Value {
        json!({
            "name": "bulbasaur",
            "id": 1,
            "height": 7,
            "weight": 69,
            "types": [
                {"type": {"name": "grass"}},
                {"type": {"name": "poison"}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow"}, "is_hidden": false},
                {"ability": {"name": "chlorophyll"}, "is_hidden": true}
            ],
            "stats": [
                {"stat": {"name": "hp"}, "base_stat": 45},
                {"stat": {"name": "special-attack"}, "base_stat": 65}
            ],
            "sprites": {
                "front_default": "https://img.example/front.png",
                "back_default": "https://img.example/back.png"
            },
            "moves": (0..15).map(|i| json!({"move": {"name": format!("move-{}", i)}})).collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_height_and_weight_scaling() {
        let text = format_pokemon_data(&sample_pokemon());
        assert!(text.contains("📏 **Height:** 0.7m"));
        assert!(text.contains("⚖️ **Weight:** 6.9kg"));
    }

    #[test]
    fn test_header_and_types() {
        let text = format_pokemon_data(&sample_pokemon());
        assert!(text.starts_with("🔍 **Bulbasaur** (ID: 1)\n\n"));
        assert!(text.contains("🎯 **Types:** grass, poison\n"));
    }

    #[test]
    fn test_hidden_ability_marker() {
        let text = format_pokemon_data(&sample_pokemon());
        assert!(text.contains("✨ **Abilities:** overgrow, chlorophyll (Hidden)\n"));
    }

    #[test]
    fn test_stat_names_are_title_cased() {
        let text = format_pokemon_data(&sample_pokemon());
        assert!(text.contains("  - Hp: 45\n"));
        assert!(text.contains("  - Special Attack: 65\n"));
    }

    #[test]
    fn test_moves_truncated_to_ten_with_remainder() {
        let text = format_pokemon_data(&sample_pokemon());
        assert!(text.contains("move-9"));
        assert!(!text.contains("move-10"));
        assert!(text.contains("(and 5 more...)"));
    }

    #[test]
    fn test_moves_not_truncated_when_short() {
        let mut data = sample_pokemon();
        data["moves"] = json!([{"move": {"name": "tackle"}}]);
        let text = format_pokemon_data(&data);
        assert!(text.contains("⚔️ **Sample Moves:** tackle\n"));
        assert!(!text.contains("more..."));
    }

    #[test]
    fn test_missing_fields_do_not_panic() {
        let text = format_pokemon_data(&json!({}));
        assert!(text.starts_with("🔍 **Unknown** (ID: 0)\n\n"));
        assert!(text.contains("📏 **Height:** 0.0m"));
        assert!(!text.contains("Sample Moves"));
        assert!(!text.contains("Sprites"));
    }

    #[test]
    fn test_sprites_section_requires_front() {
        let mut data = sample_pokemon();
        data["sprites"] = json!({"back_default": "https://img.example/back.png"});
        let text = format_pokemon_data(&data);
        assert!(!text.contains("🖼️"));
    }
}
