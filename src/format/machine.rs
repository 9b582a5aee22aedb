use super::{title_case, u64_or};
use serde_json::Value;

/// Render a `/machine/{id}` response (TM/HM/TR).
pub fn format_machine_data(data: &Value) -> String {
    let mut result = format!("🔧 **Machine {}**\n\n", u64_or(data, "id", 0));

    let item = data
        .pointer("/item/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    result += &format!("📦 **Item:** {}\n", title_case(item));

    let mv = data
        .pointer("/move/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    result += &format!("⚔️ **Move:** {}\n", title_case(mv));

    let version_group = data
        .pointer("/version_group/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    result += &format!("🎮 **Version Group:** {}\n", title_case(version_group));

    result
}
