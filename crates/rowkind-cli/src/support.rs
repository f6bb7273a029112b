use rowkind_types::{SqlValue, TypeRegistry, Value, ValueKind};
use serde_json::{Value as JsonValue, json};

pub fn registry_or_exit() -> TypeRegistry {
    TypeRegistry::standard().unwrap_or_else(|err| {
        eprintln!("error: failed to build type registry: {err}");
        std::process::exit(2);
    })
}

pub fn parse_kind_or_exit(kind: &str) -> ValueKind {
    kind.parse().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    })
}

pub fn print_json_or_exit(payload: &JsonValue, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn sql_value_json(value: &SqlValue) -> JsonValue {
    let rendered = if value.is_null() {
        JsonValue::Null
    } else {
        JsonValue::String(value.to_string())
    };
    json!({ "shape": value.shape(), "value": rendered })
}

pub fn stored_value_json(value: &Value) -> JsonValue {
    let rendered = if value.is_null() {
        JsonValue::Null
    } else {
        JsonValue::String(value.to_string())
    };
    json!({ "kind": value.kind(), "value": rendered })
}
