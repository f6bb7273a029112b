use crate::support::{print_json_or_exit, registry_or_exit};
use rowkind_types::SqlType;
use serde_json::json;

pub fn run(declared: String, json_output: bool) {
    let sql_type: SqlType = declared.parse().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });
    let registry = registry_or_exit();
    let kind = registry.external_type_to_kind(&sql_type).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "declared": declared,
            "sqlType": sql_type.to_string(),
            "category": sql_type.category(),
            "kind": kind,
        });
        print_json_or_exit(&payload, "resolve");
    } else {
        println!("rowkind resolve {declared}");
        println!("  Type: {sql_type}");
        println!("  Kind: {kind}");
    }
}
