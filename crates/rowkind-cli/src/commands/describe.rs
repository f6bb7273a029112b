use crate::support::{parse_kind_or_exit, print_json_or_exit, registry_or_exit};

pub fn run(kind: String, json_output: bool) {
    let kind = parse_kind_or_exit(&kind);
    let registry = registry_or_exit();
    let Some(row) = registry.summary().into_iter().find(|row| row.kind == kind) else {
        eprintln!("error: no descriptor registered for kind {kind}");
        std::process::exit(1);
    };

    if json_output {
        let payload = serde_json::to_value(&row).unwrap_or_else(|err| {
            eprintln!("error: failed to render describe json: {err}");
            std::process::exit(2);
        });
        print_json_or_exit(&payload, "describe");
    } else {
        println!("rowkind describe {kind}");
        println!("  Canonical type: {}", row.canonical_type);
        println!("  Display: {}", row.display_string);
        println!("  Accepted types: {}", row.accepted_types.len());
        for sql_type in &row.accepted_types {
            println!("    - {sql_type}");
        }
    }
}
