use crate::support::{print_json_or_exit, registry_or_exit};

pub fn run(json_output: bool) {
    let registry = registry_or_exit();

    if json_output {
        print_json_or_exit(&registry.summary_json(), "kinds");
        return;
    }

    println!("rowkind kinds");
    for row in registry.summary() {
        let accepted = if row.accepted_types.is_empty() {
            "(category fallback only)".to_string()
        } else {
            row.accepted_types.join(", ")
        };
        println!("  {:<9} {:<16} {accepted}", row.kind.as_str(), row.display_string);
    }
}
