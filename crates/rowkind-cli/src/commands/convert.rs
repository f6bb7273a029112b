use crate::cli::ShapeArg;
use crate::support::{
    parse_kind_or_exit, print_json_or_exit, registry_or_exit, sql_value_json, stored_value_json,
};
use rowkind_types::SqlValue;
use serde_json::json;

pub struct Args {
    pub kind: String,
    pub value: String,
    pub shape: ShapeArg,
    pub json: bool,
}

pub fn run(args: Args) {
    let kind = parse_kind_or_exit(&args.kind);
    let input = build_input(args.shape, &args.value).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });
    let registry = registry_or_exit();

    let stored = registry
        .external_value_to_value(&input, kind)
        .unwrap_or_else(|err| {
            eprintln!("error: decode failed: {err}");
            std::process::exit(1);
        });
    let output = registry.value_to_external(&stored).unwrap_or_else(|err| {
        eprintln!("error: encode failed: {err}");
        std::process::exit(1);
    });

    if args.json {
        let payload = json!({
            "kind": kind,
            "input": sql_value_json(&input),
            "stored": stored_value_json(&stored),
            "output": sql_value_json(&output),
        });
        print_json_or_exit(&payload, "convert");
    } else {
        println!("rowkind convert --kind {kind}");
        println!("  Input: {} ({})", input, input.shape());
        println!("  Stored: {} ({})", stored, stored.kind());
        println!("  Output: {} ({})", output, output.shape());
    }
}

fn build_input(shape: ShapeArg, raw: &str) -> Result<SqlValue, String> {
    let text = raw.trim();
    match shape {
        ShapeArg::Null => Ok(SqlValue::Null),
        ShapeArg::Bool => match text.to_lowercase().as_str() {
            "true" | "1" => Ok(SqlValue::Bool(true)),
            "false" | "0" => Ok(SqlValue::Bool(false)),
            _ => Err(format!("invalid bool literal: {raw}")),
        },
        ShapeArg::Int => text
            .parse::<i64>()
            .map(SqlValue::Int64)
            .map_err(|err| format!("invalid int literal {raw:?}: {err}")),
        ShapeArg::Uint => text
            .parse::<u64>()
            .map(SqlValue::Uint64)
            .map_err(|err| format!("invalid uint literal {raw:?}: {err}")),
        ShapeArg::Float => text
            .parse::<f64>()
            .map(SqlValue::Float64)
            .map_err(|err| format!("invalid float literal {raw:?}: {err}")),
        ShapeArg::Text => Ok(SqlValue::Text(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_map_to_widest_width() {
        assert_eq!(build_input(ShapeArg::Int, " -5 ").unwrap(), SqlValue::Int64(-5));
        assert_eq!(
            build_input(ShapeArg::Uint, "18446744073709551615").unwrap(),
            SqlValue::Uint64(u64::MAX)
        );
        assert_eq!(build_input(ShapeArg::Bool, "TRUE").unwrap(), SqlValue::Bool(true));
        assert_eq!(build_input(ShapeArg::Null, "ignored").unwrap(), SqlValue::Null);
        assert_eq!(
            build_input(ShapeArg::Text, " padded ").unwrap(),
            SqlValue::Text(" padded ".to_string())
        );
    }

    #[test]
    fn malformed_literals_are_rejected() {
        assert!(build_input(ShapeArg::Int, "4.2").is_err());
        assert!(build_input(ShapeArg::Uint, "-1").is_err());
        assert!(build_input(ShapeArg::Bool, "yes").is_err());
    }
}
