//! Integration tests: registry-wide properties of the standard descriptor set.

use rowkind_types::descriptor::BoolDescriptor;
use rowkind_types::{
    ConversionError, RegistryError, SqlType, SqlValue, TypeDescriptor, TypeRegistry, Value,
    ValueKind, standard_descriptors,
};
use std::sync::Arc;
use std::thread;

fn registry() -> TypeRegistry {
    TypeRegistry::standard().expect("standard registry should build")
}

fn decode(registry: &TypeRegistry, value: SqlValue, kind: ValueKind) -> Result<Value, ConversionError> {
    registry.external_value_to_value(&value, kind)
}

#[test]
fn standard_descriptor_claims_are_disjoint() {
    let registry = registry();
    let total_claims: usize = standard_descriptors()
        .iter()
        .map(|d| d.accepted_types().len())
        .sum();
    for descriptor in standard_descriptors() {
        for sql_type in descriptor.accepted_types() {
            assert_eq!(
                registry.external_type_to_kind(sql_type).unwrap(),
                descriptor.kind(),
                "{sql_type}"
            );
        }
    }
    assert_eq!(total_claims, 1 + 5 + 5 + 2 + 4 + 3);
}

#[test]
fn registering_a_descriptor_twice_fails() {
    let mut descriptors = standard_descriptors();
    descriptors.push(Box::new(BoolDescriptor));
    let err = TypeRegistry::new(descriptors).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateTypeClaim {
            sql_type: SqlType::Boolean,
            claimed_by: ValueKind::Bool,
            rejected: ValueKind::Bool,
        }
    );
}

#[test]
fn canonical_types_resolve_back_to_their_kind() {
    let registry = registry();
    for kind in registry.kinds().collect::<Vec<_>>() {
        let descriptor = registry.descriptor(kind).expect("registered kind");
        let canonical = registry.kind_to_canonical_type(kind).unwrap();
        if descriptor.accepted_types().contains(canonical) {
            assert_eq!(registry.external_type_to_kind(canonical).unwrap(), kind);
        }
    }
}

#[test]
fn uuid_canonical_type_falls_back_to_string() {
    let registry = registry();
    let canonical = registry.kind_to_canonical_type(ValueKind::Uuid).unwrap();
    assert_eq!(canonical, &SqlType::Char { len: 36 });
    assert_eq!(registry.kind_to_display_string(ValueKind::Uuid).unwrap(), "CHAR(36)");
    assert_eq!(
        registry.external_type_to_kind(canonical).unwrap(),
        ValueKind::String
    );
}

#[test]
fn display_strings_for_the_fixed_vocabulary() {
    let registry = registry();
    let expected = [
        (ValueKind::Bool, "BOOLEAN"),
        (ValueKind::Int, "BIGINT"),
        (ValueKind::Uint, "BIGINT UNSIGNED"),
        (ValueKind::Float, "DOUBLE"),
        (ValueKind::String, "LONGTEXT"),
        (ValueKind::DateTime, "DATETIME"),
        (ValueKind::Uuid, "CHAR(36)"),
    ];
    for (kind, display) in expected {
        assert_eq!(registry.kind_to_display_string(kind).unwrap(), display);
    }
}

#[test]
fn null_maps_to_null_for_every_kind() {
    let registry = registry();
    for kind in ValueKind::ALL {
        assert_eq!(decode(&registry, SqlValue::Null, kind).unwrap(), Value::Null);
    }
    assert_eq!(registry.value_to_external(&Value::Null).unwrap(), SqlValue::Null);
}

#[test]
fn integer_decode_range() {
    let registry = registry();
    assert!(matches!(
        decode(&registry, SqlValue::Uint64(18_446_744_073_709_551_615), ValueKind::Int),
        Err(ConversionError::RangeOverflow { .. })
    ));
    for input in [SqlValue::Int8(42), SqlValue::Int32(42), SqlValue::Uint16(42)] {
        assert_eq!(decode(&registry, input, ValueKind::Int).unwrap(), Value::Int(42));
    }
}

#[test]
fn float_decode_never_fails_for_numbers() {
    let registry = registry();
    assert_eq!(
        decode(&registry, SqlValue::Uint8(7), ValueKind::Float).unwrap(),
        Value::Float(7.0)
    );
    for input in [
        SqlValue::Int64(i64::MIN),
        SqlValue::Uint64(u64::MAX),
        SqlValue::Float32(f32::MAX),
        SqlValue::Float64(-0.0),
    ] {
        assert!(decode(&registry, input, ValueKind::Float).is_ok());
    }
}

#[test]
fn bool_decode_rounding_and_text() {
    let registry = registry();
    assert_eq!(
        decode(&registry, SqlValue::Float64(2.5), ValueKind::Bool).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        decode(&registry, SqlValue::Float64(2.4), ValueKind::Bool).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        decode(&registry, SqlValue::Float64(0.49), ValueKind::Bool).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        decode(&registry, SqlValue::Text("true".into()), ValueKind::Bool).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn datetime_text_round_trip() {
    let registry = registry();
    let decoded = decode(
        &registry,
        SqlValue::Text("2020-10-07 06:24:11.472294".into()),
        ValueKind::DateTime,
    )
    .unwrap();
    let encoded = registry.value_to_external(&decoded).unwrap();
    assert_eq!(encoded.to_string(), "2020-10-07 06:24:11.472294");

    let midnight = decode(&registry, SqlValue::Text("1000-01-01".into()), ValueKind::DateTime)
        .unwrap();
    assert_eq!(midnight.to_string(), "1000-01-01 00:00:00.000000");
}

#[test]
fn uuid_text_round_trip_and_parse_failure() {
    let registry = registry();
    assert!(matches!(
        decode(&registry, SqlValue::Text("not-a-uuid".into()), ValueKind::Uuid),
        Err(ConversionError::ParseError { .. })
    ));

    let canonical = "123e4567-e89b-12d3-a456-426614174000";
    let decoded = decode(&registry, SqlValue::Text(canonical.into()), ValueKind::Uuid).unwrap();
    assert_eq!(
        registry.value_to_external(&decoded).unwrap(),
        SqlValue::Text(canonical.to_string())
    );
}

#[test]
fn uncategorized_type_is_unknown() {
    let registry = registry();
    let enum_type = SqlType::Enum {
        values: vec!["a".to_string()],
    };
    assert_eq!(
        registry.external_type_to_kind(&enum_type),
        Err(ConversionError::UnknownType(enum_type.clone()))
    );
}

#[test]
fn declared_types_bind_through_the_parser() {
    let registry = registry();
    let cases = [
        ("BIGINT", ValueKind::Int),
        ("int unsigned", ValueKind::Uint),
        ("varchar(64)", ValueKind::String),
        ("timestamp(6)", ValueKind::DateTime),
        ("decimal(8,3)", ValueKind::Float),
        ("bool", ValueKind::Bool),
        ("time", ValueKind::InlineBlob),
        ("year", ValueKind::Int),
    ];
    for (declared, expected) in cases {
        let sql_type: SqlType = declared.parse().unwrap();
        assert_eq!(registry.external_type_to_kind(&sql_type).unwrap(), expected, "{declared}");
    }
}

#[test]
fn concurrent_readers_share_one_registry() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let value = SqlValue::Int32(worker);
                registry.external_value_to_value(&value, ValueKind::Int)
            })
        })
        .collect();
    for (worker, handle) in handles.into_iter().enumerate() {
        let decoded = handle.join().expect("reader thread should not panic");
        assert_eq!(decoded.unwrap(), Value::Int(worker as i64));
    }
}

#[test]
fn registry_rendering() {
    let rendered = registry()
        .summary()
        .iter()
        .map(|row| {
            format!(
                "{} -> {} [{}]",
                row.kind,
                row.display_string,
                row.accepted_types.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    bool -> BOOLEAN [BOOLEAN]
    int -> BIGINT [TINYINT, SMALLINT, MEDIUMINT, INT, BIGINT]
    uint -> BIGINT UNSIGNED [TINYINT UNSIGNED, SMALLINT UNSIGNED, MEDIUMINT UNSIGNED, INT UNSIGNED, BIGINT UNSIGNED]
    float -> DOUBLE [FLOAT, DOUBLE]
    string -> LONGTEXT [TINYTEXT, TEXT, MEDIUMTEXT, LONGTEXT]
    uuid -> CHAR(36) []
    datetime -> DATETIME [DATE, DATETIME, TIMESTAMP]
    ");
}
