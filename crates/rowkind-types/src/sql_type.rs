//! External column-type vocabulary.
//!
//! `SqlType` is the set of declared column types the query surface exposes.
//! Types with parameters (lengths, precision, enum members) compare by their
//! parameters, so `CHAR(36)` and `CHAR(10)` are distinct types that share the
//! `Char` category.

/// A declared SQL column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SqlType {
    Boolean,
    Int8,
    Int16,
    Int24,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint24,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Decimal { precision: u32, scale: u32 },
    Bit { width: u32 },
    Year,
    Date,
    Time,
    Datetime,
    Timestamp,
    Char { len: u32 },
    VarChar { len: u32 },
    Binary { len: u32 },
    VarBinary { len: u32 },
    TinyText,
    Text,
    MediumText,
    LongText,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Json,
    Enum { values: Vec<String> },
    Set { values: Vec<String> },
    Geometry,
    /// The type of a bare `NULL` literal.
    Null,
}

/// Broad family an external type belongs to.
///
/// Used as the fallback key when no descriptor claims a type exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SqlTypeCategory {
    Binary,
    Blob,
    Char,
    Text,
    Bit,
    UnsignedInt,
    Date,
    Datetime,
    Timestamp,
    Decimal,
    Float32,
    Float64,
    SignedInt,
    Year,
    Null,
    Time,
    Json,
    Enum,
    Set,
    Geometry,
}

impl SqlType {
    pub fn category(&self) -> SqlTypeCategory {
        match self {
            // BOOLEAN is a TINYINT(1) alias on the query surface.
            SqlType::Boolean
            | SqlType::Int8
            | SqlType::Int16
            | SqlType::Int24
            | SqlType::Int32
            | SqlType::Int64 => SqlTypeCategory::SignedInt,
            SqlType::Uint8
            | SqlType::Uint16
            | SqlType::Uint24
            | SqlType::Uint32
            | SqlType::Uint64 => SqlTypeCategory::UnsignedInt,
            SqlType::Float32 => SqlTypeCategory::Float32,
            SqlType::Float64 => SqlTypeCategory::Float64,
            SqlType::Decimal { .. } => SqlTypeCategory::Decimal,
            SqlType::Bit { .. } => SqlTypeCategory::Bit,
            SqlType::Year => SqlTypeCategory::Year,
            SqlType::Date => SqlTypeCategory::Date,
            SqlType::Time => SqlTypeCategory::Time,
            SqlType::Datetime => SqlTypeCategory::Datetime,
            SqlType::Timestamp => SqlTypeCategory::Timestamp,
            SqlType::Char { .. } | SqlType::VarChar { .. } => SqlTypeCategory::Char,
            SqlType::Binary { .. } | SqlType::VarBinary { .. } => SqlTypeCategory::Binary,
            SqlType::TinyText | SqlType::Text | SqlType::MediumText | SqlType::LongText => {
                SqlTypeCategory::Text
            }
            SqlType::TinyBlob | SqlType::Blob | SqlType::MediumBlob | SqlType::LongBlob => {
                SqlTypeCategory::Blob
            }
            SqlType::Json => SqlTypeCategory::Json,
            SqlType::Enum { .. } => SqlTypeCategory::Enum,
            SqlType::Set { .. } => SqlTypeCategory::Set,
            SqlType::Geometry => SqlTypeCategory::Geometry,
            SqlType::Null => SqlTypeCategory::Null,
        }
    }

    pub fn is_unsigned_integer(&self) -> bool {
        self.category() == SqlTypeCategory::UnsignedInt
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlType::Boolean => write!(f, "BOOLEAN"),
            SqlType::Int8 => write!(f, "TINYINT"),
            SqlType::Int16 => write!(f, "SMALLINT"),
            SqlType::Int24 => write!(f, "MEDIUMINT"),
            SqlType::Int32 => write!(f, "INT"),
            SqlType::Int64 => write!(f, "BIGINT"),
            SqlType::Uint8 => write!(f, "TINYINT UNSIGNED"),
            SqlType::Uint16 => write!(f, "SMALLINT UNSIGNED"),
            SqlType::Uint24 => write!(f, "MEDIUMINT UNSIGNED"),
            SqlType::Uint32 => write!(f, "INT UNSIGNED"),
            SqlType::Uint64 => write!(f, "BIGINT UNSIGNED"),
            SqlType::Float32 => write!(f, "FLOAT"),
            SqlType::Float64 => write!(f, "DOUBLE"),
            SqlType::Decimal { precision, scale } => write!(f, "DECIMAL({precision},{scale})"),
            SqlType::Bit { width } => write!(f, "BIT({width})"),
            SqlType::Year => write!(f, "YEAR"),
            SqlType::Date => write!(f, "DATE"),
            SqlType::Time => write!(f, "TIME"),
            SqlType::Datetime => write!(f, "DATETIME"),
            SqlType::Timestamp => write!(f, "TIMESTAMP"),
            SqlType::Char { len } => write!(f, "CHAR({len})"),
            SqlType::VarChar { len } => write!(f, "VARCHAR({len})"),
            SqlType::Binary { len } => write!(f, "BINARY({len})"),
            SqlType::VarBinary { len } => write!(f, "VARBINARY({len})"),
            SqlType::TinyText => write!(f, "TINYTEXT"),
            SqlType::Text => write!(f, "TEXT"),
            SqlType::MediumText => write!(f, "MEDIUMTEXT"),
            SqlType::LongText => write!(f, "LONGTEXT"),
            SqlType::TinyBlob => write!(f, "TINYBLOB"),
            SqlType::Blob => write!(f, "BLOB"),
            SqlType::MediumBlob => write!(f, "MEDIUMBLOB"),
            SqlType::LongBlob => write!(f, "LONGBLOB"),
            SqlType::Json => write!(f, "JSON"),
            SqlType::Enum { values } => write!(f, "ENUM({})", quote_list(values)),
            SqlType::Set { values } => write!(f, "SET({})", quote_list(values)),
            SqlType::Geometry => write!(f, "GEOMETRY"),
            SqlType::Null => write!(f, "NULL"),
        }
    }
}

fn quote_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("'{}'", value.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Failure to parse a declared column type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlTypeParseError {
    #[error("empty type declaration")]
    Empty,

    #[error("unknown column type: {0}")]
    UnknownType(String),

    #[error("unbalanced parentheses in type declaration: {0}")]
    Unbalanced(String),

    #[error("invalid arguments for {type_name}: ({args})")]
    InvalidArguments { type_name: String, args: String },

    #[error("{0} requires a length")]
    MissingLength(String),

    #[error("{0} cannot be UNSIGNED")]
    UnexpectedUnsigned(String),
}

impl std::str::FromStr for SqlType {
    type Err = SqlTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SqlTypeParseError::Empty);
        }
        let (head, args, tail) = split_declaration(trimmed)?;

        let mut words: Vec<String> = head
            .split_whitespace()
            .chain(tail.split_whitespace())
            .map(str::to_uppercase)
            .collect();
        let unsigned = words.iter().any(|word| word == "UNSIGNED");
        words.retain(|word| word != "UNSIGNED" && word != "SIGNED");
        let name = words.join(" ");
        if name.is_empty() {
            return Err(SqlTypeParseError::UnknownType(trimmed.to_string()));
        }

        let parsed = match name.as_str() {
            "BOOL" | "BOOLEAN" => SqlType::Boolean,
            "TINYINT" | "INT1" => integer(unsigned, SqlType::Int8, SqlType::Uint8),
            "SMALLINT" | "INT2" => integer(unsigned, SqlType::Int16, SqlType::Uint16),
            "MEDIUMINT" | "INT3" => integer(unsigned, SqlType::Int24, SqlType::Uint24),
            "INT" | "INTEGER" | "INT4" => integer(unsigned, SqlType::Int32, SqlType::Uint32),
            "BIGINT" | "INT8" => integer(unsigned, SqlType::Int64, SqlType::Uint64),
            "FLOAT" => match numeric_args(&name, args)?.as_slice() {
                [precision, ..] if *precision > 24 => SqlType::Float64,
                _ => SqlType::Float32,
            },
            "DOUBLE" | "DOUBLE PRECISION" | "REAL" => SqlType::Float64,
            "DECIMAL" | "DEC" | "NUMERIC" | "FIXED" => {
                match numeric_args(&name, args)?.as_slice() {
                    [] => SqlType::Decimal {
                        precision: 10,
                        scale: 0,
                    },
                    [precision] => SqlType::Decimal {
                        precision: *precision,
                        scale: 0,
                    },
                    [precision, scale] if scale <= precision => SqlType::Decimal {
                        precision: *precision,
                        scale: *scale,
                    },
                    _ => return Err(invalid_args(&name, args)),
                }
            }
            "BIT" => SqlType::Bit {
                width: optional_length(&name, args)?.unwrap_or(1),
            },
            "YEAR" => SqlType::Year,
            "DATE" => SqlType::Date,
            "TIME" => SqlType::Time,
            "DATETIME" => SqlType::Datetime,
            "TIMESTAMP" => SqlType::Timestamp,
            "CHAR" | "CHARACTER" => SqlType::Char {
                len: optional_length(&name, args)?.unwrap_or(1),
            },
            "VARCHAR" | "CHARACTER VARYING" | "CHAR VARYING" => SqlType::VarChar {
                len: required_length(&name, args)?,
            },
            "BINARY" => SqlType::Binary {
                len: optional_length(&name, args)?.unwrap_or(1),
            },
            "VARBINARY" => SqlType::VarBinary {
                len: required_length(&name, args)?,
            },
            "TINYTEXT" => SqlType::TinyText,
            "TEXT" => SqlType::Text,
            "MEDIUMTEXT" => SqlType::MediumText,
            "LONGTEXT" => SqlType::LongText,
            "TINYBLOB" => SqlType::TinyBlob,
            "BLOB" => SqlType::Blob,
            "MEDIUMBLOB" => SqlType::MediumBlob,
            "LONGBLOB" => SqlType::LongBlob,
            "JSON" => SqlType::Json,
            "ENUM" => SqlType::Enum {
                values: quoted_args(&name, args)?,
            },
            "SET" => SqlType::Set {
                values: quoted_args(&name, args)?,
            },
            "GEOMETRY" => SqlType::Geometry,
            "NULL" => SqlType::Null,
            _ => return Err(SqlTypeParseError::UnknownType(trimmed.to_string())),
        };

        // DECIMAL/FLOAT/DOUBLE UNSIGNED is accepted by the query surface and
        // only constrains the value range.
        let allows_unsigned = parsed.is_unsigned_integer()
            || matches!(
                parsed,
                SqlType::Float32 | SqlType::Float64 | SqlType::Decimal { .. }
            );
        if unsigned && !allows_unsigned {
            return Err(SqlTypeParseError::UnexpectedUnsigned(name));
        }
        Ok(parsed)
    }
}

fn integer(unsigned: bool, signed_ty: SqlType, unsigned_ty: SqlType) -> SqlType {
    if unsigned { unsigned_ty } else { signed_ty }
}

/// Split `NAME(args) tail` into its three parts. Parentheses are optional.
fn split_declaration(decl: &str) -> Result<(&str, Option<&str>, &str), SqlTypeParseError> {
    let Some(open) = decl.find('(') else {
        if decl.contains(')') {
            return Err(SqlTypeParseError::Unbalanced(decl.to_string()));
        }
        return Ok((decl, None, ""));
    };
    let mut in_quote = false;
    let mut close = None;
    let bytes = decl.as_bytes();
    let mut idx = open + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\'' => in_quote = !in_quote,
            b')' if !in_quote => {
                close = Some(idx);
                break;
            }
            _ => {}
        }
        idx += 1;
    }
    let close = close.ok_or_else(|| SqlTypeParseError::Unbalanced(decl.to_string()))?;
    let tail = &decl[close + 1..];
    if tail.contains('(') || tail.contains(')') {
        return Err(SqlTypeParseError::Unbalanced(decl.to_string()));
    }
    Ok((&decl[..open], Some(&decl[open + 1..close]), tail))
}

fn invalid_args(type_name: &str, args: Option<&str>) -> SqlTypeParseError {
    SqlTypeParseError::InvalidArguments {
        type_name: type_name.to_string(),
        args: args.unwrap_or_default().trim().to_string(),
    }
}

fn numeric_args(type_name: &str, args: Option<&str>) -> Result<Vec<u32>, SqlTypeParseError> {
    let Some(raw) = args else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| invalid_args(type_name, args))
        })
        .collect()
}

fn optional_length(type_name: &str, args: Option<&str>) -> Result<Option<u32>, SqlTypeParseError> {
    match numeric_args(type_name, args)?.as_slice() {
        [] => Ok(None),
        [len] => Ok(Some(*len)),
        _ => Err(invalid_args(type_name, args)),
    }
}

fn required_length(type_name: &str, args: Option<&str>) -> Result<u32, SqlTypeParseError> {
    optional_length(type_name, args)?
        .ok_or_else(|| SqlTypeParseError::MissingLength(type_name.to_string()))
}

/// Parse `'a','b''c'` into its members, unescaping doubled quotes.
fn quoted_args(type_name: &str, args: Option<&str>) -> Result<Vec<String>, SqlTypeParseError> {
    let raw = args.ok_or_else(|| invalid_args(type_name, args))?;
    let mut values = Vec::new();
    let mut chars = raw.trim().chars().peekable();
    loop {
        if chars.next() != Some('\'') {
            return Err(invalid_args(type_name, args));
        }
        let mut value = String::new();
        loop {
            match chars.next() {
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    value.push('\'');
                }
                Some('\'') => break,
                Some(ch) => value.push(ch),
                None => return Err(invalid_args(type_name, args)),
            }
        }
        values.push(value);
        while chars.peek().is_some_and(|ch| ch.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => {
                while chars.peek().is_some_and(|ch| ch.is_whitespace()) {
                    chars.next();
                }
            }
            Some(_) => return Err(invalid_args(type_name, args)),
        }
    }
    Ok(values)
}
