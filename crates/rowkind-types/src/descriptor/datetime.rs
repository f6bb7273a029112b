use super::{TypeDescriptor, mismatched};
use crate::error::ConversionError;
use crate::kind::ValueKind;
use crate::sql_type::SqlType;
use crate::value::{SqlValue, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const ACCEPTED: &[SqlType] = &[SqlType::Date, SqlType::Datetime, SqlType::Timestamp];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const MAX_FRACTION_DIGITS: usize = 6;

/// UTC instants. Only text input is parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeDescriptor;

impl TypeDescriptor for DateTimeDescriptor {
    fn kind(&self) -> ValueKind {
        ValueKind::DateTime
    }

    fn canonical_type(&self) -> SqlType {
        SqlType::Datetime
    }

    fn accepted_types(&self) -> &'static [SqlType] {
        ACCEPTED
    }

    fn display_string(&self) -> &'static str {
        "DATETIME"
    }

    fn encode(&self, value: &Value) -> Result<SqlValue, ConversionError> {
        match value {
            Value::DateTime(instant) => Ok(SqlValue::Timestamp(*instant)),
            other => Err(mismatched(ValueKind::DateTime, other)),
        }
    }

    fn decode(&self, value: &SqlValue) -> Result<Value, ConversionError> {
        match value {
            SqlValue::Text(text) => parse_datetime(text)
                .map(Value::DateTime)
                .map_err(|reason| ConversionError::parse(ValueKind::DateTime, text, reason)),
            other => Err(ConversionError::unsupported_value(ValueKind::DateTime, other)),
        }
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD HH:MM:SS.ffffff`
/// as a UTC instant. A `T` separator is also accepted. Date-only input is
/// midnight UTC.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>, String> {
    let text = input.trim();
    if text.is_empty() {
        return Err("empty input".to_string());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| "date has no midnight".to_string());
    }

    if let Some((_, fraction)) = text.rsplit_once('.') {
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(format!(
                "fractional seconds exceed {MAX_FRACTION_DIGITS} digits"
            ));
        }
    }

    let mut last_error = String::new();
    for format in DATETIME_FORMATS {
        match NaiveDateTime::parse_from_str(text, format) {
            Ok(naive) => return Ok(naive.and_utc()),
            Err(err) => last_error = err.to_string(),
        }
    }
    Err(last_error)
}
