//! Rendering of bound parameters into Trino SQL literals.
//!
//! The REST protocol has no binary parameter channel, so bound values travel
//! as literals in an `EXECUTE IMMEDIATE ... USING` clause. All quoting lives
//! here.

use crate::store::SqlValue;

/// Single-quoted varchar literal with embedded quotes doubled.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Literal form of one parameter.
pub fn render(value: &SqlValue) -> String {
    match value {
        SqlValue::Varchar(text) => quote(text),
        SqlValue::Integer(v) => v.to_string(),
        SqlValue::BigInt(v) => v.to_string(),
        SqlValue::Double(v) if v.is_nan() => "nan()".to_string(),
        SqlValue::Double(v) if v.is_infinite() && *v > 0.0 => "infinity()".to_string(),
        SqlValue::Double(v) if v.is_infinite() => "-infinity()".to_string(),
        // Exponent form is a DOUBLE literal; plain `6.71` would be DECIMAL.
        SqlValue::Double(v) => format!("{:E}", v),
        SqlValue::Null => "NULL".to_string(),
    }
}

/// Wrap `sql` so its `?` placeholders are bound to `params`.
pub fn execute_immediate(sql: &str, params: &[SqlValue]) -> String {
    let values: Vec<String> = params.iter().map(render).collect();
    format!("EXECUTE IMMEDIATE {} USING {}", quote(sql), values.join(","))
}
