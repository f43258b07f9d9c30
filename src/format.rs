//! Console number formatting.

/// Render `n` with `,` thousands separators, e.g. `8001` -> `8,001`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shortest float form that always keeps a fractional digit (`40.0`, `25.5`).
pub fn rate(value: f64) -> String {
    format!("{:?}", value)
}
