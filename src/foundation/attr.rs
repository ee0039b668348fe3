/// Parse an attribute value the way markup authors expect integer attributes to behave:
/// leading whitespace is ignored, an optional sign is accepted and parsing stops at the first
/// non-digit (`"150ms"` reads as `150`). Returns `None` when no digits lead the value.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Convert a `data-*` attribute name into its camel-cased dataset key
/// (`data-entrance-delay-between` -> `entranceDelayBetween`).
///
/// Returns `None` for attributes outside the `data-` namespace.
pub fn dataset_key(attr_name: &str) -> Option<String> {
    let rest = attr_name.strip_prefix("data-")?;
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(next) = chars.peek().copied()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
            continue;
        }
        out.push(c);
    }
    Some(out)
}

/// Lower-case the first character of `s`, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/attr.rs"]
mod tests;
