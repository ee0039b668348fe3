use crate::animation::value::OptionValue;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at progress `t` (already eased) between `a` and `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for OptionValue {
    /// Numbers (and numeric text) interpolate directly; text with the same shape
    /// (`inset(0% 0% 0% 100%)` -> `inset(0% 0% 0% 0%)`) interpolates the embedded numbers.
    /// Anything else holds `a` until `t` reaches 1.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return b.clone();
        }

        match (a, b) {
            (OptionValue::Text(x), OptionValue::Text(y)) => {
                lerp_text(x, y, t).map_or_else(|| a.clone(), OptionValue::Text)
            }
            _ => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => OptionValue::Number(f64::lerp(&x, &y, t)),
                _ => a.clone(),
            },
        }
    }
}

#[derive(Debug, PartialEq)]
enum Chunk<'a> {
    Num(f64),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let prev_is_word = i > 0 && (bytes[i - 1].is_ascii_alphanumeric() || bytes[i - 1] == b'_');
        let starts_number = !prev_is_word
            && (bytes[i].is_ascii_digit()
                || (matches!(bytes[i], b'-' | b'.')
                    && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit() || *b == b'.')));
        if !starts_number {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        let mut seen_dot = bytes[i] == b'.';
        while j < bytes.len() {
            match bytes[j] {
                b'0'..=b'9' => {}
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            j += 1;
        }

        if let Ok(n) = s[i..j].parse::<f64>() {
            if text_start < i {
                out.push(Chunk::Text(&s[text_start..i]));
            }
            out.push(Chunk::Num(n));
            text_start = j;
        }
        i = j;
    }

    if text_start < s.len() {
        out.push(Chunk::Text(&s[text_start..]));
    }
    out
}

fn lerp_text(a: &str, b: &str, t: f64) -> Option<String> {
    let ca = chunks(a);
    let cb = chunks(b);
    if ca.len() != cb.len() || !ca.iter().any(|c| matches!(c, Chunk::Num(_))) {
        return None;
    }

    let mut out = String::with_capacity(b.len());
    for (x, y) in ca.iter().zip(cb.iter()) {
        match (x, y) {
            (Chunk::Num(p), Chunk::Num(q)) => {
                out.push_str(&OptionValue::Number(f64::lerp(p, q, t)).to_string());
            }
            (Chunk::Text(p), Chunk::Text(q)) if p == q => out.push_str(p),
            _ => return None,
        }
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/tween/interp.rs"]
mod tests;
