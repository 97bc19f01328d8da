//! Canonical seed string and bound coercion.

use crate::error::FqdnRandError;
use crate::types::SeedPart;

pub const DELIMITER: char = ':';

/// `[fqdn.downcase, bound, extra_parts].join(":")`.
///
/// The extra parts are joined as one nested list, so an empty list still
/// contributes a trailing delimiter. Existing values depend on that.
pub fn build_seed_string(node_identifier: &str, bound: u64, extra_parts: &[SeedPart]) -> String {
    let mut out = node_identifier.to_lowercase();
    out.push(DELIMITER);
    out.push_str(&bound.to_string());
    out.push(DELIMITER);
    join_into(&mut out, extra_parts);
    out
}

fn join_into(out: &mut String, parts: &[SeedPart]) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 { out.push(DELIMITER); }
        match part {
            SeedPart::Array(inner) => join_into(out, inner),
            other => out.push_str(&render(other)),
        }
    }
}

/// Text form of a single seed part.
pub fn render(part: &SeedPart) -> String {
    match part {
        SeedPart::Undef => String::new(),
        SeedPart::Boolean(b) => b.to_string(),
        SeedPart::Integer(n) => n.to_string(),
        SeedPart::Float(f) => render_float(*f),
        SeedPart::Text(s) => s.clone(),
        SeedPart::Array(inner) => {
            let mut out = String::new();
            join_into(&mut out, inner);
            out
        }
    }
}

/// Shortest round-trip float text, switching to `d.ddde+XX` outside
/// `[1e-4, 1e16)`.
pub fn render_float(f: f64) -> String {
    if f.is_nan() { return "NaN".into(); }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    let abs = f.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        // Debug always keeps a fractional part ("3.0") and never goes exponential
        // in this range.
        return format!("{f:?}");
    }
    let sci = format!("{f:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let mantissa = if mantissa.contains('.') { mantissa.to_string() } else { format!("{mantissa}.0") };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Integer conversion of the raw bound, with `String#to_i` semantics for text.
pub fn coerce_bound(raw: &SeedPart) -> Result<i64, FqdnRandError> {
    let invalid = || FqdnRandError::InvalidBound { raw: render(raw) };
    match raw {
        SeedPart::Integer(n) => Ok(*n),
        SeedPart::Float(f) if f.is_finite() => {
            let t = f.trunc();
            if t < i64::MIN as f64 || t >= i64::MAX as f64 { Err(invalid()) } else { Ok(t as i64) }
        }
        SeedPart::Float(_) => Err(invalid()),
        SeedPart::Text(s) => parse_leading_int(s).ok_or_else(invalid),
        SeedPart::Undef | SeedPart::Boolean(_) | SeedPart::Array(_) => Ok(0),
    }
}

/// Leading decimal integer of `s`; `Some(0)` when there is none, `None` on
/// overflow.
fn parse_leading_int(s: &str) -> Option<i64> {
    // ASCII whitespace plus vertical tab only
    let mut chars = s
        .trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
        .chars()
        .peekable();
    let negative = match chars.peek() {
        Some('-') => { chars.next(); true }
        Some('+') => { chars.next(); false }
        _ => false,
    };
    let mut value: i64 = 0;
    let mut prev_digit = false;
    while let Some(&c) = chars.peek() {
        if let Some(d) = c.to_digit(10) {
            let d = d as i64;
            value = value.checked_mul(10)?;
            value = if negative { value.checked_sub(d)? } else { value.checked_add(d)? };
            prev_digit = true;
            chars.next();
        } else if c == '_' && prev_digit {
            chars.next();
            // "1__2" stops at the first underscore, as does a trailing one
            match chars.peek() {
                Some(n) if n.is_ascii_digit() => prev_digit = false,
                _ => break,
            }
        } else {
            break;
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_extra_parts_keeps_trailing_delimiter() {
        assert_eq!(build_seed_string("web01.example.com", 30, &[]), "web01.example.com:30:");
    }

    #[test]
    fn node_identifier_is_lowercased() {
        assert_eq!(
            build_seed_string("Web01.EXAMPLE.com", 30, &["Job".into()]),
            "web01.example.com:30:Job"
        );
    }

    #[test]
    fn parts_keep_order_and_nested_arrays_flatten() {
        let parts = vec![
            SeedPart::from(5),
            SeedPart::from("a"),
            SeedPart::from(vec![SeedPart::Boolean(false), SeedPart::Undef]),
            SeedPart::Array(vec![]),
        ];
        assert_eq!(build_seed_string("h", 7, &parts), "h:7:5:a:false::");
        let swapped = vec![SeedPart::from("a"), SeedPart::from(5)];
        assert_eq!(build_seed_string("h", 7, &swapped), "h:7:a:5");
    }

    #[test]
    fn floats_render_like_the_host() {
        assert_eq!(render_float(1.5), "1.5");
        assert_eq!(render_float(3.0), "3.0");
        assert_eq!(render_float(-0.25), "-0.25");
        assert_eq!(render_float(0.0), "0.0");
        assert_eq!(render_float(1e20), "1.0e+20");
        assert_eq!(render_float(1.5e-5), "1.5e-05");
        assert_eq!(render_float(-2.5e100), "-2.5e+100");
        assert_eq!(render_float(f64::NAN), "NaN");
        assert_eq!(render_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn text_bound_follows_to_i() {
        let c = |s: &str| coerce_bound(&SeedPart::from(s)).unwrap();
        assert_eq!(c("30"), 30);
        assert_eq!(c("  42abc"), 42);
        assert_eq!(c("1_000"), 1000);
        assert_eq!(c("1__0"), 1);
        assert_eq!(c("+7"), 7);
        assert_eq!(c("-3"), -3);
        assert_eq!(c("abc"), 0);
        assert_eq!(c(""), 0);
    }

    #[test]
    fn only_ascii_whitespace_is_skipped() {
        let c = |s: &str| coerce_bound(&SeedPart::from(s)).unwrap();
        assert_eq!(c("\t\n\x0b\x0c\r 30"), 30);
        assert_eq!(c("\u{3000}30"), 0);
        assert_eq!(c("\u{a0}30"), 0);
    }

    #[test]
    fn non_text_bounds() {
        assert_eq!(coerce_bound(&SeedPart::Integer(12)), Ok(12));
        assert_eq!(coerce_bound(&SeedPart::Float(9.9)), Ok(9));
        assert_eq!(coerce_bound(&SeedPart::Boolean(true)), Ok(0));
        assert!(coerce_bound(&SeedPart::Float(f64::INFINITY)).is_err());
        assert!(coerce_bound(&SeedPart::from("99999999999999999999")).is_err());
    }
}
