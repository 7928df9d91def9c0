use crate::error::InputError;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending in `...`.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Parses a degree field. Blank input counts as zero ("not provided").
pub fn parse_degrees(field: &str, text: &str, min: f64, max: f64) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field: field.to_string(),
        text: trimmed.to_string(),
    })?;

    if !value.is_finite() || value < min || value > max {
        return Err(InputError::OutOfBounds {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(value)
}
