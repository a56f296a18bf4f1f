pub mod auth;
pub mod branches;
pub mod categories;
pub mod menu;
pub mod offers;
pub mod orders;
pub mod rewards;
pub mod services;
pub mod settings;

/// Collapses runs of whitespace to single spaces and strips control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitizes each line, trims blank edges and collapses repeated blank lines.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        let is_empty = line.is_empty();
        if is_empty {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}

/// Parses a decimal money amount ("12.34", "7", "7.5") into cents.
pub(crate) fn parse_price_cents(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if !whole.chars().all(|ch| ch.is_ascii_digit())
        || !frac.chars().all(|ch| ch.is_ascii_digit())
        || frac.len() > 2
        || (whole.is_empty() && frac.is_empty())
    {
        return None;
    }

    let whole: i32 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };

    let cents: i32 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i32>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(cents)
}

/// Parses an optional numeric identifier submitted as a form string.
/// Empty and non-positive values collapse to `None`.
pub(crate) fn parse_optional_id(value: Option<String>) -> Result<Option<i32>, String> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                match trimmed.parse::<i32>() {
                    Ok(parsed) if parsed > 0 => Ok(Some(parsed)),
                    Ok(_) => Ok(None),
                    Err(_) => Err(trimmed.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_cents_accepts_common_shapes() {
        assert_eq!(parse_price_cents("12.34"), Some(1234));
        assert_eq!(parse_price_cents("12"), Some(1200));
        assert_eq!(parse_price_cents("12.5"), Some(1250));
        assert_eq!(parse_price_cents(" 0.99 "), Some(99));
        assert_eq!(parse_price_cents(".50"), Some(50));
    }

    #[test]
    fn parse_price_cents_rejects_garbage() {
        assert_eq!(parse_price_cents(""), None);
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents("-3"), None);
        assert_eq!(parse_price_cents("1.234"), None);
        assert_eq!(parse_price_cents("1,50"), None);
        assert_eq!(parse_price_cents("."), None);
    }

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Chicken   Biryani  "), "Chicken Biryani");
    }

    #[test]
    fn parse_optional_id_treats_blank_as_none() {
        assert_eq!(parse_optional_id(None), Ok(None));
        assert_eq!(parse_optional_id(Some("  ".to_string())), Ok(None));
        assert_eq!(parse_optional_id(Some("7".to_string())), Ok(Some(7)));
        assert_eq!(parse_optional_id(Some("0".to_string())), Ok(None));
        assert_eq!(
            parse_optional_id(Some("abc".to_string())),
            Err("abc".to_string())
        );
    }
}
