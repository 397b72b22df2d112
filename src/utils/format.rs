const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BASE: f64 = 1024.0;

/// Format a byte count for the upload preview, e.g. `1536` -> `"1.50 KB"`.
///
/// Counts up to and including 1024 are always shown in KB, so small files
/// read as fractions of a kilobyte (`10` -> `"0.01 KB"`).
pub fn format_bytes(bytes: u64) -> String {
    format_byte_count(bytes as f64)
}

/// Same as [`format_bytes`] but accepts any number.
///
/// Negative and non-finite input yields a malformed string instead of a panic.
pub fn format_byte_count(bytes: f64) -> String {
    if bytes <= BASE {
        return format!("{} KB", to_fixed_2(bytes / BASE));
    }

    let exponent = unit_exponent(bytes);
    let value = bytes / BASE.powi(exponent as i32);
    format!("{} {}", to_fixed_2(value), UNITS[exponent])
}

fn unit_exponent(bytes: f64) -> usize {
    let last = UNITS.len() - 1;
    if bytes.is_nan() {
        return 0;
    }
    if bytes.is_infinite() {
        return last;
    }

    ((bytes.ln() / BASE.ln()).floor() as usize).min(last)
}

/// 保留两位小数，恰好为 .5 时远离零进位
fn to_fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let total: usize = s.chars().map(|c| UnicodeWidthChar::width(c).unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 3 > max_width {
            break;
        }
        width += w;
        result.push(c);
    }
    if max_width >= 3 {
        result.push_str("...");
    }
    result
}
