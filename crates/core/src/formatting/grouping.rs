use super::decimals::FixedPoint;

pub const GROUP_SEPARATOR: char = ',';
pub const DECIMAL_POINT: char = '.';

/// Insert `GROUP_SEPARATOR` every `group_size` digits, counting from the right.
pub fn group_digits(digits: &str, group_size: usize) -> String {
    if group_size == 0 || digits.len() <= group_size {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / group_size);
    let lead = digits.len() % group_size;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + group_size - lead) % group_size == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Render a rounded amount: `{prefix}{-}{grouped integer}[.{fraction}]`.
///
/// The sign follows the prefix, so `-1234.5` with `"$"` prints `$-1,234.50`.
pub fn render(fixed: &FixedPoint, prefix: Option<&str>, group_size: usize) -> String {
    let mut out = String::new();
    if let Some(prefix) = prefix {
        out.push_str(prefix);
    }
    if fixed.negative {
        out.push('-');
    }
    out.push_str(&group_digits(&fixed.integer, group_size));
    if !fixed.fraction.is_empty() {
        out.push(DECIMAL_POINT);
        out.push_str(&fixed.fraction);
    }
    out
}
