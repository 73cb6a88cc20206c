//! Number formatting shared by the text reports.

/// Fixed-precision formatting preferences for ledger amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountFormat {
    pub precision: u8,
    pub grouping_separator: Option<char>,
}

impl AmountFormat {
    pub fn grouped(precision: u8, separator: char) -> Self {
        Self {
            precision,
            grouping_separator: Some(separator),
        }
    }

    pub fn plain(precision: u8) -> Self {
        Self {
            precision,
            grouping_separator: None,
        }
    }

    pub fn format(&self, value: f64) -> String {
        format_number(value, self.precision, self.grouping_separator)
    }
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self::grouped(2, ',')
    }
}

/// Formats `value` with `precision` decimals, grouping the integer part in
/// thousands when a separator is given.
pub fn format_number(value: f64, precision: u8, separator: Option<char>) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let Some(separator) = separator else {
        return body;
    };
    if !value.is_finite() {
        return body;
    }
    match body.find('.') {
        Some(pos) => format!("{}{}", group_integer(&body[..pos], separator), &body[pos..]),
        None => group_integer(&body, separator),
    }
}

fn group_integer(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_keeps_sign() {
        assert_eq!(format_number(1234567.891, 2, Some(',')), "1,234,567.89");
        assert_eq!(format_number(-1000.0, 2, Some(',')), "-1,000.00");
        assert_eq!(format_number(-999.5, 2, Some(',')), "-999.50");
        assert_eq!(format_number(0.0, 2, Some(',')), "0.00");
    }

    #[test]
    fn plain_format_skips_grouping() {
        assert_eq!(AmountFormat::plain(2).format(50000.0), "50000.00");
        assert_eq!(AmountFormat::default().format(50000.0), "50,000.00");
    }

    #[test]
    fn zero_precision_has_no_decimal_point() {
        assert_eq!(format_number(12345.0, 0, Some(' ')), "12 345");
    }
}
