//! Money formatting in the Indian numbering system (lakh/crore grouping)

/// Formats rupees with the ₹ sign: `1180.0` -> `"₹1,180"`, `150000.5` -> `"₹1,50,000.5"`
///
/// Paise are rounded to two places and shown only when non-zero.
pub fn format_inr(value: f64) -> String {
    let (negative, body) = format_indian_parts(value);
    if negative {
        format!("-₹{}", body)
    } else {
        format!("₹{}", body)
    }
}

/// Same grouping as [`format_inr`] without the currency sign
pub fn format_amount(value: f64) -> String {
    let (negative, body) = format_indian_parts(value);
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// `42.456` -> `"42.46%"`, `90.0` -> `"90%"`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_amount(value))
}

fn format_indian_parts(value: f64) -> (bool, String) {
    if !value.is_finite() {
        return (false, "0".to_string());
    }
    let paise = (value.abs() * 100.0).round() as u64;
    let rupees = paise / 100;
    let fraction = paise % 100;

    let mut body = group_indian(rupees);
    if fraction != 0 {
        let digits = format!("{:02}", fraction);
        body.push('.');
        body.push_str(digits.trim_end_matches('0'));
    }
    (value < 0.0 && paise != 0, body)
}

/// Last three digits form one group, the rest are grouped in pairs
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head: Vec<char> = head.chars().collect();

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head[start..end].iter().collect::<String>());
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(1180.0), "₹1,180");
        assert_eq!(format_inr(180.0), "₹180");
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(100000.0), "₹1,00,000");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.9");
        assert_eq!(format_inr(1180.456), "₹1,180.46");
        assert_eq!(format_inr(-2500.0), "-₹2,500");
    }

    #[test]
    fn test_negative_rounding_to_zero() {
        assert_eq!(format_inr(-0.001), "₹0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(90.0), "90%");
        assert_eq!(format_percent(42.456), "42.46%");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_amount(f64::NAN), "0");
    }
}
