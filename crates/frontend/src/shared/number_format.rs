//! Форматирование чисел для ячеек таблиц

/// Число с фиксированным количеством знаков после точки и пробелом
/// в качестве разделителя тысяч: `1234.567, 2` -> `"1 234.57"`
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    // "-0.00" после округления показываем как "0.00"
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: 2 знака после точки
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.5), "-1 234.50");
        assert_eq!(format_money(999.999), "1 000.00");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_format_without_decimals() {
        assert_eq!(format_number_with_decimals(100.0, 0), "100");
        assert_eq!(format_number_with_decimals(123456.0, 0), "123 456");
    }
}
