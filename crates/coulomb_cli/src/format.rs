/// Scientific notation with `precision` mantissa digits and a signed exponent of at
/// least two digits, e.g. `8.99e-03`.
pub fn format_sci(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}inf");
    }
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exponent))) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_exponent_and_adds_sign() {
        assert_eq!(format_sci(8.987_551_787_368_176e-3, 2), "8.99e-03");
        assert_eq!(format_sci(1.0, 2), "1.00e+00");
        assert_eq!(format_sci(-1e-6, 2), "-1.00e-06");
        assert_eq!(format_sci(0.0, 3), "0.000e+00");
        assert_eq!(format_sci(3.5e120, 1), "3.5e+120");
    }

    #[test]
    fn non_finite_values_print_plainly() {
        assert_eq!(format_sci(f64::INFINITY, 2), "inf");
        assert_eq!(format_sci(f64::NEG_INFINITY, 2), "-inf");
        assert_eq!(format_sci(f64::NAN, 2), "nan");
    }
}
