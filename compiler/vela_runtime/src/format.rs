//! Display formatting of REAL values.

/// How REAL values are rendered as text.
///
/// Values are rounded to `decimal_places` fixed-point digits, then trailing
/// zeros and a trailing decimal point are dropped, so `3.0` renders as `3`
/// and `0.1234567` as `0.123457`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RealFormat {
    pub decimal_places: usize,
}

impl RealFormat {
    pub const fn new(decimal_places: usize) -> Self {
        RealFormat { decimal_places }
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }

        let mut text = format!("{:.*}", self.decimal_places, value);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text.remove(0);
        }
        text
    }
}

impl Default for RealFormat {
    fn default() -> Self {
        RealFormat::new(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_format() {
        let fmt = RealFormat::default();
        assert_eq!(fmt.format(3.0), "3");
        assert_eq!(fmt.format(0.123_456_7), "0.123457");
        assert_eq!(fmt.format(2.5), "2.5");
        assert_eq!(fmt.format(-1.25), "-1.25");
        assert_eq!(fmt.format(100.0), "100");
    }

    #[test]
    fn test_negative_zero_after_rounding() {
        assert_eq!(RealFormat::default().format(-0.000_000_1), "0");
    }

    #[test]
    fn test_zero_places() {
        let fmt = RealFormat::new(0);
        assert_eq!(fmt.format(2.6), "3");
        assert_eq!(fmt.format(10.0), "10");
    }

    #[test]
    fn test_non_finite() {
        let fmt = RealFormat::default();
        assert_eq!(fmt.format(f64::NAN), "NaN");
        assert_eq!(fmt.format(f64::INFINITY), "Infinity");
        assert_eq!(fmt.format(f64::NEG_INFINITY), "-Infinity");
    }
}
