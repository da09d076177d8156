//! GLSL numeric literal formatting

/// Format an `f64` as a GLSL float literal.
///
/// Uses the shortest decimal text that round-trips, and keeps a trailing `.0`
/// on integral values so `float[]( ... )` constructors never see an int.
pub fn glsl_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_keep_decimal_point() {
        assert_eq!(glsl_float(1.0), "1.0");
        assert_eq!(glsl_float(-2.0), "-2.0");
        assert_eq!(glsl_float(9.0), "9.0");
        assert_eq!(glsl_float(0.0), "0.0");
    }

    #[test]
    fn test_fractions_use_shortest_form() {
        assert_eq!(glsl_float(1.0 / 16.0), "0.0625");
        assert_eq!(glsl_float(2.0 / 16.0), "0.125");
        assert_eq!(glsl_float(4.0 / 16.0), "0.25");
        assert_eq!(glsl_float(0.01), "0.01");
        assert_eq!(glsl_float(-0.5), "-0.5");
    }

    #[test]
    fn test_default_stride_text() {
        assert_eq!(glsl_float(1.0 / 300.0), "0.0033333333333333335");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(glsl_float(f64::INFINITY), "inf");
        assert_eq!(glsl_float(f64::NAN), "NaN");
    }
}
