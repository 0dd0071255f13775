use std::fmt;

const SIGNIFICANT_DIGITS: i32 = 6;

/// A scalar written the way POV-Ray scene files have always carried
/// them: six significant digits, trailing zeros dropped, scientific
/// notation only for very small or very large magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 {
            // also catches -0.0
            return f.write_str("0");
        }
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                strip_trailing_zeros(mantissa),
                sign,
                exponent.abs()
            )
        } else {
            let precision = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
            let fixed = format!("{:.*}", precision, v);
            f.write_str(strip_trailing_zeros(&fixed))
        }
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// A 3-vector written as `<x,y,z>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(pub [f64; 3]);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "<{},{},{}>", Real(x), Real(y), Real(z))
    }
}
