pub mod angle_pair;
pub mod circle;

// Public API exports
pub use angle_pair::AnglePairKind;
pub use circle::{CircleCaseKind, CircleFamily, KnownValues, SolveOutcome};

/// The quantity a solver derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// A₂ of an angle pair.
    SecondAngle,
    Angle,
    Arc1,
    Arc2,
}

impl Quantity {
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::SecondAngle => "A₂",
            Quantity::Angle => "Angle",
            Quantity::Arc1 => "Arc₁",
            Quantity::Arc2 => "Arc₂",
        }
    }
}

/// A solved value together with the text shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub unknown: Quantity,
    pub value: f64,
    pub summary: String,
    pub steps: Vec<String>,
}

impl Solution {
    /// The value rounded to two decimals with a degree mark.
    pub fn display_value(&self) -> String {
        format_degrees(self.value)
    }
}

/// `F(x)`: two decimals and a trailing degree mark.
pub fn format_degrees(x: f64) -> String {
    format!("{:.2}°", x)
}

/// Prints a user-supplied number the way it was entered: integral values keep
/// one decimal (`30.0`), everything else uses the shortest exact form. Very
/// small or very large magnitudes switch to exponent form (`1e-05`).
pub fn format_input(x: f64) -> String {
    let magnitude = x.abs();
    if x.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", x);
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{}e{}{:0>2}", mantissa, sign, digits);
        }
    }

    if x.is_finite() && x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_degrees_rounds_to_two_places() {
        assert_eq!(format_degrees(60.0), "60.00°");
        assert_eq!(format_degrees(12.346), "12.35°");
        assert_eq!(format_degrees(-20.0), "-20.00°");
    }

    #[test]
    fn test_format_input_keeps_one_decimal_for_integers() {
        assert_eq!(format_input(30.0), "30.0");
        assert_eq!(format_input(12.5), "12.5");
        assert_eq!(format_input(0.25), "0.25");
    }

    #[test]
    fn test_format_input_uses_exponent_for_tiny_values() {
        assert_eq!(format_input(0.00001), "1e-05");
        assert_eq!(format_input(0.000015), "1.5e-05");
        assert_eq!(format_input(0.0001), "0.0001");
        assert_eq!(format_input(1e16), "1e+16");
    }

    #[test]
    fn test_display_value() {
        let solution = Solution {
            unknown: Quantity::Angle,
            value: 59.999,
            summary: String::new(),
            steps: vec![],
        };
        assert_eq!(solution.display_value(), "60.00°");
    }
}
