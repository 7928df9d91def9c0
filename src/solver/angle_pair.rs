use super::{Quantity, Solution, format_input};
use crate::error::SolveError;

pub const MIN_ANGLE: f64 = 0.0;
pub const MAX_ANGLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnglePairKind {
    Complementary,
    Supplementary,
    LinearPair,
    Vertical,
}

impl AnglePairKind {
    pub const ALL: [AnglePairKind; 4] = [
        AnglePairKind::Complementary,
        AnglePairKind::Supplementary,
        AnglePairKind::LinearPair,
        AnglePairKind::Vertical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnglePairKind::Complementary => "Complementary",
            AnglePairKind::Supplementary => "Supplementary",
            AnglePairKind::LinearPair => "Linear Pair",
            AnglePairKind::Vertical => "Vertical Angles",
        }
    }

    /// Sum of the pair, or `None` for vertical angles which are congruent.
    pub fn total(&self) -> Option<f64> {
        match self {
            AnglePairKind::Complementary => Some(90.0),
            AnglePairKind::Supplementary | AnglePairKind::LinearPair => Some(180.0),
            AnglePairKind::Vertical => None,
        }
    }

    pub fn next(&self) -> Self {
        let i = self.position();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let i = self.position();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }
}

/// Computes A₂ from A₁ for the given pair relationship.
///
/// Zero is treated as "not entered" for every kind except vertical angles,
/// where a zero-degree angle is a legitimate input.
pub fn solve(kind: AnglePairKind, angle1: f64) -> Result<Solution, SolveError> {
    if !angle1.is_finite() || !(MIN_ANGLE..=MAX_ANGLE).contains(&angle1) {
        return Err(SolveError::OutOfRange {
            value: angle1,
            min: MIN_ANGLE,
            max: MAX_ANGLE,
        });
    }
    if angle1 == 0.0 && kind != AnglePairKind::Vertical {
        return Err(SolveError::InsufficientInput);
    }

    let a1 = format_input(angle1);
    let solution = match kind.total() {
        Some(total) => {
            let a2 = total - angle1;
            Solution {
                unknown: Quantity::SecondAngle,
                value: a2,
                summary: format!("Result: A₂ = {:.2}°", a2),
                steps: vec![
                    format!("Formula: A₁ + A₂ = {}°", total),
                    format!(
                        "Substitute: A₁ = {}°, so A₂ = {}° − {}° = {:.4}°",
                        a1, total, a1, a2
                    ),
                ],
            }
        }
        None => Solution {
            unknown: Quantity::SecondAngle,
            value: angle1,
            summary: format!(
                "Result: A₂ = {:.2}° (vertical angles are congruent)",
                angle1
            ),
            steps: vec![
                "Vertical angles are equal because they are formed by two intersecting straight lines."
                    .to_string(),
                format!("Given A₁ = {}°, so A₂ = {:.2}°", a1, angle1),
            ],
        },
    };

    Ok(solution)
}
