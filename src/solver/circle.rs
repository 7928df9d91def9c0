use super::{Quantity, Solution, format_degrees, format_input};
use crate::error::SolveError;

const NOT_ENOUGH_DATA: &str = "Not enough data: provide (arc1 & arc2) or (angle & arc1).";
const NOT_ENOUGH_TANGENCY_DATA: &str =
    "Provide either intercepted arc (to get angle) or angle (to get arc).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleCaseKind {
    TwoTangentsOutside,
    TangentSecantOutside,
    TwoSecantsOutside,
    TangentSecantAtTangencyPoint,
    TwoSecantsInside,
}

/// Formula family shared by one or more circle cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleFamily {
    /// Vertex outside the circle: ∠ = ½(far arc − near arc).
    Exterior,
    /// Vertex on the circle: ∠ = ½(intercepted arc).
    Tangency,
    /// Vertex inside the circle: ∠ = ½(Arc₁ + Arc₂).
    Interior,
}

impl CircleCaseKind {
    pub const ALL: [CircleCaseKind; 5] = [
        CircleCaseKind::TwoTangentsOutside,
        CircleCaseKind::TangentSecantOutside,
        CircleCaseKind::TwoSecantsOutside,
        CircleCaseKind::TangentSecantAtTangencyPoint,
        CircleCaseKind::TwoSecantsInside,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CircleCaseKind::TwoTangentsOutside => "Two Tangents Intersect Outside the Circle",
            CircleCaseKind::TangentSecantOutside => {
                "Tangent and Secant Intersect Outside the Circle"
            }
            CircleCaseKind::TwoSecantsOutside => "Two Secants Intersect Outside the Circle",
            CircleCaseKind::TangentSecantAtTangencyPoint => {
                "Tangent and Secant at Point of Tangency"
            }
            CircleCaseKind::TwoSecantsInside => "Two Secants Intersect Inside the Circle",
        }
    }

    pub fn family(&self) -> CircleFamily {
        match self {
            CircleCaseKind::TwoTangentsOutside
            | CircleCaseKind::TangentSecantOutside
            | CircleCaseKind::TwoSecantsOutside => CircleFamily::Exterior,
            CircleCaseKind::TangentSecantAtTangencyPoint => CircleFamily::Tangency,
            CircleCaseKind::TwoSecantsInside => CircleFamily::Interior,
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

impl CircleFamily {
    pub fn theorem(&self) -> &'static str {
        match self {
            CircleFamily::Exterior => "Exterior angle theorem: ∠ = ½(far arc − near arc)",
            CircleFamily::Tangency => "Tangent-chord theorem: ∠ = ½(intercepted arc)",
            CircleFamily::Interior => "Interior angle theorem: ∠ = ½(Arc₁ + Arc₂)",
        }
    }
}

/// Partially known quantities of a circle problem.
///
/// A value counts as known only when it is present and strictly positive, so
/// a zero arc or angle is indistinguishable from one that was never entered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KnownValues {
    pub angle: Option<f64>,
    pub arc1: Option<f64>,
    pub arc2: Option<f64>,
}

impl KnownValues {
    /// Builds a set of values from raw inputs where zero means "unknown".
    pub fn from_raw(angle: f64, arc1: f64, arc2: f64) -> Self {
        Self {
            angle: Some(angle),
            arc1: Some(arc1),
            arc2: Some(arc2),
        }
    }

    pub fn known_angle(&self) -> Option<f64> {
        known(self.angle)
    }

    pub fn known_arc1(&self) -> Option<f64> {
        known(self.arc1)
    }

    pub fn known_arc2(&self) -> Option<f64> {
        known(self.arc2)
    }
}

fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Solved(Solution),
    InsufficientData(String),
}

impl SolveOutcome {
    pub fn into_result(self) -> Result<Solution, SolveError> {
        match self {
            SolveOutcome::Solved(solution) => Ok(solution),
            SolveOutcome::InsufficientData(message) => Err(SolveError::InsufficientData(message)),
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

/// Infers the missing quantity of a circle tangent/secant problem.
///
/// Exactly two of the three quantities must be known; over- and
/// under-determined inputs both report insufficient data.
pub fn solve(kind: CircleCaseKind, values: &KnownValues) -> SolveOutcome {
    let family = kind.family();
    let angle = values.known_angle();
    let arc1 = values.known_arc1();
    let arc2 = values.known_arc2();

    match family {
        CircleFamily::Exterior => match (angle, arc1, arc2) {
            (None, Some(arc1), Some(arc2)) => {
                let res = 0.5 * (arc1 - arc2);
                solved(
                    family,
                    Quantity::Angle,
                    res,
                    format!(
                        "Exterior angle = ½(Arc₁ − Arc₂) = ½({} − {}) = {}",
                        format_input(arc1),
                        format_input(arc2),
                        format_degrees(res)
                    ),
                )
            }
            (Some(angle), Some(arc1), None) => {
                let res = arc1 - 2.0 * angle;
                solved(
                    family,
                    Quantity::Arc2,
                    res,
                    format!(
                        "Arc₂ = Arc₁ − 2×∠ = {} − 2×{} = {}",
                        format_input(arc1),
                        format_input(angle),
                        format_degrees(res)
                    ),
                )
            }
            _ => SolveOutcome::InsufficientData(NOT_ENOUGH_DATA.to_string()),
        },
        CircleFamily::Tangency => match (angle, arc1) {
            (None, Some(arc1)) => {
                let res = 0.5 * arc1;
                solved(
                    family,
                    Quantity::Angle,
                    res,
                    format!(
                        "Angle = ½(intercepted arc) = ½×{} = {}",
                        format_input(arc1),
                        format_degrees(res)
                    ),
                )
            }
            (Some(angle), None) => {
                let res = 2.0 * angle;
                solved(
                    family,
                    Quantity::Arc1,
                    res,
                    format!(
                        "Intercepted arc = 2×angle = 2×{} = {}",
                        format_input(angle),
                        format_degrees(res)
                    ),
                )
            }
            _ => SolveOutcome::InsufficientData(NOT_ENOUGH_TANGENCY_DATA.to_string()),
        },
        CircleFamily::Interior => match (angle, arc1, arc2) {
            (None, Some(arc1), Some(arc2)) => {
                let res = 0.5 * (arc1 + arc2);
                solved(
                    family,
                    Quantity::Angle,
                    res,
                    format!(
                        "Interior angle = ½({} + {}) = {}",
                        format_input(arc1),
                        format_input(arc2),
                        format_degrees(res)
                    ),
                )
            }
            (Some(angle), Some(arc1), None) => {
                let res = 2.0 * angle - arc1;
                solved(
                    family,
                    Quantity::Arc2,
                    res,
                    format!(
                        "Arc₂ = 2×angle − Arc₁ = 2×{} − {} = {}",
                        format_input(angle),
                        format_input(arc1),
                        format_degrees(res)
                    ),
                )
            }
            _ => SolveOutcome::InsufficientData(NOT_ENOUGH_DATA.to_string()),
        },
    }
}

fn solved(family: CircleFamily, unknown: Quantity, value: f64, summary: String) -> SolveOutcome {
    SolveOutcome::Solved(Solution {
        unknown,
        value,
        steps: vec![family.theorem().to_string(), summary.clone()],
        summary,
    })
}
