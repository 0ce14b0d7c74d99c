//! # Response Diagrams
//!
//! A [`Diagram`] is a sampled response curve: ordered positions along the
//! beam, the response value at each position, and the labels a renderer
//! needs to draw it. Diagrams are plain data; nothing here knows how to plot.

use serde::{Deserialize, Serialize};

/// Number of samples per diagram (every 1% of the analyzed length)
pub const SAMPLE_COUNT: usize = 101;

/// Label for the position axis of every diagram
pub const SPAN_AXIS_LABEL: &str = "Span (m)";

/// Response quantity carried by a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Vertical deflection
    Deflection,
    /// Internal bending moment
    BendingMoment,
    /// Internal shear force
    ShearForce,
}

impl Quantity {
    /// All quantities, in report order
    pub const ALL: [Quantity; 3] = [
        Quantity::Deflection,
        Quantity::BendingMoment,
        Quantity::ShearForce,
    ];

    /// Display name without unit
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection",
            Quantity::BendingMoment => "Bending Moment",
            Quantity::ShearForce => "Shear Force",
        }
    }

    /// Unit label
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Deflection => "mm",
            Quantity::BendingMoment => "kNm",
            Quantity::ShearForce => "kN",
        }
    }

    /// Axis label, e.g. "Deflection (mm)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name(), self.unit())
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A value picked out of a diagram together with where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position along the beam (m)
    pub position: f64,
    /// Response value at that position
    pub value: f64,
}

/// Sampled response curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Quantity this curve describes
    pub quantity: Quantity,
    /// Value axis label, e.g. "Bending Moment (kNm)"
    pub label: String,
    /// Unit label, e.g. "kNm"
    pub unit: String,
    /// Position axis label
    pub x_label: String,
    /// Sample positions, ascending
    pub positions: Vec<f64>,
    /// Response values, one per position
    pub values: Vec<f64>,
}

impl Diagram {
    /// Sample `f` at [`SAMPLE_COUNT`] equally spaced positions over `[0, length]`.
    ///
    /// Positions are `length·i/100` for `i = 0..=100`, so both ends are
    /// included exactly.
    pub fn sample<F>(quantity: Quantity, length: f64, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let positions = sample_positions(length);
        let values = positions.iter().map(|&x| f(x)).collect();
        Self {
            quantity,
            label: quantity.label(),
            unit: quantity.unit().to_string(),
            x_label: SPAN_AXIS_LABEL.to_string(),
            positions,
            values,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the diagram holds no samples
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(position, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.values.iter().copied())
    }

    /// Largest value (first occurrence wins ties)
    pub fn max(&self) -> Option<DiagramPoint> {
        self.pick(|candidate, best| candidate > best)
    }

    /// Smallest value (first occurrence wins ties)
    pub fn min(&self) -> Option<DiagramPoint> {
        self.pick(|candidate, best| candidate < best)
    }

    /// Value with the largest magnitude, sign preserved
    pub fn max_abs(&self) -> Option<DiagramPoint> {
        self.pick(|candidate, best| candidate.abs() > best.abs())
    }

    fn pick<F>(&self, better: F) -> Option<DiagramPoint>
    where
        F: Fn(f64, f64) -> bool,
    {
        let mut points = self.points();
        let (position, value) = points.next()?;
        let mut best = DiagramPoint { position, value };
        for (position, value) in points {
            if better(value, best.value) {
                best = DiagramPoint { position, value };
            }
        }
        Some(best)
    }
}

/// Equally spaced sample positions over `[0, length]`
pub fn sample_positions(length: f64) -> Vec<f64> {
    let divisions = (SAMPLE_COUNT - 1) as f64;
    (0..SAMPLE_COUNT)
        .map(|i| length * i as f64 / divisions)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_positions_cover_both_ends() {
        let xs = sample_positions(6.0);
        assert_eq!(xs.len(), 101);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[50], 3.0);
        assert_eq!(xs[100], 6.0);
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Quantity::Deflection.label(), "Deflection (mm)");
        assert_eq!(Quantity::BendingMoment.label(), "Bending Moment (kNm)");
        assert_eq!(Quantity::ShearForce.label(), "Shear Force (kN)");

        let d = Diagram::sample(Quantity::ShearForce, 1.0, |x| x);
        assert_eq!(d.x_label, "Span (m)");
        assert_eq!(d.unit, "kN");
    }

    #[test]
    fn test_extremes() {
        // Parabola with minimum -25 at x = 5
        let d = Diagram::sample(Quantity::BendingMoment, 10.0, |x| -x * (10.0 - x));
        let min = d.min().unwrap();
        assert_eq!(min.position, 5.0);
        assert_eq!(min.value, -25.0);

        let max = d.max().unwrap();
        assert_eq!(max.position, 0.0);
        assert_eq!(max.value, 0.0);

        let abs = d.max_abs().unwrap();
        assert_eq!(abs.value, -25.0);
    }

    #[test]
    fn test_empty_diagram_has_no_extremes() {
        let d = Diagram {
            quantity: Quantity::Deflection,
            label: Quantity::Deflection.label(),
            unit: "mm".to_string(),
            x_label: SPAN_AXIS_LABEL.to_string(),
            positions: Vec::new(),
            values: Vec::new(),
        };
        assert!(d.is_empty());
        assert!(d.max_abs().is_none());
    }
}
