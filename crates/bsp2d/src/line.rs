//! Split-line representation and edge classification for 2D BSP trees.

use nalgebra::{Point2, Vector2};

/// Which side of a split line an edge points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// The edge direction has a positive component along the line normal.
    Front,
    /// The edge direction has a negative component along the line normal.
    Back,
    /// The edge is parallel to the line (zero component along the normal).
    On,
}

/// Classification of a whole polygon relative to a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Every edge of the polygon classifies front.
    Front,
    /// Every edge of the polygon classifies back.
    Back,
    /// Edges fall on both sides, or not enough fall on either.
    Straddling,
}

/// A split line in 2D, defined by a directed edge `a -> b`.
///
/// The normal is the edge direction rotated 90 degrees,
/// `(b.y - a.y, a.x - b.x)`, and is deliberately **not** normalized:
/// classification scalars derived from it are consistently signed but are
/// not Euclidean distances.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLine {
    anchor: Point2<f64>,
    normal: Vector2<f64>,
}

impl SplitLine {
    /// Creates a split line from the directed edge `a -> b`.
    pub fn from_edge(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            anchor: a,
            normal: Vector2::new(b.y - a.y, a.x - b.x),
        }
    }

    /// Returns the point the defining edge starts from.
    #[inline]
    pub fn anchor(&self) -> Point2<f64> {
        self.anchor
    }

    /// Returns the un-normalized normal of the line.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.normal
    }

    /// Signed classification scalar for the edge `p1 -> p2`.
    ///
    /// This is the dot product of the edge direction with the line normal.
    /// It depends only on the edge's direction, not on where the edge sits,
    /// and its magnitude carries no metric meaning; only the sign is used.
    #[inline]
    pub fn edge_scalar(&self, p1: Point2<f64>, p2: Point2<f64>) -> f64 {
        (p2 - p1).dot(&self.normal)
    }

    /// Classifies the edge `p1 -> p2` by the exact sign of its scalar.
    ///
    /// No epsilon is applied: an exactly-zero scalar is [`EdgeSide::On`],
    /// anything else keeps its sign.
    pub fn classify_edge(&self, p1: Point2<f64>, p2: Point2<f64>) -> EdgeSide {
        let d = self.edge_scalar(p1, p2);
        if d > 0.0 {
            EdgeSide::Front
        } else if d < 0.0 {
            EdgeSide::Back
        } else {
            EdgeSide::On
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_edge_rotated_90_degrees() {
        let line = SplitLine::from_edge(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        assert_eq!(line.normal(), Vector2::new(0.0, -1.0));
        assert_eq!(line.anchor(), Point2::new(0.0, 0.0));

        let line = SplitLine::from_edge(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0));
        assert_eq!(line.normal(), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn edge_scalar_sign_follows_direction() {
        // Line along +X, normal points toward -Y.
        let line = SplitLine::from_edge(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));

        // Downward edge points along the normal.
        let d = line.edge_scalar(Point2::new(0.0, 1.0), Point2::new(0.0, 0.0));
        assert!(d > 0.0);
        assert_eq!(
            line.classify_edge(Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)),
            EdgeSide::Front
        );

        // Upward edge points against the normal.
        assert_eq!(
            line.classify_edge(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)),
            EdgeSide::Back
        );

        // Horizontal edge is parallel to the line.
        assert_eq!(
            line.classify_edge(Point2::new(3.0, 7.0), Point2::new(5.0, 7.0)),
            EdgeSide::On
        );
    }

    #[test]
    fn edge_scalar_ignores_edge_position() {
        let line = SplitLine::from_edge(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));

        let near = line.edge_scalar(Point2::new(0.0, 1.0), Point2::new(0.0, 0.0));
        let far = line.edge_scalar(Point2::new(100.0, -41.0), Point2::new(100.0, -42.0));
        assert_eq!(near, far);
    }
}
