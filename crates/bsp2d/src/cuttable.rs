//! Polygon cutting/splitting operations for BSP trees.

use crate::{Classification, EdgeSide, Polygon, SplitLine};

/// Trait for geometry that can be cut by a split line.
pub trait Cuttable {
    /// Cuts the geometry by a split line.
    ///
    /// Returns `(front, back)` where:
    /// - `front`: `Some(polygon)` containing the part on the front side
    /// - `back`: `Some(polygon)` containing the part on the back side
    ///
    /// A side is `None` when nothing lands there, or when the fragment that
    /// would land there has too few vertices to define an edge.
    fn cut(&self, line: &SplitLine) -> (Option<Polygon>, Option<Polygon>);
}

impl Cuttable for Polygon {
    fn cut(&self, line: &SplitLine) -> (Option<Polygon>, Option<Polygon>) {
        match self.classify(line) {
            Classification::Front => (Some(self.clone()), None),
            Classification::Back => (None, Some(self.clone())),
            Classification::Straddling => split_polygon(self, line),
        }
    }
}

/// Splits a straddling polygon into front and back fragments.
///
/// Partitions the existing vertices by the side of each vertex's outgoing
/// edge: front edges contribute their start vertex to the front run, back
/// edges to the back run, parallel edges to both. The front fragment is the
/// front run followed by the back run in reverse; the back fragment is the
/// back run as collected.
///
/// No intersection points are computed at the split boundary. This is a
/// vertex-partitioning heuristic, not exact clipping, and the fragment
/// vertex sequences it produces are part of this crate's contract.
fn split_polygon(polygon: &Polygon, line: &SplitLine) -> (Option<Polygon>, Option<Polygon>) {
    let n = polygon.len();
    let mut front_verts = Vec::with_capacity(n);
    let mut back_verts = Vec::with_capacity(n);

    for (p1, p2) in polygon.edges() {
        match line.classify_edge(p1, p2) {
            EdgeSide::Front => front_verts.push(p1),
            EdgeSide::Back => back_verts.push(p1),
            EdgeSide::On => {
                front_verts.push(p1);
                back_verts.push(p1);
            }
        }
    }

    front_verts.extend(back_verts.iter().rev().copied());
    let front = Polygon::from_fragment(front_verts);
    let back = Polygon::from_fragment(back_verts);

    (front, back)
}
