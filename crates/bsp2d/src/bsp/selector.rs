//! Splitter selection strategies for BSP tree construction.
//!
//! The choice of splitter affects tree balance and the number of polygon
//! splits during construction. Different strategies offer different
//! trade-offs between build time and tree quality.

use crate::Polygon;

/// Strategy for selecting which polygon's first edge to split by.
///
/// The selected polygon is stored at the BSP node and its first edge
/// becomes the node's splitting line.
pub trait SplitterSelector {
    /// Select a polygon from the slice to use as the splitter.
    ///
    /// Returns `None` if the slice is empty.
    /// The returned reference must be to an element in the provided slice.
    fn select<'a>(&self, polygons: &'a [Polygon]) -> Option<&'a Polygon>;
}

/// Selects the first polygon in the list.
///
/// This is the simplest and fastest selector, but may produce unbalanced
/// trees depending on input order. Good for prototyping and when input
/// order is already randomized.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPolygon;

impl SplitterSelector for FirstPolygon {
    fn select<'a>(&self, polygons: &'a [Polygon]) -> Option<&'a Polygon> {
        polygons.first()
    }
}
