//! BSP (Binary Space Partitioning) tree implementation for 2D polygons.

mod cuttable;
mod error;
mod line;
mod polygon;

pub mod bsp;

pub use cuttable::Cuttable;
pub use error::{BspError, BspResult};
pub use line::{Classification, EdgeSide, SplitLine};
pub use polygon::Polygon;

pub use bsp::{
    BspNode, BspTree, BspVisitor, BuildOptions, CollectingVisitor, FirstPolygon, FnVisitor,
    NodeRole, SplitterSelector,
};
