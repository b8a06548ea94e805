//! BSP tree node implementation.

use crate::Polygon;

/// A node in the BSP tree.
///
/// Each node stores the polygon whose first edge defined the split at this
/// point of the tree. Polygons that classified in front of or behind that
/// line live in the `front` and `back` child subtrees; a node with neither
/// child is a leaf.
#[derive(Debug, Clone)]
pub struct BspNode {
    /// The polygon whose first edge is the splitting line for this subtree.
    polygon: Polygon,

    /// Subtree containing polygons in FRONT of the splitting line.
    front: Option<Box<BspNode>>,

    /// Subtree containing polygons BEHIND the splitting line.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new leaf node holding the given polygon.
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            front: None,
            back: None,
        }
    }

    /// Returns the polygon stored at this node.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Sets the front child subtree.
    #[inline]
    pub fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    /// Sets the back child subtree.
    #[inline]
    pub fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the total number of polygons in this subtree (including all descendants).
    pub fn polygon_count(&self) -> usize {
        let mut count = 1;

        if let Some(ref front) = self.front {
            count += front.polygon_count();
        }
        if let Some(ref back) = self.back {
            count += back.polygon_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn make_segment(a: [f64; 2], b: [f64; 2]) -> Polygon {
        Polygon::new(vec![Point2::new(a[0], a[1]), Point2::new(b[0], b[1])]).unwrap()
    }

    #[test]
    fn new_node_is_leaf() {
        let node = BspNode::new(make_segment([0.0, 0.0], [1.0, 0.0]));

        assert!(node.is_leaf());
        assert_eq!(node.polygon_count(), 1);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn set_children_updates_leaf_status() {
        let mut node = BspNode::new(make_segment([0.0, 0.0], [1.0, 0.0]));
        assert!(node.is_leaf());

        node.set_front(Some(BspNode::new(make_segment([0.0, 1.0], [1.0, 1.0]))));
        assert!(!node.is_leaf());

        node.set_front(None);
        assert!(node.is_leaf());

        node.set_back(Some(BspNode::new(make_segment([0.0, -1.0], [1.0, -1.0]))));
        assert!(!node.is_leaf());
    }

    #[test]
    fn depth_calculation() {
        let mut root = BspNode::new(make_segment([0.0, 0.0], [1.0, 0.0]));
        assert_eq!(root.depth(), 1);

        let mut front = BspNode::new(make_segment([0.0, 1.0], [1.0, 1.0]));
        front.set_front(Some(BspNode::new(make_segment([0.0, 2.0], [1.0, 2.0]))));
        root.set_front(Some(front));

        // root -> front -> front (depth 3)
        assert_eq!(root.depth(), 3);

        root.set_back(Some(BspNode::new(make_segment([0.0, -1.0], [1.0, -1.0]))));
        // Still depth 3 (front branch is deeper)
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn polygon_count_recursive() {
        let mut root = BspNode::new(make_segment([0.0, 0.0], [1.0, 0.0]));
        assert_eq!(root.polygon_count(), 1);

        let mut front = BspNode::new(make_segment([0.0, 1.0], [1.0, 1.0]));
        front.set_back(Some(BspNode::new(make_segment([0.0, 2.0], [1.0, 2.0]))));
        root.set_front(Some(front));
        root.set_back(Some(BspNode::new(make_segment([0.0, -1.0], [1.0, -1.0]))));

        assert_eq!(root.polygon_count(), 4);
    }
}
