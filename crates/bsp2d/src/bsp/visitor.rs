//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of polygons during tree traversal
//! without coupling traversal logic to specific use cases.

use crate::Polygon;

/// The edge by which a node was reached during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// The root of the tree.
    Root,
    /// Reached through its parent's front child slot.
    Front,
    /// Reached through its parent's back child slot.
    Back,
}

/// Visitor for processing nodes during BSP tree traversal.
///
/// Implement this trait to define custom behavior when traversing the tree.
/// Every node reachable from the root is visited exactly once, with its
/// stored polygon, its depth (0 at the root), and the role it was reached by.
pub trait BspVisitor {
    /// Called once per node during traversal.
    fn visit(&mut self, polygon: &Polygon, depth: usize, role: NodeRole);
}

/// A simple visitor that collects all visited polygons.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Polygon>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.collected
    }

    /// Returns a reference to the collected polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.collected
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, polygon: &Polygon, _depth: usize, _role: NodeRole) {
        self.collected.push(polygon.clone());
    }
}

/// A visitor that calls a closure for each node.
pub struct FnVisitor<F>
where
    F: FnMut(&Polygon, usize, NodeRole),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&Polygon, usize, NodeRole),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(&Polygon, usize, NodeRole),
{
    fn visit(&mut self, polygon: &Polygon, depth: usize, role: NodeRole) {
        (self.func)(polygon, depth, role);
    }
}
