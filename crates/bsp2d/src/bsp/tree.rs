//! BSP tree container and construction.

use log::{debug, trace};

use crate::{BspError, BspResult, Classification, Cuttable, Polygon};

use super::node::BspNode;
use super::selector::{FirstPolygon, SplitterSelector};
use super::visitor::{BspVisitor, CollectingVisitor, NodeRole};

/// Options controlling BSP tree construction.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Whether the selected splitter is withheld from the classification of
    /// its own subtree.
    ///
    /// When `true` (the default), the splitter is removed from the working
    /// set before classification and only the remaining polygons feed the
    /// child subtrees, so construction always terminates.
    ///
    /// When `false`, the splitter stays in the working set and is classified
    /// against its own split line like any other polygon. Its first edge
    /// scores zero against its own normal, so the splitter always straddles
    /// itself and re-enters its own subtree as fragments; when that keeps a
    /// child set from shrinking, construction fails with
    /// [`BspError::NonTerminatingSplit`] instead of looping.
    pub exclude_splitter: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            exclude_splitter: true,
        }
    }
}

/// A Binary Space Partitioning tree for 2D polygons.
///
/// BSP trees recursively partition the plane using split lines, one per
/// node, each defined by the first edge of the polygon stored at that node.
/// Remaining polygons are classified against the line and land in the front
/// or back subtree, split into two fragments when their edges fall on both
/// sides.
///
/// # Construction
///
/// Trees are built from a collection of polygons using a
/// [`SplitterSelector`] to choose splitters:
///
/// ```ignore
/// use bsp2d::{BspTree, Polygon};
///
/// let polygons: Vec<Polygon> = /* ... */;
/// let tree = BspTree::from_polygons(polygons)?;
/// ```
///
/// Construction is driven by an explicit worklist rather than recursion, so
/// deeply fragmented inputs cannot overflow the stack.
///
/// # Traversal
///
/// [`BspTree::traverse`] visits every node exactly once in a fixed order
/// (node, then front subtree, then back subtree), handing each node's
/// polygon, depth, and role to a [`BspVisitor`].
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    root: Option<BspNode>,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a BSP tree from a collection of polygons.
    ///
    /// Uses the provided [`SplitterSelector`] to choose splitters during
    /// construction. Polygons that straddle a split line are split using the
    /// [`Cuttable`] trait.
    ///
    /// Returns an empty tree if the input is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BspError::NonTerminatingSplit`] if a split fails to shrink
    /// the working set (only possible with
    /// [`BuildOptions::exclude_splitter`] disabled).
    pub fn build<S: SplitterSelector>(
        polygons: Vec<Polygon>,
        selector: &S,
        options: BuildOptions,
    ) -> BspResult<Self> {
        Ok(Self {
            root: build_root(polygons, selector, options)?,
        })
    }

    /// Builds a BSP tree using the default selector ([`FirstPolygon`]) and
    /// default [`BuildOptions`].
    pub fn from_polygons(polygons: Vec<Polygon>) -> BspResult<Self> {
        Self::build(polygons, &FirstPolygon, BuildOptions::default())
    }

    /// Returns `true` if the tree contains no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the total number of polygons in the tree.
    pub fn polygon_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.polygon_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Visits every node reachable from the root exactly once.
    ///
    /// Order is deterministic: a node is visited before its children, and
    /// its front subtree before its back subtree. Traversal is a pure
    /// function of the tree shape, so repeated runs visit the same nodes in
    /// the same order.
    pub fn traverse<V: BspVisitor>(&self, visitor: &mut V) {
        let mut stack = Vec::new();
        if let Some(ref root) = self.root {
            stack.push((root, 0usize, NodeRole::Root));
        }

        while let Some((node, depth, role)) = stack.pop() {
            visitor.visit(node.polygon(), depth, role);

            // Back is pushed first so the front subtree is visited first.
            if let Some(back) = node.back() {
                stack.push((back, depth + 1, NodeRole::Back));
            }
            if let Some(front) = node.front() {
                stack.push((front, depth + 1, NodeRole::Front));
            }
        }
    }

    /// Collects all polygons in the tree into a vector, in traversal order.
    pub fn collect_polygons(&self) -> Vec<Polygon> {
        let mut visitor = CollectingVisitor::new();
        self.traverse(&mut visitor);
        visitor.into_polygons()
    }
}

/// Which child slot of a parent node a pending subtree will occupy.
#[derive(Debug, Clone, Copy)]
enum ChildSlot {
    Front,
    Back,
}

/// A pending subtree: the polygons it must partition and the parent slot
/// that will receive its node.
struct BuildTask {
    polygons: Vec<Polygon>,
    depth: usize,
    parent: Option<(usize, ChildSlot)>,
}

/// Builds the node tree from a worklist of pending subtrees.
///
/// Nodes are recorded flat, children always after their parents, and linked
/// up in a reverse pass once the worklist drains. Build stack usage stays
/// constant no matter how deep the fragmentation goes.
fn build_root<S: SplitterSelector>(
    polygons: Vec<Polygon>,
    selector: &S,
    options: BuildOptions,
) -> BspResult<Option<BspNode>> {
    if polygons.is_empty() {
        return Ok(None);
    }
    debug!("building BSP tree from {} polygons", polygons.len());

    let mut nodes: Vec<Option<BspNode>> = Vec::new();
    let mut parents: Vec<Option<(usize, ChildSlot)>> = Vec::new();
    let mut stack = vec![BuildTask {
        polygons,
        depth: 0,
        parent: None,
    }];

    while let Some(task) = stack.pop() {
        let BuildTask {
            mut polygons,
            depth,
            parent,
        } = task;
        let len = polygons.len();

        let Some(splitter_idx) = polygons
            .iter()
            .position(|p| Some(p) == selector.select(&polygons))
        else {
            // Selector declined to pick; the parent slot stays empty.
            continue;
        };

        let splitter = if options.exclude_splitter {
            polygons.remove(splitter_idx)
        } else {
            polygons[splitter_idx].clone()
        };
        let line = splitter.split_line();

        let mut front_list = Vec::new();
        let mut back_list = Vec::new();
        for polygon in polygons {
            match polygon.classify(&line) {
                Classification::Front => front_list.push(polygon),
                Classification::Back => back_list.push(polygon),
                Classification::Straddling => {
                    let (front_part, back_part) = polygon.cut(&line);
                    match front_part {
                        Some(f) => front_list.push(f),
                        None => debug!("dropped degenerate front fragment at depth {depth}"),
                    }
                    match back_part {
                        Some(b) => back_list.push(b),
                        None => debug!("dropped degenerate back fragment at depth {depth}"),
                    }
                }
            }
        }

        // Every child set must be strictly smaller than its parent's;
        // otherwise splitting re-derives the same work forever.
        if front_list.len() >= len || back_list.len() >= len {
            return Err(BspError::NonTerminatingSplit {
                depth,
                len: front_list.len().max(back_list.len()),
            });
        }

        trace!(
            "node at depth {depth}: {} front, {} back",
            front_list.len(),
            back_list.len()
        );

        let node_idx = nodes.len();
        nodes.push(Some(BspNode::new(splitter)));
        parents.push(parent);

        if !front_list.is_empty() {
            stack.push(BuildTask {
                polygons: front_list,
                depth: depth + 1,
                parent: Some((node_idx, ChildSlot::Front)),
            });
        }
        if !back_list.is_empty() {
            stack.push(BuildTask {
                polygons: back_list,
                depth: depth + 1,
                parent: Some((node_idx, ChildSlot::Back)),
            });
        }
    }

    // Children sit after their parents, so a reverse pass can move each
    // completed subtree into its parent slot.
    for idx in (1..nodes.len()).rev() {
        let node = nodes[idx].take();
        match parents[idx] {
            Some((parent_idx, ChildSlot::Front)) => {
                if let Some(parent) = nodes[parent_idx].as_mut() {
                    parent.set_front(node);
                }
            }
            Some((parent_idx, ChildSlot::Back)) => {
                if let Some(parent) = nodes[parent_idx].as_mut() {
                    parent.set_back(node);
                }
            }
            None => {}
        }
    }

    Ok(nodes.first_mut().and_then(Option::take))
}
