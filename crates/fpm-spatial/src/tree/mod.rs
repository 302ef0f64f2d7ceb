// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Region trees: an arena-backed spatial index shared by [`QuadTree`] and
//! [`Octree`].
//!
//! Storage model:
//! - Region nodes live in a `Vec` indexed by position; the root is index 0.
//!   Splits append the `FANOUT` corners of a region contiguously, so a split
//!   node only records the index of its first corner. Regions are never
//!   freed individually; [`SpatialTree::clear`] resets the arena.
//! - Leaves live in a map keyed by their unique id. Buckets and stray lists
//!   hold those ids, so a leaf whose bounds straddle several corners is
//!   stored once and referenced from every corner it overlaps.
//!
//! Ordering: corners are visited in index order and bucket entries in
//! insertion order, which makes [`SpatialTree::candidates`] and
//! [`SpatialTree::traverse`] deterministic for a given insertion history.

mod config;
mod location;
mod octree;
mod quadtree;

use core::fmt;
use core::mem;
use core::ops::Deref;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

pub use config::{ConfigError, TreeConfig, MAX_TREE_DEPTH};
pub use location::{FullId, IdsExhausted, FULL, NONE};
pub use octree::Octree;
pub use quadtree::QuadTree;

const ROOT: usize = 0;
const ROOT_ONLY_ID: u32 = 1;
/// One past the last issuable id.
const ID_SPACE_END: u64 = 1 << 32;

/// A box shape the tree can subdivide.
pub trait Region: Copy + fmt::Debug {
    /// Number of corners produced by one split.
    const FANOUT: usize;

    /// Routing predicate: `true` when `other` overlaps or nests with `self`.
    fn accepts(&self, other: &Self) -> bool;

    /// Corner `index` (`0..FANOUT`) of `self`.
    fn subregion(&self, index: usize) -> Self;

    /// 4-bit location code of corner `index`.
    fn location_code(index: usize) -> u8;

    /// Inverse of [`Region::location_code`]; `None` for [`NONE`], [`FULL`]
    /// and unused codes.
    fn subregion_index(code: u8) -> Option<usize>;
}

#[derive(Debug, Clone)]
struct RegionNode<R> {
    bounds: R,
    depth: u8,
    location_id: u32,
    only_id: u32,
    children: Children,
}

#[derive(Debug, Clone)]
enum Children {
    /// Unsplit: leaf ids in insertion order.
    Bucket(Vec<u32>),
    /// Split: corners at `first_corner..first_corner + FANOUT`, plus leaves
    /// that no corner accepted.
    Split { first_corner: usize, strays: Vec<u32> },
}

#[derive(Debug, Clone)]
struct LeafNode<R, T> {
    bounds: R,
    depth: u8,
    location_id: u32,
    only_id: u32,
    value: T,
}

/// Spatial index over regions of type `R` holding values of type `T`.
///
/// Use the [`QuadTree`] and [`Octree`] aliases; their constructors build the
/// world region centered on the origin.
#[derive(Debug, Clone)]
pub struct SpatialTree<R, T> {
    world: R,
    config: TreeConfig,
    capacity: usize,
    regions: Vec<RegionNode<R>>,
    leaves: FxHashMap<u32, LeafNode<R, T>>,
    next_only_id: u64,
}

impl<R: Region, T> SpatialTree<R, T> {
    /// Creates an empty tree covering `world`.
    ///
    /// # Errors
    /// Any [`ConfigError`] reported by [`TreeConfig::validate`].
    pub fn with_region(world: R, config: TreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.resolved_capacity(R::FANOUT);
        Ok(Self {
            world,
            config,
            capacity,
            regions: vec![root_node(world, capacity)],
            leaves: FxHashMap::default(),
            next_only_id: u64::from(ROOT_ONLY_ID) + 1,
        })
    }

    /// Region covered by the root.
    pub fn world_bounds(&self) -> R {
        self.world
    }

    /// Settings the tree was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// `true` when no value is stored.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Handle to the root region.
    pub fn root(&self) -> NodeRef<'_, R, T> {
        NodeRef::region(&self.regions[ROOT])
    }

    /// Inserts `value` with `bounds` and returns its handle.
    ///
    /// The value is stored in every corner its bounds overlap. Bounds outside
    /// the world are kept as strays of the deepest split region that saw
    /// them, so they are never dropped.
    ///
    /// # Errors
    /// [`IdsExhausted`] once every `u32` id has been issued. Ids are never
    /// reused, so the tree accepts no further values after that.
    pub fn insert(&mut self, value: T, bounds: R) -> Result<FullId, IdsExhausted> {
        let Some(only_id) = self.allocate_id() else {
            warn!("node id space exhausted, insertion refused");
            return Err(IdsExhausted);
        };
        self.leaves.insert(
            only_id,
            LeafNode {
                bounds,
                depth: 0,
                location_id: NONE.into(),
                only_id,
                value,
            },
        );

        let mut holders = Vec::new();
        self.route(ROOT, only_id, &bounds, &mut holders);
        let (anchor, anchor_depth) = holders
            .iter()
            .copied()
            .reduce(location::common_prefix)
            .unwrap_or((0, 0));
        let location_id = location::with_code(anchor, anchor_depth, FULL);
        let depth = anchor_depth.saturating_add(1);
        if let Some(leaf) = self.leaves.get_mut(&only_id) {
            leaf.location_id = location_id;
            leaf.depth = depth;
        }

        let id = FullId::new(only_id, location_id);
        trace!(%id, depth, copies = holders.len(), "inserted");
        Ok(id)
    }

    /// Removes the value issued under `id`.
    ///
    /// Every copy is unlinked, including copies made when a region split
    /// after the insertion. Unknown or stale ids leave the tree unchanged
    /// and return `None`.
    pub fn remove(&mut self, id: FullId) -> Option<T> {
        let only_id = id.only_id();
        if !self.contains(id) {
            debug!(%id, "ignoring removal of unknown id");
            return None;
        }
        let anchor = self.walk(id.location_id());
        self.purge(anchor, only_id);
        let leaf = self.leaves.remove(&only_id)?;
        trace!(%id, "removed");
        Some(leaf.value)
    }

    /// Value issued under `id`, if still present.
    pub fn get(&self, id: FullId) -> Option<&T> {
        self.leaf(id).map(|leaf| &leaf.value)
    }

    /// Mutable access to the value issued under `id`.
    pub fn get_mut(&mut self, id: FullId) -> Option<&mut T> {
        self.leaves
            .get_mut(&id.only_id())
            .filter(|leaf| leaf.location_id == id.location_id())
            .map(|leaf| &mut leaf.value)
    }

    /// `true` if `id` refers to a stored value.
    pub fn contains(&self, id: FullId) -> bool {
        self.leaf(id).is_some()
    }

    /// Drops every value and region below the root.
    ///
    /// The root keeps its id and the counter keeps running, so handles
    /// issued before the call never match values inserted after it.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.regions.push(root_node(self.world, self.capacity));
        self.leaves.clear();
    }

    /// Broad-phase candidates for `bounds`: every stored value held by a
    /// region that overlaps or nests with `bounds`, each reported once.
    ///
    /// Callers run their own exact test against [`NodeRef::bounds`].
    pub fn candidates(&self, bounds: &R) -> Vec<NodeRef<'_, R, T>> {
        let mut out = Candidates::new();
        self.candidates_into(bounds, &mut out);
        out.into_vec()
    }

    /// Like [`SpatialTree::candidates`], appending to a reusable buffer.
    ///
    /// Leaves already held by `out` are not added again; call
    /// [`Candidates::clear`] between unrelated queries. Clearing keeps the
    /// buffer's allocations.
    pub fn candidates_into<'a>(&'a self, bounds: &R, out: &mut Candidates<'a, R, T>) {
        self.collect(ROOT, bounds, out);
    }

    /// Calls `visit` on every node in pre-order: a region, then its corners,
    /// then its bucket or stray leaves. A leaf stored in several corners is
    /// visited once per copy.
    pub fn traverse<'a>(&'a self, mut visit: impl FnMut(NodeRef<'a, R, T>)) {
        self.visit(ROOT, &mut visit);
    }

    fn allocate_id(&mut self) -> Option<u32> {
        let id = u32::try_from(self.next_only_id).ok()?;
        self.next_only_id += 1;
        Some(id)
    }

    fn ids_left(&self) -> u64 {
        ID_SPACE_END.saturating_sub(self.next_only_id)
    }

    fn leaf(&self, id: FullId) -> Option<&LeafNode<R, T>> {
        self.leaves
            .get(&id.only_id())
            .filter(|leaf| leaf.location_id == id.location_id())
    }

    /// Routes leaf `leaf` into region `at`, recording each region that ends
    /// up holding it as `(location_id, depth)`.
    ///
    /// A full bucket splits only while its corners stay above `max_depth`
    /// and enough ids remain for them; otherwise it keeps growing.
    fn route(&mut self, at: usize, leaf: u32, bounds: &R, holders: &mut Vec<(u32, u8)>) {
        let capacity = self.capacity;
        let depth = self.regions[at].depth;
        let path = self.regions[at].location_id;
        let can_split = depth + 1 < self.config.max_depth && self.ids_left() >= R::FANOUT as u64;

        if let Children::Bucket(bucket) = &mut self.regions[at].children {
            if bucket.len() < capacity || !can_split {
                bucket.push(leaf);
                holders.push((path, depth));
                return;
            }
            self.split(at);
        }

        let Children::Split { first_corner, .. } = self.regions[at].children else {
            return;
        };
        let mut accepted = false;
        for corner in first_corner..first_corner + R::FANOUT {
            if self.regions[corner].bounds.accepts(bounds) {
                accepted = true;
                self.route(corner, leaf, bounds, holders);
            }
        }
        if !accepted {
            if let Children::Split { strays, .. } = &mut self.regions[at].children {
                strays.push(leaf);
            }
            holders.push((path, depth));
            warn!(
                only_id = leaf,
                depth,
                location_id = path,
                "bounds outside every corner, kept as stray"
            );
        }
    }

    /// Turns bucket region `at` into a split region and re-routes its leaves.
    ///
    /// The caller has checked that `FANOUT` ids are still available.
    fn split(&mut self, at: usize) {
        let node = &self.regions[at];
        let (bounds, depth, path) = (node.bounds, node.depth, node.location_id);
        let first_corner = self.regions.len();
        let first_id = self.next_only_id;
        self.next_only_id += R::FANOUT as u64;
        for index in 0..R::FANOUT {
            self.regions.push(RegionNode {
                bounds: bounds.subregion(index),
                depth: depth + 1,
                location_id: location::with_code(path, depth, R::location_code(index)),
                only_id: (first_id + index as u64) as u32,
                children: Children::Bucket(Vec::with_capacity(self.capacity)),
            });
        }

        let previous = mem::replace(
            &mut self.regions[at].children,
            Children::Split {
                first_corner,
                strays: Vec::new(),
            },
        );
        let Children::Bucket(bucket) = previous else {
            return;
        };

        let rerouted = bucket.len();
        let mut scratch = Vec::new();
        for leaf in bucket {
            let Some(leaf_bounds) = self.leaves.get(&leaf).map(|l| l.bounds) else {
                continue;
            };
            scratch.clear();
            self.route(at, leaf, &leaf_bounds, &mut scratch);
        }
        debug!(depth, location_id = path, rerouted, "split region");
    }

    /// Follows the corner codes of `location_id` from the root as far as the
    /// tree has split, returning the region reached.
    fn walk(&self, location_id: u32) -> usize {
        let mut at = ROOT;
        for depth in 0..MAX_TREE_DEPTH {
            let Some(index) = R::subregion_index(location::code_at(location_id, depth)) else {
                break;
            };
            match self.regions[at].children {
                Children::Split { first_corner, .. } => at = first_corner + index,
                Children::Bucket(_) => break,
            }
        }
        at
    }

    /// Unlinks `only_id` from region `at` and every region below it.
    fn purge(&mut self, at: usize, only_id: u32) {
        match &mut self.regions[at].children {
            Children::Bucket(bucket) => bucket.retain(|&id| id != only_id),
            Children::Split {
                first_corner,
                strays,
            } => {
                strays.retain(|&id| id != only_id);
                let first = *first_corner;
                for corner in first..first + R::FANOUT {
                    self.purge(corner, only_id);
                }
            }
        }
    }

    fn collect<'a>(&'a self, at: usize, query: &R, out: &mut Candidates<'a, R, T>) {
        let node = &self.regions[at];
        if !node.bounds.accepts(query) {
            return;
        }
        match &node.children {
            Children::Bucket(bucket) => self.collect_leaves(bucket, out),
            Children::Split {
                first_corner,
                strays,
            } => {
                for corner in *first_corner..*first_corner + R::FANOUT {
                    self.collect(corner, query, out);
                }
                self.collect_leaves(strays, out);
            }
        }
    }

    fn collect_leaves<'a>(&'a self, ids: &[u32], out: &mut Candidates<'a, R, T>) {
        for id in ids {
            if !out.seen.insert(*id) {
                continue;
            }
            if let Some(leaf) = self.leaves.get(id) {
                out.nodes.push(NodeRef::leaf(leaf));
            }
        }
    }

    fn visit<'a, F>(&'a self, at: usize, visit: &mut F)
    where
        F: FnMut(NodeRef<'a, R, T>),
    {
        let node = &self.regions[at];
        visit(NodeRef::region(node));
        let leaves = match &node.children {
            Children::Bucket(bucket) => bucket,
            Children::Split {
                first_corner,
                strays,
            } => {
                for corner in *first_corner..*first_corner + R::FANOUT {
                    self.visit(corner, visit);
                }
                strays
            }
        };
        for leaf in leaves.iter().filter_map(|id| self.leaves.get(id)) {
            visit(NodeRef::leaf(leaf));
        }
    }
}

fn root_node<R>(world: R, capacity: usize) -> RegionNode<R> {
    RegionNode {
        bounds: world,
        depth: 0,
        location_id: NONE.into(),
        only_id: ROOT_ONLY_ID,
        children: Children::Bucket(Vec::with_capacity(capacity)),
    }
}

/// Reusable result buffer for [`SpatialTree::candidates_into`].
///
/// Derefs to the collected nodes. Also tracks which leaves it already
/// holds, so repeated queries into the same buffer never report a leaf twice.
pub struct Candidates<'a, R, T> {
    nodes: Vec<NodeRef<'a, R, T>>,
    seen: FxHashSet<u32>,
}

impl<'a, R, T> Candidates<'a, R, T> {
    /// Empty buffer.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Forgets every collected node, keeping the allocations.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.seen.clear();
    }

    /// Collected nodes in query order.
    pub fn into_vec(self) -> Vec<NodeRef<'a, R, T>> {
        self.nodes
    }
}

impl<R, T> Default for Candidates<'_, R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R, T> Deref for Candidates<'a, R, T> {
    type Target = [NodeRef<'a, R, T>];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl<R: fmt::Debug, T: fmt::Debug> fmt::Debug for Candidates<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}

/// Borrowed view of one tree node: either a region or a stored leaf.
pub struct NodeRef<'a, R, T> {
    node: NodeView<'a, R, T>,
}

enum NodeView<'a, R, T> {
    Region(&'a RegionNode<R>),
    Leaf(&'a LeafNode<R, T>),
}

impl<R, T> Clone for NodeView<'_, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for NodeView<'_, R, T> {}

impl<R, T> Clone for NodeRef<'_, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for NodeRef<'_, R, T> {}

impl<'a, R: Copy, T> NodeRef<'a, R, T> {
    fn region(node: &'a RegionNode<R>) -> Self {
        Self {
            node: NodeView::Region(node),
        }
    }

    fn leaf(node: &'a LeafNode<R, T>) -> Self {
        Self {
            node: NodeView::Leaf(node),
        }
    }

    /// Region bounds, or the bounds a leaf was inserted with.
    pub fn bounds(&self) -> R {
        match self.node {
            NodeView::Region(node) => node.bounds,
            NodeView::Leaf(leaf) => leaf.bounds,
        }
    }

    /// Depth below the root. A leaf sits one level below the region its
    /// location id points at.
    pub fn depth(&self) -> u8 {
        match self.node {
            NodeView::Region(node) => node.depth,
            NodeView::Leaf(leaf) => leaf.depth,
        }
    }

    /// Stored value; `None` for regions.
    pub fn value(&self) -> Option<&'a T> {
        match self.node {
            NodeView::Region(_) => None,
            NodeView::Leaf(leaf) => Some(&leaf.value),
        }
    }

    /// `true` for stored values.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, NodeView::Leaf(_))
    }

    /// `true` for regions that have divided into corners.
    pub fn is_split(&self) -> bool {
        matches!(
            self.node,
            NodeView::Region(RegionNode {
                children: Children::Split { .. },
                ..
            })
        )
    }

    /// Path from the root.
    pub fn location_id(&self) -> u32 {
        match self.node {
            NodeView::Region(node) => node.location_id,
            NodeView::Leaf(leaf) => leaf.location_id,
        }
    }

    /// Unique creation-order id.
    pub fn only_id(&self) -> u32 {
        match self.node {
            NodeView::Region(node) => node.only_id,
            NodeView::Leaf(leaf) => leaf.only_id,
        }
    }

    /// `(only_id << 32) | location_id`; for leaves this is the handle
    /// [`SpatialTree::insert`] returned.
    pub fn full_id(&self) -> FullId {
        FullId::new(self.only_id(), self.location_id())
    }

    /// Leaves held directly by an unsplit region.
    pub fn bucket_len(&self) -> usize {
        match self.node {
            NodeView::Region(RegionNode {
                children: Children::Bucket(bucket),
                ..
            }) => bucket.len(),
            _ => 0,
        }
    }

    /// Leaves a split region keeps because no corner accepted them.
    pub fn stray_len(&self) -> usize {
        match self.node {
            NodeView::Region(RegionNode {
                children: Children::Split { strays, .. },
                ..
            }) => strays.len(),
            _ => 0,
        }
    }
}

impl<R: fmt::Debug, T: fmt::Debug> fmt::Debug for NodeRef<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            NodeView::Region(node) => f
                .debug_struct("Region")
                .field("depth", &node.depth)
                .field("location_id", &format_args!("{:#010x}", node.location_id))
                .field("only_id", &node.only_id)
                .field("bounds", &node.bounds)
                .finish(),
            NodeView::Leaf(leaf) => f
                .debug_struct("Leaf")
                .field("depth", &leaf.depth)
                .field("location_id", &format_args!("{:#010x}", leaf.location_id))
                .field("only_id", &leaf.only_id)
                .field("value", &leaf.value)
                .finish(),
        }
    }
}
