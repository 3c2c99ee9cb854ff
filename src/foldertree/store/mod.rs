//! # Tree Store
//!
//! The store owns every folder [`Node`] and keeps them partitioned by depth:
//!
//! ```text
//! levels: { 0: { #1: fruits, #4: vegetables },
//!           1: { #2: apple (parent #1), #5: squash (parent #4) },
//!           2: { #3: fuji (parent #2) } }
//! ```
//!
//! A node's depth is not stored on the node. It is the bucket the node sits
//! in, and every mutation has to keep it equal to the node's distance from a
//! root: roots live in bucket 0 and a child lives one bucket below its parent.
//! [`TreeStore::audit`] checks exactly that.
//!
//! ## Lookup
//!
//! Folders are found by `(name, depth)` through [`TreeStore::resolve`], not by
//! full path. Two folders with the same name on the same level are therefore
//! indistinguishable; the most recently created one wins.
//!
//! ## Subtrees
//!
//! There is no child index. Children of a node at depth `d` are found by
//! scanning bucket `d + 1` for matching `parent_id`, which is what [`Walk`]
//! does lazily as it descends.

use crate::model::{Node, NodeId};
use std::collections::BTreeMap;

pub mod audit;
pub mod walk;

pub use audit::AuditReport;
pub use walk::Walk;

/// All nodes of one depth level, ordered by id.
pub type Bucket = BTreeMap<NodeId, Node>;

#[derive(Debug, Default)]
pub struct TreeStore {
    levels: BTreeMap<usize, Bucket>,
    last_id: u64,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next id. Ids are never reused, even after deletion.
    pub fn allocate_id(&mut self) -> NodeId {
        self.last_id += 1;
        NodeId(self.last_id)
    }

    pub fn insert(&mut self, depth: usize, node: Node) {
        self.levels.entry(depth).or_default().insert(node.id, node);
    }

    /// Removes a node from its bucket, dropping the bucket once it is empty.
    pub fn remove(&mut self, depth: usize, id: NodeId) -> Option<Node> {
        let bucket = self.levels.get_mut(&depth)?;
        let node = bucket.remove(&id);
        if bucket.is_empty() {
            self.levels.remove(&depth);
        }
        node
    }

    pub fn get(&self, depth: usize, id: NodeId) -> Option<&Node> {
        self.levels.get(&depth)?.get(&id)
    }

    /// Nodes at `depth` in ascending id order.
    pub fn nodes_at(&self, depth: usize) -> impl DoubleEndedIterator<Item = &Node> + '_ {
        self.levels
            .get(&depth)
            .into_iter()
            .flat_map(|bucket| bucket.values())
    }

    /// Finds the folder called `name` at `depth`.
    ///
    /// When several folders on that level share the name, the one created
    /// last is returned.
    pub fn resolve(&self, name: &str, depth: usize) -> Option<NodeId> {
        let found = self
            .nodes_at(depth)
            .rev()
            .find(|node| node.name == name)
            .map(|node| node.id);
        tracing::debug!(name, depth, ?found, "resolve");
        found
    }

    /// Children of `parent`, which lives at `depth`, in ascending id order.
    pub fn children(&self, depth: usize, parent: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes_at(depth + 1)
            .filter(move |node| node.parent_id == Some(parent))
    }

    /// Finds a node in any bucket, returning its depth with it.
    pub fn locate(&self, id: NodeId) -> Option<(usize, &Node)> {
        self.levels
            .iter()
            .find_map(|(depth, bucket)| bucket.get(&id).map(|node| (*depth, node)))
    }

    /// Counts ancestors by following `parent_id` links up to a root.
    ///
    /// Returns `None` if the node is missing or the chain is broken.
    pub fn ancestor_count(&self, id: NodeId) -> Option<usize> {
        let mut count = 0;
        let (_, mut node) = self.locate(id)?;
        while let Some(parent_id) = node.parent_id {
            let (_, parent) = self.locate(parent_id)?;
            node = parent;
            count += 1;
            if count > self.len() {
                return None;
            }
        }
        Some(count)
    }

    pub fn len(&self) -> usize {
        self.levels.values().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Depth of the deepest non-empty bucket.
    pub fn max_depth(&self) -> Option<usize> {
        self.levels.keys().next_back().copied()
    }

    /// Depth-first pre-order walk over the whole forest.
    pub fn walk(&self) -> Walk<'_> {
        Walk::forest(self)
    }

    /// Depth-first pre-order walk over the subtree rooted at `id`.
    pub fn subtree(&self, depth: usize, id: NodeId) -> Walk<'_> {
        Walk::subtree(self, depth, id)
    }

    pub fn audit(&self) -> AuditReport {
        audit::audit(self)
    }

    pub(crate) fn levels(&self) -> impl Iterator<Item = (usize, &Bucket)> + '_ {
        self.levels.iter().map(|(depth, bucket)| (*depth, bucket))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: TreeStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: TreeStore::new(),
            }
        }

        /// Adds every folder along `path`, reusing folders that already resolve.
        pub fn with_path(mut self, path: &str) -> Self {
            let mut parent: Option<NodeId> = None;
            for (depth, name) in path.split('/').filter(|s| !s.is_empty()).enumerate() {
                let existing = self
                    .store
                    .nodes_at(depth)
                    .find(|node| node.name == name && node.parent_id == parent)
                    .map(|node| node.id);
                let id = match existing {
                    Some(id) => id,
                    None => {
                        let id = self.store.allocate_id();
                        self.store.insert(depth, Node::new(id, name, parent));
                        id
                    }
                };
                parent = Some(id);
            }
            self
        }

        /// The `foods` tree used across command tests.
        pub fn with_foods(self) -> Self {
            self.with_path("/foods/grains")
                .with_path("/foods/fruits/apple")
                .with_path("/foods/vegetables/squash")
        }

        pub fn id_of(&self, path: &str) -> NodeId {
            let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
            let depth = segments.len() - 1;
            self.store
                .resolve(segments[depth], depth)
                .unwrap_or_else(|| panic!("fixture has no folder at {path}"))
        }
    }
}
