use crate::model::{FolderPath, NodeId};
use crate::store::TreeStore;

/// Resolves the folder a path names, returning its depth alongside its id.
pub fn resolve_path(store: &TreeStore, path: &FolderPath) -> Option<(usize, NodeId)> {
    let depth = path.depth();
    store.resolve(path.name(), depth).map(|id| (depth, id))
}

/// Every node of the subtree rooted at `id`, root first, with its current depth.
///
/// Collected up front so callers can mutate buckets without the walk seeing
/// half-moved nodes.
pub fn collect_subtree(store: &TreeStore, depth: usize, id: NodeId) -> Vec<(usize, NodeId)> {
    store
        .subtree(depth, id)
        .map(|(depth, node)| (depth, node.id))
        .collect()
}

/// Checks whether `candidate` is `ancestor` or sits somewhere below it.
pub fn is_within_subtree(store: &TreeStore, ancestor: NodeId, candidate: NodeId) -> bool {
    let mut current = Some(candidate);
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        current = store.locate(id).and_then(|(_, node)| node.parent_id);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn resolves_by_last_segment_and_depth() {
        let fixture = StoreFixture::new().with_foods();
        let path = FolderPath::parse("/anything/fruits").unwrap();
        let (depth, id) = resolve_path(&fixture.store, &path).unwrap();
        assert_eq!(depth, 1);
        assert_eq!(id, fixture.id_of("/foods/fruits"));
    }

    #[test]
    fn subtree_is_collected_root_first() {
        let fixture = StoreFixture::new().with_foods();
        let fruits = fixture.id_of("/foods/fruits");
        let apple = fixture.id_of("/foods/fruits/apple");
        assert_eq!(
            collect_subtree(&fixture.store, 1, fruits),
            vec![(1, fruits), (2, apple)]
        );
    }

    #[test]
    fn detects_descendants() {
        let fixture = StoreFixture::new().with_foods();
        let foods = fixture.id_of("/foods");
        let apple = fixture.id_of("/foods/fruits/apple");
        let squash = fixture.id_of("/foods/vegetables/squash");
        let fruits = fixture.id_of("/foods/fruits");
        assert!(is_within_subtree(&fixture.store, foods, apple));
        assert!(is_within_subtree(&fixture.store, apple, apple));
        assert!(!is_within_subtree(&fixture.store, fruits, squash));
    }
}
