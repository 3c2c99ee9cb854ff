use super::TreeStore;
use crate::model::{Node, NodeId};

/// Lazy depth-first pre-order traversal yielding `(depth, node)`.
///
/// Siblings come out in ascending id order. Children of a node are only
/// looked up once that node has been yielded.
pub struct Walk<'a> {
    store: &'a TreeStore,
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn forest(store: &'a TreeStore) -> Self {
        let stack = store
            .nodes_at(0)
            .filter(|node| node.is_root())
            .rev()
            .map(|node| (0, node))
            .collect();
        Self { store, stack }
    }

    pub(crate) fn subtree(store: &'a TreeStore, depth: usize, id: NodeId) -> Self {
        let stack = store
            .get(depth, id)
            .map(|node| vec![(depth, node)])
            .unwrap_or_default();
        Self { store, stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        let children: Vec<&'a Node> = self.store.children(depth, node.id).collect();
        self.stack
            .extend(children.into_iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use crate::store::fixtures::StoreFixture;
    use crate::store::TreeStore;

    #[test]
    fn walks_forest_in_pre_order() {
        let fixture = StoreFixture::new().with_foods().with_path("/drinks/tea");
        let visited: Vec<_> = fixture
            .store
            .walk()
            .map(|(depth, node)| (depth, node.name.clone()))
            .collect();
        assert_eq!(
            visited,
            vec![
                (0, "foods".to_string()),
                (1, "grains".to_string()),
                (1, "fruits".to_string()),
                (2, "apple".to_string()),
                (1, "vegetables".to_string()),
                (2, "squash".to_string()),
                (0, "drinks".to_string()),
                (1, "tea".to_string()),
            ]
        );
    }

    #[test]
    fn subtree_stays_below_its_root() {
        let fixture = StoreFixture::new().with_foods();
        let fruits = fixture.id_of("/foods/fruits");
        let names: Vec<_> = fixture
            .store
            .subtree(1, fruits)
            .map(|(_, node)| node.name.as_str())
            .collect();
        assert_eq!(names, vec!["fruits", "apple"]);
    }

    #[test]
    fn subtree_of_unknown_node_is_empty() {
        let fixture = StoreFixture::new().with_foods();
        let foods = fixture.id_of("/foods");
        assert_eq!(fixture.store.subtree(3, foods).count(), 0);
        assert_eq!(TreeStore::new().walk().count(), 0);
    }
}
