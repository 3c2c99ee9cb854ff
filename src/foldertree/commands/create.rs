use crate::commands::CmdResult;
use crate::error::{FolderError, Result};
use crate::model::{FolderPath, Node};
use crate::store::TreeStore;

/// Creates the folder named by the last segment of `path`.
///
/// The parent is looked up by the second-to-last segment one level up. A
/// missing parent fails the command without touching the store.
pub fn run(store: &mut TreeStore, path: &FolderPath) -> Result<CmdResult> {
    let depth = path.depth();
    let parent_id = match path.parent_name() {
        None => None,
        Some(parent) => {
            let parent_depth = depth - 1;
            let id = store
                .resolve(parent, parent_depth)
                .ok_or_else(|| FolderError::ParentNotFound {
                    parent: parent.to_string(),
                    depth: parent_depth,
                })?;
            Some(id)
        }
    };

    let node = Node::new(store.allocate_id(), path.name(), parent_id);
    tracing::debug!(id = %node.id, depth, parent = ?parent_id, "created folder");
    store.insert(depth, node.clone());

    Ok(CmdResult::default().with_affected(vec![node]))
}
