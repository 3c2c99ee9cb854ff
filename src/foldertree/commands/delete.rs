use crate::commands::CmdResult;
use crate::error::{FolderError, Result};
use crate::model::FolderPath;
use crate::store::TreeStore;

use super::helpers::{collect_subtree, resolve_path};

/// Removes the folder named by `path` together with everything below it.
pub fn run(store: &mut TreeStore, path: &FolderPath) -> Result<CmdResult> {
    let (depth, id) = resolve_path(store, path).ok_or_else(|| FolderError::TargetNotFound {
        path: path.to_string(),
        name: path.name().to_string(),
    })?;

    let subtree = collect_subtree(store, depth, id);
    let mut removed = Vec::with_capacity(subtree.len());
    for (node_depth, node_id) in subtree {
        let node = store
            .remove(node_depth, node_id)
            .ok_or(FolderError::NodeNotFound(node_id))?;
        removed.push(node);
    }
    tracing::debug!(id = %id, depth, removed = removed.len(), "deleted subtree");

    Ok(CmdResult::default().with_affected(removed))
}
