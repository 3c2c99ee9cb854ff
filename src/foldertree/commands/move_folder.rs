use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolderError, Result};
use crate::model::{FolderPath, Node, NodeId};
use crate::store::TreeStore;

use super::helpers::{collect_subtree, is_within_subtree, resolve_path};

/// Moves the folder named by `source` under the folder named by `destination`.
///
/// The moved folder always becomes a child of the destination folder, so it
/// lands at `destination depth + 1`. Its descendants shift by the same number
/// of levels, whichever direction that is, and keep their parents.
pub fn run(
    store: &mut TreeStore,
    source: &FolderPath,
    destination: &FolderPath,
) -> Result<CmdResult> {
    let (depth, id) = resolve_path(store, source).ok_or_else(|| FolderError::SourceNotFound {
        path: source.to_string(),
        name: source.name().to_string(),
    })?;
    let (anchor_depth, anchor_id) =
        resolve_path(store, destination).ok_or_else(|| FolderError::DestinationNotFound {
            path: destination.to_string(),
            name: destination.name().to_string(),
        })?;

    // A folder cannot become its own ancestor.
    if is_within_subtree(store, id, anchor_id) {
        return Err(FolderError::CyclicMove {
            path: source.to_string(),
            destination: destination.to_string(),
        });
    }

    let new_depth = anchor_depth + 1;
    if new_depth == depth
        && store.get(depth, id).and_then(|node| node.parent_id) == Some(anchor_id)
    {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "{} is already in {}",
            source.name(),
            destination
        )));
        return Ok(result);
    }

    let subtree = collect_subtree(store, depth, id);
    tracing::debug!(
        id = %id,
        from = depth,
        to = new_depth,
        delta = new_depth as isize - depth as isize,
        nodes = subtree.len(),
        "relocating subtree"
    );

    let detached = detach(store, &subtree)?;

    let mut affected = Vec::with_capacity(detached.len());
    for (old_depth, mut node) in detached {
        if node.id == id {
            node.parent_id = Some(anchor_id);
        }
        affected.push(node.clone());
        store.insert(old_depth - depth + new_depth, node);
    }

    Ok(CmdResult::default().with_affected(affected))
}

/// Removes every listed node, or none of them.
///
/// If one of them is missing, the nodes already taken out go back into their
/// old buckets before the error is returned.
fn detach(store: &mut TreeStore, subtree: &[(usize, NodeId)]) -> Result<Vec<(usize, Node)>> {
    let mut detached = Vec::with_capacity(subtree.len());
    for &(depth, node_id) in subtree {
        match store.remove(depth, node_id) {
            Some(node) => detached.push((depth, node)),
            None => {
                for (depth, node) in detached {
                    store.insert(depth, node);
                }
                return Err(FolderError::NodeNotFound(node_id));
            }
        }
    }
    Ok(detached)
}
