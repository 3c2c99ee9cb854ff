use crate::commands::{CmdMessage, CmdResult, ListStyle, ListedFolder};
use crate::error::Result;
use crate::store::TreeStore;

/// Renders the whole forest, depth first, siblings in creation order.
///
/// The `LIST` header is not part of the result; the caller echoes it.
pub fn run(store: &TreeStore, style: &ListStyle) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::info(style.empty_marker.clone()));
        return Ok(result);
    }

    let mut listed = Vec::with_capacity(store.len());
    for (depth, node) in store.walk() {
        result.add_message(CmdMessage::listing(style.render_line(depth, &node.name)));
        listed.push(ListedFolder {
            depth,
            node: node.clone(),
        });
    }

    Ok(result.with_listed(listed))
}
