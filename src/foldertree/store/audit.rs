use super::TreeStore;
use crate::model::NodeId;
use std::collections::HashMap;
use std::fmt;

/// Result of checking the bucket invariants of a [`TreeStore`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub nodes_checked: usize,
    /// Nodes in bucket 0 that still point at a parent.
    pub roots_with_parent: Vec<NodeId>,
    /// Nodes below bucket 0 without a parent.
    pub detached: Vec<NodeId>,
    /// Nodes whose parent is not in the store at all.
    pub orphaned: Vec<NodeId>,
    /// Nodes whose parent is not in the bucket right above them.
    pub misplaced: Vec<NodeId>,
    /// Ids found in more than one bucket.
    pub duplicated: Vec<NodeId>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.roots_with_parent.is_empty()
            && self.detached.is_empty()
            && self.orphaned.is_empty()
            && self.misplaced.is_empty()
            && self.duplicated.is_empty()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "AUDIT OK: {} folders consistent", self.nodes_checked);
        }
        writeln!(f, "AUDIT FAILED: {} folders checked", self.nodes_checked)?;
        let sections = [
            ("roots with a parent", &self.roots_with_parent),
            ("detached", &self.detached),
            ("orphaned", &self.orphaned),
            ("misplaced", &self.misplaced),
            ("duplicated", &self.duplicated),
        ];
        for (label, ids) in sections.into_iter().filter(|(_, ids)| !ids.is_empty()) {
            let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
            writeln!(f, "  {}: {}", label, ids.join(", "))?;
        }
        Ok(())
    }
}

pub(super) fn audit(store: &TreeStore) -> AuditReport {
    let mut report = AuditReport::default();
    let mut depth_of: HashMap<NodeId, usize> = HashMap::new();

    for (depth, bucket) in store.levels() {
        for id in bucket.keys() {
            if depth_of.insert(*id, depth).is_some() {
                report.duplicated.push(*id);
            }
        }
    }

    for (depth, bucket) in store.levels() {
        for node in bucket.values() {
            report.nodes_checked += 1;
            match (depth, node.parent_id) {
                (0, None) => {}
                (0, Some(_)) => report.roots_with_parent.push(node.id),
                (_, None) => report.detached.push(node.id),
                (_, Some(parent)) => match depth_of.get(&parent) {
                    None => report.orphaned.push(node.id),
                    Some(parent_depth) if parent_depth + 1 != depth => {
                        report.misplaced.push(node.id)
                    }
                    Some(_) => {}
                },
            }
        }
    }

    report
}
