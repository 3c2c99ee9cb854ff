use crate::error::{FolderError, Result};
use std::fmt;
use std::str::FromStr;

/// Store-wide folder identifier.
///
/// Ids are handed out in increasing order by [`crate::store::TreeStore`] and
/// never reused, so ascending id order is creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub parent_id: Option<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, parent_id: Option<NodeId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A slash separated folder path such as `/fruits/apple`.
///
/// Empty segments are dropped, so `fruits/apple/` and `//fruits//apple`
/// name the same folder. The raw text is kept for echoing commands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPath {
    raw: String,
    segments: Vec<String>,
}

impl FolderPath {
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<String> = raw
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        if segments.is_empty() {
            return Err(FolderError::malformed(raw, "path has no folder names"));
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Bucket the named folder lives in: one less than the segment count.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }

    /// The last segment, naming the folder itself.
    pub fn name(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// The second-to-last segment, if the path is not a root.
    pub fn parent_name(&self) -> Option<&str> {
        let len = self.segments.len();
        (len > 1).then(|| self.segments[len - 2].as_str())
    }
}

impl FromStr for FolderPath {
    type Err = FolderError;

    fn from_str(s: &str) -> Result<Self> {
        FolderPath::parse(s)
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
