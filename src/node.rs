use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of an entry in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    /// The display name given to a freshly created node of this kind
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::File => "new-file.txt",
            Self::Folder => "new-folder",
        }
    }
}

/// Represents a file or folder in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: Uuid,
    pub name: String,
    pub kind: NodeKind,
    /// Only meaningful for folders. A closed folder hides its children.
    pub is_open: bool,
    pub parent: Option<Uuid>,
    pub children: Vec<Uuid>,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}
