use uuid::Uuid;

use crate::{
    error::Error,
    node::{Node, NodeKind},
    store::RenameOutcome,
};

/// The trait for a tree store backing an explorer panel
pub trait TreeHandler {
    /// Flip the open state of the folder with the id
    fn toggle_open(&mut self, id: Uuid) -> Result<(), Error>;
    /// Replace the display name of the node with the id
    fn rename(&mut self, id: Uuid, new_name: &str) -> Result<RenameOutcome, Error>;
    /// Create a new node under the folder. Return the new node's id.
    fn add_child(&mut self, parent_id: Uuid, kind: NodeKind) -> Result<Uuid, Error>;
    /// Remove the node and its entire subtree
    fn remove_subtree(&mut self, id: Uuid) -> Result<(), Error>;

    /// Get the node with the id
    fn node(&self, id: Uuid) -> Result<&Node, Error>;
    /// The child nodes of the folder, in display order
    fn children(&self, id: Uuid) -> Result<Vec<&Node>, Error>;
    /// The root nodes of the forest, in creation order
    fn roots(&self) -> Vec<&Node>;
    /// The rows a renderer would draw, as (id, depth) pairs
    fn visible(&self) -> Vec<(Uuid, usize)>;
}
