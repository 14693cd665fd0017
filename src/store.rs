use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::Error,
    handler::TreeHandler,
    node::{Node, NodeKind},
};

/// The result of a rename.
/// A blank name goes through anyway, but is flagged so the caller
/// can surface a notice.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// The new name was empty or all whitespace
    BlankName,
}

/// The table that stores every node of the forest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeStore {
    pub(crate) nodes: HashMap<Uuid, Node>,
    /// Root ids in creation order. The map alone has no stable order.
    pub(crate) roots: Vec<Uuid>,
}

impl TreeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Create a store holding the seed forest:
    /// a closed folder `src` containing the files `index.js` and `App.js`
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let src = store.insert("src", NodeKind::Folder, None);
        store.insert("index.js", NodeKind::File, Some(src));
        store.insert("App.js", NodeKind::File, Some(src));
        store
    }

    /// Create a root-level node, returns it's id
    pub fn add_root(&mut self, name: &str, kind: NodeKind) -> Uuid {
        self.insert(name, kind, None)
    }

    fn insert(&mut self, name: &str, kind: NodeKind, parent: Option<Uuid>) -> Uuid {
        let id = Uuid::new_v4();
        let node = Node {
            id,
            name: name.to_string(),
            kind,
            is_open: false,
            parent,
            children: Vec::new(),
        };
        self.nodes.insert(id, node);

        // Link the node into the parent's child list, or the root list
        match parent {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Flip the open state of a folder.
    /// A closed ancestor only hides its descendants; their own open
    /// flags are kept for when it reopens.
    pub fn toggle_open(&mut self, id: Uuid) -> Result<(), Error> {
        let node = self.nodes.get_mut(&id).ok_or(Error::NotFound(id))?;
        if !node.is_folder() {
            return Err(Error::NotAFolder(id));
        }
        node.is_open = !node.is_open;
        Ok(())
    }

    /// Replace the display name of a node. No other field changes.
    pub fn rename(&mut self, id: Uuid, new_name: &str) -> Result<RenameOutcome, Error> {
        let node = self.nodes.get_mut(&id).ok_or(Error::NotFound(id))?;
        node.name = new_name.to_string();

        if new_name.trim().is_empty() {
            log::warn!("Node: {} renamed to a blank name", id);
            return Ok(RenameOutcome::BlankName);
        }
        Ok(RenameOutcome::Renamed)
    }

    /// Create a new node under a folder, returns the new node's id.
    /// The child is appended at the end of the parent's list and the
    /// parent is opened so the child becomes visible.
    pub fn add_child(&mut self, parent_id: Uuid, kind: NodeKind) -> Result<Uuid, Error> {
        let parent = self
            .nodes
            .get(&parent_id)
            .ok_or(Error::NotFound(parent_id))?;
        if !parent.is_folder() {
            return Err(Error::NotAFolder(parent_id));
        }

        let id = self.insert(kind.default_name(), kind, Some(parent_id));
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.is_open = true;
        }
        Ok(id)
    }

    /// Remove a node and its entire subtree from the store.
    /// The removed id is also stripped from its former parent's child
    /// list (or the root list), so no dangling reference survives.
    pub fn remove_subtree(&mut self, id: Uuid) -> Result<(), Error> {
        let node = self.nodes.get(&id).ok_or(Error::NotFound(id))?;
        let parent = node.parent;

        let mut removed = 0usize;
        self.remove_recursive(id, &mut removed);

        match parent {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }
        log::debug!("Removed {} node(s) rooted at: {}", removed, id);
        Ok(())
    }

    fn remove_recursive(&mut self, id: Uuid, removed: &mut usize) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        *removed += 1;
        for child in node.children {
            self.remove_recursive(child, removed);
        }
    }

    /// Get a node by id
    pub fn node(&self, id: Uuid) -> Result<&Node, Error> {
        self.nodes.get(&id).ok_or(Error::NotFound(id))
    }

    /// The child nodes of a node, in display order
    pub fn children(&self, id: Uuid) -> Result<Vec<&Node>, Error> {
        let node = self.node(id)?;
        Ok(node
            .children
            .iter()
            .filter_map(|child| self.nodes.get(child))
            .collect())
    }

    /// The root nodes of the forest, in creation order
    pub fn roots(&self) -> Vec<&Node> {
        self.roots
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .collect()
    }

    /// The rows a renderer would draw: depth first over the forest,
    /// descending into a folder's children only while it is open
    pub fn visible(&self) -> Vec<(Uuid, usize)> {
        let mut rows = Vec::new();
        for root in &self.roots {
            self.visible_from(*root, 0, &mut rows);
        }
        rows
    }

    fn visible_from(&self, id: Uuid, depth: usize, rows: &mut Vec<(Uuid, usize)>) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        rows.push((id, depth));
        if node.is_folder() && node.is_open {
            for child in &node.children {
                self.visible_from(*child, depth + 1, rows);
            }
        }
    }

    /// The number of nodes in the store
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize the whole forest, for debugging or handing to a renderer.
    /// The store itself is never persisted.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeHandler for TreeStore {
    fn toggle_open(&mut self, id: Uuid) -> Result<(), Error> {
        TreeStore::toggle_open(self, id)
    }

    fn rename(&mut self, id: Uuid, new_name: &str) -> Result<RenameOutcome, Error> {
        TreeStore::rename(self, id, new_name)
    }

    fn add_child(&mut self, parent_id: Uuid, kind: NodeKind) -> Result<Uuid, Error> {
        TreeStore::add_child(self, parent_id, kind)
    }

    fn remove_subtree(&mut self, id: Uuid) -> Result<(), Error> {
        TreeStore::remove_subtree(self, id)
    }

    fn node(&self, id: Uuid) -> Result<&Node, Error> {
        TreeStore::node(self, id)
    }

    fn children(&self, id: Uuid) -> Result<Vec<&Node>, Error> {
        TreeStore::children(self, id)
    }

    fn roots(&self) -> Vec<&Node> {
        TreeStore::roots(self)
    }

    fn visible(&self) -> Vec<(Uuid, usize)> {
        TreeStore::visible(self)
    }
}
