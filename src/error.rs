use uuid::Uuid;

/// An error for explorer-tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NotFound(Uuid),
    NotAFolder(Uuid),
    StoreInUse(String),
    NoSuchStore(String),
    ManagerPoisoned,
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => writeln!(f, "No node with id: {}", id),
            Self::NotAFolder(id) => writeln!(f, "Node: {} is not a folder", id),
            Self::StoreInUse(name) => writeln!(
                f,
                "Could not register store. Name: {} already in use",
                name
            ),
            Self::NoSuchStore(name) => writeln!(f, "No store registered under: {}", name),
            Self::ManagerPoisoned => writeln!(f, "The store registry has been poisoned"),
        }
    }
}
