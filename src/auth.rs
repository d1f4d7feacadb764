//! Authorization seam for management operations.

/// Capability check consulted before any mutation of the snip collection.
pub trait AdminAccess {
    fn is_authorized_admin(&self) -> bool;
}

/// The operator running the CLI locally; always authorized, since they
/// already own the process and the data file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdmin;

impl AdminAccess for LocalAdmin {
    fn is_authorized_admin(&self) -> bool {
        true
    }
}
