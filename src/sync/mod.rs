/// Contract of the lock-guarded collections
pub mod ifaces;

/// Point-in-time enumeration sessions
pub mod snapshot;
/// Reader-writer locked wrapper shared by every shape
pub mod synchronized;

/// Lock-guarded insertion-ordered list
pub mod list;
/// Lock-guarded FIFO queue
pub mod queue;
/// Lock-guarded set
pub mod set;

///
/// Prelude for the lock-guarded collections
pub mod prelude {
    pub use super::ifaces::*;
    pub use super::list::*;
    pub use super::queue::*;
    pub use super::set::*;
    pub use super::snapshot::*;
    pub use super::synchronized::*;
}
