/// Interfaces shared by every collection shape
pub mod ifaces;

/// Insertion-ordered list backed by a vector
pub mod array;
/// FIFO queue backed by a ring buffer
pub mod queue;
/// Uniqueness-enforcing set backed by a typed hash set
pub mod set;

///
/// Prelude for the single-owner collections
pub mod prelude {
    pub use super::array::*;
    pub use super::ifaces::*;
    pub use super::queue::*;
    pub use super::set::*;
}
