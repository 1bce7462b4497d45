//! Lists, sets and FIFO queues in two flavors.
//!
//! The [collections] flavor is for a single owner and never locks. The [sync]
//! flavor wraps the very same collections into a reader-writer lock so they
//! can be shared between threads:
//!
//! ```
//! use corral::prelude::*;
//! use std::sync::Arc;
//!
//! let list = Arc::new(SyncList::from([1, 2, 3]));
//!
//! let writer = {
//!     let list = list.clone();
//!     std::thread::spawn(move || list.add(4))
//! };
//!
//! // Enumeration works on a snapshot, the lock is not held while iterating.
//! let seen: Vec<i32> = list.snapshot().collect();
//! assert!(seen.starts_with(&[1, 2, 3]));
//!
//! writer.join().unwrap();
//! assert_eq!(list.size(), 4);
//! ```

/// Single-owner collections and their shared interfaces
pub mod collections;
/// Tuning constants
pub mod constants;
/// Collection errors
pub mod errors;
/// Reader-writer locked collections
pub mod sync;

///
/// Prelude of both collection flavors
pub mod prelude {
    pub use crate::collections::prelude::*;
    pub use crate::errors::*;
    pub use crate::sync::prelude::*;
}
