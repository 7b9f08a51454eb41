//! Port traits defining external boundaries.
//!
//! The only external system `sddpack` touches is the filesystem holding the
//! documents. Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{FileSystem, Presence};
