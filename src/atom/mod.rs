mod reader;
mod writer;

pub use reader::{AtomRef, ObjectRef, Properties, PropertyRef};
pub use writer::{AtomWriter, ObjectFrame};

use thiserror::Error;

/// Atoms are padded to 8 bytes so they concatenate without misaligned reads.
pub const ALIGN: usize = 8;
pub const HEADER_SIZE: usize = 8;

pub fn padded(size: usize) -> usize {
    (size + ALIGN - 1) & !(ALIGN - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("atom buffer too small: needed {needed} bytes, capacity {capacity}")]
    InsufficientSpace { needed: usize, capacity: usize },
    #[error("sample path is empty")]
    EmptyPath,
}
