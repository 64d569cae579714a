// libfeig/src/tag/operations/mod.rs

pub mod erase;
pub mod read;
pub mod write;

// Re-export the operations at the module root so callers can use
// `crate::tag::operations::read_tag(...)`.
pub use erase::erase_tag;
pub use read::{read_tag, read_tags};
pub use write::{write_tag, write_tag_with_afi};
