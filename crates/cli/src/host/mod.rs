//! Host-side vault collaborator: reads a vault directory from disk.

pub mod extractor;
pub mod walker;

pub use walker::FsVault;
