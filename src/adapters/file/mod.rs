//! File-backed adapters.

mod policy_file;

pub use policy_file::{PolicyDocument, PolicyFile};
