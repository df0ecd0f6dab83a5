//! Data models for commitinfo
//!
//! This module contains rendering-independent data structures representing
//! git concepts like commits and their identities.

mod commit;
mod identity;
mod information;

pub use commit::CommitData;
pub use identity::{CommitIdentity, split_identity};
pub use information::CommitInformation;
