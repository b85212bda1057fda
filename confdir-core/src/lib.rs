//! Core types and pipeline for the confdir ecosystem.
//!
//! This crate provides everything the CLI builds on:
//! - loaders for the conference data directory's source files
//! - the programme merger and its model types
//! - calendar export and the talk lookup index

pub mod confdir;
pub mod confdir_config;
pub mod error;
pub mod ics;
pub mod lookup;
pub mod merge;
pub mod model;
pub mod program_config;
pub mod slug;
pub mod sources;

// Re-export the main entry points at crate root for convenience
pub use confdir::Confdir;
pub use error::{ConfdirError, ConfdirResult};
pub use lookup::{TalkEntry, TalkIndex, TalkLookup};
pub use merge::merge;
pub use model::{Minisymposium, Program, Session, Speaker, Talk};
pub use slug::slugify;
