//! On-disk collaborators of the status report
//!
//! This module contains the adapters between the filesystem and the core:
//!
//! - `facts`: fact provider backed by the working copy and the engine state
//! - `repository`: repository discovery and coordination
//! - `state`: read-only view over the engine's control directory
//! - `workspace`: working directory file system operations

pub mod facts;
pub mod repository;
pub mod state;
pub mod workspace;
