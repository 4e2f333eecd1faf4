//! User-facing command implementations
//!
//! Only read-only porcelain lives here. Mutating operations (track, untrack,
//! resolve, commit, merge, rebase) belong to the engine and are out of scope
//! for this tool.
//!
//! - `status`: Show the status of files in the repo

pub mod status;
