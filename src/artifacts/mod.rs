//! Status data structures and decision logic

pub mod status;
