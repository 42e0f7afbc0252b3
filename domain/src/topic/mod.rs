//! Topics ("お題") players answer, and the catalog they are drawn from.

pub mod catalog;
pub mod topic;
