//! Command implementations for sift

pub mod curate;
pub mod dispatch;
pub mod groups;
pub mod helpers;
pub mod score;
