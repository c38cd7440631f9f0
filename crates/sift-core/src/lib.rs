//! Sift Core Library
//!
//! Deduplication and curation pipeline for extracted lesson notes.

pub mod cache;
pub mod cluster;
pub mod config;
pub mod curate;
pub mod error;
pub mod logging;
pub mod note;
pub mod quality;
pub mod records;
pub mod similarity;
pub mod text;
