//! # Shingler
//!
//! Shingle generation for query rewriting in full-text search.
//!
//! A parsed user query is a small tree: a boolean group of positions, each
//! position a disjunction of alternative terms. The [`ShingleRewriter`]
//! concatenates the terms of neighbouring positions into new "shingle" terms
//! and adds them as alternatives to both positions, so documents that contain
//! the words next to each other score higher.
//!
//! ## Features
//!
//! - Arena-backed query tree with typed handles
//! - Field-aware shingling that respects the generated flag of terms
//! - JSON document format for query trees and rewriter configuration
//! - `shingler` command line tool
//!
//! [`ShingleRewriter`]: rewrite::ShingleRewriter

pub mod cli;
pub mod error;
pub mod query;
pub mod rewrite;

pub mod prelude {
    pub use crate::error::{Result, ShinglerError};
    pub use crate::query::{DisjunctionMaxQueryId, ExpandedQuery, Occur, Query, Term};
    pub use crate::rewrite::{QueryRewriter, ShingleRewriter, ShingleRewriterConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
