//! Query rewriters.
//!
//! A rewriter is one stage of a rewrite chain: it receives an
//! [`ExpandedQuery`](crate::query::ExpandedQuery), edits the tree in place and
//! hands it on. This module holds the [`QueryRewriter`] contract and the
//! [`ShingleRewriter`].
//!
//! # Example
//!
//! ```
//! use shingler::query::{ExpandedQuery, Query};
//! use shingler::rewrite::{
//!     QueryRewriter, RewriterFactory, ShingleRewriterConfig, ShingleRewriterFactory,
//! };
//!
//! let config = ShingleRewriterConfig::from_json(r#"{ "acceptGeneratedTerms": false }"#)?;
//! let rewriter = ShingleRewriterFactory::new("shingles", config).create_rewriter();
//!
//! let mut query = Query::new();
//! query.add_token(Some("title"), "new", false);
//! query.add_token(Some("title"), "york", false);
//!
//! let rewritten = rewriter.rewrite(ExpandedQuery::new(query));
//! assert_eq!(
//!     rewritten.user_query().to_string(),
//!     "({title:new | title:newyork*} {title:york | title:newyork*})"
//! );
//! # Ok::<(), shingler::error::ShinglerError>(())
//! ```

mod config;
mod shingle;
mod r#trait;

pub use config::{ShingleRewriterConfig, ShingleRewriterFactory};
pub use r#trait::{QueryRewriter, RewriterFactory};
pub use shingle::ShingleRewriter;
