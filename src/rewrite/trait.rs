//! Query rewriter trait definitions.

use crate::query::ExpandedQuery;

/// A stage of a rewrite chain.
///
/// Implementations take the expanded query by value, edit it in place and
/// return the same instance. A rewriter that has nothing to do returns its
/// input untouched; rewriting never fails.
pub trait QueryRewriter: Send + Sync {
    /// Rewrite the query.
    fn rewrite(&self, query: ExpandedQuery) -> ExpandedQuery;

    /// Get the name of this rewriter for debugging and logging.
    fn name(&self) -> &str;
}

/// Builds configured rewriters for a rewrite chain.
pub trait RewriterFactory: Send + Sync {
    /// Identifier of the rewriter instances this factory creates.
    fn id(&self) -> &str;

    /// Create a new rewriter.
    fn create_rewriter(&self) -> Box<dyn QueryRewriter>;
}
