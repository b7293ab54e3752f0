//! Shingle generation for adjacent query positions.
//!
//! For two neighbouring disjunction max groups, every pair of terms that
//! target the same field is concatenated into a new term (a shingle) which is
//! added as an alternative to both groups. Documents containing the two words
//! next to each other, indexed as one shingle, then score higher without the
//! cost of a phrase query.

use log::{debug, trace};

use crate::query::{DisjunctionMaxQueryId, ExpandedQuery, Query, Term};
use crate::rewrite::config::ShingleRewriterConfig;
use crate::rewrite::r#trait::QueryRewriter;

/// Adds shingles of adjacent terms to the user query.
///
/// Only positions that are disjunction max groups take part; any other
/// top-level clause (a nested boolean query, for instance) separates the
/// positions around it and no shingle is built across it.
///
/// Terms already marked as generated are ignored as shingle sources unless
/// the rewriter is created with `accept_generated_terms`. The shingles added
/// during one call are never themselves used as sources in that call.
///
/// Rewriting is not idempotent: running the rewriter again on its own output
/// combines the original terms again and appends duplicate shingles, and with
/// `accept_generated_terms` set it also builds shingles from the shingles of
/// the previous run.
///
/// # Examples
///
/// ```
/// use shingler::query::{ExpandedQuery, Query};
/// use shingler::rewrite::{QueryRewriter, ShingleRewriter};
///
/// let mut query = Query::new();
/// query.add_token(None, "cde", false);
/// query.add_token(None, "ajk", false);
///
/// let rewritten = ShingleRewriter::new().rewrite(ExpandedQuery::new(query));
/// assert_eq!(
///     rewritten.user_query().to_string(),
///     "({cde | cdeajk*} {ajk | cdeajk*})"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShingleRewriter {
    accept_generated_terms: bool,
}

/// A shingle waiting to be added to the two groups it was built from.
#[derive(Debug)]
struct Shingle {
    left: DisjunctionMaxQueryId,
    right: DisjunctionMaxQueryId,
    field: Option<String>,
    value: String,
}

impl ShingleRewriter {
    /// Create a rewriter that only shingles terms typed by the user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rewriter, optionally using generated terms as shingle sources.
    pub fn with_accept_generated_terms(accept_generated_terms: bool) -> Self {
        ShingleRewriter {
            accept_generated_terms,
        }
    }

    /// Create a rewriter from its configuration.
    pub fn from_config(config: &ShingleRewriterConfig) -> Self {
        Self::with_accept_generated_terms(config.accept_generated_terms)
    }

    /// Whether generated terms may be used as shingle sources.
    pub fn accepts_generated_terms(&self) -> bool {
        self.accept_generated_terms
    }

    fn is_source(&self, term: &Term) -> bool {
        !term.is_generated() || self.accept_generated_terms
    }

    /// Collect the shingles of every adjacent pair of positions, in the order
    /// they have to be appended.
    fn collect_shingles(&self, query: &Query) -> Vec<Shingle> {
        let positions: Vec<Option<DisjunctionMaxQueryId>> = query
            .clauses()
            .iter()
            .map(|&id| query.as_disjunction_max(id))
            .collect();

        let mut shingles = Vec::new();
        for pair in positions.windows(2) {
            let (left, right) = match pair {
                [Some(left), Some(right)] => (*left, *right),
                _ => continue,
            };

            for left_term in query.terms(left).filter(|term| self.is_source(term)) {
                for right_term in query.terms(right).filter(|term| self.is_source(term)) {
                    if !left_term.same_field(right_term) {
                        continue;
                    }
                    shingles.push(Shingle {
                        left: left_term.parent(),
                        right: right_term.parent(),
                        field: left_term.field().map(str::to_string),
                        value: format!("{}{}", left_term.value(), right_term.value()),
                    });
                }
            }
        }
        shingles
    }
}

impl QueryRewriter for ShingleRewriter {
    fn rewrite(&self, mut query: ExpandedQuery) -> ExpandedQuery {
        let user_query = query.user_query_mut();
        if user_query.len() < 2 {
            trace!("shingle: fewer than two positions, nothing to do");
            return query;
        }

        let shingles = self.collect_shingles(user_query);
        debug!(
            "shingle: adding {} shingles to a query of {} positions",
            shingles.len(),
            user_query.len()
        );

        for shingle in shingles {
            trace!("shingle: {:?}", shingle);
            let field = shingle.field.as_deref();
            user_query.add_term(shingle.left, field, shingle.value.clone(), true);
            user_query.add_term(shingle.right, field, shingle.value, true);
        }

        query
    }

    fn name(&self) -> &str {
        "shingle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(query: &Query, dmq: DisjunctionMaxQueryId) -> Vec<String> {
        query.terms(dmq).map(|t| t.value().to_string()).collect()
    }

    #[test]
    fn test_default_rejects_generated_terms() {
        let rewriter = ShingleRewriter::new();
        assert!(!rewriter.accepts_generated_terms());
        assert_eq!(rewriter.name(), "shingle");
        assert!(ShingleRewriter::with_accept_generated_terms(true).accepts_generated_terms());
    }

    #[test]
    fn test_from_config() {
        let config = ShingleRewriterConfig::new().accept_generated_terms(true);
        assert!(ShingleRewriter::from_config(&config).accepts_generated_terms());
    }

    #[test]
    fn test_empty_query_is_unchanged() {
        let expanded = ExpandedQuery::new(Query::new());
        let rewritten = ShingleRewriter::new().rewrite(expanded.clone());
        assert_eq!(rewritten, expanded);
    }

    #[test]
    fn test_all_candidate_pairs_are_shingled() {
        let mut query = Query::new();
        let left = query.add_token(None, "a", false);
        query.add_user_term(left, None, "b");
        let right = query.add_token(None, "c", false);
        query.add_user_term(right, None, "d");

        let rewritten = ShingleRewriter::new().rewrite(ExpandedQuery::new(query));
        let query = rewritten.user_query();

        assert_eq!(values(query, left), vec!["a", "b", "ac", "ad", "bc", "bd"]);
        assert_eq!(values(query, right), vec!["c", "d", "ac", "ad", "bc", "bd"]);
    }

    #[test]
    fn test_only_matching_fields_within_a_pair() {
        let mut query = Query::new();
        let left = query.add_token(Some("f1"), "a", false);
        query.add_user_term(left, Some("f2"), "b");
        let right = query.add_token(Some("f2"), "c", false);

        let rewritten = ShingleRewriter::new().rewrite(ExpandedQuery::new(query));
        let query = rewritten.user_query();

        assert_eq!(values(query, left), vec!["a", "b", "bc"]);
        assert_eq!(values(query, right), vec!["c", "bc"]);
        let shingle = query.terms(right).last().unwrap();
        assert_eq!(shingle.field(), Some("f2"));
        assert!(shingle.is_generated());
    }

    #[test]
    fn test_shingles_of_this_run_are_not_sources() {
        let mut query = Query::new();
        let first = query.add_token(None, "a", false);
        let second = query.add_token(None, "b", false);
        let third = query.add_token(None, "c", false);

        let rewriter = ShingleRewriter::with_accept_generated_terms(true);
        let rewritten = rewriter.rewrite(ExpandedQuery::new(query));
        let query = rewritten.user_query();

        assert_eq!(values(query, first), vec!["a", "ab"]);
        assert_eq!(values(query, second), vec!["b", "ab", "bc"]);
        assert_eq!(values(query, third), vec!["c", "bc"]);
    }

    #[test]
    fn test_nested_alternative_is_not_a_source() {
        let mut query = Query::new();
        let left = query.add_token(None, "a", false);
        let nested = query.add_boolean_alternative(left, false);
        let inner = query.add_disjunction_max(nested, crate::query::Occur::Should, false);
        query.add_user_term(inner, None, "x");
        let right = query.add_token(None, "b", false);

        let rewritten = ShingleRewriter::new().rewrite(ExpandedQuery::new(query));
        let query = rewritten.user_query();

        assert_eq!(values(query, left), vec!["a", "ab"]);
        assert_eq!(values(query, right), vec!["b", "ab"]);
        assert_eq!(values(query, inner), vec!["x"]);
    }

    #[test]
    fn test_rewriter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShingleRewriter>();
    }
}
