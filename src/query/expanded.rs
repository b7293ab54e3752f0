//! The unit of work passed along a rewrite chain.

use serde::{Deserialize, Serialize};

use crate::query::query::Query;

/// A query used to boost or demote documents, carried alongside the user query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostQuery {
    pub query: Query,
    pub boost: f32,
}

impl BoostQuery {
    /// Create a new boost query.
    pub fn new(query: Query, boost: f32) -> Self {
        BoostQuery { query, boost }
    }
}

/// The user query together with the auxiliary queries rewriters attach to it.
///
/// Rewriters receive an `ExpandedQuery` by value, mutate the user query in
/// place and hand the same instance back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedQuery {
    user_query: Query,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    boost_up_queries: Vec<BoostQuery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    boost_down_queries: Vec<BoostQuery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    filter_queries: Vec<Query>,
}

impl ExpandedQuery {
    /// Wrap a user query.
    pub fn new(user_query: Query) -> Self {
        ExpandedQuery {
            user_query,
            boost_up_queries: Vec::new(),
            boost_down_queries: Vec::new(),
            filter_queries: Vec::new(),
        }
    }

    /// Get the user query.
    pub fn user_query(&self) -> &Query {
        &self.user_query
    }

    /// Get mutable access to the user query.
    pub fn user_query_mut(&mut self) -> &mut Query {
        &mut self.user_query
    }

    /// Unwrap the user query.
    pub fn into_user_query(self) -> Query {
        self.user_query
    }

    pub fn add_boost_up_query(&mut self, query: BoostQuery) {
        self.boost_up_queries.push(query);
    }

    pub fn add_boost_down_query(&mut self, query: BoostQuery) {
        self.boost_down_queries.push(query);
    }

    pub fn add_filter_query(&mut self, query: Query) {
        self.filter_queries.push(query);
    }

    pub fn boost_up_queries(&self) -> &[BoostQuery] {
        &self.boost_up_queries
    }

    pub fn boost_down_queries(&self) -> &[BoostQuery] {
        &self.boost_down_queries
    }

    pub fn filter_queries(&self) -> &[Query] {
        &self.filter_queries
    }
}

impl From<Query> for ExpandedQuery {
    fn from(user_query: Query) -> Self {
        ExpandedQuery::new(user_query)
    }
}
