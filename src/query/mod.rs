//! Query tree model.
//!
//! A [`Query`] is a boolean group of positions. Each position is usually a
//! [`DisjunctionMaxQuery`] holding alternative [`Term`]s for one token of the
//! user input. Rewriters receive the query wrapped in an [`ExpandedQuery`].

pub mod clause;
pub mod document;
pub mod expanded;
#[allow(clippy::module_inception)]
pub mod query;

pub use self::clause::{
    BooleanQuery, BooleanQueryId, Clause, ClauseId, DisjunctionMaxQuery, DisjunctionMaxQueryId,
    Occur, Term, TermId,
};
pub use self::document::{ClauseDocument, QueryDocument};
pub use self::expanded::{BoostQuery, ExpandedQuery};
pub use self::query::Query;
