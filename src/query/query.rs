//! The query tree and its arena.

use std::fmt;

use crate::query::clause::{
    BooleanQuery, BooleanQueryId, Clause, ClauseId, DisjunctionMaxQuery, DisjunctionMaxQueryId,
    Occur, Term, TermId,
};

/// A parsed user query.
///
/// The query owns every node of its tree in an arena. The root is a boolean
/// group whose clauses are, in order, the positions of the query; handles
/// returned by the `add_*` methods stay valid for the lifetime of the query
/// because nodes are never removed.
///
/// # Examples
///
/// ```
/// use shingler::query::{Occur, Query};
///
/// let mut query = Query::new();
/// let dmq = query.add_disjunction_max(query.root(), Occur::Should, false);
/// query.add_user_term(dmq, Some("title"), "rust");
///
/// assert_eq!(query.to_string(), "({title:rust})");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    nodes: Vec<Clause>,
}

const ROOT: BooleanQueryId = BooleanQueryId(ClauseId(0));

impl Query {
    /// Create a new empty query.
    pub fn new() -> Self {
        Self::with_generated(false)
    }

    /// Create a new empty query marked as produced by a rewriter.
    pub fn new_generated() -> Self {
        Self::with_generated(true)
    }

    fn with_generated(generated: bool) -> Self {
        Query {
            nodes: vec![Clause::Boolean(BooleanQuery::new(
                None,
                Occur::Should,
                generated,
            ))],
        }
    }

    /// Handle of the root boolean group.
    pub fn root(&self) -> BooleanQueryId {
        ROOT
    }

    /// Whether the root group was produced by a rewriter.
    pub fn is_generated(&self) -> bool {
        self.boolean(ROOT).is_generated()
    }

    /// The top-level clauses in order.
    pub fn clauses(&self) -> &[ClauseId] {
        self.boolean(ROOT).clauses()
    }

    /// Number of top-level clauses.
    pub fn len(&self) -> usize {
        self.clauses().len()
    }

    /// Check if this query has no top-level clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    /// Total number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up any clause.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different query.
    pub fn clause(&self, id: impl Into<ClauseId>) -> &Clause {
        &self.nodes[id.into().0]
    }

    /// The enclosing clause of `id`, `None` for the root.
    pub fn parent(&self, id: impl Into<ClauseId>) -> Option<ClauseId> {
        self.clause(id).parent()
    }

    /// Look up a boolean group.
    pub fn boolean(&self, id: BooleanQueryId) -> &BooleanQuery {
        match &self.nodes[id.0.0] {
            Clause::Boolean(bq) => bq,
            _ => unreachable!("clause {} is not a boolean query", id.0.0),
        }
    }

    /// Look up a disjunction max group.
    pub fn disjunction_max(&self, id: DisjunctionMaxQueryId) -> &DisjunctionMaxQuery {
        match &self.nodes[id.0.0] {
            Clause::DisjunctionMax(dmq) => dmq,
            _ => unreachable!("clause {} is not a disjunction max query", id.0.0),
        }
    }

    /// Look up a term.
    pub fn term(&self, id: TermId) -> &Term {
        match &self.nodes[id.0.0] {
            Clause::Term(term) => term,
            _ => unreachable!("clause {} is not a term", id.0.0),
        }
    }

    /// Typed handle for `id` if it points at a disjunction max group.
    pub fn as_disjunction_max(&self, id: ClauseId) -> Option<DisjunctionMaxQueryId> {
        self.clause(id)
            .as_disjunction_max()
            .map(|_| DisjunctionMaxQueryId(id))
    }

    /// Typed handle for `id` if it points at a term.
    pub fn as_term(&self, id: ClauseId) -> Option<TermId> {
        self.clause(id).as_term().map(|_| TermId(id))
    }

    /// Typed handle for `id` if it points at a boolean group.
    pub fn as_boolean(&self, id: ClauseId) -> Option<BooleanQueryId> {
        self.clause(id).as_boolean().map(|_| BooleanQueryId(id))
    }

    /// The terms of a disjunction max group in insertion order. Nested
    /// boolean alternatives are skipped.
    pub fn terms(&self, dmq: DisjunctionMaxQueryId) -> impl Iterator<Item = &Term> + '_ {
        self.disjunction_max(dmq)
            .clauses()
            .iter()
            .filter_map(|&id| self.clause(id).as_term())
    }

    /// Add a disjunction max group to a boolean group.
    pub fn add_disjunction_max(
        &mut self,
        parent: BooleanQueryId,
        occur: Occur,
        generated: bool,
    ) -> DisjunctionMaxQueryId {
        let id = self.push(Clause::DisjunctionMax(DisjunctionMaxQuery::new(
            parent, occur, generated,
        )));
        self.boolean_mut(parent).push(id);
        DisjunctionMaxQueryId(id)
    }

    /// Add a nested boolean group to a boolean group.
    pub fn add_boolean(
        &mut self,
        parent: BooleanQueryId,
        occur: Occur,
        generated: bool,
    ) -> BooleanQueryId {
        let id = self.push(Clause::Boolean(BooleanQuery::new(
            Some(parent.id()),
            occur,
            generated,
        )));
        self.boolean_mut(parent).push(id);
        BooleanQueryId(id)
    }

    /// Add a nested boolean group as an alternative of a disjunction max group.
    pub fn add_boolean_alternative(
        &mut self,
        parent: DisjunctionMaxQueryId,
        generated: bool,
    ) -> BooleanQueryId {
        let id = self.push(Clause::Boolean(BooleanQuery::new(
            Some(parent.id()),
            Occur::Should,
            generated,
        )));
        self.disjunction_max_mut(parent).push(id);
        BooleanQueryId(id)
    }

    /// Add a term to a disjunction max group.
    pub fn add_term(
        &mut self,
        parent: DisjunctionMaxQueryId,
        field: Option<&str>,
        value: impl Into<String>,
        generated: bool,
    ) -> TermId {
        let term = Term::new(parent, field.map(str::to_string), value.into(), generated);
        let id = self.push(Clause::Term(term));
        self.disjunction_max_mut(parent).push(id);
        TermId(id)
    }

    /// Add a term typed by the user to a disjunction max group.
    pub fn add_user_term(
        &mut self,
        parent: DisjunctionMaxQueryId,
        field: Option<&str>,
        value: impl Into<String>,
    ) -> TermId {
        self.add_term(parent, field, value, false)
    }

    /// Append a new query position holding a single term.
    ///
    /// This is the shape a query parser produces for every token: a SHOULD
    /// disjunction max group under the root with one term in it.
    pub fn add_token(
        &mut self,
        field: Option<&str>,
        value: impl Into<String>,
        generated: bool,
    ) -> DisjunctionMaxQueryId {
        let dmq = self.add_disjunction_max(ROOT, Occur::Should, generated);
        self.add_term(dmq, field, value, generated);
        dmq
    }

    fn push(&mut self, clause: Clause) -> ClauseId {
        let id = ClauseId(self.nodes.len());
        self.nodes.push(clause);
        id
    }

    fn boolean_mut(&mut self, id: BooleanQueryId) -> &mut BooleanQuery {
        match &mut self.nodes[id.0.0] {
            Clause::Boolean(bq) => bq,
            _ => unreachable!("clause {} is not a boolean query", id.0.0),
        }
    }

    fn disjunction_max_mut(&mut self, id: DisjunctionMaxQueryId) -> &mut DisjunctionMaxQuery {
        match &mut self.nodes[id.0.0] {
            Clause::DisjunctionMax(dmq) => dmq,
            _ => unreachable!("clause {} is not a disjunction max query", id.0.0),
        }
    }

    fn fmt_clause(&self, id: ClauseId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clause = self.clause(id);
        f.write_str(clause.occur().prefix())?;
        match clause {
            Clause::Boolean(bq) => {
                f.write_str("(")?;
                for (i, &child) in bq.clauses().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    self.fmt_clause(child, f)?;
                }
                f.write_str(")")?;
            }
            Clause::DisjunctionMax(dmq) => {
                f.write_str("{")?;
                for (i, &child) in dmq.clauses().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    self.fmt_clause(child, f)?;
                }
                f.write_str("}")?;
            }
            Clause::Term(term) => {
                if let Some(field) = term.field() {
                    write!(f, "{field}:")?;
                }
                f.write_str(term.value())?;
            }
        }
        if clause.is_generated() {
            f.write_str("*")?;
        }
        Ok(())
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_clause(ROOT.id(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_query_is_empty() {
        let query = Query::new();
        assert!(query.is_empty());
        assert_eq!(query.len(), 0);
        assert_eq!(query.node_count(), 1);
        assert!(!query.is_generated());
        assert_eq!(query.parent(query.root()), None);
        assert!(Query::new_generated().is_generated());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut query = Query::new();
        let first = query.add_token(None, "cde", false);
        let second = query.add_token(Some("f1"), "ajk", false);
        query.add_user_term(first, None, "cdx");

        assert_eq!(query.clauses(), &[first.id(), second.id()]);

        let values: Vec<&str> = query.terms(first).map(|t| t.value()).collect();
        assert_eq!(values, vec!["cde", "cdx"]);

        let term = query.terms(second).next().unwrap();
        assert_eq!(term.field(), Some("f1"));
        assert!(!term.is_generated());
    }

    #[test]
    fn test_parent_links() {
        let mut query = Query::new();
        let dmq = query.add_disjunction_max(query.root(), Occur::Must, false);
        let term = query.add_user_term(dmq, None, "a");
        let nested = query.add_boolean_alternative(dmq, true);
        let inner = query.add_disjunction_max(nested, Occur::Should, true);

        assert_eq!(query.parent(dmq), Some(query.root().id()));
        assert_eq!(query.parent(term), Some(dmq.id()));
        assert_eq!(query.term(term).parent(), dmq);
        assert_eq!(query.parent(nested), Some(dmq.id()));
        assert_eq!(query.disjunction_max(inner).parent(), nested);
        assert_eq!(query.disjunction_max(dmq).occur(), Occur::Must);
    }

    #[test]
    fn test_typed_lookups() {
        let mut query = Query::new();
        let dmq = query.add_token(None, "a", false);
        let nested = query.add_boolean(query.root(), Occur::MustNot, false);
        let term = query.disjunction_max(dmq).clauses()[0];

        assert_eq!(query.as_disjunction_max(dmq.id()), Some(dmq));
        assert_eq!(query.as_disjunction_max(nested.id()), None);
        assert_eq!(query.as_boolean(nested.id()), Some(nested));
        assert!(query.as_term(term).is_some());
        assert_eq!(query.as_term(dmq.id()), None);
    }

    #[test]
    fn test_terms_skip_nested_alternatives() {
        let mut query = Query::new();
        let dmq = query.add_token(None, "a", false);
        query.add_boolean_alternative(dmq, false);
        query.add_term(dmq, None, "b", true);

        assert_eq!(query.disjunction_max(dmq).clauses().len(), 3);
        let values: Vec<&str> = query.terms(dmq).map(|t| t.value()).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_display() {
        let mut query = Query::new();
        let dmq = query.add_token(Some("f1"), "cde", false);
        query.add_term(dmq, Some("f1"), "cdeajk", true);
        let must = query.add_disjunction_max(query.root(), Occur::Must, false);
        query.add_user_term(must, None, "ajk");
        let not = query.add_boolean(query.root(), Occur::MustNot, false);
        let inner = query.add_disjunction_max(not, Occur::Should, false);
        query.add_user_term(inner, None, "xyz");

        assert_eq!(
            query.to_string(),
            "({f1:cde | f1:cdeajk*} +{ajk} -({xyz}))"
        );
    }
}
