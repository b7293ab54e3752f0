//! Clause types that make up a query tree.
//!
//! Every node of a [`Query`](super::Query) is a [`Clause`]. Nodes live in the
//! arena owned by the query and refer to each other through copyable handles,
//! so a child can look up its parent without owning it.

use serde::{Deserialize, Serialize};

/// Occurrence requirements for clauses in a boolean group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    #[default]
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

impl Occur {
    /// Prefix used when rendering a clause with this occurrence.
    pub fn prefix(self) -> &'static str {
        match self {
            Occur::Must => "+",
            Occur::Should => "",
            Occur::MustNot => "-",
        }
    }
}

/// Handle of any clause stored in a query arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseId(pub(crate) usize);

impl ClauseId {
    /// Position of the clause in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

macro_rules! clause_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) ClauseId);

        impl $name {
            /// The untyped handle of this clause.
            pub fn id(self) -> ClauseId {
                self.0
            }
        }

        impl From<$name> for ClauseId {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }
    };
}

clause_handle!(
    /// Handle of a boolean group.
    BooleanQueryId
);
clause_handle!(
    /// Handle of a disjunction max group.
    DisjunctionMaxQueryId
);
clause_handle!(
    /// Handle of a term leaf.
    TermId
);

/// A boolean group of clauses.
///
/// The root of every query is a boolean group. Nested groups may appear as a
/// clause of another boolean group or as an alternative inside a disjunction
/// max group.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanQuery {
    parent: Option<ClauseId>,
    occur: Occur,
    generated: bool,
    clauses: Vec<ClauseId>,
}

impl BooleanQuery {
    pub(super) fn new(parent: Option<ClauseId>, occur: Occur, generated: bool) -> Self {
        BooleanQuery {
            parent,
            occur,
            generated,
            clauses: Vec::new(),
        }
    }

    /// The enclosing clause, `None` for the root.
    pub fn parent(&self) -> Option<ClauseId> {
        self.parent
    }

    /// Get the occurrence requirement.
    pub fn occur(&self) -> Occur {
        self.occur
    }

    /// Whether this group was added by a rewriter.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Get the clauses in insertion order.
    pub fn clauses(&self) -> &[ClauseId] {
        &self.clauses
    }

    pub(super) fn push(&mut self, clause: ClauseId) {
        self.clauses.push(clause);
    }
}

/// A group of alternative representations of one query position, scored by
/// the best matching alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct DisjunctionMaxQuery {
    parent: BooleanQueryId,
    occur: Occur,
    generated: bool,
    clauses: Vec<ClauseId>,
}

impl DisjunctionMaxQuery {
    pub(super) fn new(parent: BooleanQueryId, occur: Occur, generated: bool) -> Self {
        DisjunctionMaxQuery {
            parent,
            occur,
            generated,
            clauses: Vec::new(),
        }
    }

    /// The boolean group this disjunction belongs to.
    pub fn parent(&self) -> BooleanQueryId {
        self.parent
    }

    /// Get the occurrence requirement.
    pub fn occur(&self) -> Occur {
        self.occur
    }

    /// Whether this group was added by a rewriter.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Get the alternatives in insertion order.
    pub fn clauses(&self) -> &[ClauseId] {
        &self.clauses
    }

    pub(super) fn push(&mut self, clause: ClauseId) {
        self.clauses.push(clause);
    }
}

/// A single term, optionally scoped to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    parent: DisjunctionMaxQueryId,
    field: Option<String>,
    value: String,
    generated: bool,
}

impl Term {
    pub(super) fn new(
        parent: DisjunctionMaxQueryId,
        field: Option<String>,
        value: String,
        generated: bool,
    ) -> Self {
        Term {
            parent,
            field,
            value,
            generated,
        }
    }

    /// The disjunction max group holding this term.
    pub fn parent(&self) -> DisjunctionMaxQueryId {
        self.parent
    }

    /// Get the field name, if the term is scoped to one.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the term text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this term was synthesized rather than typed by the user.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Whether both terms target the same field.
    ///
    /// A term without a field only shares its field with another term without
    /// a field.
    pub fn same_field(&self, other: &Term) -> bool {
        self.field == other.field
    }
}

/// A node of a query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Boolean(BooleanQuery),
    DisjunctionMax(DisjunctionMaxQuery),
    Term(Term),
}

impl Clause {
    /// Get the occurrence requirement. Terms are alternatives inside their
    /// disjunction and always report [`Occur::Should`].
    pub fn occur(&self) -> Occur {
        match self {
            Clause::Boolean(bq) => bq.occur(),
            Clause::DisjunctionMax(dmq) => dmq.occur(),
            Clause::Term(_) => Occur::Should,
        }
    }

    /// The enclosing clause, `None` only for the root boolean group.
    pub fn parent(&self) -> Option<ClauseId> {
        match self {
            Clause::Boolean(bq) => bq.parent(),
            Clause::DisjunctionMax(dmq) => Some(dmq.parent().id()),
            Clause::Term(term) => Some(term.parent().id()),
        }
    }

    /// Whether the clause was added by a rewriter.
    pub fn is_generated(&self) -> bool {
        match self {
            Clause::Boolean(bq) => bq.is_generated(),
            Clause::DisjunctionMax(dmq) => dmq.is_generated(),
            Clause::Term(term) => term.is_generated(),
        }
    }

    pub fn as_boolean(&self) -> Option<&BooleanQuery> {
        match self {
            Clause::Boolean(bq) => Some(bq),
            _ => None,
        }
    }

    pub fn as_disjunction_max(&self) -> Option<&DisjunctionMaxQuery> {
        match self {
            Clause::DisjunctionMax(dmq) => Some(dmq),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Clause::Term(term) => Some(term),
            _ => None,
        }
    }
}
