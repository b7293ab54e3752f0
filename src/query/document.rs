//! Serialized form of a query tree.
//!
//! A [`QueryDocument`] is the nested, owned representation of a [`Query`] used
//! to hand trees to and from the outside world (JSON files, the command line,
//! a downstream serializer). The generated flag of every node is kept as is.
//!
//! ```json
//! {
//!   "clauses": [
//!     { "type": "dmq", "clauses": [ { "type": "term", "field": "f1", "value": "cde" } ] },
//!     { "type": "dmq", "occur": "must", "clauses": [ { "type": "term", "value": "ajk" } ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ShinglerError};
use crate::query::clause::{BooleanQueryId, Clause, ClauseId, DisjunctionMaxQueryId, Occur};
use crate::query::query::Query;

/// Serialized form of a whole query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDocument {
    #[serde(default)]
    pub generated: bool,
    pub clauses: Vec<ClauseDocument>,
}

/// Serialized form of a single clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClauseDocument {
    /// A nested boolean group. Inside a disjunction max group the occurrence
    /// is ignored and read back as `should`.
    #[serde(rename = "bool")]
    Boolean {
        #[serde(default)]
        occur: Occur,
        #[serde(default)]
        generated: bool,
        clauses: Vec<ClauseDocument>,
    },
    #[serde(rename = "dmq")]
    DisjunctionMax {
        #[serde(default)]
        occur: Occur,
        #[serde(default)]
        generated: bool,
        clauses: Vec<ClauseDocument>,
    },
    #[serde(rename = "term")]
    Term {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        field: Option<String>,
        value: String,
        #[serde(default)]
        generated: bool,
    },
}

impl QueryDocument {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Query> for QueryDocument {
    fn from(query: &Query) -> Self {
        QueryDocument {
            generated: query.is_generated(),
            clauses: query
                .clauses()
                .iter()
                .map(|&id| clause_document(query, id))
                .collect(),
        }
    }
}

fn clause_document(query: &Query, id: ClauseId) -> ClauseDocument {
    let children = |clauses: &[ClauseId]| -> Vec<ClauseDocument> {
        clauses.iter().map(|&child| clause_document(query, child)).collect()
    };

    match query.clause(id) {
        Clause::Boolean(bq) => ClauseDocument::Boolean {
            occur: bq.occur(),
            generated: bq.is_generated(),
            clauses: children(bq.clauses()),
        },
        Clause::DisjunctionMax(dmq) => ClauseDocument::DisjunctionMax {
            occur: dmq.occur(),
            generated: dmq.is_generated(),
            clauses: children(dmq.clauses()),
        },
        Clause::Term(term) => ClauseDocument::Term {
            field: term.field().map(str::to_string),
            value: term.value().to_string(),
            generated: term.is_generated(),
        },
    }
}

impl TryFrom<QueryDocument> for Query {
    type Error = ShinglerError;

    fn try_from(document: QueryDocument) -> Result<Self> {
        let mut query = if document.generated {
            Query::new_generated()
        } else {
            Query::new()
        };
        let root = query.root();
        add_group_clauses(&mut query, root, document.clauses)?;
        Ok(query)
    }
}

fn add_group_clauses(
    query: &mut Query,
    parent: BooleanQueryId,
    clauses: Vec<ClauseDocument>,
) -> Result<()> {
    for clause in clauses {
        match clause {
            ClauseDocument::Boolean {
                occur,
                generated,
                clauses,
            } => {
                let nested = query.add_boolean(parent, occur, generated);
                add_group_clauses(query, nested, clauses)?;
            }
            ClauseDocument::DisjunctionMax {
                occur,
                generated,
                clauses,
            } => {
                if clauses.is_empty() {
                    return Err(ShinglerError::query(
                        "disjunction max query must contain at least one clause",
                    ));
                }
                let dmq = query.add_disjunction_max(parent, occur, generated);
                add_alternatives(query, dmq, clauses)?;
            }
            ClauseDocument::Term { value, .. } => {
                return Err(ShinglerError::query(format!(
                    "term '{value}' must be wrapped in a disjunction max query"
                )));
            }
        }
    }
    Ok(())
}

fn add_alternatives(
    query: &mut Query,
    parent: DisjunctionMaxQueryId,
    clauses: Vec<ClauseDocument>,
) -> Result<()> {
    for clause in clauses {
        match clause {
            ClauseDocument::Boolean {
                generated, clauses, ..
            } => {
                let nested = query.add_boolean_alternative(parent, generated);
                add_group_clauses(query, nested, clauses)?;
            }
            ClauseDocument::DisjunctionMax { .. } => {
                return Err(ShinglerError::query(
                    "disjunction max query cannot directly contain another disjunction max query",
                ));
            }
            ClauseDocument::Term {
                field,
                value,
                generated,
            } => {
                query.add_term(parent, field.as_deref(), value, generated);
            }
        }
    }
    Ok(())
}

impl Query {
    /// Build a query from its JSON document, checking the tree's structure.
    pub fn from_json(json: &str) -> Result<Self> {
        Query::try_from(QueryDocument::from_json(json)?)
    }

    /// Convert to the nested document form.
    pub fn to_document(&self) -> QueryDocument {
        QueryDocument::from(self)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let document = QueryDocument::deserialize(deserializer)?;
        Query::try_from(document).map_err(serde::de::Error::custom)
    }
}
