use thiserror::Error;

/// Is the type of errors returned by the operations of this crate.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when an attribute is not in the schema of a relation.
    #[error("attribute `{attribute}` not found in relation `{relation}`")]
    AttributeNotFound { attribute: String, relation: String },

    /// Is returned when columns of different lengths are stitched into rows.
    #[error("column {column} has {found} values but {expected} were expected")]
    ColumnLengthMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// Is returned when a relation is declared without attributes.
    #[error("relation `{relation}` has no attributes")]
    EmptySchema { relation: String },

    /// Is returned when an attribute name appears more than once in a schema.
    #[error("attribute `{attribute}` is declared more than once in relation `{relation}`")]
    DuplicateAttribute { attribute: String, relation: String },

    /// Is returned when a primary key or non-atomic attribute is not one of the
    /// attributes of its relation.
    #[error("{role} attribute `{attribute}` is not an attribute of relation `{relation}`")]
    UnknownAttribute {
        role: String,
        attribute: String,
        relation: String,
    },

    /// Is returned when a row does not have exactly one value per attribute.
    #[error("row {row} of relation `{relation}` has {found} values but {expected} were expected")]
    RowArity {
        relation: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}
