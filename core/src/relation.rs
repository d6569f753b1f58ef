use crate::Error;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

/// Is the width of a cell when a relation is printed with [`Display`].
///
/// [`Display`]: std::fmt::Display
const CELL_WIDTH: usize = 25;

/// Is a named table of string values, positionally aligned with an ordered list
/// of attributes.
///
/// As an invariant, every row in `data` has exactly one value per attribute;
/// the column operations of `Relation` preserve this invariant by applying
/// every structural change to the schema and to all rows together.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Is the name of the relation.
    name: String,

    /// Is the ordered list of attribute names; it determines column positions.
    attributes: Vec<String>,

    /// Is the primary key of the relation.
    #[serde(default)]
    primary_key: Vec<String>,

    /// Is the list of attributes holding multi-valued literals like `{a, b}`.
    #[serde(default)]
    non_atomic_attributes: Vec<String>,

    /// Is the list of rows in the relation.
    #[serde(default)]
    data: Vec<Vec<String>>,
}

impl Relation {
    /// Creates a new relation with the given schema and rows.
    pub fn new<R>(
        name: &str,
        attributes: impl IntoIterator<Item = impl Into<String>>,
        primary_key: impl IntoIterator<Item = impl Into<String>>,
        non_atomic_attributes: impl IntoIterator<Item = impl Into<String>>,
        data: impl IntoIterator<Item = R>,
    ) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.to_string(),
            attributes: strings(attributes),
            primary_key: strings(primary_key),
            non_atomic_attributes: strings(non_atomic_attributes),
            data: data.into_iter().map(strings).collect(),
        }
    }

    /// Creates a new relation whose rows are built by stitching `columns`
    /// together. The columns must be in the same order as `attributes`.
    pub fn from_columns(
        name: &str,
        attributes: Vec<String>,
        primary_key: Vec<String>,
        non_atomic_attributes: Vec<String>,
        columns: &[Vec<String>],
    ) -> Result<Self, Error> {
        Ok(Self {
            name: name.to_string(),
            attributes,
            primary_key,
            non_atomic_attributes,
            data: stitch_columns(columns)?,
        })
    }

    /// Returns the name of the relation.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes of the relation in column order.
    #[inline(always)]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns the primary key of the relation.
    #[inline(always)]
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    /// Returns the non-atomic attributes of the relation.
    #[inline(always)]
    pub fn non_atomic_attributes(&self) -> &[String] {
        &self.non_atomic_attributes
    }

    /// Returns the rows of the relation.
    #[inline(always)]
    pub fn data(&self) -> &[Vec<String>] {
        &self.data
    }

    /// Returns the position of `attribute` in the schema of the relation.
    pub fn position(&self, attribute: &str) -> Result<usize, Error> {
        self.attributes
            .iter()
            .position(|a| a == attribute)
            .ok_or_else(|| Error::AttributeNotFound {
                attribute: attribute.to_string(),
                relation: self.name.clone(),
            })
    }

    /// Returns the values of `attribute` in every row, in row order.
    pub fn column(&self, attribute: &str) -> Result<Vec<String>, Error> {
        let index = self.position(attribute)?;
        self.data
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .get(index)
                    .cloned()
                    .ok_or_else(|| self.row_arity(row, values))
            })
            .collect()
    }

    /// Removes `attribute` from the schema and its value from every row. The
    /// relation is left untouched if any row is too short to hold the value.
    pub fn remove_column(&mut self, attribute: &str) -> Result<(), Error> {
        let index = self.position(attribute)?;
        if let Some((row, values)) = self
            .data
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() <= index)
        {
            return Err(self.row_arity(row, values));
        }

        for row in self.data.iter_mut() {
            row.remove(index);
        }
        self.attributes.remove(index);
        Ok(())
    }

    fn row_arity(&self, row: usize, values: &[String]) -> Error {
        Error::RowArity {
            relation: self.name.clone(),
            row,
            expected: self.attributes.len(),
            found: values.len(),
        }
    }

    pub(crate) fn push_primary_key(&mut self, attribute: &str) {
        self.primary_key.push(attribute.to_string());
    }

    pub(crate) fn clear_non_atomic_attributes(&mut self) {
        self.non_atomic_attributes.clear();
    }

    pub(crate) fn set_data(&mut self, data: Vec<Vec<String>>) {
        self.data = data;
    }

    /// Checks that the relation is well-formed: it has at least one attribute,
    /// its attributes are distinct, its primary key and non-atomic attributes
    /// are drawn from its attributes and every row has one value per attribute.
    pub fn validate(&self) -> Result<(), Error> {
        if self.attributes.is_empty() {
            return Err(Error::EmptySchema {
                relation: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for attribute in &self.attributes {
            if !seen.insert(attribute.as_str()) {
                return Err(Error::DuplicateAttribute {
                    attribute: attribute.clone(),
                    relation: self.name.clone(),
                });
            }
        }

        let roles = [
            ("primary key", &self.primary_key),
            ("non-atomic", &self.non_atomic_attributes),
        ];
        for (role, names) in roles.iter() {
            if let Some(unknown) = names.iter().find(|n| !seen.contains(n.as_str())) {
                return Err(Error::UnknownAttribute {
                    role: role.to_string(),
                    attribute: unknown.clone(),
                    relation: self.name.clone(),
                });
            }
        }

        for (row, values) in self.data.iter().enumerate() {
            if values.len() != self.attributes.len() {
                return Err(self.row_arity(row, values));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------{}-------", self.name)?;
        for attribute in &self.attributes {
            write!(f, "{:<width$}", attribute, width = CELL_WIDTH)?;
        }
        writeln!(f)?;
        for row in &self.data {
            for value in row {
                write!(f, "{:<width$}", value, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Turns a list of columns into a list of rows by reading one value from each
/// column per position. All columns must have the same length.
pub fn stitch_columns(columns: &[Vec<String>]) -> Result<Vec<Vec<String>>, Error> {
    let expected = match columns.first() {
        Some(first) => first.len(),
        None => return Ok(Vec::new()),
    };

    if let Some((column, found)) = columns
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != expected)
    {
        return Err(Error::ColumnLengthMismatch {
            column,
            expected,
            found,
        });
    }

    Ok((0..expected)
        .map(|i| columns.iter().map(|column| column[i].clone()).collect())
        .collect())
}

fn strings(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}
