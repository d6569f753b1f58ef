use crate::{
    literal::{is_non_atomic_literal, parse_non_atomic},
    Error, Relation,
};
use tracing::{debug, debug_span, trace, warn};

/// Determines the primary key given to the relations produced by [`Normalizer`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum KeyPolicy {
    /// Every non-atomic attribute that has been processed is appended to the
    /// primary key of the input relation, and each produced relation takes a
    /// copy of that growing key. For the second and later non-atomic attributes
    /// the key names attributes that the produced relation does not have; the
    /// stripped input relation keeps the fully grown key.
    #[default]
    Cumulative,

    /// Each produced relation is keyed by the original primary key plus its own
    /// non-atomic attribute, and the stripped input relation keeps its original
    /// primary key.
    PerAttribute,
}

/// Decomposes relations with non-atomic attributes into First Normal Form.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    key_policy: KeyPolicy,
}

impl Normalizer {
    /// Creates a new normalizer with the default [`KeyPolicy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key policy of the receiver and returns it.
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    /// Returns the key policy of the receiver.
    #[inline(always)]
    pub fn key_policy(&self) -> KeyPolicy {
        self.key_policy
    }

    /// Decomposes `relation` into relations in First Normal Form.
    ///
    /// For every non-atomic attribute `n` of `relation`, in declaration order,
    /// the result contains a relation named `<name>_<n>` whose attributes are the
    /// primary key of `relation` followed by `n`, with one row per atomic value
    /// of `n` in every row of `relation`. The last relation in the result is
    /// `relation` itself with its non-atomic columns removed.
    ///
    /// **Note**: the transformation consumes `relation` and is meant to be
    /// applied once. Under [`KeyPolicy::Cumulative`] the stripped relation in the
    /// result keeps the removed attributes in its primary key, so normalizing
    /// it again fails with [`Error::AttributeNotFound`].
    pub fn normalize_1nf(&self, mut relation: Relation) -> Result<Vec<Relation>, Error> {
        let span = debug_span!("normalize_1nf", relation = relation.name());
        let _enter = span.enter();

        let key = relation.primary_key().to_vec();
        let non_atomic = relation.non_atomic_attributes().to_vec();

        let mut columns = key
            .iter()
            .map(|attribute| relation.column(attribute))
            .collect::<Result<Vec<_>, _>>()?;
        let mut relations = Vec::with_capacity(non_atomic.len() + 1);

        for attribute in &non_atomic {
            columns.push(relation.column(attribute)?);

            let mut attributes = key.clone();
            attributes.push(attribute.clone());

            let primary_key = match self.key_policy {
                KeyPolicy::Cumulative => {
                    relation.push_primary_key(attribute);
                    relation.primary_key().to_vec()
                }
                KeyPolicy::PerAttribute => attributes.clone(),
            };

            let name = format!("{}_{}", relation.name(), attribute);
            let mut child = Relation::from_columns(
                &name,
                attributes,
                primary_key,
                vec![attribute.clone()],
                &columns,
            )?;
            columns.pop();

            explode(&mut child)?;
            debug!(
                relation = child.name(),
                rows = child.data().len(),
                "produced relation"
            );
            relations.push(child);
        }

        for attribute in &non_atomic {
            relation.remove_column(attribute)?;
        }
        relation.clear_non_atomic_attributes();
        debug!(
            relation = relation.name(),
            attributes = relation.attributes().len(),
            "stripped non-atomic attributes"
        );

        relations.push(relation);
        Ok(relations)
    }
}

/// Decomposes `relation` into relations in First Normal Form using
/// [`KeyPolicy::Cumulative`]. See [`Normalizer::normalize_1nf`].
pub fn normalize_1nf(relation: Relation) -> Result<Vec<Relation>, Error> {
    Normalizer::new().normalize_1nf(relation)
}

/// Replaces every row of `relation` with one copy per atomic value of each of
/// its non-atomic attributes.
fn explode(relation: &mut Relation) -> Result<(), Error> {
    let mut data = relation.data().to_vec();

    for attribute in relation.non_atomic_attributes() {
        let index = relation.position(attribute)?;
        let mut exploded = Vec::with_capacity(data.len());

        for row in data.iter() {
            let literal = &row[index];
            if !is_non_atomic_literal(literal) {
                warn!(
                    relation = relation.name(),
                    attribute = attribute.as_str(),
                    value = literal.as_str(),
                    "value is not wrapped in braces"
                );
            }
            for value in parse_non_atomic(literal) {
                let mut tuple = row.clone();
                tuple[index] = value;
                trace!(relation = relation.name(), row = ?tuple, "exploded row");
                exploded.push(tuple);
            }
        }

        data = exploded;
    }

    relation.set_data(data);
    Ok(())
}
