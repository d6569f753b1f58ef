/*! Implements the decomposition of a relation with multi-valued (non-atomic)
attributes into a set of relations in First Normal Form.

A [`Relation`] holds a schema (attributes, primary key and the names of its
non-atomic attributes) together with positional rows of string values.
[`normalize_1nf`] consumes such a relation and returns one relation per
non-atomic attribute, pairing the primary key with the exploded values of that
attribute, followed by the original relation stripped of its non-atomic
columns.

**Example**:
```rust
use normalform::{normalize_1nf, Relation};

let student = Relation::new(
    "Student",
    vec!["ID", "Name", "Courses"],
    vec!["ID"],
    vec!["Courses"],
    vec![vec!["1", "Alice", "{CS101, CS102}"]],
);

let relations = normalize_1nf(student).unwrap();
assert_eq!(2, relations.len());
assert_eq!("Student_Courses", relations[0].name());
assert_eq!(
    &vec![vec!["1", "CS101"], vec!["1", "CS102"]],
    relations[0].data()
);
assert_eq!(&vec!["ID", "Name"], relations[1].attributes());
```
*/
mod error;
mod literal;
mod normalize;
mod relation;

pub use error::Error;
pub use literal::{is_non_atomic_literal, parse_non_atomic};
pub use normalize::{normalize_1nf, KeyPolicy, Normalizer};
pub use relation::{stitch_columns, Relation};
