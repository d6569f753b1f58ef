//! Loading relations from JSON documents.

use anyhow::{Context, Result};
use normalform::Relation;
use std::{fs, path::Path};
use tracing::info;

/// Parses and validates a relation from a JSON document.
pub fn parse_relation(text: &str) -> Result<Relation> {
    let relation: Relation = serde_json::from_str(text).context("invalid relation document")?;
    relation.validate()?;
    Ok(relation)
}

/// Reads, parses and validates the relation stored at `path`.
pub fn load_relation(path: &Path) -> Result<Relation> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read relation from {}", path.display()))?;
    let relation = parse_relation(&text)
        .with_context(|| format!("failed to load relation from {}", path.display()))?;
    info!(
        relation = relation.name(),
        attributes = relation.attributes().len(),
        rows = relation.data().len(),
        "loaded relation"
    );
    Ok(relation)
}
