//! Interactive construction of a relation from line-oriented input.

use anyhow::{bail, Context, Result};
use normalform::Relation;
use std::io::{BufRead, Write};
use tracing::debug;

/// Asks for the schema and the rows of a relation, one value per line.
///
/// Attribute names given for the non-atomic attributes and the primary key must
/// be attributes of the relation; unknown names are reported and asked again.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a new prompter reading answers from `input` and writing prompts
    /// to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the receiver and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads a complete relation: name, attributes, non-atomic attributes,
    /// primary key and rows, in that order.
    pub fn read_relation(&mut self) -> Result<Relation> {
        writeln!(self.output)?;

        writeln!(self.output, "NAME")?;
        let name = self.ask("Enter the relation's name: ")?;
        writeln!(self.output)?;

        writeln!(self.output, "ATTRIBUTES")?;
        let count = self.ask_count("Enter the total number of attributes: ")?;
        let mut attributes = Vec::with_capacity(count);
        for i in 1..=count {
            attributes.push(self.ask(&format!("Enter the name of attribute #{}: ", i))?);
        }
        writeln!(self.output)?;

        writeln!(self.output, "NON-ATOMIC ATTRIBUTES")?;
        let non_atomic = self.ask_attributes(
            "Enter the number of attributes that are non atomic: ",
            &attributes,
        )?;
        writeln!(self.output)?;

        writeln!(self.output, "PRIMARY KEY")?;
        let primary_key = self.ask_attributes(
            "Enter the number of attributes that make up the primary key: ",
            &attributes,
        )?;
        writeln!(self.output)?;

        writeln!(self.output, "DATA ENTRY")?;
        let count = self.ask_count("Enter the total number of tuples: ")?;
        let mut data = Vec::with_capacity(count);
        for i in 1..=count {
            writeln!(self.output, "\nTUPLE #{}:", i)?;
            let mut row = Vec::with_capacity(attributes.len());
            for attribute in &attributes {
                row.push(self.ask(&format!("Enter the value for {}: ", attribute))?);
            }
            data.push(row);
        }
        writeln!(self.output)?;

        let relation = Relation::new(&name, attributes, primary_key, non_atomic, data);
        relation.validate()?;
        debug!(relation = relation.name(), rows = relation.data().len(), "read relation");
        Ok(relation)
    }

    fn ask_attributes(&mut self, prompt: &str, attributes: &[String]) -> Result<Vec<String>> {
        let count = self.ask_count(prompt)?;
        let mut names = Vec::with_capacity(count);
        while names.len() < count {
            let name = self.ask(&format!("Enter the name of attribute #{}: ", names.len() + 1))?;
            if attributes.contains(&name) {
                names.push(name);
            } else {
                writeln!(self.output, "ERROR: Attribute does not exist")?;
            }
        }
        Ok(names)
    }

    fn ask_count(&mut self, prompt: &str) -> Result<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse() {
                Ok(count) => return Ok(count),
                Err(_) => writeln!(self.output, "ERROR: Enter a whole number")?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("unexpected end of input");
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
