//! Rendering of relations for display.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, ContentArrangement, Table};
use normalform::Relation;
use std::io::Write;

/// Output format of rendered relations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Bordered tables with the primary key marked in the header.
    #[default]
    Table,
    /// Fixed-width columns, one relation after another.
    Plain,
    /// A JSON array of relations.
    Json,
}

/// Writes `relations` to `writer` in the given format, under `heading` when
/// one is given. JSON output has no heading.
pub fn render<W: Write>(
    writer: &mut W,
    heading: Option<&str>,
    relations: &[Relation],
    format: Format,
) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, relations)?;
            writeln!(writer)?;
        }
        Format::Plain => {
            if let Some(heading) = heading {
                writeln!(writer, "\n{}", heading)?;
            }
            for relation in relations {
                writeln!(writer)?;
                write!(writer, "{}", relation)?;
            }
        }
        Format::Table => {
            if let Some(heading) = heading {
                writeln!(writer, "\n{}", heading)?;
            }
            for relation in relations {
                writeln!(writer, "\n{}", relation.name())?;
                writeln!(writer, "{}", table(relation))?;
            }
        }
    }
    Ok(())
}

/// Builds a table for `relation`; primary key attributes are bold and marked
/// with `*` in the header.
pub fn table(relation: &Relation) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(relation.attributes().iter().map(|attribute| {
        if relation.primary_key().contains(attribute) {
            Cell::new(format!("{}*", attribute)).add_attribute(Attribute::Bold)
        } else {
            Cell::new(attribute)
        }
    }));
    for row in relation.data() {
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relations() -> Vec<Relation> {
        vec![
            Relation::new(
                "Student_Courses",
                vec!["ID", "Courses"],
                vec!["ID", "Courses"],
                vec!["Courses"],
                vec![vec!["1", "CS101"], vec!["1", "CS102"]],
            ),
            Relation::new(
                "Student",
                vec!["ID", "Name"],
                vec!["ID", "Courses"],
                Vec::<&str>::new(),
                vec![vec!["1", "Alice"]],
            ),
        ]
    }

    fn rendered(format: Format) -> String {
        let mut output = Vec::new();
        render(&mut output, Some("NORMALIZE 1NF"), &relations(), format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_plain() {
        let expected = format!(
            "\nNORMALIZE 1NF\n\n{}\n{}",
            relations()[0],
            relations()[1]
        );
        assert_eq!(expected, rendered(Format::Plain));
    }

    #[test]
    fn test_render_table() {
        let output = rendered(Format::Table);
        assert!(output.starts_with("\nNORMALIZE 1NF\n\nStudent_Courses\n"));
        assert!(output.contains("ID*"));
        assert!(output.contains("CS102"));
        assert!(output.contains("Alice"));
        assert!(!output.contains("Name*"));
    }

    #[test]
    fn test_render_json() {
        let output = rendered(Format::Json);
        let parsed: Vec<Relation> = serde_json::from_str(&output).unwrap();
        assert_eq!(relations(), parsed);
    }
}
