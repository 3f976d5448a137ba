//! Plain text result tables.
//!
//! ```text
//! variables = "x", "u", "u_exac"
//! 0, 0.6, 0.6
//! 0.05, 0.59, 0.6
//! ```

use crate::error::*;
use std::io::prelude::*;

/// Equal length labelled columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let mut table = Table::default();
        for (label, values) in columns {
            table.push_column(label, values)?;
        }
        Ok(table)
    }

    pub fn push_column<S: Into<String>>(
        &mut self,
        label: S,
        values: Vec<f64>,
    ) -> Result<()> {
        let label = label.into();
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return Err(Error::InvariantViolation(format!(
                    "column {label} has {} rows, table has {}",
                    values.len(),
                    first.len()
                )));
            }
        }
        self.labels.push(label);
        self.columns.push(values);
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn column(&self, i: usize) -> &[f64] {
        &self.columns[i]
    }

    pub fn column_by_label(&self, label: &str) -> Option<&[f64]> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.columns[i].as_slice())
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }
}

pub fn write_table<W: Write>(output: &mut W, table: &Table) -> Result<()> {
    let header: Vec<String> =
        table.labels.iter().map(|l| format!("\"{l}\"")).collect();
    writeln!(output, "variables = {}", header.join(", "))?;
    for r in 0..table.rows() {
        for (c, column) in table.columns.iter().enumerate() {
            if c > 0 {
                write!(output, ", ")?;
            }
            write!(output, "{}", column[r])?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_table_file<P: AsRef<std::path::Path>>(
    path: &P,
    table: &Table,
) -> Result<()> {
    tracing::info!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_table(&mut output, table)?;
    output.flush()?;
    Ok(())
}

fn parse_header(line: &str) -> Result<Vec<String>> {
    let Some((keyword, rest)) = line.split_once('=') else {
        return Err(Error::Parse {
            line: 1,
            message: "header must read 'variables = ...'".to_string(),
        });
    };
    if !keyword.trim().eq_ignore_ascii_case("variables") {
        return Err(Error::Parse {
            line: 1,
            message: format!("unexpected header keyword {:?}", keyword.trim()),
        });
    }
    let labels: Vec<String> = rest
        .split(',')
        .map(|l| l.trim().trim_matches('"').to_string())
        .filter(|l| !l.is_empty())
        .collect();
    if labels.is_empty() {
        return Err(Error::Parse {
            line: 1,
            message: "header names no variables".to_string(),
        });
    }
    Ok(labels)
}

/// Read a table written by `write_table`.
/// Empty trailing fields, as in `1, 2, \n`, are ignored.
pub fn read_table<R: BufRead>(input: R) -> Result<Table> {
    let mut lines = input.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(Error::Parse {
                line: 1,
                message: "empty table".to_string(),
            })
        }
    };
    let labels = parse_header(&header)?;
    let mut columns = vec![Vec::new(); labels.len()];

    for (i, line) in lines.enumerate() {
        let line = line?;
        let line_number = i + 2;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != labels.len() {
            return Err(Error::Parse {
                line: line_number,
                message: format!(
                    "expected {} values, found {}",
                    labels.len(),
                    fields.len()
                ),
            });
        }
        for (column, field) in columns.iter_mut().zip(fields) {
            let value: f64 = field.parse().map_err(|e| Error::Parse {
                line: line_number,
                message: format!("{field:?} is not a number: {e}"),
            })?;
            column.push(value);
        }
    }

    Table::from_columns(labels.into_iter().zip(columns).collect())
}

pub fn read_table_file<P: AsRef<std::path::Path>>(path: &P) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    read_table(std::io::BufReader::new(file))
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            ("x".to_string(), vec![0.0, 0.1, 0.2]),
            ("u".to_string(), vec![1.0, -2.5, 1e-20]),
        ])
        .unwrap()
    }

    #[test]
    fn header_and_rows() {
        let mut out = Vec::new();
        write_table(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "variables = \"x\", \"u\"");
        assert_eq!(lines[1], "0, 1");
        assert_eq!(lines[2], "0.1, -2.5");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn read_back() {
        let table = sample();
        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        let read = read_table(out.as_slice()).unwrap();
        assert_eq!(read, table);
    }

    #[test]
    fn tolerates_trailing_comma_and_case() {
        let text = "Variables = \"x\", \"u\",\n0.5, 1.5, \n";
        let t = read_table(text.as_bytes()).unwrap();
        assert_eq!(t.labels(), &["x", "u"]);
        assert_eq!(t.column_by_label("u"), Some(&[1.5][..]));
    }

    #[test]
    fn rejects_ragged_rows() {
        let text = "variables = \"x\", \"u\"\n0.5\n";
        match read_table(text.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            r => panic!("unexpected {r:?}"),
        }
        assert!(matches!(
            read_table("x, u\n".as_bytes()),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn column_length_checked() {
        let mut t = sample();
        assert!(matches!(
            t.push_column("bad", vec![1.0]),
            Err(Error::InvariantViolation(_))
        ));
    }
}
