use crate::error::*;
use indexmap::IndexMap;
use std::io::BufRead;

/// Raw `value ! name` pairs in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterTable {
    values: IndexMap<String, f64>,
}

impl ParameterTable {
    pub fn new() -> Self {
        ParameterTable::default()
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, value: f64) {
        let name = name.into();
        if let Some(previous) = self.values.insert(name.clone(), value) {
            tracing::warn!(
                "parameter {name} given more than once, \
                 {previous} replaced by {value}"
            );
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// First of `names` present in the table.
    pub fn get_any(&self, names: &[&str]) -> Option<f64> {
        names.iter().find_map(|n| self.get(n))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Parse a single `<float> ! <name>` line.
pub fn parse_line(line: &str, line_number: usize) -> Result<(String, f64)> {
    let Some((value, name)) = line.split_once('!') else {
        return Err(Error::Parse {
            line: line_number,
            message: format!("expected '<value> ! <name>', found {line:?}"),
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Parse {
            line: line_number,
            message: "missing parameter name after '!'".to_string(),
        });
    }
    let value = value.trim();
    let value: f64 = value.parse().map_err(|e| Error::Parse {
        line: line_number,
        message: format!("{value:?} is not a number for {name}: {e}"),
    })?;
    Ok((name.to_string(), value))
}

/// Read a parameter file body, blank lines are skipped.
pub fn parse_parameters<R: BufRead>(reader: R) -> Result<ParameterTable> {
    let mut table = ParameterTable::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (name, value) = parse_line(&line, i + 1)?;
        tracing::info!("Load {name} value from file: {name} = {value}");
        table.insert(name, value);
    }
    Ok(table)
}

pub fn load_parameters<P: AsRef<std::path::Path>>(
    path: &P,
) -> Result<ParameterTable> {
    tracing::info!("Reading: {:?}", path.as_ref());
    let file = std::fs::File::open(path)?;
    parse_parameters(std::io::BufReader::new(file))
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn parse_line_test() {
        let (name, value) = parse_line("  0.5 ! CFL ", 1).unwrap();
        assert_eq!(name, "CFL");
        assert_eq!(value, 0.5);

        let (name, value) = parse_line("41.0!NX", 1).unwrap();
        assert_eq!(name, "NX");
        assert_eq!(value, 41.0);
    }

    #[test]
    fn parse_line_errors() {
        match parse_line("0.5 CFL", 3) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            r => panic!("unexpected {r:?}"),
        }
        assert!(matches!(
            parse_line("abc ! CFL", 1),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(parse_line("1.0 !  ", 1), Err(Error::Parse { .. })));
    }

    #[test]
    fn parse_parameters_test() {
        let text = "1.0 ! L\n\n41 ! NX\n0.5 ! CFL\n7.0 ! Unused\n";
        let table = parse_parameters(text.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("L"), Some(1.0));
        assert_eq!(table.get("NX"), Some(41.0));
        assert_eq!(table.get_any(&["VNM", "CFL"]), Some(0.5));
        let names: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["L", "NX", "CFL", "Unused"]);
    }

    #[test]
    fn duplicate_keeps_last() {
        let table = parse_parameters("1.0 ! L\n2.0 ! L\n".as_bytes()).unwrap();
        assert_eq!(table.get("L"), Some(2.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn bad_line_reports_line_number() {
        let text = "1.0 ! L\n\noops\n";
        match parse_parameters(text.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            r => panic!("unexpected {r:?}"),
        }
    }
}
