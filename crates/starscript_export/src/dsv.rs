//! Delimiter-separated sink (CSV and friends).

use starscript_foundation::{Error, Result, TypeHint, Value};

use crate::exporter::Exporter;
use crate::field::FieldList;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    InTable,
    InRecord,
}

/// Sink producing delimiter-separated records with a header row.
///
/// Fields containing the delimiter, a quote, or a line break are quoted;
/// quotes inside quoted fields are doubled.
pub struct SeparatedExporter {
    delimiter: char,
    state: State,
    line: Vec<String>,
    output: String,
}

impl SeparatedExporter {
    /// Creates a sink with the given field delimiter.
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            state: State::Idle,
            line: Vec::new(),
            output: String::new(),
        }
    }

    /// Creates a comma-separated sink.
    #[must_use]
    pub fn comma() -> Self {
        Self::new(',')
    }

    /// Creates a tab-separated sink.
    #[must_use]
    pub fn tab() -> Self {
        Self::new('\t')
    }

    /// Returns the output produced so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the sink, returning the complete output.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    fn expect(&self, state: State) -> Result<()> {
        if self.state == state {
            Ok(())
        } else {
            Err(Error::internal(format!(
                "exporter called in state {:?}",
                self.state
            )))
        }
    }

    fn quote(&self, text: &str) -> String {
        if text.contains([self.delimiter, '"', '\n', '\r']) {
            let mut quoted = String::with_capacity(text.len() + 2);
            quoted.push('"');
            for ch in text.chars() {
                if ch == '"' {
                    quoted.push('"');
                }
                quoted.push(ch);
            }
            quoted.push('"');
            quoted
        } else {
            text.to_string()
        }
    }

    fn push_line(&mut self) {
        let delimiter = self.delimiter.to_string();
        self.output.push_str(&self.line.join(&delimiter));
        self.output.push('\n');
        self.line.clear();
    }
}

impl Exporter for SeparatedExporter {
    fn start_table(&mut self, fields: &FieldList, _hints: &[TypeHint]) -> Result<()> {
        self.expect(State::Idle)?;
        for field in fields.iter() {
            let cell = self.quote(field.name());
            self.line.push(cell);
        }
        self.push_line();
        self.state = State::InTable;
        Ok(())
    }

    fn start_record(&mut self) -> Result<()> {
        self.expect(State::InTable)?;
        self.state = State::InRecord;
        Ok(())
    }

    fn add_field(&mut self, value: &Value, _name: &str, _hint: TypeHint) -> Result<()> {
        self.expect(State::InRecord)?;
        let cell = self.quote(&value.stringify(false));
        self.line.push(cell);
        Ok(())
    }

    fn end_record(&mut self) -> Result<()> {
        self.expect(State::InRecord)?;
        self.push_line();
        self.state = State::InTable;
        Ok(())
    }

    fn end_table(&mut self) -> Result<()> {
        self.expect(State::InTable)?;
        self.state = State::Idle;
        Ok(())
    }
}
