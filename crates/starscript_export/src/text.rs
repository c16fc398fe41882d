//! Aligned text-table sink.

use starscript_foundation::{Error, Result, TypeHint, Value};

use crate::exporter::Exporter;
use crate::field::FieldList;
use crate::width::{resolve_width, Alignment, WidthDefaults};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    InTable,
    InRecord,
}

/// One resolved output column.
struct Column {
    width: usize,
    alignment: Alignment,
}

/// Sink producing an aligned text table with a header and a rule line.
///
/// Output accumulates in an internal buffer; the caller takes it with
/// [`TextTableExporter::into_output`] after the export completes.
pub struct TextTableExporter {
    defaults: WidthDefaults,
    columns: Vec<Column>,
    state: State,
    line: Vec<String>,
    output: String,
}

impl TextTableExporter {
    /// Creates a text-table sink with the standard width defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(WidthDefaults::TEXT_TABLE)
    }

    /// Creates a text-table sink with custom width defaults.
    #[must_use]
    pub fn with_defaults(defaults: WidthDefaults) -> Self {
        Self {
            defaults,
            columns: Vec::new(),
            state: State::Idle,
            line: Vec::new(),
            output: String::new(),
        }
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

    fn push_line(&mut self) {
        let line = self.line.join(" ");
        self.output.push_str(line.trim_end());
        self.output.push('\n');
        self.line.clear();
    }

    fn cell(column: &Column, text: &str) -> String {
        // Truncate overlong content to keep columns aligned.
        let text: String = text.chars().take(column.width).collect();
        let pad = column.width - text.chars().count();
        match column.alignment {
            Alignment::Left => format!("{text}{}", " ".repeat(pad)),
            Alignment::Right => format!("{}{text}", " ".repeat(pad)),
        }
    }
}

impl Default for TextTableExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for TextTableExporter {
    fn start_table(&mut self, fields: &FieldList, hints: &[TypeHint]) -> Result<()> {
        self.expect(State::Idle)?;
        self.columns = fields
            .iter()
            .zip(hints)
            .map(|(field, &hint)| {
                let (width, alignment) = resolve_width(field.width(), hint, &self.defaults);
                Column { width, alignment }
            })
            .collect();

        for (field, column) in fields.iter().zip(&self.columns) {
            self.line.push(Self::cell(column, field.name()));
        }
        self.push_line();
        for column in &self.columns {
            self.line.push("-".repeat(column.width));
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
        let position = self.line.len();
        let column = self
            .columns
            .get(position)
            .ok_or_else(|| Error::internal("more fields than columns"))?;
        self.line.push(Self::cell(column, &value.stringify(false)));
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
