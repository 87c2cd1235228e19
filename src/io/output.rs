use crate::classifier::Classification;
use crate::errors::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `String: ...` followed by one indented line per matched format
    #[default]
    Text,
    /// A JSON array of `{"string", "types"}` objects
    Json,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &[Classification]) -> Result<()>;
}

pub struct TextWriter<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> TextWriter<W> {
    /// With `verbose`, strings that matched nothing are reported too.
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }

    fn write_classification(&mut self, result: &Classification) -> Result<()> {
        if result.is_empty() {
            if self.verbose {
                writeln!(self.writer, "String: {}", result.string)?;
                writeln!(self.writer, "\tNo valid types")?;
            }
            return Ok(());
        }

        writeln!(self.writer, "String: {}", result.string)?;
        for tag in &result.types {
            writeln!(self.writer, "\tValid {}", tag)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_results(&mut self, results: &[Classification]) -> Result<()> {
        for result in results {
            self.write_classification(result)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Without `verbose`, strings that matched nothing are left out.
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &[Classification]) -> Result<()> {
        let shown: Vec<&Classification> = results
            .iter()
            .filter(|result| self.verbose || !result.is_empty())
            .collect();
        serde_json::to_writer_pretty(&mut self.writer, &shown)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    verbose: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer, verbose)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer, verbose)),
    }
}
