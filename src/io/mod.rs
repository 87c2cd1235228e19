pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TextWriter};
