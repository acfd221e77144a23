mod errors;
mod line_reader;
mod reading;

pub use line_reader::{LineReader, Outcome};
