pub mod file_reader;
pub mod file_writer;
pub(crate) mod logging;

pub use file_reader::*;
pub use file_writer::*;
