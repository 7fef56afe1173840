//! Dataset file I/O.
//!
//! Trip files are read through [`open_dataset`], which sniffs the first bytes
//! of the file and transparently decompresses gzip input. Plain CSV is passed
//! through a buffered reader unchanged.

mod decompress;

pub use decompress::{open_dataset, Compression, DatasetReader};
