mod dat;

pub use dat::{DatImageReader, LoadSummary};
