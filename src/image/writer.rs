mod dat;

pub use dat::DatImageWriter;
