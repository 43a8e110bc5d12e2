pub mod gff;

pub use gff::{gff3_line, write_gff3, write_gff3_to_writer};
