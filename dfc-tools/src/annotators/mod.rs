pub mod trnascan;

pub use trnascan::TrnaScan;
