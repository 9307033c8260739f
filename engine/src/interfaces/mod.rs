
pub mod tttpi;
