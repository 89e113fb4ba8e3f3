pub mod container;
pub mod header;
