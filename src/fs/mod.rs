pub mod archive;
pub mod atomic;
pub mod paths;
