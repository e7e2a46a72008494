pub mod cv;
pub mod document;
