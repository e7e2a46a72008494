pub mod handlers;
pub mod sample;
