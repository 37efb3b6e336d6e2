pub mod data;
pub mod hello;
pub mod optimize;
