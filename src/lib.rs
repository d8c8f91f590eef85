pub mod config;
pub mod data;
pub mod source;
pub mod util;
