pub mod config;
pub mod decode;
pub mod filters;
pub mod info;
