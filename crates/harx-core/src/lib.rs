pub mod config;
pub mod extract;
pub mod har;
pub mod logging;
pub mod url_model;
