pub mod analysis;
pub mod config;
pub mod database;
pub mod entity;
pub mod models;
pub mod prompt;

pub use analysis::{parse_analysis_text, parse_analysis_text_with, ParseError, ParserOptions};
pub use config::Config;
pub use database::get_db_connection;
pub use models::*;
pub use prompt::build_analysis_prompt;
