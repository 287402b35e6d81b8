mod error;
mod parser;

pub use {
    error::Error,
    parser::{parse_config, parse_env},
};
