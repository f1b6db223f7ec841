pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod message;
pub mod quotes;
pub mod timezone;
pub mod validate;
