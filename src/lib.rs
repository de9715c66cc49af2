#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod app;
pub mod config;
pub mod decoder;
pub mod domain;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod ingest;
pub mod port;

pub use healthcheck::{healthcheck, healthcheck_with_port};
