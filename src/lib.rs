//! vercelctl: a terminal client for the Vercel REST API.
//!
//! Layers, innermost first:
//! - `domain`: request descriptors, normalized API errors, response envelopes
//! - `config`: layered settings (file, environment) and the provider seam
//! - `application`: endpoint catalog and the request executor
//! - `infrastructure`: HTTP transport and service wiring
//! - `cli`: argument parsing, dispatch and rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
