//! CLI integration tests, one module per command

mod support;

mod logging;
mod paths;
mod shortest;
