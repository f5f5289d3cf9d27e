//! Command implementations for graphpaths

pub mod dispatch;
pub mod helpers;
pub mod info;
pub mod paths;
pub mod reachable;
pub mod shortest;
pub mod traverse;
