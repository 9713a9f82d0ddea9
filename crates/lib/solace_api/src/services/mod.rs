//! Business-flow services sitting between handlers and `solace_core`.

pub mod account;
