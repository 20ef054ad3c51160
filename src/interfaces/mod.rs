//! Adapters that feed orders into the application from outside sources.

pub mod csv;
