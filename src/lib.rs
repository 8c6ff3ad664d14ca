//! Store Inventory
//!
//! Keeps a product inventory in a local SQLite table. Products come in from a
//! CSV file (upserted by name), can be browsed and edited from an interactive
//! menu, and can be dumped back out to a CSV backup.

pub mod cli;
pub mod core;
