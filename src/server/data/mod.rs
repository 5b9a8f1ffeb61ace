//! Data layer for the server registry.
//!
//! This module owns loading the list of known servers from its line-oriented source and
//! the read-only queries over it. Everything above this layer works with the loaded
//! `ServerRegistry` and never touches the file system.

pub mod registry;

#[cfg(test)]
mod test;
