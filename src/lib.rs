//! AI Headlines - a single-shot RSS/Atom digest
//!
//! This crate fetches a fixed registry of AI industry news feeds, normalizes
//! their entries, and renders the most recent headlines as a markdown bullet
//! list written to one output file.

pub mod collect;
pub mod fetcher;
pub mod registry;
pub mod render;
