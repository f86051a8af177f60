//! Shared wire types for the watchpost event pipeline.
//!
//! Field names on the wire are camelCase, matching the document fields the
//! mobile clients already persist (`mailDetected`, `isListening`, ...), so
//! the same payloads round-trip between agent, server and stored rows.

pub mod models;
pub mod restful;
