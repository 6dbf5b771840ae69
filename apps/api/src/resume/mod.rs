//! Resume document pipeline: markdown-ish parsing plus document tree
//! assembly for the client-side renderer.

pub mod document;
pub mod handlers;
pub mod parser;
