//! Industry insight pipeline: a cached read-through over the Gemini
//! generator. One insight per user per industry; first access generates
//! and persists, later reads return the cached record unchanged.

pub mod handlers;
pub mod service;
pub mod store;
