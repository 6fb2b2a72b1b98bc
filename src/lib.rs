//! Chat Babble — Markov chain sentence generation from chat history.
//!
//! Reads chat export dumps, keeps the messages written by one author,
//! learns which word tends to follow which, and samples new sentences
//! that sound vaguely like that author.

pub mod config;
pub mod core;
pub mod schema;
