//! Remote judge adapters

pub mod gemini;

pub use gemini::GeminiEndpoint;
