//! AI patient roleplay powered by the Gemini API

pub mod client;
pub mod roleplay;

pub use client::GeminiClient;
