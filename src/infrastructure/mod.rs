pub mod ollama_runner;

pub use ollama_runner::{ModelRunner, OllamaRunner};
