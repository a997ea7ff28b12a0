pub mod text_loader;

pub use text_loader::load_text_document;
