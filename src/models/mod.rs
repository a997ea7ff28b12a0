pub mod category;
pub mod document;
pub mod loaders;
pub mod tier;

pub use category::Category;
pub use document::{Block, SourceDocument};
pub use loaders::load_text_document;
pub use tier::Tier;
