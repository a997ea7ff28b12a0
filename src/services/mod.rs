pub mod classifier;
pub mod generation_service;
pub mod guide_writer;
pub mod prompt_service;
pub mod renderer;

pub use generation_service::GenerationService;
pub use guide_writer::GuideWriter;
pub use prompt_service::TierPrompts;
