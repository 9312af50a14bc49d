//! Command implementations.
//!
//! # Modules
//! - `generate` - Commit message generation pipeline.
//! - `pipeline_state` - Pipeline state machine.
//!
//! # Architecture
//! ```text
//! main.rs (cli.rs)
//!   └── commands/generate.rs ─> pipeline_state.rs
//!         ├── git::GitOperations
//!         └── llm::LLMProvider
//! ```

/// Commit message generation pipeline.
pub mod generate;
/// Pipeline state machine.
pub mod pipeline_state;

pub use generate::GenerateOptions;
pub use pipeline_state::PipelineOutcome;
