//! Simulation driver, program loading, and trace output.
//!
//! 1. **Loader:** Text input to a decoded [`loader::Image`].
//! 2. **Simulator:** The run loop and cycle budget.
//! 3. **Trace:** Per-cycle text rendering of the pipeline state.

/// Input text to program image.
pub mod loader;

/// Run loop around the pipeline engine.
pub mod simulator;

/// Per-cycle trace renderer.
pub mod trace;

pub use loader::{Image, load_image};
pub use simulator::Simulator;
