//! ==============================================================================
//! components/mod.rs - UI components
//! ==============================================================================

mod buttons;
mod counters;
mod header;
mod modal;

pub use buttons::ButtonPanel;
pub use counters::CountersPanel;
pub use header::Header;
pub use modal::ClickModal;
