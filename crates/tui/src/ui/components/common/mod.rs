pub mod scroll_metrics;
pub mod text_input;

pub use scroll_metrics::ScrollMetrics;
pub use text_input::TextInputState;
