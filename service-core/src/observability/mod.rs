pub mod format;
pub mod logging;

pub use format::JsonLineFormat;
pub use logging::init_tracing;
