//! Common utilities and types for the Tally expense management app

pub mod environment;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use environment::Environment;
pub use error::{Result, TallyError};
pub use logging::{
    init_default_logging, init_dev_logging, init_logging, init_prod_logging, AlertHandler,
    LoggingConfig, TracingAlertHandler,
};
