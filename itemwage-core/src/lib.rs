pub mod config;
pub mod error;
pub mod wage;

pub use config::{DatabaseConfig, ItemwageConfig, ServerSection, WageConfig};
pub use error::{ItemwageError, Result};
pub use wage::{clamp_experience, ExperiencePolicy, WageModel};
