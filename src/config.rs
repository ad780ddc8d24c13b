use std::path::PathBuf;

use crate::registry::{self, Platform};

pub const OUT_DIR: &str = "badges";

/// Settings for one run. Production runs use `RunConfig::compiled()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub out_dir: PathBuf,
    pub platforms: Vec<Platform>,
}

impl RunConfig {
    pub fn compiled() -> Self {
        RunConfig { out_dir: PathBuf::from(OUT_DIR), platforms: registry::ALL.to_vec() }
    }
}
