use serde::Serialize;

use crate::badge::Provenance;
use crate::registry::Platform;

#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub platform: Platform,
    pub message: String,
    pub provenance: Provenance,
    pub written: bool,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub jobs: Vec<JobReport>,
    pub marker_written: bool,
    pub last_run: i64,
}

impl RunReport {
    pub fn count(&self, p: Provenance) -> usize {
        self.jobs.iter().filter(|j| j.written && j.provenance == p).count()
    }

    pub fn failed(&self) -> usize { self.jobs.iter().filter(|j| !j.written).count() }
}
