//! Recording doubles for the host and launcher ports

use crate::ports::{HostContext, LaunchRequest, ProcessLauncher};
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeHost {
    solution: Mutex<Option<PathBuf>>,
    document: Mutex<Option<PathBuf>>,
    line: Mutex<Option<String>>,
    pub solution_queries: AtomicUsize,
    pub document_queries: AtomicUsize,
}

impl FakeHost {
    pub fn with_solution(solution: PathBuf) -> Self {
        let host = Self::default();
        host.set_solution(Some(solution));
        host
    }

    pub fn set_solution(&self, solution: Option<PathBuf>) {
        *self.solution.lock().unwrap() = solution;
    }

    pub fn set_document(&self, document: Option<PathBuf>) {
        *self.document.lock().unwrap() = document;
    }

    pub fn set_line(&self, line: Option<&str>) {
        *self.line.lock().unwrap() = line.map(str::to_string);
    }
}

impl HostContext for FakeHost {
    fn solution_file(&self) -> Option<PathBuf> {
        self.solution_queries.fetch_add(1, Ordering::SeqCst);
        self.solution.lock().unwrap().clone()
    }

    fn active_document(&self) -> Option<PathBuf> {
        self.document_queries.fetch_add(1, Ordering::SeqCst);
        self.document.lock().unwrap().clone()
    }

    fn selection_line(&self) -> Option<String> {
        self.line.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub requests: Mutex<Vec<LaunchRequest>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn launched(&self) -> Vec<LaunchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, req: &LaunchRequest) -> Result<()> {
        self.requests.lock().unwrap().push(req.clone());
        if self.fail {
            bail!("spawn failed");
        }
        Ok(())
    }
}
