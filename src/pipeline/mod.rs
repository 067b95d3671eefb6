// Request pipeline — per-request orchestration of the analysis scorers.

pub mod orchestrator;
