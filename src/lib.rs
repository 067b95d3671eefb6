// Lantern: content triage for a service-center directory.
//
// This is the library root. The analysis pipeline (classifier, sentiment,
// risk, generation) lives under `analysis`, `generation`, and `pipeline`;
// everything else is the plumbing that carries it.

pub mod analysis;
pub mod config;
pub mod db;
pub mod generation;
pub mod geo;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod web;
