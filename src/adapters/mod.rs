// Adapters layer: concrete implementations for external systems (job board APIs, text output).

pub mod http;
pub mod report;
