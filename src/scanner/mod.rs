mod engine;
mod queue;

pub use engine::ProbeEngine;
pub use queue::WorkQueue;
