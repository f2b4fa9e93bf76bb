//! Entity structs for Tasklet domain objects.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so the persisted
//! form can be round-tripped and validated against a generated schema.

mod task;

pub use task::Task;
