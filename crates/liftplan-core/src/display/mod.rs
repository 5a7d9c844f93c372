//! Display formatting for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! producing markdown the CLI renderer turns into rich terminal output.
//! Collection newtypes (in [`collections`]) handle lists with graceful empty
//! output, and result wrappers (in [`results`]) add the success line for
//! create/update/delete operations. Derived completion state is rendered
//! from the model methods at format time; nothing shown here is cached.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Days, Exercises, PlanSummaries, Sets, Weeks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
