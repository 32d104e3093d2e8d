//! User record module
//!
//! - user_record: the serde data contract supplied by the user directory
//! - source: `RoleSource`, the read seam `RoleChecker` queries through

pub mod source;
pub mod user_record;

pub use source::RoleSource;
pub use user_record::{RecordFormat, UserRecord};
