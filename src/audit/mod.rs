//! Audit logging for the expense tracker
//!
//! Every create, update and delete of an expense, and every budget change,
//! is appended to `audit.log` as a JSON line with before/after values.
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, id.to_string(), &expense, None))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
