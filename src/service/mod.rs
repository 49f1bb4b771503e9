//! Services holding process-wide state loaded from the database.

pub mod footer_quote;
pub mod patron;
