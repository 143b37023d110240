//! Platform glue and small shared helpers.

pub mod format;
pub mod notify;
pub mod platform;
pub mod timing;
