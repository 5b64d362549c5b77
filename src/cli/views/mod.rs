//! Per-resource views: column sets, detail layouts, event log

pub mod deployments;
pub mod domains;
pub mod format;
pub mod logs;
pub mod projects;
