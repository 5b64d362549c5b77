//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Remote API unreachable
pub const UNAVAILABLE: i32 = 69;

/// API rejected the request, or internal failure
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error (no credentials, unreadable config)
pub const CONFIG: i32 = 78;
