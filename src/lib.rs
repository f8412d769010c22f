//! Setuid wrapper around a fixed script path.
//!
//! The wrapper binary replaces itself with [`config::TARGET_PATH`], handing
//! over its argument vector untouched. Installed setuid, the target then runs
//! with the privileges of the wrapper's owner without the script itself ever
//! carrying the setuid bit.

pub mod config;
pub mod install;
pub mod wrapper;
