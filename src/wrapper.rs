use crate::config::*;

use nix::errno::Errno;
use nix::unistd;
use std::ffi::*;
use std::fmt;
use std::fs::metadata;
use std::io::ErrorKind;
use std::os::unix::ffi::OsStringExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Converts the process arguments into the vector handed to `execv`.
///
/// Bytes are passed through as-is, argument 0 included.
pub fn argv_from(args: impl IntoIterator<Item = OsString>) -> Result<Vec<CString>, NulError> {
    args.into_iter().map(|arg| CString::new(arg.into_vec()) ).collect()
}

/// Replaces the current process with `path`.
///
/// Only returns when the exec failed.
pub fn exec_target(path: &CStr, argv: &[CString]) -> Errno {
    match unistd::execv(path, argv) {
        Ok(never) => match never {},
        Err(errno) => errno,
    }
}

pub fn exit_code_for(errno: Errno) -> i32 {
    match errno {
        Errno::ENOENT | Errno::ENOTDIR => EXIT_NOT_FOUND,
        _ => EXIT_CANNOT_EXECUTE,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TargetError {
    Missing,
    NotAFile,
    NotExecutable,
    Inaccessible(ErrorKind),
}
impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::Missing => write!(f, "target does not exist"),
            TargetError::NotAFile => write!(f, "target is not a regular file"),
            TargetError::NotExecutable => write!(f, "target has no execute permission bit"),
            TargetError::Inaccessible(kind) => write!(f, "target cannot be inspected: {kind}"),
        }
    }
}
impl std::error::Error for TargetError {}

/// Checks that `path` names something `execv` could plausibly run.
///
/// Advisory only: the wrapper never calls this before exec.
pub fn check_target(path: impl AsRef<Path>) -> Result<(), TargetError> {
    let meta = match metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(TargetError::Missing),
        Err(err) => return Err(TargetError::Inaccessible(err.kind())),
    };
    if !meta.is_file() {
        return Err(TargetError::NotAFile);
    }
    if meta.permissions().mode() & 0o111 == 0 {
        return Err(TargetError::NotExecutable);
    }
    Ok(())
}
