/// Absolute path of the program the wrapper replaces itself with.
///
/// Fixed at build time. Set `ADD_VERSION_TARGET` while compiling to point the
/// wrapper somewhere else; nothing at run time can change it.
pub const TARGET_PATH: &'static str = match option_env!("ADD_VERSION_TARGET") {
    Some(path) => path,
    None => "/usr/local/www/bugzilla/bugzilla/add-version.pl",
};

const _: () = assert!(TARGET_PATH.as_bytes()[0] == b'/', "ADD_VERSION_TARGET must be an absolute path");

/// Exit status when the target does not exist.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit status when the target exists but could not be executed.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

pub const DEFAULT_INSTALL_CONFIG: &'static str = "install.toml";
