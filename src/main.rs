/*
Runs the add-version script with the privileges of this binary's owner.

Install this binary setuid (see `cargo run --bin install`); the script itself
only needs to be executable by its owner. Every argument, argument 0 included,
is passed through unchanged, and so is the environment. No environment
variable is read by this program, `RUST_LOG` included.

If the script cannot be started the process exits with 127 (not found) or
126 (could not be executed).
*/

fn main() {
    env_logger::Builder::new().filter_level(LevelFilter::Warn).init();

    let argv = match argv_from(args_os()) {
        Ok(argv) => argv,
        Err(err) => abort(&format!("invalid argument: {err}"), EXIT_CANNOT_EXECUTE),
    };
    let target = match CString::new(TARGET_PATH) {
        Ok(target) => target,
        Err(err) => abort(&format!("invalid target path {TARGET_PATH:?}: {err}"), EXIT_CANNOT_EXECUTE),
    };

    log::debug!("exec {} with {} argument(s)", TARGET_PATH, argv.len());
    let errno = exec_target(&target, &argv);

    abort(&format!("failed to execute {TARGET_PATH}: {}", errno.desc()), exit_code_for(errno))
}

fn abort(msg: &str, code: i32) -> ! {
    eprintln!("ERROR: {msg}");
    exit(code)
}

use std::env::args_os;
use std::ffi::CString;
use std::process::exit;
use add_version::config::*;
use add_version::wrapper::*;
use log::LevelFilter;
