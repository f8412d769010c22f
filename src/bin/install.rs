use std::{error::Error, path::Path, process::Command};

use add_version::config::*;
use add_version::install::*;
use add_version::wrapper::check_target;
use env_logger::Env;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_INSTALL_CONFIG.to_string());
    let config = InstallConfig::load(&config_path)?;
    log::info!("installing to {} as {} (mode {:o})", config.destination().display(), config.owner, config.mode);

    run_command("cargo build --release --bin add-version")?;
    let dest = install(&config, Path::new("target/release/add-version"))?;

    if let Err(err) = check_target(TARGET_PATH) {
        log::warn!("{} will fail until {TARGET_PATH} is fixed: {err}", dest.display());
    }

    Ok(())
}

fn run_command(command: &str) -> Result<(), Box<dyn Error>> {
    println!("$ {}", command);
    let mut command = command.split_ascii_whitespace();
    let program = command.next().ok_or("empty command")?.to_string();
    let args = command.map(str::to_string).collect::<Vec<_>>();
    let status = Command::new(&program).args(&args).spawn()?.wait()?;
    if !status.success() {
        return Err(format!("{program} exited with {status}").into());
    }
    Ok(())
}
