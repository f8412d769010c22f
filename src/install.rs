use nix::unistd::{chown, Gid, Group, Uid, User};
use serde::*;
use std::error::*;
use std::fs::*;
use std::os::unix::fs::PermissionsExt;
use std::path::*;

const SETUID_BIT: u32 = 0o4000;

/// Where and how the wrapper binary gets installed.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    pub install_dir: PathBuf,
    #[serde(default = "default_binary_name")]
    pub binary_name: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Falls back to the owner's primary group.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default = "default_mode")]
    pub mode: u32,
}

fn default_binary_name() -> String {
    "add-version".to_string()
}

fn default_owner() -> String {
    "root".to_string()
}

fn default_mode() -> u32 {
    0o6755
}

impl InstallConfig {
    pub fn from_toml(source: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let source = read_to_string(path).map_err(|err| format!("couldn't read {}: {err}", path.display()) )?;
        Self::from_toml(&source)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.mode > 0o7777 {
            return Err(format!("mode {:o} is not a permission mode", self.mode).into());
        }
        if self.mode & SETUID_BIT == 0 {
            return Err(format!("mode {:o} lacks the setuid bit", self.mode).into());
        }
        // a writable setuid binary can be replaced by anyone who can write it
        if self.mode & 0o022 != 0 {
            return Err(format!("mode {:o} is writable by group or others", self.mode).into());
        }
        let name = Path::new(&self.binary_name);
        if self.binary_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(format!("binary_name {:?} must be a plain file name", self.binary_name).into());
        }
        Ok(())
    }

    pub fn destination(&self) -> PathBuf {
        self.install_dir.join(&self.binary_name)
    }

    fn resolve_ids(&self) -> Result<(Uid, Gid), Box<dyn Error>> {
        let user = User::from_name(&self.owner)?.ok_or_else(|| format!("no such user: {}", self.owner) )?;
        let gid = match &self.group {
            Some(group) => Group::from_name(group)?.ok_or_else(|| format!("no such group: {group}") )?.gid,
            None => user.gid,
        };
        Ok((user.uid, gid))
    }
}

/// Copies `artifact` into place and applies ownership, then the setuid mode.
///
/// Ownership goes first: `chown` clears the setuid and setgid bits.
pub fn install(config: &InstallConfig, artifact: &Path) -> Result<PathBuf, Box<dyn Error>> {
    config.validate()?;
    let (uid, gid) = config.resolve_ids()?;

    create_dir_all(&config.install_dir)?;
    let dest = config.destination();
    stage_then_rename(artifact, &dest, |staged| {
        chown(staged, Some(uid), Some(gid))?;
        set_permissions(staged, Permissions::from_mode(config.mode))?;
        Ok(())
    })?;
    log::info!("installed {} as {} ({}:{} mode {:o})", artifact.display(), dest.display(), uid, gid, config.mode);

    Ok(dest)
}

/// Copies `artifact` next to `dest`, runs `finish` on the copy and renames it
/// over `dest`. Nothing is left behind if any step fails.
fn stage_then_rename(artifact: &Path, dest: &Path, finish: impl FnOnce(&Path) -> Result<(), Box<dyn Error>>) -> Result<(), Box<dyn Error>> {
    let file_name = dest.file_name().ok_or_else(|| format!("{} has no file name", dest.display()) )?;
    let staged = dest.with_file_name(format!(".{}.staged", file_name.to_string_lossy()));

    let result = copy(artifact, &staged)
        .map_err(|err| Box::<dyn Error>::from(format!("couldn't copy {} to {}: {err}", artifact.display(), staged.display())) )
        .and_then(|_| finish(&staged) )
        .and_then(|_| rename(&staged, dest).map_err(Into::into) );
    if result.is_err() {
        let _ = remove_file(&staged);
    }
    result
}
