use std::path::{Path, PathBuf};

use crate::config;

const LOG_FILE_NAME: &str = "signin.log";

#[derive(Clone, Debug, PartialEq)]
pub struct SigninDirectory(PathBuf);

impl SigninDirectory {
    pub fn new(p: PathBuf) -> Self {
        SigninDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SigninDirectory::new)
    }
}

impl SigninDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn log_file(&self) -> PathBuf {
        self.0.join(LOG_FILE_NAME)
    }
    pub fn config_file(&self) -> PathBuf {
        self.0.join(config::DEFAULT_FILE_NAME)
    }
}

/// Get the absolute path to the signin folder.
///
/// This a "Signin" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.signin`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".signin");

        #[cfg(not(target_os = "linux"))]
        path.push("Signin");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SigninDirectory::new(tmp.path().join("nested").join("signin"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // init is idempotent.
        dir.init().unwrap();

        assert_eq!(dir.log_file(), dir.path().join("signin.log"));
        assert_eq!(dir.config_file(), dir.path().join("signin.toml"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }
}
