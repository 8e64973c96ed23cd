use std::path::{Path, PathBuf};

use onboard_config::resolve_home;

/// On-disk layout under the data directory.
#[derive(Debug, Clone)]
pub struct AppPaths {
    home: PathBuf,
}

impl AppPaths {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// `$ONBOARD_HOME`, else `~/.onboard`.
    pub fn resolve() -> Self {
        Self::new(resolve_home())
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.home.join("storage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_lives_under_home() {
        let paths = AppPaths::new(PathBuf::from("/tmp/onboard-home"));
        assert_eq!(paths.storage_dir(), PathBuf::from("/tmp/onboard-home/storage"));
        assert_eq!(paths.home(), Path::new("/tmp/onboard-home"));
    }
}
