use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct PortalDirectory(PathBuf);

impl PortalDirectory {
    pub fn new(p: PathBuf) -> Self {
        PortalDirectory(p)
    }

    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(PortalDirectory::new)
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Get the absolute path to the campusqa configuration folder.
///
/// This is a "CampusQA" directory in the XDG standard configuration directory
/// for all OSes but Linux-based ones, for which it's `~/.campusqa`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".campusqa");

        #[cfg(not(target_os = "linux"))]
        path.push("CampusQA");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

pub fn create_directory(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(path)?;
    }

    #[cfg(not(unix))]
    std::fs::create_dir_all(path)?;

    Ok(())
}
