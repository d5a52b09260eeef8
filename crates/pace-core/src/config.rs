use std::path::PathBuf;

use directories::ProjectDirs;

pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "speedread";
pub const APPLICATION: &str = "speedread";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

pub fn config_root() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    config_root().map(|dir| dir.join("settings.toml"))
}

pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|p| p.cache_dir().join("speedread.log"))
}
