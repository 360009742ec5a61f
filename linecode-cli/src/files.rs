use std::path::{
    Path,
    PathBuf,
};

use color_eyre::eyre::eyre;
use directories::ProjectDirs;

use crate::{
    Error,
    config::Config,
    ui::keybinds::Keybinds,
};

#[derive(Debug)]
pub struct AppFiles {
    project_dirs: ProjectDirs,
}

impl AppFiles {
    pub fn new() -> Result<Self, Error> {
        let project_dirs = ProjectDirs::from("", "linecode", "linecode-cli")
            .ok_or_else(|| eyre!("Could not determine project directories"))?;
        let this = Self { project_dirs };

        std::fs::create_dir_all(this.config_dir())?;
        std::fs::create_dir_all(this.project_dirs.data_local_dir())?;

        Ok(this)
    }

    fn config_dir(&self) -> &Path {
        self.project_dirs.config_dir()
    }

    pub fn config(&self) -> Result<Config, Error> {
        let path = self.config_dir().join("config.toml");

        if path.exists() {
            Config::from_path(path)
        }
        else {
            let config = Config::default();
            config.to_path(path)?;
            Ok(config)
        }
    }

    pub fn keybinds(&self) -> Result<Keybinds, Error> {
        let path = self.config_dir().join("keybinds.json");

        if path.exists() {
            Keybinds::from_path(path)
        }
        else {
            let keybinds = Keybinds::default();
            keybinds.to_path(path)?;
            Ok(keybinds)
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.project_dirs.data_local_dir().join("linecode-cli.log")
    }
}
