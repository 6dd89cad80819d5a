// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::sync::Arc;

use conan_config::ClientConfig;
use conan_foundation::{Settings, SettingsTree};
use conan_remote::{LoginDb, RemoteManager};
use conan_storage::{BuildLockManager, ConanPaths};

use crate::offline_remote::OfflineRemoteManager;
use crate::Result;

const CONFIG_FILE: &str = "conan.conf";
const SETTINGS_FILE: &str = "settings.yml";
const LOGIN_FILE: &str = "login.json";

/// Everything a command needs, threaded explicitly rather than reached for
/// through module-level globals (Design Notes §9: "thread a `Context` value
/// ... explicitly; no implicit process-wide state beyond the store
/// file-locks").
pub struct Context {
    pub home: PathBuf,
    pub paths: ConanPaths,
    pub config: ClientConfig,
    pub settings_definition: Arc<SettingsTree>,
    pub locks: BuildLockManager,
    pub login_db: LoginDb,
    pub remote_manager: Box<dyn RemoteManager>,
}

impl Context {
    /// Loads the client configuration and settings definition from
    /// `~/.conan` (or `$CONAN_USER_HOME` when set), seeding both with the
    /// embedded defaults on first run.
    pub fn load() -> Result<Self> {
        let home = conan_home();
        std::fs::create_dir_all(&home)?;

        let config_path = home.join(CONFIG_FILE);
        if !config_path.is_file() {
            std::fs::write(&config_path, default_conf(&home))?;
        }
        let config = ClientConfig::load(&config_path)?;

        let settings_path = home.join(SETTINGS_FILE);
        let settings_text = if settings_path.is_file() {
            std::fs::read_to_string(&settings_path)?
        } else {
            std::fs::write(&settings_path, conan_config::DEFAULT_SETTINGS_YML)?;
            conan_config::DEFAULT_SETTINGS_YML.to_string()
        };
        let settings_definition = Arc::new(conan_foundation::load_definition(&settings_text)?);

        let paths = ConanPaths::new(config.storage_path.clone());
        let login_db = LoginDb::new(home.join(LOGIN_FILE));

        Ok(Context {
            home,
            paths,
            config,
            settings_definition,
            locks: BuildLockManager::new(),
            login_db,
            remote_manager: Box::new(OfflineRemoteManager),
        })
    }

    /// A fresh [`Settings`] instance seeded with `[settings_defaults]`
    /// (§6), ready for the CLI's `-s` overrides to be layered on top.
    pub fn default_settings(&self) -> Result<Settings> {
        let mut settings = Settings::new(self.settings_definition.clone());
        for (path, value) in &self.config.settings_defaults {
            settings.set(path, value.clone())?;
        }
        Ok(settings)
    }
}

fn conan_home() -> PathBuf {
    if let Ok(custom) = std::env::var("CONAN_USER_HOME") {
        return PathBuf::from(custom).join(".conan");
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".conan")
}

fn default_conf(home: &std::path::Path) -> String {
    format!(
        "[storage]\npath = {}\n\n[remotes]\nconancenter = https://center.conan.io True\n\n[settings_defaults]\n",
        home.join("data").display()
    )
}
