use std::path::PathBuf;

/// Store file used when neither the CLI nor the config names one.
/// `STASHMARK_FILE` wins; otherwise `bookmarks.json` in the working directory.
pub fn default_store_path() -> PathBuf {
    if let Ok(path) = std::env::var("STASHMARK_FILE") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    PathBuf::from("bookmarks.json")
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("stashmark");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/stashmark");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("stashmark");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
