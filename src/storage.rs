use crate::models::Settings;
use directories::ProjectDirs;
use log::{error, info, warn};
use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

fn app_data_dir() -> io::Result<PathBuf> {
    let proj = ProjectDirs::from("ng", "deals", "deals_ng")
        .ok_or_else(|| io::Error::other("unable to get project dirs"))?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn settings_file_path() -> io::Result<PathBuf> {
    let dir = app_data_dir()?;
    Ok(dir.join("settings.json"))
}

pub fn read_settings(path: &Path) -> io::Result<Settings> {
    let mut s = String::new();
    File::open(path)?.read_to_string(&mut s)?;
    serde_json::from_str(&s).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn write_settings(path: &Path, settings: &Settings) -> io::Result<()> {
    let s = serde_json::to_string_pretty(settings).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut f = File::create(path)?;
    f.write_all(s.as_bytes())
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings() -> Settings {
    let path = match settings_file_path() {
        Ok(p) => p,
        Err(e) => {
            error!("[Storage] settings_file_path error: {e}");
            return Settings::default();
        }
    };
    match read_settings(&path) {
        Ok(s) => {
            info!("[Storage] Loaded settings from {}", path.display());
            s
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("[Storage] settings.json not found yet");
            Settings::default()
        }
        Err(e) => {
            warn!("[Storage] Failed to read {}: {e}", path.display());
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    let path = settings_file_path()?;
    info!("[Storage] Saving settings to {}", path.display());
    write_settings(&path, settings).inspect_err(|e| error!("[Storage] Write error {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file() -> PathBuf {
        std::env::temp_dir().join(format!("deals_ng_settings_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn settings_round_trip_through_file() {
        let path = scratch_file();
        let settings = Settings { dark_mode: true, notifications: false, ..Settings::default() };
        write_settings(&path, &settings).unwrap();
        assert_eq!(read_settings(&path).unwrap(), settings);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_is_invalid_data() {
        let path = scratch_file();
        fs::write(&path, "{ not json").unwrap();
        let err = read_settings(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_settings(&scratch_file()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
