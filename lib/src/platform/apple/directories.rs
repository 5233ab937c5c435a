use std::path::PathBuf;

fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

pub fn default_config_directory() -> PathBuf {
    get_home_dir().join("Library/Preferences/prioq")
}

pub fn get_config_directories() -> Vec<PathBuf> {
    vec![default_config_directory(), PathBuf::from(".")]
}
