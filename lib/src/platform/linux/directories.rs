use std::path::PathBuf;

fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

pub fn default_config_directory() -> PathBuf {
    match dirs::config_dir() {
        Some(config_dir) => config_dir.join("prioq"),
        None => get_home_dir().join(".config/prioq"),
    }
}

pub fn get_config_directories() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/etc/prioq"),
        default_config_directory(),
        PathBuf::from("."),
    ]
}
