use std::path::PathBuf;

// Use local data directory since this data doesn't need to be synced.
fn data_local_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("\\"))
}

pub fn default_config_directory() -> PathBuf {
    data_local_dir().join("prioq")
}

pub fn get_config_directories() -> Vec<PathBuf> {
    vec![default_config_directory(), PathBuf::from(".")]
}
