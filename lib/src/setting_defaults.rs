pub(crate) fn default_status_time_format() -> String {
    "%H:%M:%S".to_string()
}
