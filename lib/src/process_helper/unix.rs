/// The shell used to run task commands, unless something else is configured.
pub fn default_shell_command() -> Vec<String> {
    vec!["sh".into(), "-c".into()]
}
