/// The shell used to run task commands, unless something else is configured.
///
/// Chain two `powershell` commands, one that sets the output encoding to utf8 and then the
/// user provided one.
pub fn default_shell_command() -> Vec<String> {
    vec![
        "powershell".into(),
        "-c".into(),
        "[Console]::OutputEncoding = [Text.UTF8Encoding]::UTF8;".into(),
    ]
}
