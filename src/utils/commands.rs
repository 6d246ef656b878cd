use std::{
    ffi::OsStr,
    process::{Command, Stdio},
};

/// Returns a detached `std::process::Command` for the given program and its arguments.
///
/// Standard streams are nulled, the launched process is never supervised.
pub fn get_launch_command<'a>(
    program: impl AsRef<OsStr>,
    args: impl IntoIterator<Item = &'a str>,
) -> Command {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_launch_command() {
        let command = get_launch_command("Steam.exe", ["-login", "gaben"]);

        assert_eq!(command.get_program(), "Steam.exe");
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![OsStr::new("-login"), OsStr::new("gaben")]
        );
    }
}
