//! Child process launching.

use crate::exit_codes;
use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus};
use std::sync::Once;
use tracing::debug;

/// Starts a subcommand and waits for it to finish.
pub trait Launcher {
    /// Run `interpreter` followed by `argv` and return the child's exit code.
    ///
    /// An `Err` means the child could not be started at all.
    fn launch(&mut self, interpreter: &[String], argv: &[OsString]) -> io::Result<i32>;
}

impl<F> Launcher for F
where
    F: FnMut(&[String], &[OsString]) -> io::Result<i32>,
{
    fn launch(&mut self, interpreter: &[String], argv: &[OsString]) -> io::Result<i32> {
        self(interpreter, argv)
    }
}

/// Launches subcommands as real child processes.
///
/// The child inherits stdin, stdout, stderr and the (overridden) environment
/// of the dispatcher, so interactive scripts behave as if run directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, interpreter: &[String], argv: &[OsString]) -> io::Result<i32> {
        let (program, leading) = interpreter
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty interpreter"))?;

        ignore_interrupts();
        let status = Command::new(program).args(leading).args(argv).status()?;
        Ok(exit_code_of(status))
    }
}

/// Keep the dispatcher alive on Ctrl-C so it can report the child's exit code.
///
/// The child shares the terminal's process group and receives the interrupt
/// itself. A handler, unlike `SIG_IGN`, is reset to the default disposition
/// in the child on exec.
fn ignore_interrupts() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if let Err(e) = ctrlc::set_handler(|| {}) {
            debug!(error = %e, "interrupt handler not installed");
        }
    });
}

/// Exit code to propagate for a finished child.
///
/// On Unix a child killed by a signal maps to `128 + signal`, as shells do.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::USER_ERROR
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn exit_code_of_normal_exit() {
        // Raw wait status encodes the exit code in the high byte.
        assert_eq!(exit_code_of(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_of(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    fn exit_code_of_signal() {
        // SIGKILL
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), 137);
    }

    #[test]
    fn process_launcher_reports_exit_code() {
        let interpreter = vec!["sh".to_string(), "-c".to_string()];
        let argv = vec![OsString::from("exit 7")];

        let code = ProcessLauncher.launch(&interpreter, &argv).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn process_launcher_missing_program_is_error() {
        let interpreter = vec!["mcmod-no-such-interpreter".to_string()];
        let err = ProcessLauncher.launch(&interpreter, &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn process_launcher_empty_interpreter_is_error() {
        let err = ProcessLauncher.launch(&[], &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
