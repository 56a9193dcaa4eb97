// src/exit.rs
//! Process exit codes for `chatline`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ChatExit {
    /// Session ended by exit keyword, end of input or interrupt.
    Success = 0,
    /// Startup failed (configuration, signal handler, input thread).
    Error = 1,
    /// The terminal could not be written.
    OutputFailure = 2,
}

impl ChatExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for ChatExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
