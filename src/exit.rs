// src/exit.rs
//! Process exit codes for `orion-safelist`.
//!
//! Build scripts only need 0 vs non-0, but distinct codes help debug.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SafelistExit {
    /// Safelist printed.
    Success = 0,
    /// Unexpected failure (walk error, stdout closed).
    Error = 1,
    /// Template directory missing or holds no `.ut` files. Nothing printed.
    MissingTemplates = 2,
}

impl SafelistExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SafelistExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_distinct() {
        assert_eq!(SafelistExit::Success.code(), 0);
        assert_ne!(SafelistExit::Error.code(), 0);
        assert_ne!(SafelistExit::MissingTemplates.code(), 0);
        assert_ne!(SafelistExit::Error, SafelistExit::MissingTemplates);
    }
}
