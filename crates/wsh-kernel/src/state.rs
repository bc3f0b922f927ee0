//! Kernel lifecycle state.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle state as seen by the host.
///
/// The discriminants are part of the export ABI (`kernel_state`).
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelState {
    /// Created, `init` not yet called
    #[default]
    Booting = 0,
    /// `init` completed
    Running = 1,
    /// Reserved
    Panic = 2,
    /// Reserved
    Shutdown = 3,
}

impl KernelState {
    /// ABI value of this state.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Parse an ABI value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(KernelState::Booting),
            1 => Some(KernelState::Running),
            2 => Some(KernelState::Panic),
            3 => Some(KernelState::Shutdown),
            _ => None,
        }
    }
}

impl fmt::Display for KernelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KernelState::Booting => "booting",
            KernelState::Running => "running",
            KernelState::Panic => "panic",
            KernelState::Shutdown => "shutdown",
        };
        write!(f, "{}", name)
    }
}
