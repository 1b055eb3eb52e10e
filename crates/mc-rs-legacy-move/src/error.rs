//! Handling results and errors.
//!
//! Most bad input is not an error: it is dropped with an
//! [`Outcome::Unhandled`] and a debug log line. [`HandleError`] is reserved
//! for malformed input the host should answer by closing the connection.

use std::fmt;

use mc_rs_proto::error::ProtoError;
use mc_rs_proto::packets::PlayerActionType;
use thiserror::Error;

use crate::session::HandlerState;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error(transparent)]
    Proto(#[from] ProtoError),
}

/// Why a claimed packet was dropped without effect (or with partial effect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnhandledReason {
    /// The session has no player yet.
    NotSpawned,
    /// The session is not in the in-game phase.
    WrongPhase(HandlerState),
    /// A position or rotation component was NaN or infinite.
    NonFinite,
    /// Movement from before a server teleport; rotation was still applied.
    OutdatedPreTeleport,
    /// Action code this gate doesn't handle.
    UnknownAction(PlayerActionType),
}

impl fmt::Display for UnhandledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnhandledReason::NotSpawned => f.write_str("player not spawned"),
            UnhandledReason::WrongPhase(state) => write!(f, "session in {state} phase"),
            UnhandledReason::NonFinite => f.write_str("NAN/INF components"),
            UnhandledReason::OutdatedPreTeleport => f.write_str("outdated pre-teleport movement"),
            UnhandledReason::UnknownAction(action) => {
                write!(f, "unknown player action type {}", action.to_i32())
            }
        }
    }
}

/// Result of handling one claimed packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Unhandled(UnhandledReason),
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled)
    }
}

impl From<UnhandledReason> for Outcome {
    fn from(reason: UnhandledReason) -> Self {
        Outcome::Unhandled(reason)
    }
}
