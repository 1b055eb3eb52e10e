//! Legacy movement for Bedrock servers.
//!
//! Switches clients from server-authoritative PlayerAuthInput movement back
//! to discrete MovePlayer + PlayerAction packets, and handles those packets
//! server-side with stricter validation than a stock server:
//!
//! - NaN/Inf and pre-teleport movement samples are dropped,
//! - rotations are normalised before they reach the player,
//! - refused block breaks resend the surrounding blocks to the client.
//!
//! The host wires [`LegacyMovementGate`]'s hooks into its packet pipeline and
//! implements [`Session`], [`Player`] and [`World`] over its own state.

pub mod action;
pub mod config;
pub mod error;
pub mod gate;
pub mod logging;
pub mod movement;
pub mod rollback;
pub mod session;
pub mod timings;

#[cfg(test)]
mod mock;

pub use config::LegacyMoveConfig;
pub use error::{HandleError, Outcome, UnhandledReason};
pub use gate::{DecodeVerdict, GateHook, HookPriority, LegacyMovementGate, ReceiveVerdict};
pub use logging::init_logging;
pub use session::{lock_for_teleport, HandlerState, Player, Session, TeleportLock, World};
