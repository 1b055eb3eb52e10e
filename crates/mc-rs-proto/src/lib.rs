//! Minecraft Bedrock Edition packet shapes for movement, player actions and
//! session start.
//!
//! Wire encoding is owned by the host codec; this crate only models the
//! decoded fields the legacy movement gate reads and rewrites.

pub mod error;
pub mod packets;
pub mod types;
