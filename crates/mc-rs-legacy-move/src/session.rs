//! Host collaborators: the session, its player and the player's world.
//!
//! The host connection layer owns all of these. The gate only reads them,
//! flips the teleport lock and calls the mutation primitives below.

use std::fmt;
use std::net::SocketAddr;

use mc_rs_proto::packets::{GamePacket, UpdateBlock};
use mc_rs_proto::types::{BlockFace, BlockPos, Vec3};

use crate::error::UnhandledReason;

/// Which packet handler the host currently runs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    /// Login and encryption handshake.
    Login,
    /// Resource pack negotiation.
    ResourcePacks,
    /// StartGame sent, chunks still loading.
    Spawning,
    /// Player fully spawned and in the world.
    InGame,
    /// Player is dead and waiting to respawn.
    Death,
}

impl fmt::Display for HandlerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandlerState::Login => "login",
            HandlerState::ResourcePacks => "resource packs",
            HandlerState::Spawning => "spawning",
            HandlerState::InGame => "in-game",
            HandlerState::Death => "death",
        };
        f.write_str(name)
    }
}

/// Whether a server-initiated teleport still waits for the client to catch up.
///
/// `Locked` is entered on every server teleport. The only way back to
/// `Unlocked` is a movement sample that lands within tolerance of the
/// authoritative position, see [`TeleportLock::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeleportLock {
    #[default]
    Unlocked,
    Locked,
}

impl TeleportLock {
    pub fn is_locked(self) -> bool {
        self == TeleportLock::Locked
    }

    /// Feed one movement sample, given its squared distance from the
    /// authoritative position. Returns `false` if the sample is stale and must
    /// be dropped; otherwise the lock is released and the sample accepted.
    pub fn admit(&mut self, distance_sq: f32, tolerance_sq: f32) -> bool {
        if self.is_locked() && distance_sq > tolerance_sq {
            return false;
        }
        *self = TeleportLock::Unlocked;
        true
    }
}

/// The world a player is in.
pub trait World {
    /// Authoritative UpdateBlock packets describing the current state of `blocks`.
    fn block_update_packets(&self, blocks: &[BlockPos]) -> Vec<UpdateBlock>;
}

/// The in-game actor bound to a session.
///
/// Toggles return `false` when the player's state rules refuse the change.
pub trait Player {
    /// Feet position.
    fn position(&self) -> Vec3;
    fn set_rotation(&mut self, yaw: f32, pitch: f32, head_yaw: f32);
    /// Move the player to `new_pos` (feet), running the host's movement rules.
    fn handle_movement(&mut self, new_pos: Vec3);

    /// Start breaking a block. `false` if the attempt was refused.
    fn attack_block(&mut self, pos: BlockPos, face: BlockFace) -> bool;
    fn continue_break_block(&mut self, pos: BlockPos, face: BlockFace);
    fn stop_break_block(&mut self, pos: BlockPos);

    fn stop_sleep(&mut self);
    fn jump(&mut self);
    fn toggle_sprint(&mut self, sprint: bool) -> bool;
    fn toggle_sneak(&mut self, sneak: bool) -> bool;
    fn toggle_glide(&mut self, glide: bool) -> bool;
    fn toggle_swim(&mut self, swim: bool) -> bool;
    fn set_using_item(&mut self, using: bool);

    /// Resend the player's full entity state to the player's own client.
    fn resync_self(&mut self);

    fn world(&self) -> &dyn World;
}

/// One connected client.
pub trait Session {
    /// Peer address, used as log context.
    fn address(&self) -> SocketAddr;
    /// `None` until the player has spawned.
    fn player(&self) -> Option<&dyn Player>;
    fn player_mut(&mut self) -> Option<&mut dyn Player>;
    fn handler_state(&self) -> HandlerState;
    fn teleport_lock(&self) -> TeleportLock;
    fn set_teleport_lock(&mut self, lock: TeleportLock);
    /// Queue a packet for this session only.
    fn send_packet(&mut self, packet: GamePacket);
}

/// Arm the teleport lock. The host calls this whenever it teleports the player.
pub fn lock_for_teleport(session: &mut dyn Session) {
    session.set_teleport_lock(TeleportLock::Locked);
}

/// Resolve the session's player, requiring the session to be in game.
pub(crate) fn in_game_player(
    session: &mut dyn Session,
) -> Result<&mut dyn Player, UnhandledReason> {
    let state = session.handler_state();
    let player = session.player_mut().ok_or(UnhandledReason::NotSpawned)?;
    if state != HandlerState::InGame {
        return Err(UnhandledReason::WrongPhase(state));
    }
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSession;

    #[test]
    fn lock_admits_within_tolerance() {
        let mut lock = TeleportLock::Locked;
        assert!(lock.admit(0.5, 1.0));
        assert_eq!(lock, TeleportLock::Unlocked);
    }

    #[test]
    fn lock_drops_outside_tolerance() {
        let mut lock = TeleportLock::Locked;
        assert!(!lock.admit(2.0, 1.0));
        assert!(lock.is_locked());
        // Exactly on the tolerance is still accepted.
        assert!(lock.admit(1.0, 1.0));
        assert!(!lock.is_locked());
    }

    #[test]
    fn unlocked_admits_anything() {
        let mut lock = TeleportLock::Unlocked;
        assert!(lock.admit(1_000_000.0, 1.0));
        assert_eq!(lock, TeleportLock::Unlocked);
    }

    #[test]
    fn lock_for_teleport_arms_lock() {
        let mut session = MockSession::in_game();
        lock_for_teleport(&mut session);
        assert!(session.lock.is_locked());
    }

    #[test]
    fn in_game_player_requires_player() {
        let mut session = MockSession::without_player();
        assert_eq!(
            in_game_player(&mut session).err(),
            Some(UnhandledReason::NotSpawned)
        );
    }

    #[test]
    fn in_game_player_requires_in_game_state() {
        let mut session = MockSession::in_game();
        session.state = HandlerState::Spawning;
        assert_eq!(
            in_game_player(&mut session).err(),
            Some(UnhandledReason::WrongPhase(HandlerState::Spawning))
        );
        session.state = HandlerState::InGame;
        assert!(in_game_player(&mut session).is_ok());
    }
}
