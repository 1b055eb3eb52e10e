//! StartGame (0x0B) — Server → Client.
//!
//! Sent once per session to start the game. Among the world configuration
//! it carries the movement settings that decide which movement protocol the
//! client speaks for the rest of the session.

use crate::types::Vec3;

/// Which side is authoritative over player movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PlayerMovementType {
    /// Client sends MovePlayer + PlayerAction.
    Legacy = 0,
    /// Client sends PlayerAuthInput every tick.
    ServerAuthoritative = 1,
    /// PlayerAuthInput with server-side rewind history.
    ServerAuthoritativeWithRewind = 2,
}

/// Player movement authority settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementSettings {
    pub movement_type: PlayerMovementType,
    pub rewind_history_size: i32,
    pub server_auth_block_breaking: bool,
}

impl MovementSettings {
    /// Discrete MovePlayer/PlayerAction movement: no rewind window, no
    /// server-authoritative block breaking.
    pub const LEGACY: Self = Self {
        movement_type: PlayerMovementType::Legacy,
        rewind_history_size: 0,
        server_auth_block_breaking: false,
    };
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            movement_type: PlayerMovementType::ServerAuthoritativeWithRewind,
            rewind_history_size: 40,
            server_auth_block_breaking: false,
        }
    }
}

/// StartGame packet (the fields this workspace reads or rewrites).
#[derive(Debug, Clone)]
pub struct StartGame {
    pub entity_unique_id: i64,
    pub entity_runtime_id: u64,
    pub player_gamemode: i32,
    pub player_position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub level_id: String,
    pub world_name: String,
    pub movement_settings: MovementSettings,
    pub current_tick: i64,
    pub server_authoritative_inventory: bool,
}

impl Default for StartGame {
    fn default() -> Self {
        Self {
            entity_unique_id: 1,
            entity_runtime_id: 1,
            player_gamemode: 0,
            player_position: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            level_id: String::new(),
            world_name: "world".into(),
            movement_settings: MovementSettings::default(),
            current_tick: 0,
            server_authoritative_inventory: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rewind_movement() {
        let pkt = StartGame::default();
        assert_eq!(
            pkt.movement_settings.movement_type,
            PlayerMovementType::ServerAuthoritativeWithRewind
        );
        assert_eq!(pkt.movement_settings.rewind_history_size, 40);
    }

    #[test]
    fn legacy_settings() {
        assert_eq!(MovementSettings::LEGACY.movement_type, PlayerMovementType::Legacy);
        assert_eq!(MovementSettings::LEGACY.rewind_history_size, 0);
        assert!(!MovementSettings::LEGACY.server_auth_block_breaking);
    }
}
