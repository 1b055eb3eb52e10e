//! MovePlayer (0x13) — Client ↔ Server.
//!
//! Under legacy movement the client sends this packet whenever its position
//! or rotation changes. The position is the player's eye position.

use crate::types::Vec3;

/// MovePlayer packet.
#[derive(Debug, Clone)]
pub struct MovePlayer {
    pub runtime_entity_id: u64,
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    pub on_ground: bool,
    pub ridden_entity_runtime_id: u64,
    pub tick: u64,
}

impl MovePlayer {
    /// Create a regular client position update.
    pub fn normal(
        runtime_entity_id: u64,
        position: Vec3,
        pitch: f32,
        yaw: f32,
        head_yaw: f32,
        on_ground: bool,
        tick: u64,
    ) -> Self {
        Self {
            runtime_entity_id,
            position,
            pitch,
            yaw,
            head_yaw,
            on_ground,
            ridden_entity_runtime_id: 0,
            tick,
        }
    }

    /// The six numeric components a movement sample is validated on.
    pub fn numeric_components(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.yaw,
            self.head_yaw,
            self.pitch,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_packet_fields() {
        let pkt = MovePlayer::normal(1, Vec3::new(10.0, 65.0, 20.0), -5.0, 90.0, 45.0, true, 100);
        assert_eq!(pkt.ridden_entity_runtime_id, 0);
        assert_eq!(pkt.numeric_components(), [10.0, 65.0, 20.0, 90.0, 45.0, -5.0]);
    }
}
