//! MovePlayer validation under legacy movement.
//!
//! Rotation is applied as soon as the sample is known to be finite. The
//! position goes through the teleport lock first: while a server teleport is
//! pending, samples far from the authoritative position are stale and only
//! their rotation is kept.

use mc_rs_proto::packets::MovePlayer;
use mc_rs_proto::types::Vec3;
use tracing::{debug, trace};

use crate::config::MovementSection;
use crate::error::{Outcome, UnhandledReason};
use crate::session::{in_game_player, Session};

/// In Bedrock, MovePlayer positions are eye positions (1.62 above feet).
pub const EYE_HEIGHT: f32 = 1.62;

/// Squared distance a sample may be from the server position while the
/// teleport lock is held. One block tolerates client physics after spawning
/// inside blocks.
pub const TELEPORT_TOLERANCE_SQ: f32 = 1.0;

/// Decimal places incoming positions are rounded to.
pub const POSITION_PRECISION: u32 = 4;

/// Wrap a yaw angle into `[0, 360)`.
pub fn normalize_yaw(raw: f32) -> f32 {
    let mut yaw = raw % 360.0;
    if yaw < 0.0 {
        yaw += 360.0;
    }
    // A tiny negative remainder rounds up to exactly 360 in f32.
    if yaw >= 360.0 {
        0.0
    } else {
        yaw
    }
}

/// Reduce a pitch angle modulo 360.
///
/// Unlike yaw, negative results are left negative; clients rely on this.
pub fn normalize_pitch(raw: f32) -> f32 {
    raw % 360.0
}

/// Validates MovePlayer samples and applies them to the player.
#[derive(Debug, Clone, Default)]
pub struct MovementValidator {
    settings: MovementSection,
}

impl MovementValidator {
    pub fn new(settings: MovementSection) -> Self {
        Self { settings }
    }

    /// Convert a client eye position to the rounded feet position.
    pub fn feet_position(&self, eye: Vec3) -> Vec3 {
        let rounded = eye.round_to(self.settings.position_precision);
        Vec3::new(rounded.x, rounded.y - self.settings.eye_height, rounded.z)
    }

    pub fn handle(&self, session: &mut dyn Session, packet: &MovePlayer) -> Outcome {
        let addr = session.address();
        let mut lock = session.teleport_lock();

        let player = match in_game_player(session) {
            Ok(p) => p,
            Err(reason) => return reason.into(),
        };

        if packet.numeric_components().iter().any(|v| !v.is_finite()) {
            debug!("Invalid movement received from {addr}, contains NAN/INF components");
            return UnhandledReason::NonFinite.into();
        }

        let yaw = normalize_yaw(packet.yaw);
        let pitch = normalize_pitch(packet.pitch);
        player.set_rotation(yaw, pitch, packet.head_yaw);

        let current = player.position();
        let new_pos = self.feet_position(packet.position);

        if !lock.admit(
            new_pos.distance_squared(&current),
            self.settings.teleport_tolerance_sq,
        ) {
            debug!(
                "Got outdated pre-teleport movement from {addr}, received {new_pos}, expected {current}"
            );
            return UnhandledReason::OutdatedPreTeleport.into();
        }

        // Release the lock before moving: the move itself may teleport again.
        session.set_teleport_lock(lock);

        match session.player_mut() {
            Some(player) => {
                player.handle_movement(new_pos);
                trace!("Movement from {addr} accepted at {new_pos}");
                Outcome::Handled
            }
            None => UnhandledReason::NotSpawned.into(),
        }
    }
}
