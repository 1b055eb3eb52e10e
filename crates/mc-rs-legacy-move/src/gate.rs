//! The packet gate: the three hooks the host wires into its packet pipeline.
//!
//! - [`LegacyMovementGate::on_raw_decode`] drops PlayerAuthInput by id,
//!   before any decoding.
//! - [`LegacyMovementGate::on_receive`] claims MovePlayer and PlayerAction so
//!   the host's default handlers never see them.
//! - [`LegacyMovementGate::on_send`] forces legacy movement in every
//!   outbound StartGame.
//!
//! The host must order the hooks by [`LegacyMovementGate::priority`]: the
//! receive side runs first, the send side runs last so its rewrite wins.

use std::time::Instant;

use mc_rs_proto::packets::{GamePacket, MovementSettings, PlayerAuthInput};
use tracing::debug;

use crate::action::ActionDispatcher;
use crate::config::LegacyMoveConfig;
use crate::error::{HandleError, Outcome};
use crate::movement::MovementValidator;
use crate::rollback::RollbackNotifier;
use crate::session::Session;
use crate::timings::HandlerTimings;

/// Where a hook must sit among the host's other packet listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HookPriority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
    /// After everything else; the last word on the packet.
    Monitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateHook {
    RawDecode,
    Receive,
    Send,
}

/// Result of the pre-decode hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeVerdict {
    Continue,
    Drop,
}

/// Result of the receive hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveVerdict {
    /// Not ours; the host handles it as usual.
    PassThrough,
    /// Handled here; the host must not run its default handler.
    Claimed(Outcome),
}

#[derive(Debug, Default)]
pub struct LegacyMovementGate {
    movement: MovementValidator,
    actions: ActionDispatcher,
    timings: HandlerTimings,
}

impl LegacyMovementGate {
    pub fn new(config: &LegacyMoveConfig) -> Self {
        Self {
            movement: MovementValidator::new(config.movement.clone()),
            actions: ActionDispatcher::new(RollbackNotifier::new(config.rollback.clone())),
            timings: HandlerTimings::default(),
        }
    }

    pub fn priority(hook: GateHook) -> HookPriority {
        match hook {
            GateHook::RawDecode | GateHook::Receive => HookPriority::Lowest,
            GateHook::Send => HookPriority::Monitor,
        }
    }

    pub fn on_raw_decode(&self, packet_id: u32) -> DecodeVerdict {
        if PlayerAuthInput::matches(packet_id) {
            DecodeVerdict::Drop
        } else {
            DecodeVerdict::Continue
        }
    }

    /// Handle MovePlayer and PlayerAction. A protocol error means the client
    /// sent malformed input and should be disconnected.
    pub fn on_receive(
        &mut self,
        packet: &GamePacket,
        session: &mut dyn Session,
    ) -> Result<ReceiveVerdict, HandleError> {
        let started = Instant::now();
        let result = match packet {
            GamePacket::MovePlayer(pkt) => Ok(self.movement.handle(session, pkt)),
            GamePacket::PlayerAction(pkt) => self.actions.handle(session, pkt),
            _ => return Ok(ReceiveVerdict::PassThrough),
        };
        self.timings.record(packet.id(), started.elapsed());

        let outcome = result?;
        if let Outcome::Unhandled(reason) = outcome {
            debug!(
                "Unhandled {} from {}: {reason}",
                packet.name(),
                session.address()
            );
        }
        Ok(ReceiveVerdict::Claimed(outcome))
    }

    pub fn on_send(&self, packets: &mut [GamePacket], session: &dyn Session) {
        for packet in packets.iter_mut() {
            if let GamePacket::StartGame(start_game) = packet {
                if start_game.movement_settings != MovementSettings::LEGACY {
                    debug!(
                        "Forcing legacy movement in StartGame for {} (was {:?})",
                        session.address(),
                        start_game.movement_settings.movement_type
                    );
                }
                start_game.movement_settings = MovementSettings::LEGACY;
            }
        }
    }

    pub fn timings(&self) -> &HandlerTimings {
        &self.timings
    }
}
