//! PlayerAction dispatch.
//!
//! Each recognised action maps to one player operation. Apart from jumping
//! and the sprint/sneak toggles, every action also ends any item use in
//! progress. Faces are validated only by the actions that consume them.

use mc_rs_proto::packets::{PlayerAction, PlayerActionType};
use mc_rs_proto::types::{BlockFace, BlockPos};
use tracing::debug;

use crate::error::{HandleError, Outcome, UnhandledReason};
use crate::rollback::RollbackNotifier;
use crate::session::{in_game_player, Player, Session};

/// What to do after the player operation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Done; leave the using-item flag alone.
    Finished,
    /// Done; stop using the held item.
    StopUsingItem,
    /// The break was refused; stop using the item and roll the blocks back.
    RollBack(BlockFace),
    /// Not an action this dispatcher handles.
    Unrecognised,
}

#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    rollback: RollbackNotifier,
}

impl ActionDispatcher {
    pub fn new(rollback: RollbackNotifier) -> Self {
        Self { rollback }
    }

    pub fn handle(
        &self,
        session: &mut dyn Session,
        packet: &PlayerAction,
    ) -> Result<Outcome, HandleError> {
        let addr = session.address();
        let pos = packet.block_position;

        let player = match in_game_player(session) {
            Ok(p) => p,
            Err(reason) => return Ok(reason.into()),
        };

        match Self::apply(player, packet)? {
            Step::Finished => {}
            Step::StopUsingItem => player.set_using_item(false),
            Step::RollBack(face) => {
                player.set_using_item(false);
                debug!("Block break at {pos} refused for {addr}, rolling back");
                self.rollback.notify(session, pos, Some(face));
            }
            Step::Unrecognised => {
                debug!(
                    "Unhandled/unknown player action type {} from {addr}",
                    packet.action.to_i32()
                );
                return Ok(UnhandledReason::UnknownAction(packet.action).into());
            }
        }
        Ok(Outcome::Handled)
    }

    fn apply(player: &mut dyn Player, packet: &PlayerAction) -> Result<Step, HandleError> {
        let pos: BlockPos = packet.block_position;

        let step = match packet.action {
            PlayerActionType::StartBreak => {
                let face = BlockFace::try_from(packet.face)?;
                if player.attack_block(pos, face) {
                    Step::StopUsingItem
                } else {
                    Step::RollBack(face)
                }
            }
            PlayerActionType::CrackBreak => {
                let face = BlockFace::try_from(packet.face)?;
                player.continue_break_block(pos, face);
                Step::StopUsingItem
            }
            PlayerActionType::AbortBreak | PlayerActionType::StopBreak => {
                player.stop_break_block(pos);
                Step::StopUsingItem
            }
            // Sleeping starts through block interaction.
            PlayerActionType::StartSleeping => Step::StopUsingItem,
            PlayerActionType::StopSleeping => {
                player.stop_sleep();
                Step::StopUsingItem
            }
            PlayerActionType::Jump => {
                player.jump();
                Step::Finished
            }
            PlayerActionType::StartSprint | PlayerActionType::StopSprint => {
                let sprint = packet.action == PlayerActionType::StartSprint;
                if !player.toggle_sprint(sprint) {
                    player.resync_self();
                }
                Step::Finished
            }
            PlayerActionType::StartSneak | PlayerActionType::StopSneak => {
                let sneak = packet.action == PlayerActionType::StartSneak;
                if !player.toggle_sneak(sneak) {
                    player.resync_self();
                }
                Step::Finished
            }
            PlayerActionType::StartGlide | PlayerActionType::StopGlide => {
                if player.toggle_glide(packet.action == PlayerActionType::StartGlide) {
                    player.resync_self();
                }
                Step::StopUsingItem
            }
            PlayerActionType::StartSwimming | PlayerActionType::StopSwimming => {
                if player.toggle_swim(packet.action == PlayerActionType::StartSwimming) {
                    player.resync_self();
                }
                Step::StopUsingItem
            }
            // Accepted without gameplay effect. Item-use-on is analytics only.
            PlayerActionType::InteractBlock
            | PlayerActionType::CreativePlayerDestroyBlock
            | PlayerActionType::StartItemUseOn
            | PlayerActionType::StopItemUseOn => Step::StopUsingItem,
            _ => Step::Unrecognised,
        };
        Ok(step)
    }
}
