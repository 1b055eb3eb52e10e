//! PlayerAction (0x24) — Client → Server.
//!
//! Sent when the player performs a discrete action: mining, jumping,
//! toggling sprint or sneak, gliding, swimming and so on.

use crate::types::BlockPos;

/// Player action types, by protocol value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerActionType {
    StartBreak,
    AbortBreak,
    StopBreak,
    GetUpdatedBlock,
    DropItem,
    StartSleeping,
    StopSleeping,
    Respawn,
    Jump,
    StartSprint,
    StopSprint,
    StartSneak,
    StopSneak,
    CreativePlayerDestroyBlock,
    DimensionChangeAck,
    StartGlide,
    StopGlide,
    BuildDenied,
    CrackBreak,
    ChangeSkin,
    SetEnchantmentSeed,
    StartSwimming,
    StopSwimming,
    StartSpinAttack,
    StopSpinAttack,
    InteractBlock,
    PredictDestroyBlock,
    ContinueDestroyBlock,
    StartItemUseOn,
    StopItemUseOn,
    HandledTeleport,
    MissedSwing,
    StartCrawling,
    StopCrawling,
    StartFlying,
    StopFlying,
    AckActorData,
    StartUsingItem,
    /// A code newer than this table.
    Unknown(i32),
}

impl PlayerActionType {
    pub fn from_i32(v: i32) -> Self {
        match v {
            0 => Self::StartBreak,
            1 => Self::AbortBreak,
            2 => Self::StopBreak,
            3 => Self::GetUpdatedBlock,
            4 => Self::DropItem,
            5 => Self::StartSleeping,
            6 => Self::StopSleeping,
            7 => Self::Respawn,
            8 => Self::Jump,
            9 => Self::StartSprint,
            10 => Self::StopSprint,
            11 => Self::StartSneak,
            12 => Self::StopSneak,
            13 => Self::CreativePlayerDestroyBlock,
            14 => Self::DimensionChangeAck,
            15 => Self::StartGlide,
            16 => Self::StopGlide,
            17 => Self::BuildDenied,
            18 => Self::CrackBreak,
            19 => Self::ChangeSkin,
            20 => Self::SetEnchantmentSeed,
            21 => Self::StartSwimming,
            22 => Self::StopSwimming,
            23 => Self::StartSpinAttack,
            24 => Self::StopSpinAttack,
            25 => Self::InteractBlock,
            26 => Self::PredictDestroyBlock,
            27 => Self::ContinueDestroyBlock,
            28 => Self::StartItemUseOn,
            29 => Self::StopItemUseOn,
            30 => Self::HandledTeleport,
            31 => Self::MissedSwing,
            32 => Self::StartCrawling,
            33 => Self::StopCrawling,
            34 => Self::StartFlying,
            35 => Self::StopFlying,
            36 => Self::AckActorData,
            37 => Self::StartUsingItem,
            other => Self::Unknown(other),
        }
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Self::StartBreak => 0,
            Self::AbortBreak => 1,
            Self::StopBreak => 2,
            Self::GetUpdatedBlock => 3,
            Self::DropItem => 4,
            Self::StartSleeping => 5,
            Self::StopSleeping => 6,
            Self::Respawn => 7,
            Self::Jump => 8,
            Self::StartSprint => 9,
            Self::StopSprint => 10,
            Self::StartSneak => 11,
            Self::StopSneak => 12,
            Self::CreativePlayerDestroyBlock => 13,
            Self::DimensionChangeAck => 14,
            Self::StartGlide => 15,
            Self::StopGlide => 16,
            Self::BuildDenied => 17,
            Self::CrackBreak => 18,
            Self::ChangeSkin => 19,
            Self::SetEnchantmentSeed => 20,
            Self::StartSwimming => 21,
            Self::StopSwimming => 22,
            Self::StartSpinAttack => 23,
            Self::StopSpinAttack => 24,
            Self::InteractBlock => 25,
            Self::PredictDestroyBlock => 26,
            Self::ContinueDestroyBlock => 27,
            Self::StartItemUseOn => 28,
            Self::StopItemUseOn => 29,
            Self::HandledTeleport => 30,
            Self::MissedSwing => 31,
            Self::StartCrawling => 32,
            Self::StopCrawling => 33,
            Self::StartFlying => 34,
            Self::StopFlying => 35,
            Self::AckActorData => 36,
            Self::StartUsingItem => 37,
            Self::Unknown(other) => other,
        }
    }
}

/// PlayerAction packet fields.
///
/// `face` stays raw: only some actions consume it, and those validate it.
#[derive(Debug, Clone)]
pub struct PlayerAction {
    pub entity_runtime_id: u64,
    pub action: PlayerActionType,
    pub block_position: BlockPos,
    pub result_position: BlockPos,
    pub face: i32,
}

impl PlayerAction {
    pub fn new(action: PlayerActionType, block_position: BlockPos, face: i32) -> Self {
        Self {
            entity_runtime_id: 0,
            action,
            block_position,
            result_position: block_position,
            face,
        }
    }
}
