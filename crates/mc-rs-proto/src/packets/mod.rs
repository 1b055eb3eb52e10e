//! Game packet definitions for Bedrock Edition.

pub mod move_player;
pub mod player_action;
pub mod player_auth_input;
pub mod start_game;
pub mod update_block;

pub use move_player::MovePlayer;
pub use player_action::{PlayerAction, PlayerActionType};
pub use player_auth_input::PlayerAuthInput;
pub use start_game::{MovementSettings, PlayerMovementType, StartGame};
pub use update_block::UpdateBlock;

/// Game packet IDs.
pub mod id {
    pub const START_GAME: u32 = 0x0B;
    pub const MOVE_PLAYER: u32 = 0x13;
    pub const UPDATE_BLOCK: u32 = 0x15;
    pub const PLAYER_ACTION: u32 = 0x24;
    pub const PLAYER_AUTH_INPUT: u32 = 0x90;
}

/// A decoded game packet as handed over by the host codec.
#[derive(Debug, Clone)]
pub enum GamePacket {
    StartGame(StartGame),
    MovePlayer(MovePlayer),
    UpdateBlock(UpdateBlock),
    PlayerAction(PlayerAction),
    /// Any packet this workspace doesn't model, carried by id only.
    Other(u32),
}

impl GamePacket {
    pub fn id(&self) -> u32 {
        match self {
            GamePacket::StartGame(_) => id::START_GAME,
            GamePacket::MovePlayer(_) => id::MOVE_PLAYER,
            GamePacket::UpdateBlock(_) => id::UPDATE_BLOCK,
            GamePacket::PlayerAction(_) => id::PLAYER_ACTION,
            GamePacket::Other(id) => *id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GamePacket::StartGame(_) => "StartGame",
            GamePacket::MovePlayer(_) => "MovePlayer",
            GamePacket::UpdateBlock(_) => "UpdateBlock",
            GamePacket::PlayerAction(_) => "PlayerAction",
            GamePacket::Other(_) => "Unknown",
        }
    }
}

impl From<UpdateBlock> for GamePacket {
    fn from(pkt: UpdateBlock) -> Self {
        GamePacket::UpdateBlock(pkt)
    }
}
