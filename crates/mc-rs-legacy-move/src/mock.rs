//! Recording host collaborators for tests.

use std::net::SocketAddr;

use mc_rs_proto::packets::{GamePacket, UpdateBlock};
use mc_rs_proto::types::{BlockFace, BlockPos, Vec3};

use crate::session::{HandlerState, Player, Session, TeleportLock, World};

/// Player operations other than rotation, movement and the using-item flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    AttackBlock(BlockPos, BlockFace),
    ContinueBreak(BlockPos, BlockFace),
    StopBreak(BlockPos),
    StopSleep,
    Jump,
    ToggleSprint(bool),
    ToggleSneak(bool),
    ToggleGlide(bool),
    ToggleSwim(bool),
}

/// Answers every request with runtime id 0 per block, in request order.
#[derive(Debug, Default)]
pub struct MockWorld;

impl World for MockWorld {
    fn block_update_packets(&self, blocks: &[BlockPos]) -> Vec<UpdateBlock> {
        blocks.iter().map(|pos| UpdateBlock::new(*pos, 0)).collect()
    }
}

#[derive(Debug)]
pub struct MockPlayer {
    pub position: Vec3,
    pub rotation: Option<(f32, f32, f32)>,
    pub moves: Vec<Vec3>,
    pub using_item: bool,
    pub resyncs: u32,
    pub calls: Vec<Call>,
    pub attack_succeeds: bool,
    pub toggles_succeed: bool,
    pub world: MockWorld,
}

impl Default for MockPlayer {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: None,
            moves: Vec::new(),
            using_item: false,
            resyncs: 0,
            calls: Vec::new(),
            attack_succeeds: true,
            toggles_succeed: true,
            world: MockWorld,
        }
    }
}

impl Player for MockPlayer {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_rotation(&mut self, yaw: f32, pitch: f32, head_yaw: f32) {
        self.rotation = Some((yaw, pitch, head_yaw));
    }

    fn handle_movement(&mut self, new_pos: Vec3) {
        self.position = new_pos;
        self.moves.push(new_pos);
    }

    fn attack_block(&mut self, pos: BlockPos, face: BlockFace) -> bool {
        self.calls.push(Call::AttackBlock(pos, face));
        self.attack_succeeds
    }

    fn continue_break_block(&mut self, pos: BlockPos, face: BlockFace) {
        self.calls.push(Call::ContinueBreak(pos, face));
    }

    fn stop_break_block(&mut self, pos: BlockPos) {
        self.calls.push(Call::StopBreak(pos));
    }

    fn stop_sleep(&mut self) {
        self.calls.push(Call::StopSleep);
    }

    fn jump(&mut self) {
        self.calls.push(Call::Jump);
    }

    fn toggle_sprint(&mut self, sprint: bool) -> bool {
        self.calls.push(Call::ToggleSprint(sprint));
        self.toggles_succeed
    }

    fn toggle_sneak(&mut self, sneak: bool) -> bool {
        self.calls.push(Call::ToggleSneak(sneak));
        self.toggles_succeed
    }

    fn toggle_glide(&mut self, glide: bool) -> bool {
        self.calls.push(Call::ToggleGlide(glide));
        self.toggles_succeed
    }

    fn toggle_swim(&mut self, swim: bool) -> bool {
        self.calls.push(Call::ToggleSwim(swim));
        self.toggles_succeed
    }

    fn set_using_item(&mut self, using: bool) {
        self.using_item = using;
    }

    fn resync_self(&mut self) {
        self.resyncs += 1;
    }

    fn world(&self) -> &dyn World {
        &self.world
    }
}

#[derive(Debug)]
pub struct MockSession {
    pub addr: SocketAddr,
    pub state: HandlerState,
    pub lock: TeleportLock,
    pub player: Option<MockPlayer>,
    pub sent: Vec<GamePacket>,
}

impl MockSession {
    /// A spawned, in-game session with a player at the origin.
    pub fn in_game() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 19132)),
            state: HandlerState::InGame,
            lock: TeleportLock::Unlocked,
            player: Some(MockPlayer::default()),
            sent: Vec::new(),
        }
    }

    /// A session still logging in, before the player exists.
    pub fn without_player() -> Self {
        Self {
            state: HandlerState::Login,
            player: None,
            ..Self::in_game()
        }
    }
}

impl Session for MockSession {
    fn address(&self) -> SocketAddr {
        self.addr
    }

    fn player(&self) -> Option<&dyn Player> {
        self.player.as_ref().map(|p| p as &dyn Player)
    }

    fn player_mut(&mut self) -> Option<&mut dyn Player> {
        self.player.as_mut().map(|p| p as &mut dyn Player)
    }

    fn handler_state(&self) -> HandlerState {
        self.state
    }

    fn teleport_lock(&self) -> TeleportLock {
        self.lock
    }

    fn set_teleport_lock(&mut self, lock: TeleportLock) {
        self.lock = lock;
    }

    fn send_packet(&mut self, packet: GamePacket) {
        self.sent.push(packet);
    }
}
