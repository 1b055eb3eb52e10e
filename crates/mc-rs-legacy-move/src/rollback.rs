//! Block state resend after a refused block action.
//!
//! The client predicts block breaking locally. When the server refuses the
//! break, the blocks around the target are resent so the client's view
//! snaps back to the authoritative state.

use std::iter;

use mc_rs_proto::types::{BlockFace, BlockPos};
use tracing::{debug, trace};

use crate::config::RollbackSection;
use crate::session::Session;

/// Players at or beyond this squared distance (100 blocks) don't see the block.
pub const MAX_ROLLBACK_DISTANCE_SQ: f32 = 10000.0;

/// Blocks whose state the client may have mispredicted around `pos`.
///
/// The target and its six neighbours; with a face, also the faced neighbour
/// and its six neighbours. Deduplicated, in first-seen order.
pub fn affected_blocks(pos: BlockPos, face: Option<BlockFace>) -> Vec<BlockPos> {
    let faced = face.into_iter().flat_map(|face| {
        let side = pos.side(face);
        iter::once(side).chain(side.sides())
    });

    let mut blocks = Vec::with_capacity(13);
    for block in iter::once(pos).chain(pos.sides()).chain(faced) {
        if !blocks.contains(&block) {
            blocks.push(block);
        }
    }
    blocks
}

#[derive(Debug, Clone, Default)]
pub struct RollbackNotifier {
    settings: RollbackSection,
}

impl RollbackNotifier {
    pub fn new(settings: RollbackSection) -> Self {
        Self { settings }
    }

    /// Resend the blocks around `pos` to this session only.
    /// Returns the number of packets sent.
    pub fn notify(&self, session: &mut dyn Session, pos: BlockPos, face: Option<BlockFace>) -> usize {
        let addr = session.address();
        let packets = {
            let player = match session.player() {
                Some(p) => p,
                None => return 0,
            };
            let distance_sq = pos.as_vec3().distance_squared(&player.position());
            if distance_sq >= self.settings.max_distance_sq {
                trace!("Skipping block rollback at {pos} for {addr}: {distance_sq:.0} blocks² away");
                return 0;
            }
            player.world().block_update_packets(&affected_blocks(pos, face))
        };

        let sent = packets.len();
        for packet in packets {
            session.send_packet(packet.into());
        }
        debug!("Rolled back {sent} block(s) around {pos} for {addr}");
        sent
    }
}
