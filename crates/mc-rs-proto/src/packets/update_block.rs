//! UpdateBlock (0x15) — Server → Client.
//!
//! Sent when a single block changes in the world, or to resend a block's
//! authoritative state after the client predicted a change the server refused.

use crate::types::BlockPos;

/// UpdateBlock packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBlock {
    pub position: BlockPos,
    pub runtime_id: u32,
    pub flags: u32,
    pub layer: u32,
}

/// Flags: Neighbours (0x01) + Network (0x02).
pub const UPDATE_BLOCK_FLAGS_DEFAULT: u32 = 0x03;

impl UpdateBlock {
    /// Create an UpdateBlock for the default layer with standard flags.
    pub fn new(position: BlockPos, runtime_id: u32) -> Self {
        Self {
            position,
            runtime_id,
            flags: UPDATE_BLOCK_FLAGS_DEFAULT,
            layer: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_layer_and_flags() {
        let pkt = UpdateBlock::new(BlockPos::new(10, 64, -5), 42);
        assert_eq!(pkt.position, BlockPos::new(10, 64, -5));
        assert_eq!(pkt.runtime_id, 42);
        assert_eq!(pkt.flags, UPDATE_BLOCK_FLAGS_DEFAULT);
        assert_eq!(pkt.layer, 0);
    }
}
