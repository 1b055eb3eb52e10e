//! PlayerAuthInput (0x90) — Client → Server.
//!
//! Sent every tick by clients running server-authoritative movement. Under
//! legacy movement the packet is never decoded: it is dropped on its id, so
//! only the id is modelled here.

use super::id;

/// Marker for the PlayerAuthInput packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAuthInput;

impl PlayerAuthInput {
    pub const NETWORK_ID: u32 = id::PLAYER_AUTH_INPUT;

    pub fn matches(packet_id: u32) -> bool {
        packet_id == Self::NETWORK_ID
    }
}
