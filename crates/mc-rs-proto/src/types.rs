//! Base data types used by the movement and action packets.

use std::fmt;
use std::ops::Sub;

use crate::error::ProtoError;

// ---------------------------------------------------------------------------
// Vec3 (f32 x, y, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_squared(&self, other: &Vec3) -> f32 {
        let d = *self - *other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// Round every component to `precision` decimal places, half away from zero.
    ///
    /// The scaling is done in f64 so large world coordinates don't overflow
    /// the f32 mantissa before rounding.
    pub fn round_to(&self, precision: u32) -> Self {
        let scale = 10f64.powi(precision as i32);
        let round = |v: f32| ((v as f64 * scale).round() / scale) as f32;
        Self::new(round(self.x), round(self.y), round(self.z))
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// BlockFace
// ---------------------------------------------------------------------------

/// One of the six axis-aligned block faces, with its protocol value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BlockFace {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Down,
        BlockFace::Up,
        BlockFace::North,
        BlockFace::South,
        BlockFace::West,
        BlockFace::East,
    ];

    /// Unit offset pointing out of this face.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            BlockFace::Down => (0, -1, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::North => (0, 0, -1),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::East => (1, 0, 0),
        }
    }
}

impl TryFrom<i32> for BlockFace {
    type Error = ProtoError;

    fn try_from(v: i32) -> Result<Self, ProtoError> {
        match v {
            0 => Ok(BlockFace::Down),
            1 => Ok(BlockFace::Up),
            2 => Ok(BlockFace::North),
            3 => Ok(BlockFace::South),
            4 => Ok(BlockFace::West),
            5 => Ok(BlockFace::East),
            other => Err(ProtoError::InvalidFacing(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// BlockPos (i32 x, y, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The block position as a vector at the block's minimum corner.
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// The neighbouring block across `face`.
    pub fn side(&self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.offset();
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// All six neighbours, in [`BlockFace::ALL`] order.
    pub fn sides(&self) -> [BlockPos; 6] {
        BlockFace::ALL.map(|face| self.side(face))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Vec3 --

    #[test]
    fn vec3_zero() {
        assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn vec3_sub() {
        let a = Vec3::new(5.0, 7.0, 9.0);
        let b = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a - b, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn vec3_distance_squared() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 1.0, 0.0);
        assert!((a.distance_squared(&b) - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn vec3_round_to_four_places() {
        let v = Vec3::new(1.234_56, -1.234_56, 64.0).round_to(4);
        assert!((v.x - 1.2346).abs() < 1e-6);
        assert!((v.y + 1.2346).abs() < 1e-6);
        assert_eq!(v.z, 64.0);
    }

    // -- BlockFace --

    #[test]
    fn block_face_from_protocol_value() {
        for (i, face) in BlockFace::ALL.iter().enumerate() {
            assert_eq!(BlockFace::try_from(i as i32).unwrap(), *face);
            assert_eq!(*face as i32, i as i32);
        }
    }

    #[test]
    fn block_face_invalid() {
        assert!(matches!(
            BlockFace::try_from(6),
            Err(ProtoError::InvalidFacing(6))
        ));
        assert!(BlockFace::try_from(-1).is_err());
    }

    // -- BlockPos --

    #[test]
    fn block_pos_sides() {
        let sides = BlockPos::new(0, 64, 0).sides();
        assert_eq!(sides[0], BlockPos::new(0, 63, 0));
        assert_eq!(sides[1], BlockPos::new(0, 65, 0));
        assert_eq!(sides[2], BlockPos::new(0, 64, -1));
        assert_eq!(sides[3], BlockPos::new(0, 64, 1));
        assert_eq!(sides[4], BlockPos::new(-1, 64, 0));
        assert_eq!(sides[5], BlockPos::new(1, 64, 0));
    }
}
