mod random;
mod vector;

pub use random::*;
pub use vector::*;

pub const TILE_SIZE: f32 = 32.0;

pub type Position = [f32; 2];
pub type Tile = [i32; 2];

pub trait TileMath {
    fn to_tile(self) -> Tile;
}

impl TileMath for Position {
    #[inline]
    fn to_tile(self) -> Tile {
        [
            (self[0] / TILE_SIZE).floor() as i32,
            (self[1] / TILE_SIZE).floor() as i32,
        ]
    }
}

pub trait TileCenter {
    fn center(self) -> Position;
}

impl TileCenter for Tile {
    #[inline]
    fn center(self) -> Position {
        [
            self[0] as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            self[1] as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        ]
    }
}
