use serde::{Deserialize, Serialize};

use crate::math::{Position, Tile, TileCenter};

pub const RESTAURANT_WIDTH: i32 = 11;
pub const RESTAURANT_HEIGHT: i32 = 8;
pub const STREET_WIDTH: i32 = 14;
pub const STREET_HEIGHT: i32 = 8;

/// Interior queue capacity and street queue capacity per restaurant.
pub const QUEUE_CAPACITY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Restaurant {
    Tacos,
    Kebab,
}

impl Restaurant {
    pub fn zone(self) -> ZoneId {
        match self {
            Restaurant::Tacos => ZoneId::Tacos,
            Restaurant::Kebab => ZoneId::Kebab,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    Tacos,
    Kebab,
    Street,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
    Door,
    Street,
    Sidewalk,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: i32,
    pub y: i32,
    pub target_zone: ZoneId,
    pub target_x: i32,
    pub target_y: i32,
}

impl Door {
    pub fn tile(&self) -> Tile {
        [self.x, self.y]
    }

    pub fn center(&self) -> Position {
        self.tile().center()
    }

    pub fn target_tile(&self) -> Tile {
        [self.target_x, self.target_y]
    }
}

#[derive(Debug, Clone, Copy)]
struct WalkableRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl WalkableRect {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A named, fixed-size tile area. Immutable after construction.
pub struct Zone {
    pub id: ZoneId,
    pub width: i32,
    pub height: i32,
    tiles: Vec<Vec<TileKind>>,
    walkable_area: Vec<WalkableRect>,
    doors: Vec<Door>,
}

impl Zone {
    fn new(id: ZoneId, width: i32, height: i32) -> Self {
        Self {
            id,
            width,
            height,
            tiles: vec![vec![TileKind::Floor; width as usize]; height as usize],
            walkable_area: vec![],
            doors: vec![],
        }
    }

    fn set_tile(&mut self, x: i32, y: i32, kind: TileKind) {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.tiles[y as usize][x as usize] = kind;
        }
    }

    fn add_door(&mut self, x: i32, y: i32, target_zone: ZoneId, target_x: i32, target_y: i32) {
        self.set_tile(x, y, TileKind::Door);
        self.doors.push(Door {
            x,
            y,
            target_zone,
            target_x,
            target_y,
        });
    }

    fn set_walkable_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.walkable_area.push(WalkableRect {
            x,
            y,
            width,
            height,
        });
    }

    /// Walkability: explicit rectangles take precedence over the tile
    /// allow-list, door tiles are always walkable. Out of bounds is not.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        if !self.walkable_area.is_empty() {
            if self.walkable_area.iter().any(|rect| rect.contains(x, y)) {
                return true;
            }
            return self.doors.iter().any(|door| door.x == x && door.y == y);
        }
        matches!(
            self.tiles[y as usize][x as usize],
            TileKind::Floor | TileKind::Door | TileKind::Street | TileKind::Sidewalk
        )
    }

    pub fn get_door_at(&self, x: i32, y: i32) -> Option<&Door> {
        self.doors.iter().find(|door| door.x == x && door.y == y)
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<TileKind> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(self.tiles[y as usize][x as usize])
    }
}

fn restaurant_zone(restaurant: Restaurant) -> Zone {
    let mut zone = Zone::new(restaurant.zone(), RESTAURANT_WIDTH, RESTAURANT_HEIGHT);
    zone.set_walkable_rect(1, 3, RESTAURANT_WIDTH - 2, RESTAURANT_HEIGHT - 4);
    let door_x = RESTAURANT_WIDTH / 2;
    let sidewalk = match restaurant {
        Restaurant::Tacos => 2,
        Restaurant::Kebab => 9,
    };
    zone.add_door(door_x, RESTAURANT_HEIGHT - 1, ZoneId::Street, sidewalk, 4);
    zone
}

fn street_zone() -> Zone {
    let mut zone = Zone::new(ZoneId::Street, STREET_WIDTH, STREET_HEIGHT);
    // facades, sidewalk, road
    for y in 0..3 {
        for x in 0..STREET_WIDTH {
            zone.set_tile(x, y, TileKind::Wall);
        }
    }
    for y in 3..5 {
        for x in 0..STREET_WIDTH {
            zone.set_tile(x, y, TileKind::Sidewalk);
        }
    }
    for y in 5..STREET_HEIGHT {
        for x in 0..STREET_WIDTH {
            zone.set_tile(x, y, TileKind::Street);
        }
    }
    let inside_x = RESTAURANT_WIDTH / 2;
    zone.add_door(2, 3, ZoneId::Tacos, inside_x, RESTAURANT_HEIGHT - 2);
    zone.add_door(9, 3, ZoneId::Kebab, inside_x, RESTAURANT_HEIGHT - 2);
    zone
}

pub struct WorldMap {
    zones: Vec<Zone>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self {
            zones: vec![
                restaurant_zone(Restaurant::Tacos),
                restaurant_zone(Restaurant::Kebab),
                street_zone(),
            ],
        }
    }

    pub fn get_zone(&self, id: ZoneId) -> &Zone {
        self.zones
            .iter()
            .find(|zone| zone.id == id)
            .expect("world map holds every zone")
    }

    /// The street-side door leading into the given restaurant.
    pub fn street_door(&self, restaurant: Restaurant) -> &Door {
        self.get_zone(ZoneId::Street)
            .doors()
            .iter()
            .find(|door| door.target_zone == restaurant.zone())
            .expect("street has a door per restaurant")
    }

    /// Interior queue slots, top to bottom below the counter.
    pub fn queue_slots(&self, _restaurant: Restaurant) -> [Tile; QUEUE_CAPACITY] {
        let x = RESTAURANT_WIDTH / 2;
        [[x, 3], [x, 4], [x, 5]]
    }

    /// Street-side waiting slots behind the restaurant door.
    pub fn outside_slots(&self, restaurant: Restaurant) -> [Tile; QUEUE_CAPACITY] {
        let door = self.street_door(restaurant);
        let step = match restaurant {
            Restaurant::Tacos => 1,
            Restaurant::Kebab => -1,
        };
        [
            [door.x, door.y + 1],
            [door.x + step, door.y + 1],
            [door.x + step * 2, door.y + 1],
        ]
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::new()
    }
}
