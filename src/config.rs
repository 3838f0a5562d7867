use crate::ship::ShipDef;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random trials per ship before placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 300;

/// Delay between the player's shot and the opponent's answer, in milliseconds.
pub const RESPONSE_DELAY_MS: u64 = 540;

/// Tunables for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub response_delay_ms: u64,
    pub placement_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: RESPONSE_DELAY_MS,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

/// Ship sizes of the standard fleet, in placement order.
pub fn fleet_sizes() -> [usize; NUM_SHIPS] {
    FLEET.map(|def| def.length())
}

/// Display name of the ship with the given 1-based id in the standard fleet.
pub fn ship_name(id: u8) -> Option<&'static str> {
    let idx = usize::from(id).checked_sub(1)?;
    FLEET.get(idx).map(|def| def.name())
}
