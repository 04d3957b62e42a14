//! Work-RAM addresses read by the decoder.
//!
//! All offsets target the English Red/Blue release. Multi-byte values are
//! big-endian unless noted.

// ---- screen ----
/// 20×18 tile ids of the visible background, row-major.
pub const TILE_MAP: u16 = 0xC3A0;

// ---- sprites ----
/// Sprite state table 1: 16 slots of 16 bytes. Slot 0 is the player.
pub const SPRITE_STATE_DATA: u16 = 0xC100;
pub const SPRITE_PICTURE_ID: u16 = 0x00;
pub const SPRITE_IMAGE_INDEX: u16 = 0x02;
pub const SPRITE_Y_PIXELS: u16 = 0x04;
pub const SPRITE_X_PIXELS: u16 = 0x06;
pub const SPRITE_FACING: u16 = 0x09;
/// Image index value of a slot that is not drawn.
pub const SPRITE_HIDDEN: u8 = 0xFF;
/// Two bytes per slot 1..=15: trainer class (or item id) and trainer number.
pub const MAP_SPRITE_EXTRA_DATA: u16 = 0xD504;
/// Trainer classes are stored with this offset added.
pub const TRAINER_CLASS_OFFSET: u8 = 200;

// ---- map ----
pub const CURRENT_MAP: u16 = 0xD35E;
/// Map the player last stood on outdoors; target of "last map" warps.
pub const LAST_MAP: u16 = 0xD365;
pub const PLAYER_Y: u16 = 0xD361;
pub const PLAYER_X: u16 = 0xD362;
pub const CURRENT_TILESET: u16 = 0xD367;
/// Map height in blocks.
pub const MAP_HEIGHT: u16 = 0xD368;
/// Map width in blocks.
pub const MAP_WIDTH: u16 = 0xD369;
pub const MAP_LOADING_STATUS: u16 = 0xD36A;
pub const WARP_COUNT: u16 = 0xD3AE;
/// Four bytes per entry: y, x, destination warp index, destination map.
pub const WARP_ENTRIES: u16 = 0xD3AF;

// ---- player ----
pub const PLAYER_NAME: u16 = 0xD158;
pub const PARTY_COUNT: u16 = 0xD163;
pub const PARTY_DATA: u16 = 0xD16B;
pub const PARTY_MON_HP: u16 = 0x01;
pub const PARTY_MON_LEVEL: u16 = 0x21;
pub const PARTY_MON_MAX_HP: u16 = 0x22;
pub const OBTAINED_BADGES: u16 = 0xD356;

// ---- battle ----
/// 0 = none, 1 = wild, 2 = trainer, 0xFF = lost.
pub const IS_IN_BATTLE: u16 = 0xD057;
pub const BATTLE_MON_HP: u16 = 0xD015;
pub const BATTLE_MON_MAX_HP: u16 = 0xD023;
pub const ENEMY_MON_HP: u16 = 0xCFE6;
pub const ENEMY_MON_LEVEL: u16 = 0xCFF3;
pub const ENEMY_MON_MAX_HP: u16 = 0xCFF4;
