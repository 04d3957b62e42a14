//! Scalar game-state fields.

use crate::config::DecoderConfig;
use crate::memory::{MemoryError, MemoryView, addr};
use crate::types::{BattleKind, BattleState, HitPoints, PartyMember, ScalarState};

/// Text terminator in the game's character encoding.
const TEXT_END: u8 = 0x50;

/// Decodes game-encoded text up to the first terminator.
///
/// Characters outside letters, digits and common punctuation are dropped.
pub fn decode_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&byte| byte != TEXT_END)
        .filter_map(|&byte| match byte {
            0x80..=0x99 => Some(char::from(b'A' + (byte - 0x80))),
            0xA0..=0xB9 => Some(char::from(b'a' + (byte - 0xA0))),
            0xF6..=0xFF => Some(char::from(b'0' + (byte - 0xF6))),
            0x7F => Some(' '),
            0xE3 => Some('-'),
            0xE6 => Some('?'),
            0xE7 => Some('!'),
            0xE8 => Some('.'),
            0xF4 => Some(','),
            _ => None,
        })
        .collect()
}

pub struct GameStateReader;

impl GameStateReader {
    pub fn read<M: MemoryView + ?Sized>(memory: &M) -> Result<ScalarState, MemoryError> {
        let name = memory.read_slice(addr::PLAYER_NAME, DecoderConfig::NAME_LENGTH)?;
        let player_name = decode_text(&name);
        let party_count = memory.read_byte(addr::PARTY_COUNT)?;
        let party = Self::read_party(memory, party_count)?;
        let badges_binary = memory.read_byte(addr::OBTAINED_BADGES)?;
        let battle_kind = BattleKind::from_byte(memory.read_byte(addr::IS_IN_BATTLE)?);
        let battle = if battle_kind.is_active() {
            Some(BattleState {
                player_mon: HitPoints {
                    current: memory.read_u16_be(addr::BATTLE_MON_HP)?,
                    max: memory.read_u16_be(addr::BATTLE_MON_MAX_HP)?,
                },
                enemy_mon: HitPoints {
                    current: memory.read_u16_be(addr::ENEMY_MON_HP)?,
                    max: memory.read_u16_be(addr::ENEMY_MON_MAX_HP)?,
                },
                enemy_level: memory.read_byte(addr::ENEMY_MON_LEVEL)?,
            })
        } else {
            None
        };

        Ok(ScalarState {
            player_name,
            current_map: memory.read_byte(addr::CURRENT_MAP)?,
            player_x: memory.read_byte(addr::PLAYER_X)?,
            player_y: memory.read_byte(addr::PLAYER_Y)?,
            party_count: u8::try_from(party.len()).unwrap_or(u8::MAX),
            party,
            badges_obtained: u8::try_from(badges_binary.count_ones()).unwrap_or(u8::MAX),
            badges_binary,
            is_in_battle: battle_kind.is_active(),
            battle_kind,
            battle,
            current_tileset: memory.read_byte(addr::CURRENT_TILESET)?,
            map_loading_status: memory.read_byte(addr::MAP_LOADING_STATUS)?,
        })
    }

    /// At most six members; a larger count byte is treated as corrupt and capped.
    fn read_party<M: MemoryView + ?Sized>(
        memory: &M,
        count: u8,
    ) -> Result<Vec<PartyMember>, MemoryError> {
        let count = usize::from(count).min(DecoderConfig::PARTY_MAX);
        (0..count)
            .map(|index| {
                let base = addr::PARTY_DATA + (index * DecoderConfig::PARTY_STRIDE) as u16;
                Ok(PartyMember {
                    level: memory.read_byte(base + addr::PARTY_MON_LEVEL)?,
                    hp: HitPoints {
                        current: memory.read_u16_be(base + addr::PARTY_MON_HP)?,
                        max: memory.read_u16_be(base + addr::PARTY_MON_MAX_HP)?,
                    },
                })
            })
            .collect()
    }
}
