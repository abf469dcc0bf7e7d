#![allow(dead_code)]

use gba_core::Gba;
use gba_core::error::FIRMWARE_SIZE;

/// Builds a core with a blank firmware image and `rom` loaded as the
/// cartridge. Execution starts at the reset vector (ROM base, 0x08000000),
/// matching the documented initial state.
pub fn gba_with_rom(rom: &[u8]) -> Gba {
    let firmware = vec![0u8; FIRMWARE_SIZE];
    Gba::new(&firmware, rom).expect("firmware/cartridge within documented size limits")
}

pub fn arm_program(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

pub fn thumb_program(words: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * 2);
    for word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

/// `MOV r0, r0` — a data-processing instruction that always passes its
/// condition field and never changes visible state, used as filler between
/// instructions under test in a linear program stream.
pub const NOP: u32 = 0xE1A0_0000;
