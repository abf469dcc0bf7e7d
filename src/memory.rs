//! Shared definitions for the GBA memory map.
//!
//! Centralizing address-related constants keeps the hardware layout in one
//! location, prevents magic numbers from sneaking into the bus and PPU, and
//! makes it easier to cross-reference the hardware documentation while
//! reading the code base.

/// Region select is the top byte of a 32-bit address.
pub const fn region(addr: u32) -> u8 {
    (addr >> 24) as u8
}

/// BIOS region: 16 KiB, read-only, mirrored across the whole `0x00xxxxxx` page.
pub mod bios {
    pub const BASE: u32 = 0x0000_0000;
    pub const SIZE: usize = 0x4000;
    pub const MASK: u32 = (SIZE as u32) - 1;
}

/// External work RAM: 256 KiB, mirrored every 256 KiB within `0x02xxxxxx`.
pub mod ewram {
    pub const BASE: u32 = 0x0200_0000;
    pub const SIZE: usize = 0x4_0000;
    pub const MASK: u32 = (SIZE as u32) - 1;
}

/// Internal work RAM: 32 KiB, mirrored every 32 KiB within `0x03xxxxxx`.
pub mod iwram {
    pub const BASE: u32 = 0x0300_0000;
    pub const SIZE: usize = 0x8000;
    pub const MASK: u32 = (SIZE as u32) - 1;
}

/// Memory-mapped I/O: a flat 1 KiB register file.
pub mod mmio {
    pub const BASE: u32 = 0x0400_0000;
    pub const SIZE: usize = 0x400;
    pub const MASK: u32 = (SIZE as u32) - 1;

    pub const DISPCNT: u32 = 0x000;
    pub const DISPSTAT: u32 = 0x004;
    pub const VCOUNT: u32 = 0x006;
    pub const BG0CNT: u32 = 0x008;
    pub const BG1CNT: u32 = 0x00A;
    pub const BG2CNT: u32 = 0x00C;
    pub const BG3CNT: u32 = 0x00E;
    pub const BG0HOFS: u32 = 0x010;
    pub const BG0VOFS: u32 = 0x012;
    pub const BG1HOFS: u32 = 0x014;
    pub const BG1VOFS: u32 = 0x016;
    pub const BG2HOFS: u32 = 0x018;
    pub const BG2VOFS: u32 = 0x01A;
    pub const BG3HOFS: u32 = 0x01C;
    pub const BG3VOFS: u32 = 0x01E;
    pub const KEYINPUT: u32 = 0x130;
    pub const IE: u32 = 0x200;
    pub const IF: u32 = 0x202;
    pub const IME: u32 = 0x208;
}

/// Palette RAM: 1 KiB, byte writes duplicate into a halfword.
pub mod palette {
    pub const BASE: u32 = 0x0500_0000;
    pub const SIZE: usize = 0x400;
    pub const MASK: u32 = (SIZE as u32) - 1;
}

/// VRAM: 96 KiB physical, mapped with a folded mirror over a 128 KiB window.
pub mod vram {
    pub const BASE: u32 = 0x0600_0000;
    pub const SIZE: usize = 0x1_8000;
    /// The address space exposed to the bus before mirror-folding (128 KiB).
    pub const WINDOW_MASK: u32 = 0x1_FFFF;
    /// Start of the upper 32 KiB window that aliases onto `0x10000..0x17FFF`.
    pub const MIRROR_START: u32 = 0x1_8000;
    /// Object VRAM starts here (relative to VRAM base); 8-bit writes to it
    /// are silently dropped.
    pub const OBJ_BASE: u32 = 0x1_0000;
    /// Background VRAM size when the active mode is a tile-map mode (0-2).
    pub const BG_SIZE_TILEMAP: u32 = 0x1_0000;
    /// Background VRAM size when the active mode is a bitmap mode (3-5).
    pub const BG_SIZE_BITMAP: u32 = 0x2_4000;
    /// 8-bit writes at or past this offset are always dropped, regardless of
    /// mode: in bitmap modes the background region extends up to
    /// [`BG_SIZE_BITMAP`], but object VRAM itself never accepts byte writes.
    pub const BYTE_WRITE_DROP: u32 = 0x1_4000;
}

/// OAM: 1 KiB, 128 sprite entries of 8 bytes each; byte writes are dropped.
pub mod oam {
    pub const BASE: u32 = 0x0700_0000;
    pub const SIZE: usize = 0x400;
    pub const MASK: u32 = (SIZE as u32) - 1;
    pub const ENTRY_COUNT: usize = 128;
    pub const ENTRY_SIZE: usize = 8;
}

/// Cartridge ROM: up to 32 MiB, mirrored across four wait-state windows.
pub mod rom {
    pub const BASE: u32 = 0x0800_0000;
    pub const END: u32 = 0x0DFF_FFFF;
    pub const SIZE: usize = 0x0200_0000;
    pub const MASK: u32 = (SIZE as u32) - 1;
}

/// Save RAM (SRAM/flash/EEPROM modeled uniformly as flat byte storage).
pub mod save {
    pub const BASE: u32 = 0x0E00_0000;
    pub const SIZE: usize = 0x1_0000;
    pub const MASK: u32 = (SIZE as u32) - 1;
}

/// Exception vector table, fixed at the base of the address space.
pub mod vectors {
    pub const RESET: u32 = 0x0000_0000;
    pub const UNDEFINED: u32 = 0x0000_0004;
    pub const SWI: u32 = 0x0000_0008;
    pub const PREFETCH_ABORT: u32 = 0x0000_000C;
    pub const DATA_ABORT: u32 = 0x0000_0010;
    pub const RESERVED: u32 = 0x0000_0014;
    pub const IRQ: u32 = 0x0000_0018;
    pub const FIQ: u32 = 0x0000_001C;
}

/// Interrupt request bit positions within `IE`/`IF`.
pub mod irq_bit {
    pub const VBLANK: u16 = 1 << 0;
    pub const HBLANK: u16 = 1 << 1;
    pub const VCOUNT: u16 = 1 << 2;
}
