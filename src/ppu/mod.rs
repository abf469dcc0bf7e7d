//! The picture processing unit: per-cycle scanline timing, video RAM, and
//! scanline rendering into an RGB555 frame buffer.

mod registers;
mod render;

use crate::mem_block;
use crate::memory;
use registers::DispStat;

pub const FRAME_WIDTH: usize = 240;
pub const FRAME_HEIGHT: usize = 160;

const CYCLES_PER_SCANLINE: u16 = 1232;
const HDRAW_CYCLES: u16 = 960;
const HBLANK_SET_CYCLE: u16 = 1007;
const VISIBLE_LINES: u8 = 160;
const TOTAL_LINES: u8 = 228;

/// One RGB555-packed scanline per visible line.
pub type FrameBuffer = [[u16; FRAME_WIDTH]; FRAME_HEIGHT];

pub struct Ppu {
    mmio: mem_block::gba::Mmio,
    palette: mem_block::gba::Palette,
    vram: mem_block::gba::Vram,
    oam: mem_block::gba::Oam,
    frame: FrameBuffer,
    scanline_cycles: u16,
    line: u8,
}

impl Ppu {
    pub fn new() -> Ppu {
        Ppu {
            mmio: mem_block::gba::Mmio::new(),
            palette: mem_block::gba::Palette::new(),
            vram: mem_block::gba::Vram::new(),
            oam: mem_block::gba::Oam::new(),
            frame: [[0; FRAME_WIDTH]; FRAME_HEIGHT],
            scanline_cycles: 0,
            line: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    /// Advances the scanline state machine by `cycles`, driving hdraw
    /// rendering, hblank/vblank flag transitions, and vcount/hblank/vblank
    /// IRQ requests at the thresholds fixed by the hardware's scanline
    /// timing (960/1007/1232, 228 lines per frame, 160 of them visible).
    pub fn tick(&mut self, cycles: u32) {
        for _ in 0..cycles {
            self.tick_one();
        }
    }

    fn tick_one(&mut self) {
        self.scanline_cycles += 1;

        if self.scanline_cycles == HDRAW_CYCLES && self.line < VISIBLE_LINES {
            self.render_scanline(self.line);
        }

        if self.scanline_cycles == HBLANK_SET_CYCLE {
            DispStat::set_hblank(self.mmio.as_mut_slice(), true);
            if self.line < VISIBLE_LINES && DispStat::hblank_irq_enabled(self.mmio.as_slice()) {
                registers::request_irq(self.mmio.as_mut_slice(), memory::irq_bit::HBLANK);
            }
        }

        if self.scanline_cycles >= CYCLES_PER_SCANLINE {
            self.scanline_cycles = 0;
            DispStat::set_hblank(self.mmio.as_mut_slice(), false);
            self.line = (self.line + 1) % TOTAL_LINES;
            registers::set_vcount(self.mmio.as_mut_slice(), self.line);

            if self.line == VISIBLE_LINES {
                DispStat::set_vblank(self.mmio.as_mut_slice(), true);
                if DispStat::vblank_irq_enabled(self.mmio.as_slice()) {
                    registers::request_irq(self.mmio.as_mut_slice(), memory::irq_bit::VBLANK);
                }
            } else if self.line == 0 {
                DispStat::set_vblank(self.mmio.as_mut_slice(), false);
            }

            if self.line == DispStat::vcount_trigger(self.mmio.as_slice())
                && DispStat::vcount_irq_enabled(self.mmio.as_slice())
            {
                registers::request_irq(self.mmio.as_mut_slice(), memory::irq_bit::VCOUNT);
            }
        }
    }

    pub fn reset(&mut self) {
        self.scanline_cycles = 0;
        self.line = 0;
        self.frame = [[0; FRAME_WIDTH]; FRAME_HEIGHT];
    }

    pub fn mmio_read(&self, offset: u32) -> u8 {
        self.mmio[(offset & memory::mmio::MASK) as usize]
    }

    /// Writes a byte into MMIO, applying the `IF` acknowledge-on-write rule:
    /// each written 1 bit clears the corresponding pending-interrupt bit
    /// rather than setting it.
    pub fn mmio_write8(&mut self, offset: u32, value: u8) {
        let off = offset & memory::mmio::MASK;
        if (off == memory::mmio::IF || off == memory::mmio::IF + 1) && off < memory::mmio::SIZE as u32 {
            self.ack_if_byte(off, value);
            return;
        }
        self.mmio.as_mut_slice()[off as usize] = value;
    }

    fn ack_if_byte(&mut self, off: u32, value: u8) {
        let idx = off as usize;
        let current = self.mmio.as_slice()[idx];
        self.mmio.as_mut_slice()[idx] = current & !value;
    }

    pub fn palette_read(&self, offset: u32) -> u8 {
        self.palette[(offset & memory::palette::MASK) as usize]
    }

    /// Writes palette RAM. Byte writes duplicate into both halves of the
    /// containing halfword, since palette RAM has no single-byte storage
    /// granularity on real hardware.
    pub fn palette_write8(&mut self, offset: u32, value: u8) {
        let off = (offset & memory::palette::MASK) & !1;
        let idx = off as usize;
        self.palette.as_mut_slice()[idx] = value;
        self.palette.as_mut_slice()[idx + 1] = value;
    }

    pub fn palette_write16(&mut self, offset: u32, value: u16) {
        let off = (offset & memory::palette::MASK) as usize;
        let bytes = value.to_le_bytes();
        self.palette.as_mut_slice()[off] = bytes[0];
        self.palette.as_mut_slice()[off + 1] = bytes[1];
    }

    pub fn palette_write32(&mut self, offset: u32, value: u32) {
        let off = (offset & memory::palette::MASK) as usize;
        let bytes = value.to_le_bytes();
        self.palette.as_mut_slice()[off..off + 4].copy_from_slice(&bytes);
    }

    fn vram_window(&self, addr: u32) -> usize {
        let windowed = addr & memory::vram::WINDOW_MASK;
        let folded = if windowed >= memory::vram::MIRROR_START {
            windowed - 0x8000
        } else {
            windowed
        };
        folded as usize
    }

    pub fn vram_read8(&self, addr: u32) -> u8 {
        self.vram[self.vram_window(addr)]
    }

    pub fn vram_read16(&self, addr: u32) -> u16 {
        let off = self.vram_window(addr) & !1;
        u16::from_le_bytes([self.vram[off], self.vram[off + 1]])
    }

    pub fn vram_read32(&self, addr: u32) -> u32 {
        let off = self.vram_window(addr) & !3;
        u32::from_le_bytes([
            self.vram[off],
            self.vram[off + 1],
            self.vram[off + 2],
            self.vram[off + 3],
        ])
    }

    /// Byte writes are duplicated into a halfword within background VRAM,
    /// and silently dropped once they land in object VRAM. The background
    /// region's size depends on whether the display mode is a bitmap mode
    /// (then it extends into what would otherwise be object VRAM).
    pub fn vram_write8(&mut self, addr: u32, value: u8, bitmap_mode: bool) {
        let windowed = self.vram_window(addr);
        if windowed >= memory::vram::BYTE_WRITE_DROP as usize {
            return;
        }
        let bg_size = if bitmap_mode {
            memory::vram::BG_SIZE_BITMAP
        } else {
            memory::vram::BG_SIZE_TILEMAP
        } as usize;
        if windowed >= bg_size {
            return;
        }
        let off = windowed & !1;
        self.vram.as_mut_slice()[off] = value;
        self.vram.as_mut_slice()[off + 1] = value;
    }

    pub fn vram_write16(&mut self, addr: u32, value: u16) {
        let off = self.vram_window(addr) & !1;
        let bytes = value.to_le_bytes();
        self.vram.as_mut_slice()[off] = bytes[0];
        self.vram.as_mut_slice()[off + 1] = bytes[1];
    }

    pub fn vram_write32(&mut self, addr: u32, value: u32) {
        let off = self.vram_window(addr) & !3;
        let bytes = value.to_le_bytes();
        self.vram.as_mut_slice()[off..off + 4].copy_from_slice(&bytes);
    }

    pub fn oam_read8(&self, offset: u32) -> u8 {
        self.oam[(offset & memory::oam::MASK) as usize]
    }

    pub fn oam_read16(&self, offset: u32) -> u16 {
        let off = (offset & memory::oam::MASK) as usize & !1;
        u16::from_le_bytes([self.oam[off], self.oam[off + 1]])
    }

    pub fn oam_read32(&self, offset: u32) -> u32 {
        let off = (offset & memory::oam::MASK) as usize & !3;
        u32::from_le_bytes([
            self.oam[off],
            self.oam[off + 1],
            self.oam[off + 2],
            self.oam[off + 3],
        ])
    }

    /// Byte writes to OAM are dropped entirely: sprite attributes have no
    /// meaningful single-byte granularity on real hardware.
    pub fn oam_write8(&mut self, _offset: u32, _value: u8) {}

    pub fn oam_write16(&mut self, offset: u32, value: u16) {
        let off = (offset & memory::oam::MASK) as usize & !1;
        let bytes = value.to_le_bytes();
        self.oam.as_mut_slice()[off] = bytes[0];
        self.oam.as_mut_slice()[off + 1] = bytes[1];
    }

    pub fn oam_write32(&mut self, offset: u32, value: u32) {
        let off = (offset & memory::oam::MASK) as usize & !3;
        let bytes = value.to_le_bytes();
        self.oam.as_mut_slice()[off..off + 4].copy_from_slice(&bytes);
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}
