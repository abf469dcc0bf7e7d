//! The frame driver: the outer loop that runs the CPU and PPU for exactly
//! one frame's worth of cycles and hands back the completed picture.
//!
//! Everything outside this crate — the window, the input loop, the pixel
//! blitter, the ROM loader, the CLI, audio — is a collaborator of [`Gba`],
//! not a part of it: construction takes a firmware image and a cartridge
//! image, each frame takes a key-input mask and an optional breakpoint, and
//! each frame returns a reference to the PPU's frame buffer.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::error::{Error, FIRMWARE_SIZE, MAX_CARTRIDGE_SIZE};
use crate::ppu::FrameBuffer;

/// Total cycles in one frame: 228 scanlines of 1,232 cycles each.
const CYCLES_PER_FRAME: u32 = 228 * 1232;

/// The assembled core: CPU, bus (which itself owns the PPU), and nothing
/// else. Constructed once per emulated session; `reset` returns it to the
/// documented post-construction state without reallocating.
pub struct Gba {
    cpu: Cpu,
    bus: Bus,
}

impl Gba {
    /// Builds a core from a firmware image (must be exactly 16 KiB) and a
    /// cartridge image (at most 32 MiB; shorter images are zero-padded).
    pub fn new(firmware: &[u8], cartridge: &[u8]) -> Result<Gba, Error> {
        if firmware.len() != FIRMWARE_SIZE {
            return Err(Error::FirmwareSize { actual: firmware.len() });
        }
        if cartridge.len() > MAX_CARTRIDGE_SIZE {
            return Err(Error::CartridgeTooLarge { actual: cartridge.len() });
        }

        let mut bus = Bus::new();
        bus.load_firmware(firmware);
        bus.load_cartridge(cartridge);

        Ok(Gba { cpu: Cpu::new(), bus })
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Zeroes all register banks and all component state, then
    /// reinitialises to the values fixed in the data model: banked stack
    /// pointers, CPSR, pipeline, and PPU scanline/line counters.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.ppu_mut().reset();
    }

    /// Runs one fetch/decode/execute step (IRQ check included), ticking the
    /// PPU by the number of cycles the step consumed. Exposed for
    /// single-step debugger use; `render_frame` is built from repeated
    /// calls to this.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.bus.tick(cycles);
        cycles
    }

    /// Runs the core for one frame: writes `key_input` into `KEYINPUT`,
    /// then steps until either 280,896 cycles have elapsed or `breakpoint`
    /// (if given) matches the program counter at the top of the loop. On a
    /// breakpoint hit, `*hit` is set to `true` and the (incomplete) frame
    /// buffer is returned immediately.
    pub fn render_frame(&mut self, key_input: u16, breakpoint: Option<u32>, hit: &mut bool) -> &FrameBuffer {
        *hit = false;
        self.bus.set_key_input(key_input);

        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            if let Some(target) = breakpoint {
                if self.cpu.pc() == target {
                    *hit = true;
                    break;
                }
            }
            cycles += self.step();
        }

        self.bus.ppu().frame()
    }
}
