//! ARMv4T interpreter, memory bus, and PPU scanline renderer for a Game Boy
//! Advance core.
//!
//! The host (window, input loop, blitter, ROM loader, CLI, audio) is not
//! part of this crate: callers hand a firmware image and a cartridge image
//! to [`Gba::new`], feed a key-input mask per frame to
//! [`Gba::render_frame`], and consume the returned frame buffer.

pub mod bus;
pub mod cpu;
pub mod error;
pub mod gba;
pub mod mem_block;
pub mod memory;
pub mod ppu;

pub use error::Error;
pub use gba::Gba;
