//! Memory bus integration scenarios: region mirroring, write-duplication
//! rules, and the `IF` acknowledge-on-write semantics, driven entirely
//! through the public [`gba_core::bus::Bus`] API.

use gba_core::bus::Bus;
use gba_core::memory::{mmio, oam, palette, rom, vram};

#[test]
fn rom_reads_back_a_loaded_image_and_zero_pads_the_remainder() {
    let mut bus = Bus::new();
    bus.load_cartridge(&[0xAA, 0xBB, 0xCC, 0xDD]);

    assert_eq!(bus.read::<u8>(rom::BASE), 0xAA);
    assert_eq!(bus.read::<u32>(rom::BASE), 0xDDCC_BBAA);
    assert_eq!(bus.read::<u8>(rom::BASE + 4), 0);
}

#[test]
fn palette_byte_write_duplicates_into_the_containing_halfword() {
    let mut bus = Bus::new();
    bus.write::<u8>(palette::BASE + 4, 0x7F);

    assert_eq!(bus.read::<u16>(palette::BASE + 4), 0x7F7F);
}

#[test]
fn oam_byte_write_is_silently_dropped() {
    let mut bus = Bus::new();
    bus.write::<u16>(oam::BASE, 0x1234);
    bus.write::<u8>(oam::BASE, 0x99);

    assert_eq!(bus.read::<u16>(oam::BASE), 0x1234);
}

#[test]
fn vram_byte_write_into_object_vram_is_dropped_in_tile_map_mode() {
    let mut bus = Bus::new();
    // Mode 0 is the reset default, so background VRAM ends at 0x10000 and
    // this address falls in object VRAM.
    let obj_addr = vram::BASE + vram::OBJ_BASE;
    bus.write::<u16>(obj_addr, 0xBEEF);
    bus.write::<u8>(obj_addr, 0x42);

    assert_eq!(bus.read::<u16>(obj_addr), 0xBEEF);
}

#[test]
fn vram_byte_write_past_0x14000_is_dropped_even_in_bitmap_mode() {
    let mut bus = Bus::new();
    bus.write::<u16>(mmio::BASE + mmio::DISPCNT, 0x0003); // mode 3
    let addr = vram::BASE + vram::BYTE_WRITE_DROP;
    bus.write::<u16>(addr, 0xBEEF);

    bus.write::<u8>(addr, 0x42);

    assert_eq!(bus.read::<u16>(addr), 0xBEEF);
}

#[test]
fn vram_upper_mirror_aliases_the_same_storage() {
    let mut bus = Bus::new();
    bus.write::<u16>(vram::BASE, 0xCAFE);

    assert_eq!(bus.read::<u16>(vram::BASE + vram::MIRROR_START), 0xCAFE);
}

#[test]
fn if_write_acknowledges_set_bits_instead_of_overwriting() {
    let mut bus = Bus::new();
    bus.write::<u16>(mmio::BASE + mmio::IE, 0x0003);
    bus.write::<u16>(mmio::BASE + mmio::IME, 0x0001);
    bus.write::<u16>(mmio::BASE + mmio::IF, 0x0003); // hardware sets both bits

    // Acknowledge only bit 0; bit 1 must remain pending.
    bus.write::<u16>(mmio::BASE + mmio::IF, 0x0001);
    assert_eq!(bus.read::<u16>(mmio::BASE + mmio::IF), 0x0002);
    assert!(bus.interrupt_pending());

    bus.write::<u16>(mmio::BASE + mmio::IF, 0x0002);
    assert_eq!(bus.read::<u16>(mmio::BASE + mmio::IF), 0);
    assert!(!bus.interrupt_pending());
}

#[test]
fn ewram_mirrors_across_the_whole_region() {
    let mut bus = Bus::new();
    let base = gba_core::memory::ewram::BASE;
    let mirror_period = gba_core::memory::ewram::SIZE as u32;
    bus.write::<u32>(base, 0x1122_3344);

    assert_eq!(bus.read::<u32>(base + mirror_period), 0x1122_3344);
}
