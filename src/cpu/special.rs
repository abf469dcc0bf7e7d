//! `MRS`, `MSR`, `SWI`, and `SWP` (§4.3.10).

use super::Cpu;
use super::status::Mode;
use crate::bus::Bus;
use crate::memory::vectors;

/// `MRS`: copies the live status word or the current SPSR into `rd`.
pub fn mrs(cpu: &mut Cpu, instr: u32) {
    let rd = ((instr >> 12) & 0xF) as usize;
    let use_spsr = instr & (1 << 22) != 0;
    let value = if use_spsr { cpu.spsr().raw() } else { cpu.cpsr().raw() };
    cpu.set_r(rd, value);
}

/// `MSR`: writes the flag byte and/or control byte of either status word.
/// A control-byte write from USER mode is ignored; any other write that
/// changes the mode field is picked up automatically the next time a
/// banked register is accessed, since the bank index is always derived
/// live from the mode bits (see [`super::banks::Banks`]).
pub fn msr(cpu: &mut Cpu, instr: u32) {
    let use_spsr = instr & (1 << 22) != 0;
    let write_flags = instr & (1 << 19) != 0;
    let user_mode = cpu.cpsr().mode() == Mode::User;
    let write_control = instr & (1 << 16) != 0 && (use_spsr || !user_mode);

    let operand = msr_operand(cpu, instr);

    if use_spsr {
        let mut spsr = cpu.spsr();
        if write_flags {
            spsr.set_flags_byte((operand >> 24) as u8);
        }
        if write_control {
            spsr.set_control_byte(operand as u8);
        }
        cpu.set_spsr(spsr);
        return;
    }

    let mut cpsr = cpu.cpsr();
    if write_flags {
        cpsr.set_flags_byte((operand >> 24) as u8);
    }
    if write_control {
        cpsr.set_control_byte(operand as u8);
    }
    cpu.set_cpsr(cpsr);
}

fn msr_operand(cpu: &Cpu, instr: u32) -> u32 {
    if instr & (1 << 25) != 0 {
        let imm8 = instr & 0xFF;
        let rotate = ((instr >> 8) & 0xF) * 2;
        imm8.rotate_right(rotate)
    } else {
        cpu.r((instr & 0xF) as usize)
    }
}

/// `SWI`: enters supervisor mode, per the documented exception-entry
/// sequence (§4.3.10 / §6 vector table).
pub fn swi(cpu: &mut Cpu, _instr: u32) {
    let saved_cpsr = cpu.cpsr();
    let return_pc = cpu.fetch_addr();

    cpu.set_spsr_for(Mode::Supervisor, saved_cpsr);
    cpu.set_banked(14, Mode::Supervisor, return_pc);

    let mut new_cpsr = saved_cpsr;
    new_cpsr.set_mode(Mode::Supervisor);
    new_cpsr.set_thumb(false);
    new_cpsr.set_irq_disabled(true);
    cpu.set_cpsr(new_cpsr);
    cpu.branch_to(vectors::SWI);
}

/// `SWP`/`SWPB`: atomic swap of a word or byte between `rm` and memory at
/// `[rn]`. A misaligned word load is rotated the same way a misaligned
/// `LDR` is.
pub fn swp(cpu: &mut Cpu, bus: &mut Bus, instr: u32) {
    let byte = instr & (1 << 22) != 0;
    let rn = ((instr >> 16) & 0xF) as usize;
    let rd = ((instr >> 12) & 0xF) as usize;
    let rm = (instr & 0xF) as usize;
    let addr = cpu.r(rn);

    if byte {
        let loaded = bus.read::<u8>(addr);
        bus.write::<u8>(addr, cpu.r(rm) as u8);
        cpu.set_r(rd, loaded as u32);
    } else {
        let loaded = bus.read::<u32>(addr).rotate_right((addr & 3) * 8);
        bus.write::<u32>(addr, cpu.r(rm));
        cpu.set_r(rd, loaded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mrs_reads_the_live_cpsr() {
        let mut cpu = Cpu::new();
        mrs(&mut cpu, 0xE10F_0000); // MRS r0, CPSR
        assert_eq!(cpu.r(0), cpu.cpsr().raw());
    }

    #[test]
    fn msr_control_write_in_user_mode_is_ignored() {
        let mut cpu = Cpu::new();
        let mut cpsr = cpu.cpsr();
        cpsr.set_mode(Mode::User);
        cpu.set_cpsr(cpsr);

        // MSR CPSR_fsxc, #0x13 (would switch to supervisor if it took effect)
        msr(&mut cpu, 0xE32F_F013);
        assert_eq!(cpu.cpsr().mode(), Mode::User);
    }

    #[test]
    fn msr_control_write_in_privileged_mode_switches_bank() {
        let mut cpu = Cpu::new(); // reset state is SYSTEM mode
        let instr = 0xE32F_F013u32; // MSR CPSR_c, #0x13 (supervisor)
        msr(&mut cpu, instr);
        assert_eq!(cpu.cpsr().mode(), Mode::Supervisor);
    }

    #[test]
    fn swp_rotates_a_misaligned_word_and_stores_the_new_value_aligned() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write::<u32>(0x0200_0000, 0xAABB_CCDD);
        cpu.set_r(0, 0x0200_0001); // rn: misaligned by 1
        cpu.set_r(2, 0x1122_3344); // rm
        // SWP r1, r2, [r0]
        swp(&mut cpu, &mut bus, 0xE100_1092);
        assert_eq!(cpu.r(1), 0xAABB_CCDDu32.rotate_right(8));
        assert_eq!(bus.read::<u32>(0x0200_0000), 0x1122_3344);
    }

    #[test]
    fn swpb_swaps_a_single_byte() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::new();
        bus.write::<u8>(0x0200_0010, 0x42);
        cpu.set_r(0, 0x0200_0010);
        cpu.set_r(2, 0x99);
        // SWPB r1, r2, [r0]
        swp(&mut cpu, &mut bus, 0xE140_1092);
        assert_eq!(cpu.r(1), 0x42);
        assert_eq!(bus.read::<u8>(0x0200_0010), 0x99);
    }
}
