//! The sixteen 4-bit condition codes that gate every ARM instruction (and,
//! via the translated encoding, THUMB's conditional branch).

use super::status::Psr;

/// Evaluates a 4-bit condition field against the current flags.
///
/// `0b1111` ("NV", reserved on ARMv4T) is treated as always-false rather than
/// always-true, since no documented encoding relies on it and failing closed
/// keeps an accidental decode from executing unintended instructions.
pub fn evaluate(cond: u8, cpsr: Psr) -> bool {
    let (n, z, c, v) = (cpsr.n(), cpsr.z(), cpsr.c(), cpsr.v());
    match cond & 0xF {
        0x0 => z,                   // EQ
        0x1 => !z,                  // NE
        0x2 => c,                   // CS/HS
        0x3 => !c,                  // CC/LO
        0x4 => n,                   // MI
        0x5 => !n,                  // PL
        0x6 => v,                   // VS
        0x7 => !v,                  // VC
        0x8 => c && !z,             // HI
        0x9 => !c || z,             // LS
        0xA => n == v,              // GE
        0xB => n != v,              // LT
        0xC => !z && (n == v),      // GT
        0xD => z || (n != v),       // LE
        0xE => true,                // AL
        _ => false,                 // reserved
    }
}
