use crate::opcode::Opcode;
use crate::operations::{self, Operation};

/// Selects the operation for an opcode, if there is one.
///
/// Dispatch is two-level: the primary nibble picks a family and, for the
/// 0x0/0x8/0xE/0xF families, a secondary nibble or byte picks the operation
/// within it. The first matching arm wins. Combinations that fall through are
/// reported by the caller as a decode warning and executed as a no-op; they
/// are never fatal.
pub fn decode(op: &dyn Opcode) -> Option<Operation> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => operations::cls,
        (0x0, 0x0, 0xE, 0xE) => operations::ret,
        (0x1, ..) => operations::jp,
        (0x2, ..) => operations::call,
        (0x3, ..) => operations::se_nn,
        (0x4, ..) => operations::sne_nn,
        (0x5, .., 0x0) => operations::se_v,
        (0x6, ..) => operations::ld_nn,
        (0x7, ..) => operations::add_nn,
        (0x8, .., 0x0) => operations::ld_v,
        (0x8, .., 0x1) => operations::or_v,
        (0x8, .., 0x2) => operations::and_v,
        (0x8, .., 0x3) => operations::xor_v,
        (0x8, .., 0x4) => operations::add_v,
        (0x8, .., 0x5) => operations::sub_v,
        (0x8, .., 0x6) => operations::shr_v,
        (0x8, .., 0x7) => operations::subn_v,
        (0x8, .., 0xE) => operations::shl_v,
        (0x9, .., 0x0) => operations::sne_v,
        (0xA, ..) => operations::ld_i,
        (0xB, ..) => operations::jp_v0,
        (0xC, ..) => operations::rnd,
        (0xD, ..) => operations::drw,
        (0xE, .., 0x9, 0xE) => operations::skp,
        (0xE, .., 0xA, 0x1) => operations::sknp,
        (0xF, .., 0x0, 0x7) => operations::ld_from_dt,
        (0xF, .., 0x0, 0xA) => operations::wait_key,
        (0xF, .., 0x1, 0x5) => operations::ld_dt,
        (0xF, .., 0x1, 0x8) => operations::ld_st,
        (0xF, .., 0x1, 0xE) => operations::add_i,
        (0xF, .., 0x2, 0x9) => operations::ld_glyph,
        (0xF, .., 0x3, 0x3) => operations::bcd,
        (0xF, .., 0x5, 0x5) => operations::store_v,
        (0xF, .., 0x6, 0x5) => operations::load_v,
        _ => return None,
    };
    Some(operation)
}
