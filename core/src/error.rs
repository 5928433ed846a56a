use std::io;

use thiserror::Error;

/// Conditions that stop the machine.
///
/// Unrecognized opcodes are deliberately not represented here: they decode to
/// a logged warning and a no-op, and execution continues. Everything below is
/// either a load failure or an addressing fault whose reference behavior is
/// undefined, so the machine refuses to run past it rather than corrupt
/// adjacent state.
#[derive(Debug, Error)]
pub enum Error {
    /// A fetch or dereference computed an address at or past the end of
    /// memory.
    #[error("address {addr:#05X} is outside addressable memory")]
    AddressOutOfRange { addr: u16 },

    /// A subroutine call would push past the fixed stack depth.
    #[error("call stack overflow")]
    StackOverflow,

    /// A subroutine return was executed with an empty call stack.
    #[error("subroutine return with an empty call stack")]
    StackUnderflow,

    /// The ROM does not fit in the memory above the program start address.
    #[error("ROM is {size} bytes but only {capacity} fit in memory")]
    RomTooLarge { size: usize, capacity: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}
