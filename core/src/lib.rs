pub use chip8::{Chip8, Config};
pub use error::Error;
pub use state::{FrameBuffer, State};

pub mod constants;

mod chip8;
mod error;
mod instruction;
mod opcode;
mod operations;
mod state;
