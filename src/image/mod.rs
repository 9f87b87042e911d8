//! Minimal image views over borrowed grayscale buffers.
//!
//! The reconstruction never owns pixels: the edge mask is produced upstream and
//! borrowed as an [`ImageU8`]. [`io`] provides the owned buffer and file
//! helpers used by the command-line tool.

pub mod io;
pub mod traits;
pub mod u8;

pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
