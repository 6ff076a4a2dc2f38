//! Adapters between edge images and the core: a borrowed 8-bit view that turns
//! a binary edge map into [`crate::EdgePoint`]s, plus disk I/O.

pub mod io;
pub mod u8;

pub use self::u8::ImageU8;
