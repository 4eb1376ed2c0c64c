//! Spells an IPv4 address every way common address parsers accept it.
//!
//! Octets can be merged into wider trailing segments (`192.168.257`,
//! `3232235777`) and each segment can be written in decimal, octal (`0300`)
//! or hexadecimal (`0xc0`), optionally with extra zeros after the prefix.
//!
//! ```
//! use ipgen::{generate, Address, NumeralBase, Options};
//!
//! let options = Options::default().with_bases([NumeralBase::Hexadecimal]);
//! let notations = generate(Address::new([192, 168, 1, 1]), &options);
//!
//! assert_eq!(notations, ["0xc0.0xa8.0x1.0x1", "0xc0.0xa8.0x101", "0xc0.0xa80101", "0xc0a80101"]);
//! ```

pub mod address;
pub mod base;
pub mod generate;
pub mod grouping;
pub mod odometer;

pub use address::{Address, AddressError};
pub use base::{NumeralBase, Rendered, UnknownBase};
pub use generate::{generate, mixed, plain, Options};
pub use grouping::{Grouping, Segments};
