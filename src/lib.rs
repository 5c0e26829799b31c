// lib.rs - Library interface for the streaming bencode decoder

pub mod bvalue;
pub mod decode;
pub mod error;
pub mod source;

pub use bvalue::BValue;   // re-export
pub use decode::{read_dict, read_integer, read_list, read_string, read_value};   // re-export
pub use error::BencodeError;   // re-export
pub use source::ByteSource;   // re-export
