//! Byte order handling for serialized metadata
//!
//! This module implements the Strategy pattern for writing values in
//! either little-endian (TIFF directories) or big-endian (PNG chunk
//! framing) order.

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::{Result, Write};

use crate::exif::constants::header;

/// Byte order of a serialized structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// The two-byte TIFF marker declaring this order
    pub fn marker(&self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => header::LITTLE_ENDIAN_MARKER,
            ByteOrder::BigEndian => header::BIG_ENDIAN_MARKER,
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order writing strategies
pub trait ByteOrderHandler: Send + Sync {
    /// The order this handler writes in
    fn byte_order(&self) -> ByteOrder;

    /// Write a u16 value
    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()>;

    /// Write a u32 value
    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()>;

    /// Write a rational value (two u32 values as numerator/denominator)
    fn write_rational(&self, writer: &mut dyn Write, numerator: u32, denominator: u32) -> Result<()> {
        self.write_u32(writer, numerator)?;
        self.write_u32(writer, denominator)
    }
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::LittleEndian
    }

    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()> {
        writer.write_u16::<LittleEndian>(value)
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<LittleEndian>(value)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::BigEndian
    }

    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()> {
        writer.write_u16::<BigEndian>(value)
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<BigEndian>(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(&ByteOrder::LittleEndian.marker(), b"II");
        assert_eq!(&ByteOrder::BigEndian.marker(), b"MM");
    }

    #[test]
    fn test_handlers_write_in_their_order() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            let handler = order.create_handler();
            assert_eq!(handler.byte_order(), order);

            let mut buffer = Vec::new();
            handler.write_u16(&mut buffer, 0x1234).unwrap();
            handler.write_u32(&mut buffer, 0x12345678).unwrap();

            let expected: &[u8] = match order {
                ByteOrder::LittleEndian => &[0x34, 0x12, 0x78, 0x56, 0x34, 0x12],
                ByteOrder::BigEndian => &[0x12, 0x34, 0x12, 0x34, 0x56, 0x78],
            };
            assert_eq!(buffer, expected);
        }
    }

    #[test]
    fn test_write_rational() {
        let mut buffer = Vec::new();
        LittleEndianHandler.write_rational(&mut buffer, 1, 250).unwrap();
        assert_eq!(buffer, [1, 0, 0, 0, 250, 0, 0, 0]);
    }
}
