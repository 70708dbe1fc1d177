//! Image File Directory (IFD) structures and serialization
//!
//! An IFD is a table of 12-byte tag entries followed by a 4-byte link to
//! the next directory. Values that fit in four bytes live inside the
//! entry; larger values go to a data block written right after the table,
//! and the entry holds their offset from the start of the TIFF header.

use std::fmt;
use log::{debug, trace};

use crate::exif::constants::field_types;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::rational::Rational;
use crate::exif::tag_names;
use crate::io::byte_order::ByteOrderHandler;
use crate::utils::{tag_utils, write_utils};

/// Bytes available for a value stored inside an entry
pub const INLINE_VALUE_SIZE: usize = 4;

/// Size of one serialized entry
pub const ENTRY_SIZE: usize = 12;

/// Which directory of the EXIF blob an IFD is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryKind {
    /// Primary image directory
    Ifd0,
    /// Exif sub-IFD (camera settings)
    Exif,
    /// GPS sub-IFD
    Gps,
}

impl DirectoryKind {
    pub fn name(&self) -> &'static str {
        match self {
            DirectoryKind::Ifd0 => "IFD0",
            DirectoryKind::Exif => "Exif",
            DirectoryKind::Gps => "GPS",
        }
    }
}

/// Logical value of a tag entry
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Byte(Vec<u8>),
    /// Text without its terminator; the NUL is added when encoding
    Ascii(String),
    Short(u16),
    Long(u32),
    Rational(Vec<Rational>),
    Undefined(Vec<u8>),
}

impl TagValue {
    /// TIFF field type code
    pub fn field_type(&self) -> u16 {
        match self {
            TagValue::Byte(_) => field_types::BYTE,
            TagValue::Ascii(_) => field_types::ASCII,
            TagValue::Short(_) => field_types::SHORT,
            TagValue::Long(_) => field_types::LONG,
            TagValue::Rational(_) => field_types::RATIONAL,
            TagValue::Undefined(_) => field_types::UNDEFINED,
        }
    }

    /// Number of type units, including the ASCII terminator
    pub fn count(&self) -> u32 {
        match self {
            TagValue::Byte(bytes) | TagValue::Undefined(bytes) => bytes.len() as u32,
            TagValue::Ascii(text) => text.len() as u32 + 1,
            TagValue::Short(_) | TagValue::Long(_) => 1,
            TagValue::Rational(values) => values.len() as u32,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Byte(bytes) | TagValue::Undefined(bytes) => write!(f, "{:?}", bytes),
            TagValue::Ascii(text) => write!(f, "\"{}\"", text),
            TagValue::Short(value) => write!(f, "{}", value),
            TagValue::Long(value) => write!(f, "{}", value),
            TagValue::Rational(values) => {
                let parts: Vec<String> = values.iter().map(|r| r.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// Represents an entry in an Image File Directory (IFD)
#[derive(Debug, Clone, PartialEq)]
pub struct IFDEntry {
    /// Tag identifier
    pub tag: u16,
    /// Value carried by the entry
    pub value: TagValue,
}

impl IFDEntry {
    pub fn new(tag: u16, value: TagValue) -> Self {
        trace!("Creating IFD entry: tag={:#06x}, type={} ({}), count={}",
               tag, value.field_type(), tag_utils::get_field_type_name(value.field_type()), value.count());
        Self { tag, value }
    }

    /// ASCII entry; text after an embedded NUL is dropped
    pub fn ascii(tag: u16, text: &str) -> Self {
        let text = match text.find('\0') {
            Some(end) => &text[..end],
            None => text,
        };
        Self::new(tag, TagValue::Ascii(text.to_string()))
    }

    pub fn short(tag: u16, value: u16) -> Self {
        Self::new(tag, TagValue::Short(value))
    }

    pub fn long(tag: u16, value: u32) -> Self {
        Self::new(tag, TagValue::Long(value))
    }

    pub fn rationals(tag: u16, values: &[Rational]) -> Self {
        Self::new(tag, TagValue::Rational(values.to_vec()))
    }

    pub fn bytes(tag: u16, bytes: &[u8]) -> Self {
        Self::new(tag, TagValue::Byte(bytes.to_vec()))
    }

    pub fn undefined(tag: u16, bytes: &[u8]) -> Self {
        Self::new(tag, TagValue::Undefined(bytes.to_vec()))
    }

    pub fn field_type(&self) -> u16 {
        self.value.field_type()
    }

    pub fn count(&self) -> u32 {
        self.value.count()
    }

    /// Size in bytes of the encoded value
    pub fn payload_len(&self) -> usize {
        tag_utils::get_field_type_size(self.field_type()) * self.count() as usize
    }

    /// Whether the value fits inside the entry itself
    pub fn is_value_inline(&self) -> bool {
        self.payload_len() <= INLINE_VALUE_SIZE
    }

    /// Bytes this entry adds to its directory's data block
    pub fn out_of_line_size(&self) -> usize {
        if self.is_value_inline() {
            0
        } else {
            write_utils::align_to_2_bytes(self.payload_len())
        }
    }

    /// Encodes the value in the handler's byte order
    pub fn encode_value(&self, handler: &dyn ByteOrderHandler) -> ExifResult<Vec<u8>> {
        let mut payload = Vec::with_capacity(self.payload_len());

        match &self.value {
            TagValue::Byte(bytes) | TagValue::Undefined(bytes) => payload.extend_from_slice(bytes),
            TagValue::Ascii(text) => {
                payload.extend_from_slice(text.as_bytes());
                payload.push(0);
            }
            TagValue::Short(value) => handler.write_u16(&mut payload, *value)?,
            TagValue::Long(value) => handler.write_u32(&mut payload, *value)?,
            TagValue::Rational(values) => {
                for rational in values {
                    if rational.is_negative() {
                        return Err(ExifError::GenericError(format!(
                            "negative value {} in unsigned RATIONAL tag {:#06x}", rational, self.tag)));
                    }
                    handler.write_rational(&mut payload, rational.numerator() as u32, rational.denominator())?;
                }
            }
        }

        Ok(payload)
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self, kind: DirectoryKind) -> String {
        format!("Tag: {:#06x} ({}), Type: {} ({}), Count: {}, Value: {}",
                self.tag, tag_names::get_tag_name(kind, self.tag),
                self.field_type(), tag_utils::get_field_type_name(self.field_type()),
                self.count(), self.value)
    }
}

/// Represents an Image File Directory (IFD)
///
/// The next-IFD link is always written as zero: the blob never chains
/// directories, sub-IFDs are reached through pointer tags instead.
#[derive(Debug, Clone, PartialEq)]
pub struct IFD {
    /// Which directory this is
    pub kind: DirectoryKind,
    /// Entries in emission order
    pub entries: Vec<IFDEntry>,
}

impl IFD {
    pub fn new(kind: DirectoryKind) -> Self {
        debug!("Creating new {} directory", kind.name());
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: IFDEntry) {
        trace!("Adding entry to {}: {}", self.kind.name(), entry.description(self.kind));
        self.entries.push(entry);
    }

    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn has_tag(&self, tag: u16) -> bool {
        self.get_entry(tag).is_some()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the value of a LONG entry; returns false if the tag is absent
    pub fn set_long_value(&mut self, tag: u16, value: u32) -> bool {
        match self.entries.iter_mut().find(|entry| entry.tag == tag) {
            Some(entry) => {
                entry.value = TagValue::Long(value);
                true
            }
            None => false,
        }
    }

    /// Sorts entries by ascending tag number, keeping the last duplicate
    pub fn sort_entries(&mut self) {
        self.entries = write_utils::get_unique_sorted_entries(&self.entries);
    }

    /// Size of the entry table: count field, entries and next-IFD link
    pub fn table_size(&self) -> usize {
        2 + ENTRY_SIZE * self.entries.len() + 4
    }

    /// Serialized size of this directory including its data block
    pub fn size(&self) -> usize {
        let data_size: usize = self.entries.iter().map(IFDEntry::out_of_line_size).sum();
        self.table_size() + data_size
    }

    /// Serializes the directory as it will sit at `base_offset`
    ///
    /// `base_offset` is the directory's position relative to the start of
    /// the TIFF header; out-of-line value offsets are computed from it.
    pub fn to_bytes(&self, base_offset: u32, handler: &dyn ByteOrderHandler) -> ExifResult<Vec<u8>> {
        let size = self.size();
        let mut table = Vec::with_capacity(size);
        let mut data = Vec::with_capacity(size - self.table_size());
        let data_start = base_offset as usize + self.table_size();

        handler.write_u16(&mut table, self.entries.len() as u16)?;

        for entry in &self.entries {
            handler.write_u16(&mut table, entry.tag)?;
            handler.write_u16(&mut table, entry.field_type())?;
            handler.write_u32(&mut table, entry.count())?;

            let mut payload = entry.encode_value(handler)?;
            if entry.is_value_inline() {
                // Inline values are left-justified in the 4-byte field
                payload.resize(INLINE_VALUE_SIZE, 0);
                table.extend_from_slice(&payload);
            } else {
                let offset = u32::try_from(data_start + data.len())
                    .map_err(|_| ExifError::GenericError("directory offset exceeds 32 bits".to_string()))?;
                handler.write_u32(&mut table, offset)?;
                let padding = write_utils::calculate_padding(payload.len());
                data.extend_from_slice(&payload);
                data.resize(data.len() + padding, 0);
            }
        }

        // Next IFD offset
        handler.write_u32(&mut table, 0)?;

        table.extend_from_slice(&data);
        debug!("Serialized {} directory: {} entries, {} bytes at offset {}",
               self.kind.name(), self.entries.len(), table.len(), base_offset);
        Ok(table)
    }
}

impl fmt::Display for IFD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} directory", self.kind.name())?;
        writeln!(f, "  Number of entries: {}", self.entries.len())?;
        writeln!(f, "  Size: {} bytes", self.size())?;
        writeln!(f, "  Tags:")?;
        for entry in &self.entries {
            writeln!(f, "    {:#06x} ({}): {} [{}]",
                     entry.tag,
                     tag_names::get_tag_name(self.kind, entry.tag),
                     entry.value,
                     tag_utils::get_field_type_name(entry.field_type()))?;
        }
        Ok(())
    }
}
