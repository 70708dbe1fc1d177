//! EXIF tag name definitions
//!
//! Tag numbers overlap between directories (GPS tags start at zero), so
//! names are looked up per directory. The table lives in
//! `exif_tags.toml` and is parsed once on first use.

use std::collections::HashMap;
use lazy_static::lazy_static;

use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::DirectoryKind;

lazy_static! {
    static ref TAG_DEFINITIONS: TagDefinitions = {
        let content = include_str!("../../exif_tags.toml");
        TagDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse EXIF tag definitions: {}", e);
            TagDefinitions::default()
        })
    };
}

/// Container for per-directory tag names
#[derive(Debug, Default)]
pub struct TagDefinitions {
    pub ifd0_names: HashMap<u16, String>,
    pub exif_names: HashMap<u16, String>,
    pub gps_names: HashMap<u16, String>,
}

impl TagDefinitions {
    /// Parse tag definitions from a TOML string
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| ExifError::GenericError(format!("Failed to parse TOML: {}", e)))?;

        let mut defs = TagDefinitions::default();
        Self::parse_table(&toml_value, "ifd0", &mut defs.ifd0_names);
        Self::parse_table(&toml_value, "exif", &mut defs.exif_names);
        Self::parse_table(&toml_value, "gps", &mut defs.gps_names);
        Ok(defs)
    }

    fn parse_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                let id = k.strip_prefix("0x")
                    .map(|hex| u16::from_str_radix(hex, 16))
                    .unwrap_or_else(|| k.parse::<u16>());
                if let (Ok(id), Some(name)) = (id, v.as_str()) {
                    target.insert(id, name.to_string());
                }
            }
        }
    }

    /// Get a tag name by directory and ID
    pub fn get_tag_name(&self, kind: DirectoryKind, tag: u16) -> String {
        let names = match kind {
            DirectoryKind::Ifd0 => &self.ifd0_names,
            DirectoryKind::Exif => &self.exif_names,
            DirectoryKind::Gps => &self.gps_names,
        };
        names.get(&tag)
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{:#06x}", tag))
    }
}

/// Name of a tag within the given directory
pub fn get_tag_name(kind: DirectoryKind, tag: u16) -> String {
    TAG_DEFINITIONS.get_tag_name(kind, tag)
}
