//! CRC-32 as used by PNG chunks
//!
//! Reflected polynomial 0xEDB88320, register preset to all ones and
//! complemented at the end (ISO 3309 / ITU-T V.42).

use lazy_static::lazy_static;

const POLYNOMIAL: u32 = 0xEDB8_8320;

lazy_static! {
    static ref CRC_TABLE: [u32; 256] = {
        let mut table = [0u32; 256];
        for (n, slot) in table.iter_mut().enumerate() {
            let mut c = n as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 { POLYNOMIAL ^ (c >> 1) } else { c >> 1 };
            }
            *slot = c;
        }
        table
    };
}

/// Incremental CRC-32 hasher
///
/// Lets a chunk checksum cover `type ‖ data` without concatenating them.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    register: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Crc32 { register: 0xFFFF_FFFF }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        let table = &*CRC_TABLE;
        for &byte in bytes {
            self.register = table[((self.register ^ byte as u32) & 0xFF) as usize] ^ (self.register >> 8);
        }
    }

    pub fn finalize(&self) -> u32 {
        self.register ^ 0xFFFF_FFFF
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

/// CRC-32 of a byte sequence
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(bytes);
    hasher.finalize()
}
