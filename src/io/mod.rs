//! I/O utilities for binary serialization
//!
//! This module provides the byte order strategies used when writing
//! TIFF directories and PNG chunks.

pub mod byte_order;
