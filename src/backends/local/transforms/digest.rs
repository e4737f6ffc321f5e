// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Simulated digests.
//!
//! Output is shaped like MD5/SHA-1/SHA-256/CRC32 but comes from a 32-bit
//! rolling accumulator (`h = h * 31 + c`). It is NOT a cryptographic hash and
//! every rendering says "(simulated)".

use crate::utils::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestFormat {
    Md5,
    Sha1,
    Sha256,
    Crc32,
}

impl DigestFormat {
    pub const ALL: [DigestFormat; 4] = [
        DigestFormat::Md5,
        DigestFormat::Sha1,
        DigestFormat::Sha256,
        DigestFormat::Crc32,
    ];

    /// Number of 8-hex-digit rounds: 32, 40, 64 and 8 characters.
    fn rounds(self) -> usize {
        match self {
            DigestFormat::Md5 => 4,
            DigestFormat::Sha1 => 5,
            DigestFormat::Sha256 => 8,
            DigestFormat::Crc32 => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DigestFormat::Md5 => "MD5",
            DigestFormat::Sha1 => "SHA-1",
            DigestFormat::Sha256 => "SHA-256",
            DigestFormat::Crc32 => "CRC32",
        }
    }
}

/// Deterministic placeholder digest over the UTF-16 code units of the input.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDigest {
    format: DigestFormat,
}

impl SimulatedDigest {
    pub fn new(format: DigestFormat) -> Self {
        Self { format }
    }

    fn round(input: &str, seed: i32) -> u32 {
        let mut h = seed;
        for unit in input.encode_utf16() {
            h = (h << 5).wrapping_sub(h).wrapping_add(i32::from(unit));
        }
        h as u32
    }

    pub fn hex(&self, input: &str) -> String {
        (0..self.format.rounds())
            .map(|round| format!("{:08x}", Self::round(input, round as i32 * 7919)))
            .collect()
    }
}

pub fn digest(input: &str, format: DigestFormat) -> String {
    Report::new("🔐", &format!("{} Hash (simulated)", format.label()))
        .field("Hash", SimulatedDigest::new(format).hex(input))
        .field("Length", format!("{} hex characters", format.rounds() * 8))
        .line("Note: simulated for demonstration, not a cryptographic hash")
        .into()
}

pub fn all_digests(input: &str) -> String {
    let mut report = Report::new("🔐", "Hash Values (simulated)");
    for format in DigestFormat::ALL {
        report = report.field(format.label(), SimulatedDigest::new(format).hex(input));
    }
    report
        .blank()
        .line("Note: simulated for demonstration, not cryptographic hashes")
        .into()
}
