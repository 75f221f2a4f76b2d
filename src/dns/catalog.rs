//! The fixed, ordered catalog of record types queried for every domain.

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// DNS record types queried by a forward lookup.
///
/// Declaration order is display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Mail exchanger
    Mx,
    /// Name server
    Ns,
    /// Text
    Txt,
    /// Canonical name
    Cname,
    /// Start of authority
    Soa,
    /// Certification authority authorization
    Caa,
    /// Service locator
    Srv,
}

impl RecordType {
    /// Record type code as passed to `dig` (e.g. `"AAAA"`).
    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    /// Human-readable description shown in the section header.
    pub fn description(&self) -> &'static str {
        match self {
            RecordType::A => "IPv4 Address",
            RecordType::Aaaa => "IPv6 Address",
            RecordType::Mx => "Mail Exchange Records (Email Servers)",
            RecordType::Ns => "Name Server Records",
            RecordType::Txt => "Text Records",
            RecordType::Cname => "Canonical Name (Alias)",
            RecordType::Soa => "Start of Authority Record",
            RecordType::Caa => "Certification Authority Authorization",
            RecordType::Srv => "Service Records",
        }
    }
}

/// Immutable ordered list of record types, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTypeCatalog {
    entries: Vec<RecordType>,
}

impl RecordTypeCatalog {
    /// The nine record types, A through SRV, in display order.
    pub fn standard() -> Self {
        Self {
            entries: RecordType::iter().collect(),
        }
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.entries.iter().copied()
    }

    /// `(code, description)` pairs in display order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.iter().map(|rt| (rt.code(), rt.description()))
    }

    /// Number of record types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecordTypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
