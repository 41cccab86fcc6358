//! Package - the resolved metadata for one registry entry.
//!
//! A bulk listing (`pkg-config --list-all`) yields name and description
//! only; the flag strings and the dependency graph are filled in by a
//! per-name detail query. Listing output is line-oriented, one package
//! per line as `<name><whitespace run><description...>`.

use serde::Serialize;

use crate::core::Resource;

/// One named entry in the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Package name, unique within one registry query
    pub name: String,

    /// Free-text description, may be empty
    pub description: String,

    /// Resources this package provides
    pub provides: Vec<Resource>,

    /// Resources this package requires
    pub requires: Vec<Resource>,

    /// Raw compiler-flag string, not tokenized further
    pub cflags: String,

    /// Raw linker-flag string, not tokenized further
    pub lflags: String,
}

impl Package {
    /// Parse one listing line into a name-and-description package.
    ///
    /// The line is split on runs of whitespace; the first token is the
    /// name and the remaining tokens are re-joined with single spaces
    /// as the description. The description is therefore normalized, not
    /// a byte-exact substring of the source line. Blank and
    /// whitespace-only lines yield `None`.
    pub fn from_listing_line(line: &str) -> Option<Package> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        let description = tokens.collect::<Vec<_>>().join(" ");

        Some(Package {
            name: name.to_string(),
            description,
            ..Package::default()
        })
    }

    /// Parse a full `--list-all` capture, preserving line order.
    pub fn parse_listing(text: &str) -> Vec<Package> {
        text.lines().filter_map(Package::from_listing_line).collect()
    }
}
