//! Resource - a named, versioned unit a package provides or requires.
//!
//! Resources come out of `pkg-config --print-provides` and
//! `--print-requires`, whose output is one entry per line in the form
//! `name`, `name = version`, or `name >= version`.

use serde::Serialize;

/// A versioned capability that a package provides to, or requires from,
/// other packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Name of the package the resource belongs to
    pub package: String,

    /// Version token, opaque to this crate (compared as a string only)
    pub version: String,
}

impl Resource {
    /// Parse a single provides/requires line.
    ///
    /// The first whitespace-separated token is the package name; the
    /// version is the first following token that is not a comparison
    /// operator. Returns `None` for blank lines.
    pub fn from_line(line: &str) -> Option<Resource> {
        let mut tokens = line.split_whitespace();
        let package = tokens.next()?;
        let version = tokens
            .find(|t| !is_comparison_operator(t))
            .unwrap_or_default();

        Some(Resource {
            package: package.to_string(),
            version: version.to_string(),
        })
    }

    /// Parse a full provides/requires listing, one resource per
    /// non-blank line.
    pub fn parse_list(text: &str) -> Vec<Resource> {
        text.lines().filter_map(Resource::from_line).collect()
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.package)
        } else {
            write!(f, "{} {}", self.package, self.version)
        }
    }
}

fn is_comparison_operator(token: &str) -> bool {
    matches!(token, "=" | "<" | ">" | "<=" | ">=" | "!=")
}
