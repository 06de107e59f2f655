//! Schema object identifiers with explicit-quoting detection
//!
//! Callers hand the engine raw identifier spellings. A spelling wrapped in
//! backticks, double quotes, or brackets (e.g. `` `select` ``) marks the
//! identifier as explicitly quoted: it is always delimited in generated SQL.
//! Unquoted spellings are delimited only when they collide with a reserved
//! keyword of the target platform.

use crate::platform::Platform;

/// An identifier name plus whether the caller explicitly quoted it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    name: String,
    quoted: bool,
}

impl Identifier {
    /// Parses a raw spelling, stripping quote markers.
    ///
    /// Recognized markers: `` `name` ``, `"name"`, `[name]`. Qualified
    /// spellings like `` `schema`.`table` `` strip the markers from every
    /// segment and remember that the whole identifier was quoted.
    pub fn new(raw: &str) -> Self {
        let quoted = raw.starts_with('`') || raw.starts_with('"') || raw.starts_with('[');
        let name = if quoted {
            raw.chars()
                .filter(|c| !matches!(c, '`' | '"' | '[' | ']'))
                .collect()
        } else {
            raw.to_string()
        };
        Identifier { name, quoted }
    }

    /// The bare name with quote markers stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the caller explicitly quoted the spelling.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Renders the identifier for the given platform.
    ///
    /// Qualified names are handled per `.` segment: a segment is delimited
    /// when the identifier was explicitly quoted or the segment is a reserved
    /// keyword. The quoter itself stays keyword-agnostic; the keyword check
    /// lives here, on the caller side of that contract.
    pub fn sql<P: Platform + ?Sized>(&self, platform: &P) -> String {
        self.name
            .split('.')
            .map(|segment| {
                if self.quoted || platform.is_reserved_keyword(segment) {
                    platform.quote_single_identifier(segment)
                } else {
                    segment.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}
