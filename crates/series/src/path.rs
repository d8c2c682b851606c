//! Six-part identifying path.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AssemblyError;

/// The `/A/B/C/D/E/F/` label naming a series in a hierarchical catalog.
///
/// | Part | Usual meaning |
/// |------|---------------|
/// | A | watershed / project |
/// | B | location |
/// | C | parameter |
/// | D | sub-parameter or block date, often empty |
/// | E | interval class, e.g. `IR-MONTH` |
/// | F | version |
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DssPath {
    a: String,
    b: String,
    c: String,
    d: String,
    e: String,
    f: String,
}

impl DssPath {
    /// Creates a path from its six parts.
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
        e: impl Into<String>,
        f: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
            e: e.into(),
            f: f.into(),
        }
    }

    /// Parses `"/A/B/C/D/E/F/"`.
    ///
    /// Surrounding whitespace and one leading and one trailing slash are
    /// stripped; the rest must split into exactly six parts.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::InvalidPath`] if the part count is not six.
    pub fn parse(path: &str) -> Result<Self, AssemblyError> {
        let trimmed = path.trim();
        let inner = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let inner = inner.strip_suffix('/').unwrap_or(inner);
        let parts: Vec<&str> = inner.split('/').collect();
        match parts.as_slice() {
            [a, b, c, d, e, f] => Ok(Self::new(*a, *b, *c, *d, *e, *f)),
            _ => Err(AssemblyError::InvalidPath {
                path: path.to_string(),
                reason: format!("expected 6 parts, got {}", parts.len()),
            }),
        }
    }

    /// Part A.
    pub fn a(&self) -> &str {
        &self.a
    }

    /// Part B.
    pub fn b(&self) -> &str {
        &self.b
    }

    /// Part C.
    pub fn c(&self) -> &str {
        &self.c
    }

    /// Part D.
    pub fn d(&self) -> &str {
        &self.d
    }

    /// Part E.
    pub fn e(&self) -> &str {
        &self.e
    }

    /// Part F.
    pub fn f(&self) -> &str {
        &self.f
    }

    /// `"/A/B/C/D/E/F/"`.
    pub fn full_name(&self) -> String {
        format!(
            "/{}/{}/{}/{}/{}/{}/",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }

    /// Returns a copy with part C replaced.
    pub fn with_c(&self, c: impl Into<String>) -> Self {
        Self {
            c: c.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with part D emptied.
    ///
    /// Catalogs list one path per stored block; dropping D collapses those
    /// into a single record path.
    pub fn without_d_part(&self) -> Self {
        Self {
            d: String::new(),
            ..self.clone()
        }
    }

    /// File name `"{A}%{C}%{F}.csv"` with `:` replaced by `@` and spaces by `^`.
    pub fn csv_file_name(&self) -> String {
        fn clean(part: &str) -> String {
            part.replace(':', "@").replace(' ', "^")
        }
        format!("{}%{}%{}.csv", clean(&self.a), clean(&self.c), clean(&self.f))
    }
}

impl fmt::Display for DssPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for DssPath {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
