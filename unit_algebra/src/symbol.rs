/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Printable name of a unit, prefix or constant. Carries an ASCII
/// fallback next to the Unicode text; equality only looks at the
/// Unicode text.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct Symbol {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Symbol {
    pub const fn new(text: &'static str) -> Self {
        Symbol {
            unicode: text,
            ascii: text,
        }
    }

    pub const fn with_ascii(unicode: &'static str, ascii: &'static str) -> Self {
        Symbol { unicode, ascii }
    }

    pub const fn eq(&self, other: &Symbol) -> bool {
        str_eq(self.unicode, other.unicode)
    }

    pub const fn cmp(&self, other: &Symbol) -> Ordering {
        str_cmp(self.unicode, other.unicode)
    }

    pub fn text(&self, ascii: bool) -> &'static str {
        match ascii {
            true => self.ascii,
            false => self.unicode,
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Symbol::eq(self, other)
    }
}

impl Eq for Symbol {}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.text(f.alternate()))
    }
}

/// Bytewise comparison usable in constant evaluation.
pub const fn str_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] < b[i] {
            return Ordering::Less;
        }
        if a[i] > b[i] {
            return Ordering::Greater;
        }
        i += 1;
    }
    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

pub const fn str_eq(a: &str, b: &str) -> bool {
    matches!(str_cmp(a, b), Ordering::Equal)
}
