//! Field paths
//!
//! Object descent is written with dots (`company.employee`), list descent
//! with brackets (`employees[2].contact.email`).

use std::fmt;

use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a nested payload.
///
/// Paths are cheap to extend: each step returns a new path and leaves the
/// parent untouched, so a traversal can hand the same prefix to every child.
///
/// # Examples
///
/// ```
/// use paramguard_validator::foundation::FieldPath;
///
/// let path = FieldPath::root().key("employees").index(2).key("contact").key("email");
/// assert_eq!(path.to_string(), "employees[2].contact.email");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[Segment; 4]>,
}

impl FieldPath {
    /// The empty path (top-level container).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns this path extended by an object key.
    #[must_use]
    pub fn key(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Key(name.into()));
        next
    }

    /// Returns this path extended by a list index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(index));
        next
    }

    /// Returns true for the top-level path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(name) if i == 0 => f.write_str(name)?,
                Segment::Key(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
