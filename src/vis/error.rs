//! Per-frame failure modes
//!
//! "No intersection" is not in here: a ray that misses an edge simply
//! continues, and the kernel reports that as `None`.

use std::fmt;

/// Which working buffer overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Candidates,
    Lines,
    Triangles,
}

impl BufferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BufferKind::Candidates => "candidates",
            BufferKind::Lines => "lines",
            BufferKind::Triangles => "triangles",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VisibilityError {
    /// A bounded working buffer would overflow; the frame should be skipped
    CapacityExceeded { buffer: BufferKind, capacity: usize },
    /// The cone is wider than 180° (or not a number), so the interval test
    /// would silently select its complement
    DegenerateFov { degrees: f32 },
}

impl fmt::Display for VisibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityError::CapacityExceeded { buffer, capacity } => {
                write!(f, "{} buffer exceeded its capacity of {}", buffer.as_str(), capacity)
            }
            VisibilityError::DegenerateFov { degrees } => {
                write!(f, "field of view of {degrees}° exceeds 180°")
            }
        }
    }
}

impl std::error::Error for VisibilityError {}

/// A `Vec` that refuses to grow past a fixed capacity
#[derive(Debug, Clone)]
pub struct Bounded<T> {
    items: Vec<T>,
    capacity: usize,
    kind: BufferKind,
}

impl<T> Bounded<T> {
    pub fn new(kind: BufferKind, capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            kind,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), VisibilityError> {
        if self.items.len() >= self.capacity {
            return Err(VisibilityError::CapacityExceeded {
                buffer: self.kind,
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
