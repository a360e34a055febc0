//! Vessel definitions and per-segment hit tracking.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::DEFAULT_VESSEL_NAME;

/// Type of vessel: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselSpec {
    name: &'static str,
    length: usize,
}

impl VesselSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// Build a fresh, undamaged vessel of this type.
    pub fn build(&self) -> Result<Vessel, GameError> {
        let length = i64::try_from(self.length).map_err(|_| GameError::InvalidLength(i64::MAX))?;
        Vessel::new(length, self.name)
    }
}

/// A single ship. Its length and name never change; each segment records
/// whether it has been hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    name: String,
    segments: Vec<bool>,
}

impl Vessel {
    /// Create a vessel of `length` segments.
    pub fn new(length: i64, name: impl Into<String>) -> Result<Self, GameError> {
        if length <= 0 {
            return Err(GameError::InvalidLength(length));
        }
        let len = usize::try_from(length).map_err(|_| GameError::InvalidLength(length))?;
        Ok(Self {
            name: name.into(),
            segments: vec![false; len],
        })
    }

    /// Create a vessel carrying the default name.
    pub fn unnamed(length: i64) -> Result<Self, GameError> {
        Self::new(length, DEFAULT_VESSEL_NAME.to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.segments.len()
    }

    /// Mark `segment` as hit.
    ///
    /// Returns `true` when the hit is new and `false` when that segment had
    /// already been struck.
    pub fn hit(&mut self, segment: usize) -> Result<bool, GameError> {
        let length = self.length();
        let flag = self
            .segments
            .get_mut(segment)
            .ok_or(GameError::OutOfRange { index: segment, length })?;
        if *flag {
            return Ok(false);
        }
        *flag = true;
        Ok(true)
    }

    /// Whether `segment` has been hit; `false` for indices past the end.
    pub fn is_segment_hit(&self, segment: usize) -> bool {
        self.segments.get(segment).copied().unwrap_or(false)
    }

    /// Copy of the per-segment hit flags, bow first.
    pub fn hit_segments(&self) -> Vec<bool> {
        self.segments.clone()
    }

    pub fn hit_count(&self) -> usize {
        self.segments.iter().filter(|&&hit| hit).count()
    }

    /// Check if every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.segments.iter().all(|&hit| hit)
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ name: \"{}\", length: {}, hits: {}, sunk: {} }}",
            self.name,
            self.length(),
            self.hit_count(),
            self.is_sunk(),
        )
    }
}
