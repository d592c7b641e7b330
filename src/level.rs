//! Severity levels and the canonical name table.
//!
//! Ranks are contiguous, zero-based and strictly increasing with severity;
//! [`Level::Critical`] is the maximum — anything above it clamps to it.

/// Trace severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

/// Canonical level names, indexed by rank.
///
/// Shared with the console (`debug list`) so the names accepted by
/// [`Level::from_name`] and the names shown to the operator never diverge.
const LEVEL_NAMES: [&str; Level::COUNT] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

impl Level {
    /// Number of valid levels.
    pub const COUNT: usize = 5;

    /// Integer rank, used for comparison and table indexing.
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a raw rank. Ranks above `Critical` clamp to `Critical`.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warning,
            3 => Level::Error,
            _ => Level::Critical,
        }
    }

    /// Canonical name of this level.
    #[inline]
    pub fn as_str(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Exact-match lookup in the canonical name table.
    pub fn from_name(name: &str) -> Option<Self> {
        LEVEL_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|rank| Level::from_rank(rank as u8))
    }

    /// Canonical name at `index`, or `None` past the end of the table.
    ///
    /// Used to enumerate valid names (console help, `debug list`).
    pub fn name_at(index: usize) -> Option<&'static str> {
        LEVEL_NAMES.get(index).copied()
    }
}

impl core::fmt::Display for Level {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn test_ranks_contiguous() {
        for rank in 0..Level::COUNT as u8 {
            assert_eq!(Level::from_rank(rank).rank(), rank);
        }
    }

    #[test]
    fn test_from_rank_clamps_to_critical() {
        assert_eq!(Level::from_rank(4), Level::Critical);
        assert_eq!(Level::from_rank(5), Level::Critical);
        assert_eq!(Level::from_rank(u8::MAX), Level::Critical);
    }

    #[test]
    fn test_name_round_trip() {
        for rank in 0..Level::COUNT as u8 {
            let level = Level::from_rank(rank);
            assert_eq!(Level::from_name(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(Level::from_name("not-a-real-level"), None);
        assert_eq!(Level::from_name("debug"), None); // case-sensitive
        assert_eq!(Level::from_name(""), None);
    }

    #[test]
    fn test_name_at() {
        assert_eq!(Level::name_at(0), Some("DEBUG"));
        assert_eq!(Level::name_at(4), Some("CRITICAL"));
        assert_eq!(Level::name_at(5), None);
        assert_eq!(Level::name_at(usize::MAX), None);
    }
}
