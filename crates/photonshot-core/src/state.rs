//! Photon-number outcome states.
//!
//! A [`FockState`] records one occupation number per optical mode — `|1,0,2>`
//! means one photon in the first mode, none in the second, two in the third.
//! It is the key type shared by all three outcome containers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A measured photonic configuration: photon count per mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FockState(Vec<u32>);

impl FockState {
    /// Create a state from per-mode occupation numbers.
    pub fn new(occupations: Vec<u32>) -> Self {
        Self(occupations)
    }

    /// Number of optical modes.
    pub fn modes(&self) -> usize {
        self.0.len()
    }

    /// Total photon count across all modes.
    pub fn photons(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Per-mode occupation numbers.
    pub fn occupations(&self) -> &[u32] {
        &self.0
    }
}

impl From<&[u32]> for FockState {
    fn from(occupations: &[u32]) -> Self {
        Self(occupations.to_vec())
    }
}

impl fmt::Display for FockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (i, occ) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{occ}")?;
        }
        write!(f, ">")
    }
}

/// Error returned when a state literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid state literal {0:?} (expected the form \"|1,0,2>\")")]
pub struct ParseStateError(String);

impl FromStr for FockState {
    type Err = ParseStateError;

    /// Parse the `Display` form back into a state. Surrounding whitespace is
    /// tolerated; the `|` and `>` delimiters are required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('|')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| ParseStateError(s.to_string()))?;
        if inner.trim().is_empty() {
            return Ok(Self(Vec::new()));
        }
        let occupations = inner
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u32>()
                    .map_err(|_| ParseStateError(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(occupations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let state = FockState::new(vec![1, 0, 2]);
        assert_eq!(state.to_string(), "|1,0,2>");
    }

    #[test]
    fn test_parse_round_trip() {
        let state = FockState::new(vec![3, 1, 0, 4]);
        let parsed: FockState = state.to_string().parse().unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed: FockState = "  | 1, 0 ,2 >  ".parse().unwrap();
        assert_eq!(parsed, FockState::new(vec![1, 0, 2]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1,0,2".parse::<FockState>().is_err());
        assert!("|1,0,2".parse::<FockState>().is_err());
        assert!("|1,x,2>".parse::<FockState>().is_err());
        assert!("|1,-1>".parse::<FockState>().is_err());
    }

    #[test]
    fn test_modes_and_photons() {
        let state = FockState::new(vec![2, 0, 3]);
        assert_eq!(state.modes(), 3);
        assert_eq!(state.photons(), 5);
    }

    #[test]
    fn test_empty_state() {
        let parsed: FockState = "|>".parse().unwrap();
        assert_eq!(parsed.modes(), 0);
        assert_eq!(parsed.photons(), 0);
        assert_eq!(parsed.to_string(), "|>");
    }

    #[test]
    fn test_serde_round_trip() {
        let state = FockState::new(vec![1, 2, 0]);
        let json = serde_json::to_string(&state).unwrap();
        let back: FockState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
