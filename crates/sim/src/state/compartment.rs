use core::fmt;

use serde::{Deserialize, Serialize};

/// An SEIR compartment label.
///
/// `Compartment` is a compact, Copyable label backed by a single byte (u8).
/// The mapping of variants to integers is stable and used throughout the
/// crate (S=0, I=1, E=2, R=3): count vectors and output tuples are indexed
/// by it. The epidemiological progression order is different (S, E, I, R);
/// use [`Compartment::stage`] when ordering nodes by progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Compartment {
    S = 0,
    I = 1,
    E = 2,
    R = 3,
}

impl Compartment {
    /// All compartments in index order (S, I, E, R).
    pub const ALL: [Self; 4] = [Self::S, Self::I, Self::E, Self::R];

    /// Convert from u8 index (0-3)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::S),
            1 => Some(Self::I),
            2 => Some(Self::E),
            3 => Some(Self::R),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Position in the epidemiological progression S -> E -> I -> R.
    ///
    /// A node's stage never decreases over the course of a simulation; the
    /// enum deliberately does not derive `Ord` because its index order
    /// (S, I, E, R) is not the progression order.
    #[inline(always)]
    pub const fn stage(self) -> u8 {
        match self {
            Self::S => 0,
            Self::E => 1,
            Self::I => 2,
            Self::R => 3,
        }
    }

    /// Convert to the uppercase ASCII letter labeling this compartment.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::S => b'S',
            Self::I => b'I',
            Self::E => b'E',
            Self::R => b'R',
        }
    }

    /// Convert to an uppercase `char` labeling this compartment.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return true if the compartment can pass infection to susceptible
    /// neighbors.
    #[inline(always)]
    pub const fn is_infectious(self) -> bool {
        matches!(self, Self::I)
    }

    /// Return true if the compartment is absorbing (no outgoing transition).
    #[inline(always)]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::R)
    }
}

impl Default for Compartment {
    /// Every node starts susceptible.
    fn default() -> Self {
        Self::S
    }
}

impl From<Compartment> for u8 {
    #[inline(always)]
    fn from(compartment: Compartment) -> u8 {
        compartment.to_index()
    }
}

impl From<Compartment> for char {
    #[inline(always)]
    fn from(compartment: Compartment) -> char {
        compartment.to_char()
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_is_stable() {
        // Count vectors and output tuples depend on this exact mapping.
        assert_eq!(Compartment::S.to_index(), 0);
        assert_eq!(Compartment::I.to_index(), 1);
        assert_eq!(Compartment::E.to_index(), 2);
        assert_eq!(Compartment::R.to_index(), 3);
    }

    #[test]
    fn test_from_index_round_trip() {
        for compartment in Compartment::ALL {
            assert_eq!(
                Compartment::from_index(compartment.to_index()),
                Some(compartment)
            );
        }
        assert_eq!(Compartment::from_index(4), None);
    }

    #[test]
    fn test_stage_follows_progression() {
        assert!(Compartment::S.stage() < Compartment::E.stage());
        assert!(Compartment::E.stage() < Compartment::I.stage());
        assert!(Compartment::I.stage() < Compartment::R.stage());
    }

    #[test]
    fn test_default_is_susceptible() {
        assert_eq!(Compartment::default(), Compartment::S);
    }

    #[test]
    fn test_display() {
        let labels: String = Compartment::ALL.iter().map(|c| c.to_char()).collect();
        assert_eq!(labels, "SIER");
        assert_eq!(Compartment::E.to_string(), "E");
    }

    #[test]
    fn test_infectious_and_terminal() {
        assert!(Compartment::I.is_infectious());
        assert!(!Compartment::E.is_infectious());
        assert!(Compartment::R.is_terminal());
        assert!(!Compartment::I.is_terminal());
    }
}
