use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of a feature on its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn symbol(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Closed interval on a sequence, 1-based, with `left <= right`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub left: u64,
    pub right: u64,
    pub strand: Strand,
}

impl Location {
    /// Build a location; bounds given in the wrong order are swapped.
    pub fn new(left: u64, right: u64, strand: Strand) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            strand,
        }
    }

    /// Location of a hit reported as `start..end` in reading direction.
    ///
    /// A hit whose start lies past its end is on the reverse strand.
    pub fn from_span(start: u64, end: u64) -> Self {
        let strand = if start <= end {
            Strand::Forward
        } else {
            Strand::Reverse
        };
        Self::new(start, end, strand)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]({})", self.left, self.right, self.strand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_span_forward() {
        let loc = Location::from_span(10, 85);
        assert_eq!(loc.left, 10);
        assert_eq!(loc.right, 85);
        assert_eq!(loc.strand, Strand::Forward);
    }

    #[test]
    fn test_from_span_reverse() {
        let loc = Location::from_span(100, 72);
        assert_eq!(loc, Location::new(72, 100, Strand::Reverse));
    }

    #[test]
    fn test_single_base_span_is_forward() {
        let loc = Location::from_span(5, 5);
        assert_eq!(loc.strand, Strand::Forward);
        assert_eq!((loc.left, loc.right), (5, 5));
    }

    #[test]
    fn test_new_orders_bounds() {
        let loc = Location::new(50, 20, Strand::Forward);
        assert_eq!((loc.left, loc.right), (20, 50));
    }

    #[test]
    fn test_strand_and_location_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Location::from_span(9, 3).to_string(), "[3..9](-)");
    }
}
