//! Availability and rating types.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A product's availability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadTime {
    /// Built and ready to ship.
    InStock,
    /// Made to order.
    CustomOrder,
}

impl LeadTime {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::CustomOrder => "Custom Order (6-8 Weeks)",
        }
    }

    /// Whether the piece can ship immediately.
    #[must_use]
    pub const fn is_ready_to_ship(self) -> bool {
        matches!(self, Self::InStock)
    }
}

impl fmt::Display for LeadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A testimonial star rating between 0 and [`Rating::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating.
    pub const MAX: u8 = 5;

    /// A five-star rating.
    pub const FIVE: Self = Self(5);

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] when `value` exceeds [`Rating::MAX`].
    pub const fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::InvalidRating {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Number of stars.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_time_labels() {
        assert_eq!(LeadTime::InStock.label(), "In Stock");
        assert_eq!(LeadTime::CustomOrder.to_string(), "Custom Order (6-8 Weeks)");
        assert!(LeadTime::InStock.is_ready_to_ship());
        assert!(!LeadTime::CustomOrder.is_ready_to_ship());
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(5).unwrap(), Rating::FIVE);
        assert_eq!(
            Rating::new(6),
            Err(CoreError::InvalidRating { value: 6, max: 5 })
        );
    }

    #[test]
    fn test_rating_deserialize_validates() {
        let ok: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
