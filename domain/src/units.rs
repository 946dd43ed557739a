//! Unit-safe value objects
//!
//! `Height` and `Weight` store a single canonical magnitude (centimeters and
//! kilograms respectively, as `Decimal` for exact equality) and convert at
//! construction time only. Derived unit accessors are computed on demand, so
//! they always agree with the canonical value.
//!
//! Construction goes through factory methods exclusively; every live instance
//! satisfies "magnitude > 0".

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::errors::{DomainError, DomainResult};
use crate::guard;

fn cm_per_inch() -> Decimal {
    Decimal::new(254, 2) // 2.54
}

fn kg_per_pound() -> Decimal {
    Decimal::new(453_592, 6) // 0.453592
}

const INCHES_PER_FOOT: i32 = 12;
const POUNDS_PER_STONE: i32 = 14;

// ============================================================================
// Height
// ============================================================================

/// A body height, stored canonically in centimeters.
///
/// Two heights are equal iff their canonical centimeter magnitudes are equal,
/// regardless of which factory produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Height {
    centimeters: Decimal,
}

impl Height {
    fn new(centimeters: Decimal) -> DomainResult<Self> {
        guard::against_negative_or_zero_decimal(centimeters, "centimeters")?;
        Ok(Self { centimeters })
    }

    /// Build a height from centimeters.
    pub fn from_centimeters(centimeters: Decimal) -> DomainResult<Self> {
        Self::new(centimeters)
    }

    /// Build a height from feet plus inches, e.g. `(5, 10.0)` for 5'10".
    pub fn from_feet_and_inches(feet: i32, inches: Decimal) -> DomainResult<Self> {
        if feet < 0 {
            return Err(DomainError::invalid_argument("feet", "cannot be negative"));
        }
        if inches < Decimal::ZERO {
            return Err(DomainError::invalid_argument("inches", "cannot be negative"));
        }
        let total_inches = Decimal::from(feet * INCHES_PER_FOOT) + inches;
        Self::new(total_inches * cm_per_inch())
    }

    /// Build a height from meters.
    pub fn from_meters(meters: Decimal) -> DomainResult<Self> {
        guard::against_negative_or_zero_decimal(meters, "meters")?;
        Self::new(meters * Decimal::from(100))
    }

    /// Canonical magnitude in centimeters.
    pub fn centimeters(&self) -> Decimal {
        self.centimeters
    }

    pub fn meters(&self) -> Decimal {
        self.centimeters / Decimal::from(100)
    }

    pub fn total_inches(&self) -> Decimal {
        self.centimeters / cm_per_inch()
    }

    /// Whole feet component of the imperial rendering.
    pub fn feet(&self) -> i32 {
        (self.total_inches() / Decimal::from(INCHES_PER_FOOT))
            .trunc()
            .to_i32()
            .unwrap_or(0)
    }

    /// Inches left over once whole feet are taken out.
    pub fn remaining_inches(&self) -> Decimal {
        self.total_inches() % Decimal::from(INCHES_PER_FOOT)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} cm", self.centimeters)
    }
}

// ============================================================================
// Weight
// ============================================================================

/// A body weight, stored canonically in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weight {
    kilograms: Decimal,
}

impl Weight {
    fn new(kilograms: Decimal) -> DomainResult<Self> {
        guard::against_negative_or_zero_decimal(kilograms, "kilograms")?;
        Ok(Self { kilograms })
    }

    /// Build a weight from kilograms.
    pub fn from_kilograms(kilograms: Decimal) -> DomainResult<Self> {
        Self::new(kilograms)
    }

    /// Build a weight from pounds.
    pub fn from_pounds(pounds: Decimal) -> DomainResult<Self> {
        if pounds < Decimal::ZERO {
            return Err(DomainError::invalid_argument("pounds", "cannot be negative"));
        }
        Self::new(pounds * kg_per_pound())
    }

    /// Build a weight from stones plus pounds, e.g. `(11, 4.0)` for 11 st 4 lb.
    pub fn from_stones_and_pounds(stones: i32, pounds: Decimal) -> DomainResult<Self> {
        if stones < 0 {
            return Err(DomainError::invalid_argument("stones", "cannot be negative"));
        }
        if pounds < Decimal::ZERO {
            return Err(DomainError::invalid_argument("pounds", "cannot be negative"));
        }
        let total_pounds = Decimal::from(stones * POUNDS_PER_STONE) + pounds;
        Self::from_pounds(total_pounds)
    }

    /// Canonical magnitude in kilograms.
    pub fn kilograms(&self) -> Decimal {
        self.kilograms
    }

    pub fn pounds(&self) -> Decimal {
        self.kilograms / kg_per_pound()
    }

    pub fn stones(&self) -> Decimal {
        self.pounds() / Decimal::from(POUNDS_PER_STONE)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg", self.kilograms)
    }
}
