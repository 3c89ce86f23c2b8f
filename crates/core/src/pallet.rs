//! Pallet and box type inputs with validation.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular pallet with height and weight limits.
///
/// All dimensions are in centimeters, weights in kilograms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pallet {
    /// Base footprint length.
    pub length: f64,
    /// Base footprint width.
    pub width: f64,
    /// Height of the empty pallet.
    pub height: f64,
    /// Absolute ceiling for the loaded stack, pallet included.
    pub max_height: f64,
    /// Tare weight of the empty pallet.
    pub weight: f64,
    /// Absolute ceiling for the total weight (0 = unlimited).
    pub max_weight: f64,
}

impl Pallet {
    /// Creates a pallet with the given footprint and height limits.
    ///
    /// Tare weight defaults to zero and total weight is unlimited; use the
    /// `with_*` builders to set them.
    pub fn new(length: f64, width: f64, height: f64, max_height: f64) -> Self {
        Self {
            length,
            width,
            height,
            max_height,
            weight: 0.0,
            max_weight: 0.0,
        }
    }

    /// Sets the tare weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the maximum total weight (0 = unlimited).
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Returns the base footprint area.
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns the vertical space available for cargo above the deck.
    pub fn height_allowance(&self) -> f64 {
        self.max_height - self.height
    }

    /// Returns the weight available for cargo, or `None` when unlimited.
    pub fn weight_allowance(&self) -> Option<f64> {
        if self.max_weight == 0.0 {
            None
        } else {
            Some(self.max_weight - self.weight)
        }
    }

    /// Validates all pallet fields.
    ///
    /// Every field must be a finite, non-negative number; the footprint
    /// dimensions and both heights must be strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("pallet.length", self.length),
            ("pallet.width", self.width),
            ("pallet.height", self.height),
            ("pallet.maxHeight", self.max_height),
            ("pallet.weight", self.weight),
            ("pallet.maxWeight", self.max_weight),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidPallet(format!(
                    "field \"{name}\" must be a valid number"
                )));
            }
            if value < 0.0 {
                return Err(Error::InvalidPallet(format!(
                    "{name} must be zero or a positive number"
                )));
            }
        }

        let positive = [
            ("Pallet length", self.length),
            ("Pallet width", self.width),
            ("Pallet height", self.height),
            ("Pallet maxHeight", self.max_height),
        ];
        for (label, value) in positive {
            if value <= 0.0 {
                return Err(Error::InvalidPallet(format!(
                    "{label} must be greater than zero"
                )));
            }
        }

        Ok(())
    }
}

/// One box type to be tiled and stacked on a pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxType {
    /// Footprint length.
    pub length: f64,
    /// Footprint width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Weight of a single box.
    pub weight: f64,
    /// Optional human-readable label.
    pub label: Option<String>,
    /// Optional cap on how many boxes to place (absent = fill to capacity).
    pub quantity: Option<u32>,
    /// Stable identity correlating this box type across re-solves and
    /// combination.
    pub source_index: usize,
}

impl BoxType {
    /// Creates a box type with the given dimensions and weight.
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            weight,
            label: None,
            quantity: None,
            source_index: 0,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the requested quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the source index.
    pub fn with_source_index(mut self, index: usize) -> Self {
        self.source_index = index;
        self
    }

    /// Returns the footprint area of a single box.
    pub fn footprint_area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns a short description used in error messages.
    pub fn describe(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => format!("Box \"{label}\""),
            _ => format!("Box type {}", self.source_index + 1),
        }
    }

    /// Returns the display name: the label when present, otherwise the
    /// dimensions rendered as `L×W×H cm`.
    pub fn display_name(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("{}×{}×{} cm", self.length, self.width, self.height),
        }
    }

    /// Validates all box fields.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("weight", self.weight),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidBox(format!(
                    "{} field \"{name}\" must be a valid number",
                    self.describe()
                )));
            }
            if value < 0.0 {
                return Err(Error::InvalidBox(format!(
                    "{} {name} must be zero or a positive number",
                    self.describe()
                )));
            }
        }

        let positive = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(Error::InvalidBox(format!(
                    "{} {name} must be greater than zero",
                    self.describe()
                )));
            }
        }

        if let Some(quantity) = self.quantity {
            if quantity == 0 {
                return Err(Error::InvalidBox(format!(
                    "{} quantity must be greater than zero",
                    self.describe()
                )));
            }
        }

        Ok(())
    }
}

/// Normalized echo of a box type carried inside a solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    /// Footprint length.
    pub length: f64,
    /// Footprint width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Weight of a single box.
    pub weight: f64,
    /// Label, empty when none was supplied.
    pub label: String,
    /// Requested quantity, if one was supplied.
    pub quantity: Option<u32>,
}

impl BoxSpec {
    /// Builds the echo from a validated box type.
    pub fn from_box(box_type: &BoxType) -> Self {
        Self {
            length: box_type.length,
            width: box_type.width,
            height: box_type.height,
            weight: box_type.weight,
            label: box_type.label.clone().unwrap_or_default(),
            quantity: box_type.quantity,
        }
    }
}

/// Checks a box type against a pallet before any geometry runs.
///
/// The loaded first level must fit under the height ceiling, and the larger
/// box footprint dimension must fit the larger pallet footprint dimension.
pub fn validate_dimensions(pallet: &Pallet, box_type: &BoxType) -> Result<()> {
    pallet.validate()?;
    box_type.validate()?;

    if box_type.height + pallet.height > pallet.max_height {
        return Err(Error::InvalidBox(format!(
            "{} exceeds the allowed height for the pallet",
            box_type.describe()
        )));
    }

    if box_type.length.max(box_type.width) > pallet.length.max(pallet.width) {
        return Err(Error::InvalidBox(format!(
            "{} footprint is larger than the pallet",
            box_type.describe()
        )));
    }

    Ok(())
}
