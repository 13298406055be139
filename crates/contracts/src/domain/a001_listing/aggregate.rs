use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::number::{de_f64, de_opt_f64};
use crate::shared::timestamp::parse_timestamp;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier assigned by the listings service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub i64);

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Choice enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Edible,
    Inedible,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Edible, ProductType::Inedible];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Edible => "edible",
            ProductType::Inedible => "inedible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Edible => "Edible",
            ProductType::Inedible => "Inedible",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "L")]
    Litre,
    #[serde(rename = "unit")]
    Count,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Kg, Unit::Litre, Unit::Count];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Litre => "L",
            Unit::Count => "unit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Kg => "Kg (weight)",
            Unit::Litre => "L (volume)",
            Unit::Count => "Unit (count)",
        }
    }

    /// Wire values are matched exactly except for surrounding blanks and the
    /// case of `kg`/`unit`; `l` is accepted for litres.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("kg") => Some(Unit::Kg),
            "L" | "l" => Some(Unit::Litre),
            v if v.eq_ignore_ascii_case("unit") => Some(Unit::Count),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMethod {
    Manual,
    Csv,
    Api,
}

impl UploadMethod {
    pub const ALL: [UploadMethod; 3] = [UploadMethod::Manual, UploadMethod::Csv, UploadMethod::Api];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadMethod::Manual => "manual",
            UploadMethod::Csv => "csv",
            UploadMethod::Api => "api",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadMethod::Manual => "Manual",
            UploadMethod::Csv => "CSV",
            UploadMethod::Api => "API",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Listing as returned by `GET /api/listings/`.
///
/// Everything except the id, product type and quantity is optional on read:
/// older rows and CSV imports leave many columns empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: ListingId,

    pub product_type: String,

    #[serde(deserialize_with = "de_f64")]
    pub quantity: f64,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "de_opt_f64")]
    pub original_price: Option<f64>,

    #[serde(default, deserialize_with = "de_opt_f64")]
    pub discounted_price: Option<f64>,

    #[serde(default)]
    pub expiry_date: Option<String>,

    #[serde(default)]
    pub pickup_window_duration: Option<String>,

    #[serde(default)]
    pub upload_method: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    /// Status stored by the service, if any. The dashboard derives its own
    /// status from this and the expiry date.
    #[serde(default)]
    pub status: Option<String>,
}

impl Listing {
    /// Parsed expiry; `None` when absent or unparseable.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expiry_date.as_deref().and_then(parse_timestamp)
    }

    /// Category text, empty when the listing has none.
    pub fn category_name(&self) -> &str {
        self.category.as_deref().map(str::trim).unwrap_or("")
    }

    /// Quantity with its unit, e.g. `12.5 kg`.
    pub fn quantity_label(&self) -> String {
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => format!("{} {}", self.quantity, unit),
            _ => self.quantity.to_string(),
        }
    }
}
