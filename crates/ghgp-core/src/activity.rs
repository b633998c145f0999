//! Activity input model.
//!
//! [`ActivityData`] is the flat record of raw quantities an organization
//! supplies for one footprint calculation, grouped by emission category.
//! It has no identity and is transient: it exists only for the duration of
//! one calculation, after which the derived
//! [`EmissionsResult`](crate::inventory::EmissionsResult) is what persists.
//!
//! Categorical selectors (grid region, electricity source, commute mode,
//! industry) are enums. Each has a permissive [`from_name`] constructor
//! accepting the display labels used in data-entry frontends; unrecognized
//! labels fall back to a default variant rather than raising, leaving a
//! debug-level log breadcrumb.
//!
//! [`from_name`]: GridRegion::from_name

use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Electricity grid region of the organization's facilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridRegion {
    NortheastUs,
    MidwestUs,
    SouthUs,
    WestUs,
    WesternEurope,
    EasternEurope,
    Asia,
    /// Any region without a specific factor; uses the fallback factor
    Other,
}

impl GridRegion {
    /// Parse a display label (e.g. "Northeast US").
    ///
    /// Unrecognized labels fall back to [`GridRegion::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "northeast us" | "northeast_us" => Self::NortheastUs,
            "midwest us" | "midwest_us" => Self::MidwestUs,
            "south us" | "south_us" => Self::SouthUs,
            "west us" | "west_us" => Self::WestUs,
            "western europe" | "western_europe" => Self::WesternEurope,
            "eastern europe" | "eastern_europe" => Self::EasternEurope,
            "asia" => Self::Asia,
            "other" => Self::Other,
            other => {
                log::debug!("unknown grid region {:?}, using fallback factor", other);
                Self::Other
            }
        }
    }
}

impl Default for GridRegion {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for GridRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NortheastUs => "Northeast US",
            Self::MidwestUs => "Midwest US",
            Self::SouthUs => "South US",
            Self::WestUs => "West US",
            Self::WesternEurope => "Western Europe",
            Self::EasternEurope => "Eastern Europe",
            Self::Asia => "Asia",
            Self::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Source of purchased electricity.
///
/// A renewable or mixed supply contract overrides the grid-region factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricitySource {
    Grid,
    Renewable,
    Mixed,
}

impl ElectricitySource {
    /// Parse a display label (e.g. "Renewable Energy").
    ///
    /// Unrecognized labels fall back to [`ElectricitySource::Grid`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "renewable energy" | "renewable" => Self::Renewable,
            "mixed sources" | "mixed" => Self::Mixed,
            "grid electricity" | "grid" => Self::Grid,
            other => {
                log::debug!("unknown electricity source {:?}, assuming grid", other);
                Self::Grid
            }
        }
    }
}

impl Default for ElectricitySource {
    fn default() -> Self {
        Self::Grid
    }
}

impl fmt::Display for ElectricitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Grid => "Grid Electricity",
            Self::Renewable => "Renewable Energy",
            Self::Mixed => "Mixed Sources",
        };
        write!(f, "{}", label)
    }
}

/// Primary mode of employee commuting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommuteMode {
    /// Single-occupancy car
    Car,
    Carpool,
    PublicTransit,
    WalkingBiking,
    WorkFromHome,
    /// A blend of modes, described by a [`ModeBreakdown`]
    Mixed,
}

impl CommuteMode {
    /// Parse a display label (e.g. "Car (Single Occupancy)").
    ///
    /// Unrecognized labels fall back to [`CommuteMode::Car`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "car (single occupancy)" | "car" => Self::Car,
            "carpool" => Self::Carpool,
            "public transit" | "public_transit" => Self::PublicTransit,
            "walking/biking" | "walking_biking" => Self::WalkingBiking,
            "work from home" | "wfh" => Self::WorkFromHome,
            "mixed" => Self::Mixed,
            other => {
                log::debug!("unknown commute mode {:?}, assuming car", other);
                Self::Car
            }
        }
    }
}

impl Default for CommuteMode {
    fn default() -> Self {
        Self::Car
    }
}

impl fmt::Display for CommuteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Car => "Car (Single Occupancy)",
            Self::Carpool => "Carpool",
            Self::PublicTransit => "Public Transit",
            Self::WalkingBiking => "Walking/Biking",
            Self::WorkFromHome => "Work from Home",
            Self::Mixed => "Mixed",
        };
        write!(f, "{}", label)
    }
}

/// Industry of the reporting organization.
///
/// Drives the Economic Input-Output intensity for purchased goods and the
/// industry-specific advice in downstream collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Manufacturing,
    Technology,
    Retail,
    Healthcare,
    Education,
    FinancialServices,
    FoodBeverage,
    /// Any industry without a specific intensity; uses the fallback factor
    Other,
}

impl Industry {
    /// Parse a display label (e.g. "Financial Services", "Food & Beverage").
    ///
    /// Unrecognized labels fall back to [`Industry::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "manufacturing" => Self::Manufacturing,
            "technology" => Self::Technology,
            "retail" => Self::Retail,
            "healthcare" => Self::Healthcare,
            "education" => Self::Education,
            "financial services" | "financial_services" => Self::FinancialServices,
            "food & beverage" | "food_beverage" => Self::FoodBeverage,
            "other" => Self::Other,
            other => {
                log::debug!("unknown industry {:?}, using fallback intensity", other);
                Self::Other
            }
        }
    }
}

impl Default for Industry {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Manufacturing => "Manufacturing",
            Self::Technology => "Technology",
            Self::Retail => "Retail",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::FinancialServices => "Financial Services",
            Self::FoodBeverage => "Food & Beverage",
            Self::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Identity and context of the reporting organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationInfo {
    pub name: String,
    pub industry: Industry,
    pub reporting_year: i32,
    pub num_employees: u32,
}

/// Fuels burned in owned stationary equipment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StationaryFuelUse {
    pub natural_gas_m3: FloatValue,
    pub diesel_l: FloatValue,
    pub propane_l: FloatValue,
    pub fuel_oil_l: FloatValue,
}

/// Fuels burned in company vehicles and aircraft.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MobileFuelUse {
    pub gasoline_l: FloatValue,
    pub diesel_l: FloatValue,
    pub jet_fuel_l: FloatValue,
}

/// Refrigerant leakage from cooling equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefrigerantLeakage {
    /// Refrigerant name as listed in the GWP table; "None" when the
    /// organization reports no refrigerant use
    pub kind: String,
    pub amount_kg: FloatValue,
}

impl Default for RefrigerantLeakage {
    fn default() -> Self {
        Self {
            kind: "None".to_string(),
            amount_kg: 0.0,
        }
    }
}

/// Purchased electricity consumption.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ElectricityUse {
    pub kwh: FloatValue,
    pub region: GridRegion,
    pub source: ElectricitySource,
}

/// Business travel quantities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BusinessTravel {
    /// Flights under 500 miles, in passenger-miles
    pub air_short_miles: FloatValue,
    /// Flights between 500 and 1500 miles, in passenger-miles
    pub air_medium_miles: FloatValue,
    /// Flights over 1500 miles, in passenger-miles
    pub air_long_miles: FloatValue,
    pub car_rental_miles: FloatValue,
    pub hotel_nights: FloatValue,
}

/// Fractional shares of total commute mileage per mode.
///
/// Shares are fractions in \[0, 1\]. The calculator applies them as given
/// and does not normalize: callers are responsible for ensuring the shares
/// sum to 1 (an advisory warning is logged when they do not).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ModeBreakdown {
    pub car: FloatValue,
    pub carpool: FloatValue,
    pub public_transit: FloatValue,
    pub walking_biking: FloatValue,
    pub work_from_home: FloatValue,
}

impl ModeBreakdown {
    /// Sum of all shares; 1.0 for a complete breakdown.
    pub fn total(&self) -> FloatValue {
        self.car + self.carpool + self.public_transit + self.walking_biking + self.work_from_home
    }
}

/// Employee commuting pattern.
///
/// The number of commuting employees comes from
/// [`OrganizationInfo::num_employees`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Commuting {
    /// Average one-way commute distance in miles
    pub avg_one_way_miles: FloatValue,
    pub work_days_per_year: u32,
    pub mode: CommuteMode,
    /// Mode shares, only meaningful when `mode` is [`CommuteMode::Mixed`]
    pub breakdown: Option<ModeBreakdown>,
}

impl Default for Commuting {
    fn default() -> Self {
        Self {
            avg_one_way_miles: 0.0,
            work_days_per_year: 230,
            mode: CommuteMode::Car,
            breakdown: None,
        }
    }
}

/// Waste tonnage per disposal pathway.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WasteDisposal {
    pub landfill_tons: FloatValue,
    pub recycled_tons: FloatValue,
    pub composted_tons: FloatValue,
    pub incinerated_tons: FloatValue,
}

/// Annual procurement spend.
///
/// The industry intensity applied to the spend comes from
/// [`OrganizationInfo::industry`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Procurement {
    pub annual_spend_usd: FloatValue,
}

/// All raw quantities for one footprint calculation.
///
/// Every field defaults to zero activity, so callers populate only the
/// categories the organization reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityData {
    pub organization: OrganizationInfo,
    pub stationary: StationaryFuelUse,
    pub mobile: MobileFuelUse,
    pub refrigerant: RefrigerantLeakage,
    pub electricity: ElectricityUse,
    pub travel: BusinessTravel,
    pub commuting: Commuting,
    pub waste: WasteDisposal,
    pub procurement: Procurement,
}
