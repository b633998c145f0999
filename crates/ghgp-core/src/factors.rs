//! Emission factor tables for GHG Protocol calculations.
//!
//! All factors are expressed in tonnes CO2e per the unit stated on each
//! field. Default values are taken from recognized reference sources:
//!
//! - EPA Emission Factors Hub (combustion, waste)
//! - IPCC AR5 100-year Global Warming Potentials (refrigerants)
//! - IEA electricity emission factors (grid regions)
//! - DEFRA conversion factors (travel, commuting)
//! - EPA Economic Input-Output factors (purchased goods)
//!
//! Every table derives `Serialize`/`Deserialize` with `#[serde(default)]`,
//! so a partial TOML document can override individual factors while leaving
//! the rest at their reference defaults:
//!
//! ```rust
//! use ghgp_core::factors::EmissionFactors;
//!
//! let factors = EmissionFactors::from_toml_str(
//!     "[electricity]\nrenewable = 0.00002\n",
//! ).unwrap();
//! assert_eq!(factors.electricity.renewable, 0.00002);
//! // Untouched factors keep their defaults
//! assert_eq!(factors.waste.landfill, 0.458);
//! ```
//!
//! Tables are immutable for the process lifetime once constructed.

use crate::activity::{CommuteMode, GridRegion, Industry};
use crate::errors::{FootprintError, FootprintResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stationary combustion factors for fuels burned in owned equipment
/// (boilers, furnaces, generators).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationaryFactors {
    /// unit: tonnes CO2e per m^3
    pub natural_gas: FloatValue,
    /// unit: tonnes CO2e per liter
    pub diesel: FloatValue,
    /// unit: tonnes CO2e per liter
    pub propane: FloatValue,
    /// unit: tonnes CO2e per liter
    pub fuel_oil: FloatValue,
}

impl Default for StationaryFactors {
    fn default() -> Self {
        Self {
            natural_gas: 0.00195,
            diesel: 0.00273,
            propane: 0.00153,
            fuel_oil: 0.00281,
        }
    }
}

/// Mobile combustion factors for fuels burned in company vehicles and
/// aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileFactors {
    /// unit: tonnes CO2e per liter
    pub gasoline: FloatValue,
    /// unit: tonnes CO2e per liter
    pub diesel: FloatValue,
    /// unit: tonnes CO2e per liter
    pub jet_fuel: FloatValue,
}

impl Default for MobileFactors {
    fn default() -> Self {
        Self {
            gasoline: 0.00234,
            diesel: 0.00267,
            jet_fuel: 0.00259,
        }
    }
}

/// A single refrigerant with its 100-year global warming potential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefrigerantSpecies {
    /// Species identifier (e.g., "R-134a")
    pub name: String,
    /// 100-year global warming potential relative to CO2
    /// unit: kg CO2e per kg
    pub gwp: FloatValue,
}

impl RefrigerantSpecies {
    pub fn new(name: impl Into<String>, gwp: FloatValue) -> Self {
        Self {
            name: name.into(),
            gwp,
        }
    }
}

/// Global warming potentials for common commercial refrigerants.
///
/// GWP values are from IPCC AR5 for a 100-year time horizon. Lookup is by
/// name; unrecognized refrigerants contribute nothing rather than raising.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefrigerantGwp {
    pub species: Vec<RefrigerantSpecies>,
}

impl RefrigerantGwp {
    /// Get a species by name
    pub fn get_species(&self, name: &str) -> Option<&RefrigerantSpecies> {
        self.species.iter().find(|s| s.name == name)
    }

    /// GWP for the named refrigerant, or 0 when it is not in the table.
    pub fn gwp(&self, name: &str) -> FloatValue {
        match self.get_species(name) {
            Some(species) => species.gwp,
            None => {
                if name != "None" {
                    log::debug!("unknown refrigerant {:?}, assuming GWP 0", name);
                }
                0.0
            }
        }
    }
}

impl Default for RefrigerantGwp {
    fn default() -> Self {
        Self {
            species: vec![
                // HFC-134a
                RefrigerantSpecies::new("R-134a", 1430.0),
                // Blend of HFC-32 and HFC-125
                RefrigerantSpecies::new("R-410A", 2088.0),
                // Blend of HFCs
                RefrigerantSpecies::new("R-404A", 3922.0),
                // HCFC-22
                RefrigerantSpecies::new("R-22", 1810.0),
            ],
        }
    }
}

/// Electricity factors by grid region and generation source.
///
/// Region factors apply when the organization purchases grid electricity;
/// a renewable or mixed supply contract overrides the region factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricityFactors {
    /// unit: tonnes CO2e per MWh
    pub northeast_us: FloatValue,
    /// unit: tonnes CO2e per MWh
    pub midwest_us: FloatValue,
    /// unit: tonnes CO2e per MWh
    pub south_us: FloatValue,
    /// unit: tonnes CO2e per MWh
    pub west_us: FloatValue,
    /// unit: tonnes CO2e per MWh
    pub western_europe: FloatValue,
    /// unit: tonnes CO2e per MWh
    pub eastern_europe: FloatValue,
    /// unit: tonnes CO2e per MWh
    pub asia: FloatValue,
    /// Lifecycle emissions of renewable generation
    /// unit: tonnes CO2e per MWh
    pub renewable: FloatValue,
    /// Blended grid/renewable supply
    /// unit: tonnes CO2e per MWh
    pub mixed: FloatValue,
    /// Applied when the grid region is not in the table
    /// unit: tonnes CO2e per MWh
    pub fallback: FloatValue,
}

impl ElectricityFactors {
    /// Region-specific factor, falling back to the default factor for
    /// regions outside the table.
    pub fn for_region(&self, region: GridRegion) -> FloatValue {
        match region {
            GridRegion::NortheastUs => self.northeast_us,
            GridRegion::MidwestUs => self.midwest_us,
            GridRegion::SouthUs => self.south_us,
            GridRegion::WestUs => self.west_us,
            GridRegion::WesternEurope => self.western_europe,
            GridRegion::EasternEurope => self.eastern_europe,
            GridRegion::Asia => self.asia,
            GridRegion::Other => self.fallback,
        }
    }
}

impl Default for ElectricityFactors {
    fn default() -> Self {
        Self {
            northeast_us: 0.000254,
            midwest_us: 0.000481,
            south_us: 0.000427,
            west_us: 0.000221,
            western_europe: 0.000276,
            eastern_europe: 0.000483,
            asia: 0.000562,
            renewable: 0.000016,
            mixed: 0.000320,
            fallback: 0.000431,
        }
    }
}

/// Business travel factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelFactors {
    /// Flights under 500 miles
    /// unit: tonnes CO2e per passenger-mile
    pub air_short_haul: FloatValue,
    /// Flights between 500 and 1500 miles
    /// unit: tonnes CO2e per passenger-mile
    pub air_medium_haul: FloatValue,
    /// Flights over 1500 miles
    /// unit: tonnes CO2e per passenger-mile
    pub air_long_haul: FloatValue,
    /// unit: tonnes CO2e per mile
    pub car_rental: FloatValue,
    /// unit: tonnes CO2e per room night
    pub hotel_night: FloatValue,
}

impl Default for TravelFactors {
    fn default() -> Self {
        Self {
            air_short_haul: 0.000258,
            air_medium_haul: 0.000168,
            air_long_haul: 0.000153,
            car_rental: 0.000348,
            hotel_night: 0.021,
        }
    }
}

/// Employee commuting factors per mode of transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommutingFactors {
    /// Single-occupancy car
    /// unit: tonnes CO2e per mile
    pub car: FloatValue,
    /// unit: tonnes CO2e per mile
    pub carpool: FloatValue,
    /// unit: tonnes CO2e per mile
    pub public_transit: FloatValue,
    /// unit: tonnes CO2e per mile
    pub walking_biking: FloatValue,
    /// Home office energy use, prorated per avoided commute mile
    /// unit: tonnes CO2e per mile
    pub work_from_home: FloatValue,
}

impl CommutingFactors {
    /// Factor for a single commute mode.
    ///
    /// `Mixed` has no factor of its own; callers that reach this with
    /// `Mixed` get the car factor, matching the calculator's behavior when
    /// no mode breakdown is supplied.
    pub fn for_mode(&self, mode: CommuteMode) -> FloatValue {
        match mode {
            CommuteMode::Car | CommuteMode::Mixed => self.car,
            CommuteMode::Carpool => self.carpool,
            CommuteMode::PublicTransit => self.public_transit,
            CommuteMode::WalkingBiking => self.walking_biking,
            CommuteMode::WorkFromHome => self.work_from_home,
        }
    }
}

impl Default for CommutingFactors {
    fn default() -> Self {
        Self {
            car: 0.000348,
            carpool: 0.000162,
            public_transit: 0.000096,
            walking_biking: 0.0,
            work_from_home: 0.000032,
        }
    }
}

/// Waste disposal factors per disposal pathway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteFactors {
    /// unit: tonnes CO2e per ton
    pub landfill: FloatValue,
    /// unit: tonnes CO2e per ton
    pub recycled: FloatValue,
    /// unit: tonnes CO2e per ton
    pub composted: FloatValue,
    /// unit: tonnes CO2e per ton
    pub incinerated: FloatValue,
}

impl Default for WasteFactors {
    fn default() -> Self {
        Self {
            landfill: 0.458,
            recycled: 0.021,
            composted: 0.023,
            incinerated: 0.0136,
        }
    }
}

/// Economic Input-Output intensities for purchased goods and services,
/// by industry of the purchasing organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendFactors {
    /// unit: tonnes CO2e per million USD
    pub manufacturing: FloatValue,
    /// unit: tonnes CO2e per million USD
    pub technology: FloatValue,
    /// unit: tonnes CO2e per million USD
    pub retail: FloatValue,
    /// unit: tonnes CO2e per million USD
    pub healthcare: FloatValue,
    /// unit: tonnes CO2e per million USD
    pub education: FloatValue,
    /// unit: tonnes CO2e per million USD
    pub financial_services: FloatValue,
    /// unit: tonnes CO2e per million USD
    pub food_beverage: FloatValue,
    /// Applied when the industry is not in the table
    /// unit: tonnes CO2e per million USD
    pub fallback: FloatValue,
}

impl SpendFactors {
    /// Industry-specific intensity, falling back to the economy-wide
    /// default for unrecognized industries.
    pub fn intensity(&self, industry: Industry) -> FloatValue {
        match industry {
            Industry::Manufacturing => self.manufacturing,
            Industry::Technology => self.technology,
            Industry::Retail => self.retail,
            Industry::Healthcare => self.healthcare,
            Industry::Education => self.education,
            Industry::FinancialServices => self.financial_services,
            Industry::FoodBeverage => self.food_beverage,
            Industry::Other => self.fallback,
        }
    }
}

impl Default for SpendFactors {
    fn default() -> Self {
        Self {
            manufacturing: 563.0,
            technology: 386.0,
            retail: 274.0,
            healthcare: 221.0,
            education: 176.0,
            financial_services: 143.0,
            food_beverage: 498.0,
            fallback: 412.0,
        }
    }
}

/// The complete emission factor table, one sub-table per activity category.
///
/// Loaded once at startup; never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub stationary: StationaryFactors,
    pub mobile: MobileFactors,
    pub refrigerants: RefrigerantGwp,
    pub electricity: ElectricityFactors,
    pub travel: TravelFactors,
    pub commuting: CommutingFactors,
    pub waste: WasteFactors,
    pub spend: SpendFactors,
}

impl EmissionFactors {
    /// Parse factor overrides from a TOML document.
    ///
    /// Only the keys present in the document are overridden; everything
    /// else keeps its reference default.
    pub fn from_toml_str(content: &str) -> FootprintResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load factor overrides from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FootprintResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| FootprintError::FactorFileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content)
    }
}
