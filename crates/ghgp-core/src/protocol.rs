//! GHG Protocol scope calculator.
//!
//! Converts raw [`ActivityData`] into an [`EmissionsResult`] by multiplying
//! each quantity by its emission factor and summing across sub-categories.
//!
//! # What This Calculator Does
//!
//! 1. Stationary combustion (Scope 1): fuels burned in owned equipment
//! 2. Mobile combustion (Scope 1): fuels burned in company vehicles
//! 3. Refrigerant leakage (Scope 1): GWP-weighted fugitive emissions
//! 4. Purchased electricity (Scope 2): region- or source-specific factors
//! 5. Business travel (Scope 3): flights, rental cars, hotel nights
//! 6. Employee commuting (Scope 3): annual round-trip mileage by mode
//! 7. Waste disposal (Scope 3): tonnage per disposal pathway
//! 8. Purchased goods (Scope 3): Economic Input-Output spend intensity
//!
//! Every operation is deterministic pure arithmetic with no side effects
//! and no failure modes: inputs are numeric and pre-validated upstream
//! (minimum-zero constraints), and categorical lookups fall back to default
//! factors rather than raising.

use crate::activity::{
    ActivityData, CommuteMode, ElectricitySource, GridRegion, Industry, ModeBreakdown,
};
use crate::factors::EmissionFactors;
use crate::inventory::{CategoryBreakdown, EmissionsResult, ScopeBreakdown};
use crate::FloatValue;

/// Tolerance for the advisory check that mode-breakdown shares sum to 1.
const BREAKDOWN_SUM_TOLERANCE: FloatValue = 1e-6;

/// The scope calculator.
///
/// Holds the emission factor table and exposes one pure operation per
/// emission category, plus [`calculate`](Self::calculate) which runs all of
/// them and aggregates the result into scopes.
#[derive(Debug, Clone, Default)]
pub struct FootprintCalculator {
    factors: EmissionFactors,
}

impl FootprintCalculator {
    /// Create a calculator with the reference default factors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from a (possibly overridden) factor table.
    pub fn from_factors(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    /// Get the factor table
    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Emissions from stationary combustion sources.
    ///
    /// Natural gas is in m^3, the other fuels in liters.
    /// Returns tonnes CO2e.
    pub fn stationary_combustion(
        &self,
        natural_gas_m3: FloatValue,
        diesel_l: FloatValue,
        propane_l: FloatValue,
        fuel_oil_l: FloatValue,
    ) -> FloatValue {
        let f = &self.factors.stationary;
        natural_gas_m3 * f.natural_gas
            + diesel_l * f.diesel
            + propane_l * f.propane
            + fuel_oil_l * f.fuel_oil
    }

    /// Emissions from mobile combustion (vehicles, aircraft).
    ///
    /// All inputs in liters. Returns tonnes CO2e.
    pub fn mobile_combustion(
        &self,
        gasoline_l: FloatValue,
        diesel_l: FloatValue,
        jet_fuel_l: FloatValue,
    ) -> FloatValue {
        let f = &self.factors.mobile;
        gasoline_l * f.gasoline + diesel_l * f.diesel + jet_fuel_l * f.jet_fuel
    }

    /// Emissions from refrigerant leakage.
    ///
    /// `amount_kg` of the named refrigerant escaping to the atmosphere,
    /// weighted by its 100-year GWP. Returns 0 when the kind is "None" or
    /// unrecognized, or when the amount is 0. Returns tonnes CO2e.
    pub fn refrigerant_emissions(&self, kind: &str, amount_kg: FloatValue) -> FloatValue {
        if amount_kg == 0.0 {
            return 0.0;
        }
        // GWP is kg CO2e per kg; divide to reach tonnes
        amount_kg * self.factors.refrigerants.gwp(kind) / 1000.0
    }

    /// Emissions from purchased electricity.
    ///
    /// Factor selection policy: a renewable or mixed supply uses the
    /// source-level factor, overriding the region; grid electricity uses
    /// the region-specific factor, falling back to the default factor for
    /// regions outside the table. Returns tonnes CO2e.
    pub fn electricity_emissions(
        &self,
        kwh: FloatValue,
        region: GridRegion,
        source: ElectricitySource,
    ) -> FloatValue {
        let f = &self.factors.electricity;
        let factor = match source {
            ElectricitySource::Renewable => f.renewable,
            ElectricitySource::Mixed => f.mixed,
            ElectricitySource::Grid => f.for_region(region),
        };
        // Factors are per MWh
        kwh / 1000.0 * factor
    }

    /// Emissions from business travel.
    ///
    /// Flight legs in passenger-miles, car rental in miles, hotel stays in
    /// room nights. Returns tonnes CO2e.
    pub fn business_travel_emissions(
        &self,
        air_short_miles: FloatValue,
        air_medium_miles: FloatValue,
        air_long_miles: FloatValue,
        car_rental_miles: FloatValue,
        hotel_nights: FloatValue,
    ) -> FloatValue {
        let f = &self.factors.travel;
        air_short_miles * f.air_short_haul
            + air_medium_miles * f.air_medium_haul
            + air_long_miles * f.air_long_haul
            + car_rental_miles * f.car_rental
            + hotel_nights * f.hotel_night
    }

    /// Emissions from employee commuting.
    ///
    /// Total annual round-trip mileage is
    /// `avg_one_way_miles * 2 * num_employees * work_days_per_year`.
    /// With [`CommuteMode::Mixed`] and a breakdown, the mileage is
    /// share-weighted across the five concrete modes; otherwise the single
    /// mode's factor applies to the full mileage (Mixed without a breakdown
    /// resolves to the car factor).
    ///
    /// Breakdown shares are applied as given. Callers are responsible for
    /// supplying shares that sum to 1; a warning is logged otherwise but
    /// the calculation proceeds. Returns tonnes CO2e.
    pub fn employee_commuting_emissions(
        &self,
        avg_one_way_miles: FloatValue,
        num_employees: u32,
        work_days_per_year: u32,
        mode: CommuteMode,
        breakdown: Option<&ModeBreakdown>,
    ) -> FloatValue {
        let annual_miles = avg_one_way_miles
            * 2.0
            * num_employees as FloatValue
            * work_days_per_year as FloatValue;

        let f = &self.factors.commuting;
        match (mode, breakdown) {
            (CommuteMode::Mixed, Some(shares)) => {
                if (shares.total() - 1.0).abs() > BREAKDOWN_SUM_TOLERANCE {
                    log::warn!(
                        "commute mode shares sum to {:.3}, not 1; using them as given",
                        shares.total()
                    );
                }
                annual_miles
                    * (shares.car * f.car
                        + shares.carpool * f.carpool
                        + shares.public_transit * f.public_transit
                        + shares.walking_biking * f.walking_biking
                        + shares.work_from_home * f.work_from_home)
            }
            (mode, _) => annual_miles * f.for_mode(mode),
        }
    }

    /// Emissions from waste disposal.
    ///
    /// All inputs in tons per disposal pathway. Returns tonnes CO2e.
    pub fn waste_emissions(
        &self,
        landfill_tons: FloatValue,
        recycled_tons: FloatValue,
        composted_tons: FloatValue,
        incinerated_tons: FloatValue,
    ) -> FloatValue {
        let f = &self.factors.waste;
        landfill_tons * f.landfill
            + recycled_tons * f.recycled
            + composted_tons * f.composted
            + incinerated_tons * f.incinerated
    }

    /// Emissions from purchased goods and services, via the Economic
    /// Input-Output method with industry-specific intensities.
    ///
    /// `spend_usd` is the annual procurement spend in USD; intensities are
    /// per million USD. Unrecognized industries use the economy-wide
    /// fallback intensity. Returns tonnes CO2e.
    pub fn purchased_goods_emissions(&self, spend_usd: FloatValue, industry: Industry) -> FloatValue {
        spend_usd / 1_000_000.0 * self.factors.spend.intensity(industry)
    }

    /// Run all eight operations over an activity record and aggregate into
    /// scopes.
    ///
    /// Scope 1 = stationary + mobile + refrigerants;
    /// Scope 2 = electricity;
    /// Scope 3 = travel + commuting + waste + purchased goods.
    pub fn calculate(&self, activity: &ActivityData) -> EmissionsResult {
        let stationary = self.stationary_combustion(
            activity.stationary.natural_gas_m3,
            activity.stationary.diesel_l,
            activity.stationary.propane_l,
            activity.stationary.fuel_oil_l,
        );
        let mobile = self.mobile_combustion(
            activity.mobile.gasoline_l,
            activity.mobile.diesel_l,
            activity.mobile.jet_fuel_l,
        );
        let refrigerants =
            self.refrigerant_emissions(&activity.refrigerant.kind, activity.refrigerant.amount_kg);

        let electricity = self.electricity_emissions(
            activity.electricity.kwh,
            activity.electricity.region,
            activity.electricity.source,
        );

        let travel = self.business_travel_emissions(
            activity.travel.air_short_miles,
            activity.travel.air_medium_miles,
            activity.travel.air_long_miles,
            activity.travel.car_rental_miles,
            activity.travel.hotel_nights,
        );
        let commuting = self.employee_commuting_emissions(
            activity.commuting.avg_one_way_miles,
            activity.organization.num_employees,
            activity.commuting.work_days_per_year,
            activity.commuting.mode,
            activity.commuting.breakdown.as_ref(),
        );
        let waste = self.waste_emissions(
            activity.waste.landfill_tons,
            activity.waste.recycled_tons,
            activity.waste.composted_tons,
            activity.waste.incinerated_tons,
        );
        let purchased_goods = self.purchased_goods_emissions(
            activity.procurement.annual_spend_usd,
            activity.organization.industry,
        );

        let by_scope = ScopeBreakdown {
            scope1: stationary + mobile + refrigerants,
            scope2: electricity,
            scope3: travel + commuting + waste + purchased_goods,
        };

        EmissionsResult {
            total_tonnes: by_scope.total(),
            by_scope,
            by_category: CategoryBreakdown {
                stationary_combustion: stationary,
                mobile_combustion: mobile,
                refrigerants,
                purchased_electricity: electricity,
                business_travel: travel,
                employee_commuting: commuting,
                waste_generation: waste,
                purchased_goods,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_stationary_combustion() {
        let calc = FootprintCalculator::new();

        assert!(is_close!(calc.stationary_combustion(0.0, 0.0, 0.0, 0.0), 0.0));
        assert!(is_close!(
            calc.stationary_combustion(1000.0, 0.0, 0.0, 0.0),
            1000.0 * 0.00195
        ));
        assert!(is_close!(
            calc.stationary_combustion(100.0, 200.0, 300.0, 400.0),
            100.0 * 0.00195 + 200.0 * 0.00273 + 300.0 * 0.00153 + 400.0 * 0.00281
        ));
    }

    #[test]
    fn test_mobile_combustion() {
        let calc = FootprintCalculator::new();

        assert!(is_close!(calc.mobile_combustion(0.0, 0.0, 0.0), 0.0));
        assert!(is_close!(
            calc.mobile_combustion(500.0, 250.0, 100.0),
            500.0 * 0.00234 + 250.0 * 0.00267 + 100.0 * 0.00259
        ));
    }

    #[test]
    fn test_refrigerant_emissions() {
        let calc = FootprintCalculator::new();

        assert!(is_close!(calc.refrigerant_emissions("None", 100.0), 0.0));
        assert!(is_close!(calc.refrigerant_emissions("R-134a", 0.0), 0.0));
        assert!(is_close!(
            calc.refrigerant_emissions("R-134a", 10.0),
            10.0 * 1430.0 / 1000.0
        ));
        // Unknown refrigerants contribute nothing
        assert!(is_close!(calc.refrigerant_emissions("R-9999", 10.0), 0.0));
    }

    #[test]
    fn test_electricity_region_factor() {
        let calc = FootprintCalculator::new();

        let emissions = calc.electricity_emissions(
            1000.0,
            GridRegion::NortheastUs,
            ElectricitySource::Grid,
        );
        assert!(is_close!(emissions, 0.000254));
    }

    #[test]
    fn test_electricity_unknown_region_uses_fallback() {
        let calc = FootprintCalculator::new();

        let emissions =
            calc.electricity_emissions(1000.0, GridRegion::Other, ElectricitySource::Grid);
        assert!(is_close!(emissions, 0.000431));
    }

    #[test]
    fn test_electricity_source_overrides_region() {
        let calc = FootprintCalculator::new();

        let renewable = calc.electricity_emissions(
            1000.0,
            GridRegion::EasternEurope,
            ElectricitySource::Renewable,
        );
        assert!(is_close!(renewable, 0.000016));

        let mixed =
            calc.electricity_emissions(1000.0, GridRegion::Asia, ElectricitySource::Mixed);
        assert!(is_close!(mixed, 0.000320));
    }

    #[test]
    fn test_business_travel() {
        let calc = FootprintCalculator::new();

        assert!(is_close!(
            calc.business_travel_emissions(0.0, 0.0, 0.0, 0.0, 0.0),
            0.0
        ));
        assert!(is_close!(
            calc.business_travel_emissions(1000.0, 2000.0, 3000.0, 500.0, 20.0),
            1000.0 * 0.000258
                + 2000.0 * 0.000168
                + 3000.0 * 0.000153
                + 500.0 * 0.000348
                + 20.0 * 0.021
        ));
    }

    #[test]
    fn test_commuting_single_mode() {
        let calc = FootprintCalculator::new();

        let emissions =
            calc.employee_commuting_emissions(10.0, 100, 230, CommuteMode::Car, None);
        assert!(is_close!(emissions, 10.0 * 2.0 * 100.0 * 230.0 * 0.000348));

        // Walking/biking commutes are carbon free
        let emissions =
            calc.employee_commuting_emissions(10.0, 100, 230, CommuteMode::WalkingBiking, None);
        assert!(is_close!(emissions, 0.0));
    }

    #[test]
    fn test_commuting_mixed_without_breakdown_uses_car() {
        let calc = FootprintCalculator::new();

        let mixed = calc.employee_commuting_emissions(10.0, 100, 230, CommuteMode::Mixed, None);
        let car = calc.employee_commuting_emissions(10.0, 100, 230, CommuteMode::Car, None);
        assert!(is_close!(mixed, car));
    }

    #[test]
    fn test_commuting_mixed_matches_share_weighted_sum() {
        let calc = FootprintCalculator::new();
        let breakdown = ModeBreakdown {
            car: 0.3,
            carpool: 0.2,
            public_transit: 0.3,
            walking_biking: 0.1,
            work_from_home: 0.1,
        };

        let mixed = calc.employee_commuting_emissions(
            8.0,
            50,
            230,
            CommuteMode::Mixed,
            Some(&breakdown),
        );

        // Computing each mode's mileage share independently must agree
        let by_mode: FloatValue = [
            (CommuteMode::Car, breakdown.car),
            (CommuteMode::Carpool, breakdown.carpool),
            (CommuteMode::PublicTransit, breakdown.public_transit),
            (CommuteMode::WalkingBiking, breakdown.walking_biking),
            (CommuteMode::WorkFromHome, breakdown.work_from_home),
        ]
        .iter()
        .map(|(mode, share)| {
            share * calc.employee_commuting_emissions(8.0, 50, 230, *mode, None)
        })
        .sum();

        assert!(is_close!(mixed, by_mode));
    }

    #[test]
    fn test_waste_emissions() {
        let calc = FootprintCalculator::new();

        assert!(is_close!(
            calc.waste_emissions(10.0, 5.0, 2.0, 1.0),
            10.0 * 0.458 + 5.0 * 0.021 + 2.0 * 0.023 + 1.0 * 0.0136
        ));
    }

    #[test]
    fn test_purchased_goods() {
        let calc = FootprintCalculator::new();

        assert!(is_close!(
            calc.purchased_goods_emissions(2_000_000.0, Industry::Manufacturing),
            2.0 * 563.0
        ));
        // Unrecognized industries use the economy-wide intensity
        assert!(is_close!(
            calc.purchased_goods_emissions(1_000_000.0, Industry::Other),
            412.0
        ));
    }

    #[test]
    fn test_calculate_scope_classification() {
        let mut activity = ActivityData::default();
        activity.stationary.natural_gas_m3 = 10_000.0;
        activity.mobile.gasoline_l = 5_000.0;
        activity.refrigerant.kind = "R-410A".to_string();
        activity.refrigerant.amount_kg = 5.0;
        activity.electricity.kwh = 100_000.0;
        activity.electricity.region = GridRegion::MidwestUs;
        activity.travel.air_long_miles = 50_000.0;
        activity.organization.num_employees = 100;
        activity.commuting.avg_one_way_miles = 12.0;
        activity.waste.landfill_tons = 20.0;
        activity.procurement.annual_spend_usd = 3_000_000.0;
        activity.organization.industry = Industry::Technology;

        let result = FootprintCalculator::new().calculate(&activity);

        assert!(is_close!(
            result.by_scope.scope1,
            10_000.0 * 0.00195 + 5_000.0 * 0.00234 + 5.0 * 2088.0 / 1000.0
        ));
        assert!(is_close!(result.by_scope.scope2, 100.0 * 0.000481));
        assert!(result.by_scope.scope3 > 0.0);
        assert!(is_close!(result.total_tonnes, result.by_scope.total()));
        assert!(is_close!(result.total_tonnes, result.by_category.total()));
    }

    #[test]
    fn test_calculate_empty_activity_is_zero() {
        let result = FootprintCalculator::new().calculate(&ActivityData::default());

        assert!(is_close!(result.total_tonnes, 0.0));
        assert!(is_close!(result.by_scope.total(), 0.0));
        assert!(is_close!(result.by_category.total(), 0.0));
    }

    #[test]
    fn test_non_negative_for_non_negative_inputs() {
        let calc = FootprintCalculator::new();
        let quantities = [0.0, 1.0, 123.4, 1e6];

        for &q in &quantities {
            assert!(calc.stationary_combustion(q, q, q, q) >= 0.0);
            assert!(calc.mobile_combustion(q, q, q) >= 0.0);
            assert!(calc.refrigerant_emissions("R-22", q) >= 0.0);
            assert!(
                calc.electricity_emissions(q, GridRegion::Asia, ElectricitySource::Grid) >= 0.0
            );
            assert!(calc.business_travel_emissions(q, q, q, q, q) >= 0.0);
            assert!(calc.waste_emissions(q, q, q, q) >= 0.0);
            assert!(calc.purchased_goods_emissions(q, Industry::Retail) >= 0.0);
        }
    }

    #[test]
    fn test_overridden_factors_flow_through() {
        let factors = EmissionFactors::from_toml_str("[mobile]\ngasoline = 0.003\n").unwrap();
        let calc = FootprintCalculator::from_factors(factors);

        assert!(is_close!(calc.mobile_combustion(1000.0, 0.0, 0.0), 3.0));
    }
}
