//! Additivity tests for the scope calculator.
//!
//! These tests verify the accounting invariant of every result:
//! - total == sum of scope totals
//! - total == sum of category totals
//! - every value is non-negative for non-negative inputs

use approx::assert_relative_eq;
use ghgp_core::activity::{
    ActivityData, CommuteMode, ElectricitySource, GridRegion, Industry, ModeBreakdown,
};
use ghgp_core::inventory::{EmissionCategory, Scope};
use ghgp_core::protocol::FootprintCalculator;

/// A fully-populated activity record touching all eight categories.
fn full_activity() -> ActivityData {
    let mut activity = ActivityData::default();

    activity.organization.name = "Acme Widgets".to_string();
    activity.organization.industry = Industry::Manufacturing;
    activity.organization.reporting_year = 2023;
    activity.organization.num_employees = 250;

    activity.stationary.natural_gas_m3 = 45_000.0;
    activity.stationary.diesel_l = 2_000.0;
    activity.stationary.propane_l = 500.0;
    activity.stationary.fuel_oil_l = 1_200.0;

    activity.mobile.gasoline_l = 18_000.0;
    activity.mobile.diesel_l = 9_000.0;
    activity.mobile.jet_fuel_l = 0.0;

    activity.refrigerant.kind = "R-404A".to_string();
    activity.refrigerant.amount_kg = 12.5;

    activity.electricity.kwh = 850_000.0;
    activity.electricity.region = GridRegion::MidwestUs;
    activity.electricity.source = ElectricitySource::Grid;

    activity.travel.air_short_miles = 20_000.0;
    activity.travel.air_medium_miles = 60_000.0;
    activity.travel.air_long_miles = 150_000.0;
    activity.travel.car_rental_miles = 8_000.0;
    activity.travel.hotel_nights = 320.0;

    activity.commuting.avg_one_way_miles = 14.0;
    activity.commuting.work_days_per_year = 230;
    activity.commuting.mode = CommuteMode::Mixed;
    activity.commuting.breakdown = Some(ModeBreakdown {
        car: 0.45,
        carpool: 0.15,
        public_transit: 0.25,
        walking_biking: 0.05,
        work_from_home: 0.10,
    });

    activity.waste.landfill_tons = 65.0;
    activity.waste.recycled_tons = 40.0;
    activity.waste.composted_tons = 8.0;
    activity.waste.incinerated_tons = 3.0;

    activity.procurement.annual_spend_usd = 7_500_000.0;

    activity
}

#[test]
fn test_total_equals_scope_sum() {
    let result = FootprintCalculator::new().calculate(&full_activity());

    let scope_sum = result.scope(Scope::One) + result.scope(Scope::Two) + result.scope(Scope::Three);
    assert_relative_eq!(result.total_tonnes, scope_sum, epsilon = 1e-9);
}

#[test]
fn test_total_equals_category_sum() {
    let result = FootprintCalculator::new().calculate(&full_activity());

    let category_sum: f64 = EmissionCategory::ALL
        .iter()
        .map(|category| result.category(*category))
        .sum();
    assert_relative_eq!(result.total_tonnes, category_sum, epsilon = 1e-9);
}

#[test]
fn test_categories_aggregate_into_their_scopes() {
    let result = FootprintCalculator::new().calculate(&full_activity());

    for scope in [Scope::One, Scope::Two, Scope::Three] {
        let from_categories: f64 = EmissionCategory::ALL
            .iter()
            .filter(|category| category.scope() == scope)
            .map(|category| result.category(*category))
            .sum();
        assert_relative_eq!(result.scope(scope), from_categories, epsilon = 1e-9);
    }
}

#[test]
fn test_all_values_non_negative() {
    let result = FootprintCalculator::new().calculate(&full_activity());

    assert!(result.total_tonnes >= 0.0);
    for scope in [Scope::One, Scope::Two, Scope::Three] {
        assert!(result.scope(scope) >= 0.0, "{} went negative", scope);
    }
    for category in EmissionCategory::ALL {
        assert!(
            result.category(category) >= 0.0,
            "{} went negative",
            category
        );
    }
}

#[test]
fn test_scope_percentages_sum_to_100() {
    let result = FootprintCalculator::new().calculate(&full_activity());

    let percent_sum = result.scope_percentage(Scope::One)
        + result.scope_percentage(Scope::Two)
        + result.scope_percentage(Scope::Three);
    assert_relative_eq!(percent_sum, 100.0, epsilon = 1e-9);
}

#[test]
fn test_additivity_over_partial_inputs() {
    // Calculating each category in isolation and summing must agree with
    // one combined calculation.
    let calculator = FootprintCalculator::new();
    let full = full_activity();

    let mut electricity_only = ActivityData::default();
    electricity_only.electricity = full.electricity;

    let mut waste_only = ActivityData::default();
    waste_only.waste = full.waste;

    let mut combined = ActivityData::default();
    combined.electricity = full.electricity;
    combined.waste = full.waste;

    let isolated_sum = calculator.calculate(&electricity_only).total_tonnes
        + calculator.calculate(&waste_only).total_tonnes;
    let combined_total = calculator.calculate(&combined).total_tonnes;
    assert_relative_eq!(isolated_sum, combined_total, epsilon = 1e-9);
}

#[test]
fn test_result_survives_serialization() {
    let result = FootprintCalculator::new().calculate(&full_activity());

    let serialized = serde_json::to_string(&result).unwrap();
    let deserialized: ghgp_core::inventory::EmissionsResult =
        serde_json::from_str(&serialized).unwrap();

    assert_relative_eq!(
        deserialized.total_tonnes,
        result.total_tonnes,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        deserialized.by_scope.total(),
        result.by_scope.total(),
        epsilon = 1e-12
    );
}
