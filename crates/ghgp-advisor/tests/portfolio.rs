//! End-to-end tests across the calculator and the advisory collaborators.
//!
//! These tests run a realistic activity record through the full pipeline -
//! calculate, recommend, match offsets, render - and verify the pieces
//! agree with each other.

use approx::assert_relative_eq;
use ghgp_advisor::offsets::{recommend_portfolio, PortfolioOptions};
use ghgp_advisor::recommendations::generate_recommendations;
use ghgp_advisor::report::render_markdown;
use ghgp_core::activity::{ActivityData, ElectricitySource, GridRegion, Industry};
use ghgp_core::protocol::FootprintCalculator;

/// A technology company with an electricity-dominated footprint.
fn tech_company() -> ActivityData {
    let mut activity = ActivityData::default();
    activity.organization.name = "Vector Systems".to_string();
    activity.organization.industry = Industry::Technology;
    activity.organization.reporting_year = 2023;
    activity.organization.num_employees = 400;

    activity.electricity.kwh = 4_000_000.0;
    activity.electricity.region = GridRegion::WestUs;
    activity.electricity.source = ElectricitySource::Grid;

    activity.travel.air_medium_miles = 250_000.0;
    activity.travel.hotel_nights = 900.0;

    activity.commuting.avg_one_way_miles = 11.0;

    activity.procurement.annual_spend_usd = 12_000_000.0;

    activity
}

#[test]
fn test_pipeline_recommends_priority_for_largest_category() {
    let activity = tech_company();
    let result = FootprintCalculator::new().calculate(&activity);
    let advice = generate_recommendations(&result, activity.organization.industry);

    // Purchased goods dominate this profile (12M USD at 386 t/M$)
    let top = result.ranked_categories()[0].0;
    let top_advice = advice.iter().find(|a| a.category == top).unwrap();
    assert!(top_advice.priority);
    assert!(top_advice.actions[0].starts_with("PRIORITY:"));
}

#[test]
fn test_portfolio_covers_requested_share_of_emissions() {
    let activity = tech_company();
    let result = FootprintCalculator::new().calculate(&activity);

    let options = PortfolioOptions {
        offset_percentage: 80.0,
        ..Default::default()
    };
    let portfolio = recommend_portfolio(&result, activity.organization.industry, &options);

    assert_relative_eq!(
        portfolio.emissions_to_offset,
        result.total_tonnes * 0.8,
        epsilon = 1e-9
    );

    let allocated: f64 = portfolio.slices.iter().map(|s| s.tonnes).sum();
    // Per-slice rounding to two decimals bounds the drift
    assert!((allocated - portfolio.emissions_to_offset).abs() < 0.1);

    // Costs are derived from the unrounded tonnage, so they may drift from
    // `tonnes * price` by up to half a cent of tonnage times the price.
    for slice in &portfolio.slices {
        assert!(slice.cost_range.0 <= slice.cost_range.1);
        let (price_min, price_max) = slice.project.price_range;
        assert!((slice.cost_range.0 - slice.tonnes * price_min).abs() <= 0.005 * price_min + 0.005);
        assert!((slice.cost_range.1 - slice.tonnes * price_max).abs() <= 0.005 * price_max + 0.005);
    }
}

#[test]
fn test_portfolio_matches_industry_and_profile() {
    let activity = tech_company();
    let result = FootprintCalculator::new().calculate(&activity);
    let portfolio = recommend_portfolio(
        &result,
        activity.organization.industry,
        &PortfolioOptions::default(),
    );

    assert!(!portfolio.general_fallback);
    assert!(portfolio.slices.len() <= 4);
    // Every recommended project scored against this profile
    assert!(portfolio.slices.iter().all(|s| s.score > 0));
}

#[test]
fn test_report_renders_full_pipeline() {
    let activity = tech_company();
    let result = FootprintCalculator::new().calculate(&activity);
    let advice = generate_recommendations(&result, activity.organization.industry);
    let report = render_markdown(&activity.organization, &result, &advice);

    assert!(report.contains("Vector Systems"));
    assert!(report.contains("Scope 1"));
    assert!(report.contains("Scope 3"));
    assert!(report.contains("## Recommendations"));
    // Every advised category appears in the report
    for entry in &advice {
        assert!(report.contains(&entry.category.to_string()));
    }
}
