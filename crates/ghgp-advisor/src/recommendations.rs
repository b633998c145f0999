//! Reduction recommendations.
//!
//! Generates tailored reduction actions for each emission category with
//! nonzero emissions. The three largest categories are flagged as
//! priorities and lead with a stronger "PRIORITY" action; some industries
//! get additional category-specific actions on top of the common list.

use ghgp_core::activity::Industry;
use ghgp_core::inventory::{EmissionCategory, EmissionsResult};
use serde::{Deserialize, Serialize};

/// Reduction advice for one emission category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAdvice {
    pub category: EmissionCategory,
    /// Whether this category is among the three largest contributors
    pub priority: bool,
    /// Suggested actions, strongest first for priority categories
    pub actions: Vec<String>,
}

/// Generate recommendations for every category with nonzero emissions.
///
/// Categories are returned in report order; the top three contributors are
/// flagged as priorities.
pub fn generate_recommendations(
    result: &EmissionsResult,
    industry: Industry,
) -> Vec<CategoryAdvice> {
    let top_categories: Vec<EmissionCategory> = result
        .ranked_categories()
        .into_iter()
        .take(3)
        .map(|(category, _)| category)
        .collect();

    EmissionCategory::ALL
        .iter()
        .filter(|category| result.category(**category) > 0.0)
        .map(|category| {
            let priority = top_categories.contains(category);
            CategoryAdvice {
                category: *category,
                priority,
                actions: category_actions(*category, industry, priority),
            }
        })
        .collect()
}

/// Actions for a single category, with industry extras and the priority
/// action applied.
fn category_actions(
    category: EmissionCategory,
    industry: Industry,
    is_priority: bool,
) -> Vec<String> {
    let mut actions: Vec<String> = base_actions(category)
        .iter()
        .map(|s| s.to_string())
        .collect();

    for extra in industry_actions(category, industry) {
        actions.push(extra.to_string());
    }

    if is_priority {
        if let Some(action) = priority_action(category) {
            actions.insert(0, action.to_string());
        }
    }

    actions
}

fn base_actions(category: EmissionCategory) -> &'static [&'static str] {
    match category {
        EmissionCategory::StationaryCombustion => &[
            "Conduct an energy audit to identify heating system inefficiencies",
            "Implement a preventive maintenance program for combustion equipment",
            "Upgrade to high-efficiency boilers and furnaces",
            "Improve building insulation and seal air leaks",
            "Install programmable thermostats and optimize temperature settings",
        ],
        EmissionCategory::MobileCombustion => &[
            "Develop a green fleet management strategy",
            "Replace older vehicles with fuel-efficient or electric models",
            "Implement driver training for fuel-efficient driving techniques",
            "Optimize delivery routes and logistics planning",
            "Consider alternative-fuel vehicles where appropriate",
        ],
        EmissionCategory::Refrigerants => &[
            "Implement a refrigerant management and leak detection program",
            "Transition to refrigerants with lower global warming potential",
            "Ensure proper maintenance of cooling equipment",
            "Train technicians on best practices for refrigerant handling",
            "Consider natural refrigerants for new equipment purchases",
        ],
        EmissionCategory::PurchasedElectricity => &[
            "Conduct a lighting audit and upgrade to LED technology",
            "Install occupancy sensors and daylight harvesting systems",
            "Purchase renewable energy or renewable energy credits",
            "Optimize HVAC scheduling and operations",
            "Investigate on-site renewable energy generation",
        ],
        EmissionCategory::BusinessTravel => &[
            "Develop a sustainable travel policy",
            "Increase use of video conferencing to reduce non-essential travel",
            "When travel is necessary, prioritize direct flights over connections",
            "Consider carbon offsets for unavoidable air travel",
            "Choose hotels with green certifications",
        ],
        EmissionCategory::EmployeeCommuting => &[
            "Implement a flexible work policy including remote work options",
            "Offer incentives for carpooling and public transit use",
            "Install EV charging stations at your facility",
            "Create a bike-friendly workplace with secure storage and showers",
            "Consider a compressed work week (e.g., 4 day/10 hour schedule)",
        ],
        EmissionCategory::WasteGeneration => &[
            "Conduct a waste audit to identify reduction opportunities",
            "Implement a comprehensive recycling program",
            "Start composting organic waste",
            "Set targets for zero waste to landfill",
            "Engage employees in waste reduction initiatives",
        ],
        EmissionCategory::PurchasedGoods => &[
            "Develop sustainable procurement guidelines",
            "Engage suppliers on their emissions reduction efforts",
            "Select products with environmental certifications",
            "Reduce packaging or switch to sustainable packaging",
            "Conduct lifecycle assessments for key products",
        ],
    }
}

fn industry_actions(category: EmissionCategory, industry: Industry) -> &'static [&'static str] {
    match (category, industry) {
        (EmissionCategory::StationaryCombustion, Industry::Manufacturing) => &[
            "Recover and reuse waste heat from industrial processes",
            "Explore fuel switching to lower-carbon alternatives",
        ],
        (EmissionCategory::MobileCombustion, Industry::Retail | Industry::FoodBeverage) => {
            &["Optimize delivery schedules to reduce empty miles"]
        }
        (EmissionCategory::PurchasedElectricity, Industry::Technology) => {
            &["Implement server virtualization and data center efficiency measures"]
        }
        (EmissionCategory::WasteGeneration, Industry::FoodBeverage) => &[
            "Donate excess food to local food banks",
            "Implement food waste tracking and prevention measures",
        ],
        (EmissionCategory::PurchasedGoods, Industry::Manufacturing) => {
            &["Redesign products for reduced material use and longer lifespan"]
        }
        _ => &[],
    }
}

/// The stronger leading action for priority categories.
///
/// Refrigerants have no dedicated priority action.
fn priority_action(category: EmissionCategory) -> Option<&'static str> {
    match category {
        EmissionCategory::StationaryCombustion => {
            Some("PRIORITY: Consider a comprehensive energy efficiency retrofit")
        }
        EmissionCategory::MobileCombustion => {
            Some("PRIORITY: Develop a fleet electrification strategy and timeline")
        }
        EmissionCategory::PurchasedElectricity => {
            Some("PRIORITY: Consider a power purchase agreement (PPA) for renewable energy")
        }
        EmissionCategory::BusinessTravel => {
            Some("PRIORITY: Set a business travel carbon budget with reduction targets")
        }
        EmissionCategory::EmployeeCommuting => {
            Some("PRIORITY: Implement a comprehensive sustainable commuting program")
        }
        EmissionCategory::WasteGeneration => {
            Some("PRIORITY: Establish a formal zero waste program with measurable targets")
        }
        EmissionCategory::PurchasedGoods => {
            Some("PRIORITY: Engage top suppliers on science-based emissions reduction targets")
        }
        EmissionCategory::Refrigerants => None,
    }
}
