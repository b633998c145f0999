//! Carbon offset portfolio matching.
//!
//! Recommends a portfolio of verified carbon offset projects tailored to an
//! emissions profile:
//!
//! 1. Each project in the catalog is scored against the profile - industry
//!    match, largest-scope match, top-category matches, and location match,
//!    with a budget filter on the project's minimum price
//! 2. The top four scoring projects form a portfolio, with tonnage
//!    allocated proportionally to score
//! 3. When nothing scores, a diverse default portfolio is recommended
//!    instead
//!
//! Project data (price ranges, verification standards, locations,
//! co-benefits) describes the voluntary carbon market's major project
//! classes, from renewable energy through direct air capture.

use ghgp_core::activity::Industry;
use ghgp_core::inventory::{EmissionCategory, EmissionsResult, Scope};
use ghgp_core::FloatValue;
use serde::{Deserialize, Serialize};

/// What part of an emissions profile a project is best suited to offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionTarget {
    Scope(Scope),
    Category(EmissionCategory),
    /// Suitable regardless of the profile's shape
    AllScopes,
}

/// A verified carbon offset project class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetProject {
    /// Stable identifier (e.g. "wind_energy")
    pub id: String,
    pub name: String,
    pub description: String,
    /// (min, max) price in USD per tonne CO2e
    pub price_range: (FloatValue, FloatValue),
    pub verification_standards: Vec<String>,
    pub locations: Vec<String>,
    pub co_benefits: Vec<String>,
    pub best_for_industries: Vec<Industry>,
    pub best_for_emissions: Vec<EmissionTarget>,
}

/// A verification standard with a short description for reports.
#[derive(Debug, Clone, Copy)]
pub struct VerificationStandard {
    pub name: &'static str,
    pub description: &'static str,
}

/// The standards referenced by the project catalog.
pub const VERIFICATION_STANDARDS: [VerificationStandard; 8] = [
    VerificationStandard {
        name: "Gold Standard",
        description: "The Gold Standard for the Global Goals (GS4GG) is a standard for climate and development interventions that enables quantification of climate impacts and verification of SDG outcomes.",
    },
    VerificationStandard {
        name: "VCS",
        description: "Verified Carbon Standard (Verra) is the world's most widely used voluntary GHG program.",
    },
    VerificationStandard {
        name: "CDM",
        description: "Clean Development Mechanism is defined in the Kyoto Protocol for emission-reduction projects in developing countries.",
    },
    VerificationStandard {
        name: "CAR",
        description: "Climate Action Reserve is a national offsets program focused on GHG reduction in North America.",
    },
    VerificationStandard {
        name: "Plan Vivo",
        description: "Plan Vivo is a standard for community land use projects with a focus on smallholders and community groups.",
    },
    VerificationStandard {
        name: "ACR",
        description: "American Carbon Registry (ACR) is the first private voluntary GHG registry in the United States.",
    },
    VerificationStandard {
        name: "CCB",
        description: "Climate, Community & Biodiversity Standards evaluate land management projects from the beginning to development.",
    },
    VerificationStandard {
        name: "Puro.earth",
        description: "Puro.earth focuses on carbon removal methods with long-term storage and industrial carbon sequestration.",
    },
];

impl OffsetProject {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        name: &str,
        description: &str,
        price_range: (FloatValue, FloatValue),
        verification_standards: &[&str],
        locations: &[&str],
        co_benefits: &[&str],
        best_for_industries: &[Industry],
        best_for_emissions: &[EmissionTarget],
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_range,
            verification_standards: verification_standards.iter().map(|s| s.to_string()).collect(),
            locations: locations.iter().map(|s| s.to_string()).collect(),
            co_benefits: co_benefits.iter().map(|s| s.to_string()).collect(),
            best_for_industries: best_for_industries.to_vec(),
            best_for_emissions: best_for_emissions.to_vec(),
        }
    }
}

/// The default project catalog.
pub fn project_catalog() -> Vec<OffsetProject> {
    use EmissionCategory::*;
    use EmissionTarget::{AllScopes, Category};

    vec![
        OffsetProject::new(
            "wind_energy",
            "Wind Energy Projects",
            "Large-scale wind farms that generate clean electricity and displace fossil fuel generation.",
            (8.0, 20.0),
            &["Gold Standard", "VCS"],
            &["USA", "India", "China", "Brazil", "South Africa"],
            &["Job creation", "Energy independence", "Air quality improvement"],
            &[Industry::Manufacturing, Industry::Technology, Industry::FinancialServices],
            &[EmissionTarget::Scope(Scope::Two), Category(PurchasedElectricity)],
        ),
        OffsetProject::new(
            "solar_energy",
            "Solar Energy Projects",
            "Solar farms and distributed solar installations that generate clean electricity.",
            (10.0, 25.0),
            &["Gold Standard", "VCS"],
            &["USA", "India", "Mexico", "Egypt", "Australia"],
            &["Job creation", "Energy access", "Technology transfer"],
            &[Industry::Technology, Industry::Retail, Industry::Healthcare],
            &[EmissionTarget::Scope(Scope::Two), Category(PurchasedElectricity)],
        ),
        OffsetProject::new(
            "reforestation",
            "Reforestation Projects",
            "Planting trees in previously forested areas to sequester carbon and restore ecosystems.",
            (12.0, 30.0),
            &["Gold Standard", "VCS", "Plan Vivo"],
            &["Brazil", "Indonesia", "Kenya", "USA", "Costa Rica"],
            &["Biodiversity", "Watershed protection", "Community benefits"],
            &[Industry::FoodBeverage, Industry::Retail, Industry::FinancialServices],
            &[
                EmissionTarget::Scope(Scope::One),
                EmissionTarget::Scope(Scope::Three),
                Category(MobileCombustion),
                Category(BusinessTravel),
            ],
        ),
        OffsetProject::new(
            "avoided_deforestation",
            "Avoided Deforestation (REDD+)",
            "Protecting standing forests that would otherwise be cleared, preserving carbon stocks.",
            (5.0, 18.0),
            &["VCS", "CCB", "REDD+"],
            &["Brazil", "Indonesia", "Peru", "Congo Basin", "Colombia"],
            &["Biodiversity conservation", "Indigenous rights", "Community development"],
            &[Industry::Retail, Industry::FoodBeverage, Industry::FinancialServices],
            &[EmissionTarget::Scope(Scope::Three), Category(PurchasedGoods)],
        ),
        OffsetProject::new(
            "landfill_methane",
            "Landfill Methane Capture",
            "Capturing methane emissions from landfills for flaring or energy production.",
            (5.0, 15.0),
            &["VCS", "CAR", "ACR"],
            &["USA", "Brazil", "China", "South Africa", "Mexico"],
            &["Local air quality", "Energy generation", "Health benefits"],
            &[Industry::Retail, Industry::FoodBeverage, Industry::Manufacturing],
            &[EmissionTarget::Scope(Scope::Three), Category(WasteGeneration)],
        ),
        OffsetProject::new(
            "cookstoves",
            "Clean Cookstoves",
            "Distributing efficient cookstoves that reduce fuel consumption and indoor air pollution.",
            (8.0, 22.0),
            &["Gold Standard", "CDM"],
            &["Kenya", "India", "Guatemala", "Uganda", "Nepal"],
            &["Health benefits", "Women's empowerment", "Reduced fuel costs", "Reduced deforestation"],
            &[Industry::Retail, Industry::Healthcare, Industry::FoodBeverage],
            &[EmissionTarget::Scope(Scope::Three), Category(PurchasedGoods)],
        ),
        OffsetProject::new(
            "industrial_efficiency",
            "Industrial Energy Efficiency",
            "Implementing energy efficiency measures in industrial facilities to reduce emissions.",
            (10.0, 28.0),
            &["VCS", "CDM"],
            &["China", "India", "USA", "Mexico", "Vietnam"],
            &["Technology transfer", "Cost savings", "Local pollution reduction"],
            &[Industry::Manufacturing, Industry::Technology, Industry::Other],
            &[EmissionTarget::Scope(Scope::One), Category(StationaryCombustion)],
        ),
        OffsetProject::new(
            "transportation",
            "Low-Carbon Transportation",
            "Projects that reduce emissions from transportation through fuel switching or efficiency.",
            (15.0, 35.0),
            &["VCS", "Gold Standard"],
            &["USA", "Europe", "Brazil", "India", "China"],
            &["Air quality improvement", "Reduced congestion", "Technology advancement"],
            &[Industry::Technology, Industry::Retail, Industry::Healthcare],
            &[
                EmissionTarget::Scope(Scope::One),
                EmissionTarget::Scope(Scope::Three),
                Category(MobileCombustion),
                Category(BusinessTravel),
                Category(EmployeeCommuting),
            ],
        ),
        OffsetProject::new(
            "blue_carbon",
            "Blue Carbon (Coastal Ecosystems)",
            "Protecting and restoring mangroves, seagrass, and salt marshes which sequester large amounts of carbon.",
            (15.0, 40.0),
            &["VCS", "Plan Vivo"],
            &["Indonesia", "Philippines", "Mexico", "Kenya", "Madagascar"],
            &["Biodiversity", "Coastal protection", "Fisheries support", "Community livelihoods"],
            &[Industry::FoodBeverage, Industry::Retail, Industry::FinancialServices],
            &[EmissionTarget::Scope(Scope::Three), Category(PurchasedGoods)],
        ),
        OffsetProject::new(
            "direct_air_capture",
            "Direct Air Capture (DAC)",
            "Technology that removes CO2 directly from the atmosphere for permanent storage.",
            (200.0, 600.0),
            &["Puro.earth", "Carbon Engineering"],
            &["USA", "Canada", "Switzerland", "Iceland"],
            &["Technology development", "Permanent removal", "Scalable solution"],
            &[Industry::Technology, Industry::FinancialServices, Industry::Other],
            &[AllScopes],
        ),
    ]
}

/// Options controlling portfolio assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioOptions {
    /// Maximum acceptable price per tonne; projects whose minimum price
    /// exceeds this are filtered out
    pub budget_per_tonne: Option<FloatValue>,
    /// Geographic preference for project locations
    pub location: String,
    /// Share of total emissions to offset, in percent
    pub offset_percentage: FloatValue,
}

impl Default for PortfolioOptions {
    fn default() -> Self {
        Self {
            budget_per_tonne: None,
            location: "Global".to_string(),
            offset_percentage: 100.0,
        }
    }
}

/// One project's share of a recommended portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSlice {
    pub project: OffsetProject,
    /// Match score; 0 for slices from the general fallback portfolio
    pub score: u32,
    /// Share of the portfolio, in percent (one decimal)
    pub allocation_percent: FloatValue,
    /// unit: tonnes CO2e
    pub tonnes: FloatValue,
    /// (min, max) estimated cost in USD
    pub cost_range: (FloatValue, FloatValue),
}

/// A recommended portfolio of offset projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetPortfolio {
    /// unit: tonnes CO2e
    pub total_emissions: FloatValue,
    /// unit: tonnes CO2e
    pub emissions_to_offset: FloatValue,
    pub slices: Vec<PortfolioSlice>,
    /// True when no project matched the profile and the diverse default
    /// portfolio was used instead
    pub general_fallback: bool,
}

fn round1(value: FloatValue) -> FloatValue {
    (value * 10.0).round() / 10.0
}

fn round2(value: FloatValue) -> FloatValue {
    (value * 100.0).round() / 100.0
}

/// Cost in USD to offset the given emissions.
pub fn offset_cost(
    emissions: FloatValue,
    price_per_tonne: FloatValue,
    offset_percentage: FloatValue,
) -> FloatValue {
    round2(emissions * (offset_percentage / 100.0) * price_per_tonne)
}

/// Score a single project against an emissions profile.
///
/// Industry match scores 5, largest-scope match 4, each top-3 category
/// match 3, location match 2. A budget cap below the project's minimum
/// price zeroes the project out entirely.
fn score_project(
    project: &OffsetProject,
    result: &EmissionsResult,
    industry: Industry,
    top_categories: &[EmissionCategory],
    options: &PortfolioOptions,
) -> u32 {
    if let Some(budget) = options.budget_per_tonne {
        if project.price_range.0 > budget {
            return 0;
        }
    }

    let mut score = 0;

    if project.best_for_industries.contains(&industry) {
        score += 5;
    }

    let largest = result.largest_scope();
    if project
        .best_for_emissions
        .iter()
        .any(|target| matches!(target, EmissionTarget::AllScopes)
            || *target == EmissionTarget::Scope(largest))
    {
        score += 4;
    }

    for category in top_categories {
        if project
            .best_for_emissions
            .contains(&EmissionTarget::Category(*category))
        {
            score += 3;
        }
    }

    if project
        .locations
        .iter()
        .any(|l| l == &options.location || l == "Global")
    {
        score += 2;
    }

    score
}

/// Assemble an offset portfolio matched to an emissions profile.
///
/// The top four scoring projects are allocated shares proportional to
/// their scores. When no project scores above zero (for example under a
/// very restrictive budget with no profile match), a diverse default
/// portfolio with equal allocation is returned instead.
pub fn recommend_portfolio(
    result: &EmissionsResult,
    industry: Industry,
    options: &PortfolioOptions,
) -> OffsetPortfolio {
    let total_emissions = result.by_scope.total();
    let emissions_to_offset = total_emissions * (options.offset_percentage / 100.0);

    let top_categories: Vec<EmissionCategory> = result
        .ranked_categories()
        .into_iter()
        .take(3)
        .map(|(category, _)| category)
        .collect();

    let catalog = project_catalog();
    let mut scored: Vec<(OffsetProject, u32)> = catalog
        .into_iter()
        .map(|project| {
            let score = score_project(&project, result, industry, &top_categories, options);
            (project, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();
    // Stable sort keeps the catalog order among equal scores
    scored.sort_by_key(|(_, score)| std::cmp::Reverse(*score));

    if scored.is_empty() {
        log::debug!("no offset project matched the profile, using the general portfolio");
        return general_portfolio(total_emissions, emissions_to_offset, options);
    }

    scored.truncate(4);
    let total_score: u32 = scored.iter().map(|(_, score)| score).sum();

    let slices = scored
        .into_iter()
        .map(|(project, score)| {
            let allocation = if total_score > 0 {
                score as FloatValue / total_score as FloatValue * 100.0
            } else {
                25.0
            };
            make_slice(project, score, allocation, emissions_to_offset)
        })
        .collect();

    OffsetPortfolio {
        total_emissions,
        emissions_to_offset,
        slices,
        general_fallback: false,
    }
}

/// The diverse default portfolio used when nothing matches.
fn general_portfolio(
    total_emissions: FloatValue,
    emissions_to_offset: FloatValue,
    options: &PortfolioOptions,
) -> OffsetPortfolio {
    const DIVERSE_IDS: [&str; 4] = [
        "wind_energy",
        "reforestation",
        "landfill_methane",
        "cookstoves",
    ];

    let catalog = project_catalog();
    let mut projects: Vec<OffsetProject> = catalog
        .iter()
        .filter(|p| DIVERSE_IDS.contains(&p.id.as_str()))
        .filter(|p| match options.budget_per_tonne {
            Some(budget) => p.price_range.0 <= budget,
            None => true,
        })
        .cloned()
        .collect();

    // Wind is the last resort when the budget excludes everything
    if projects.is_empty() {
        projects = catalog
            .into_iter()
            .filter(|p| p.id == "wind_energy")
            .collect();
    }

    let allocation = 100.0 / projects.len() as FloatValue;
    let slices = projects
        .into_iter()
        .map(|project| make_slice(project, 0, allocation, emissions_to_offset))
        .collect();

    OffsetPortfolio {
        total_emissions,
        emissions_to_offset,
        slices,
        general_fallback: true,
    }
}

fn make_slice(
    project: OffsetProject,
    score: u32,
    allocation_percent: FloatValue,
    emissions_to_offset: FloatValue,
) -> PortfolioSlice {
    let tonnes = allocation_percent / 100.0 * emissions_to_offset;
    let cost_range = (
        round2(tonnes * project.price_range.0),
        round2(tonnes * project.price_range.1),
    );
    PortfolioSlice {
        project,
        score,
        allocation_percent: round1(allocation_percent),
        tonnes: round2(tonnes),
        cost_range,
    }
}
