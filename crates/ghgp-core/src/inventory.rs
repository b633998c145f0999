//! Derived emissions results.
//!
//! [`EmissionsResult`] is what the scope calculator produces: the total
//! footprint in tonnes CO2e, a breakdown by the three GHG Protocol scopes,
//! and a breakdown by the eight activity categories. It is derived data,
//! never mutated after computation, and is what downstream collaborators
//! (charting, recommendations, offset matching, export) consume.
//!
//! Invariant: `total_tonnes == by_scope.total() == by_category.total()`
//! within floating-point tolerance, and every value is non-negative for
//! non-negative inputs.

use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GHG Protocol scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Direct emissions from owned sources
    One,
    /// Indirect emissions from purchased energy
    Two,
    /// Other indirect value-chain emissions
    Three,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Scope::One => "Scope 1",
            Scope::Two => "Scope 2",
            Scope::Three => "Scope 3",
        };
        write!(f, "{}", label)
    }
}

/// The eight named emission categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionCategory {
    StationaryCombustion,
    MobileCombustion,
    Refrigerants,
    PurchasedElectricity,
    BusinessTravel,
    EmployeeCommuting,
    WasteGeneration,
    PurchasedGoods,
}

impl EmissionCategory {
    /// All categories in report order.
    pub const ALL: [EmissionCategory; 8] = [
        EmissionCategory::StationaryCombustion,
        EmissionCategory::MobileCombustion,
        EmissionCategory::Refrigerants,
        EmissionCategory::PurchasedElectricity,
        EmissionCategory::BusinessTravel,
        EmissionCategory::EmployeeCommuting,
        EmissionCategory::WasteGeneration,
        EmissionCategory::PurchasedGoods,
    ];

    /// The scope this category is classified under.
    pub fn scope(&self) -> Scope {
        match self {
            EmissionCategory::StationaryCombustion
            | EmissionCategory::MobileCombustion
            | EmissionCategory::Refrigerants => Scope::One,
            EmissionCategory::PurchasedElectricity => Scope::Two,
            EmissionCategory::BusinessTravel
            | EmissionCategory::EmployeeCommuting
            | EmissionCategory::WasteGeneration
            | EmissionCategory::PurchasedGoods => Scope::Three,
        }
    }
}

impl fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmissionCategory::StationaryCombustion => "Stationary Combustion",
            EmissionCategory::MobileCombustion => "Mobile Combustion",
            EmissionCategory::Refrigerants => "Refrigerants",
            EmissionCategory::PurchasedElectricity => "Purchased Electricity",
            EmissionCategory::BusinessTravel => "Business Travel",
            EmissionCategory::EmployeeCommuting => "Employee Commuting",
            EmissionCategory::WasteGeneration => "Waste Generation",
            EmissionCategory::PurchasedGoods => "Purchased Goods & Services",
        };
        write!(f, "{}", label)
    }
}

/// Emissions by GHG Protocol scope.
/// unit: tonnes CO2e
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScopeBreakdown {
    pub scope1: FloatValue,
    pub scope2: FloatValue,
    pub scope3: FloatValue,
}

impl ScopeBreakdown {
    pub fn get(&self, scope: Scope) -> FloatValue {
        match scope {
            Scope::One => self.scope1,
            Scope::Two => self.scope2,
            Scope::Three => self.scope3,
        }
    }

    pub fn total(&self) -> FloatValue {
        self.scope1 + self.scope2 + self.scope3
    }
}

/// Emissions by activity category.
/// unit: tonnes CO2e
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub stationary_combustion: FloatValue,
    pub mobile_combustion: FloatValue,
    pub refrigerants: FloatValue,
    pub purchased_electricity: FloatValue,
    pub business_travel: FloatValue,
    pub employee_commuting: FloatValue,
    pub waste_generation: FloatValue,
    pub purchased_goods: FloatValue,
}

impl CategoryBreakdown {
    pub fn get(&self, category: EmissionCategory) -> FloatValue {
        match category {
            EmissionCategory::StationaryCombustion => self.stationary_combustion,
            EmissionCategory::MobileCombustion => self.mobile_combustion,
            EmissionCategory::Refrigerants => self.refrigerants,
            EmissionCategory::PurchasedElectricity => self.purchased_electricity,
            EmissionCategory::BusinessTravel => self.business_travel,
            EmissionCategory::EmployeeCommuting => self.employee_commuting,
            EmissionCategory::WasteGeneration => self.waste_generation,
            EmissionCategory::PurchasedGoods => self.purchased_goods,
        }
    }

    pub fn total(&self) -> FloatValue {
        EmissionCategory::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }

    /// All categories with their values, in report order.
    pub fn entries(&self) -> Vec<(EmissionCategory, FloatValue)> {
        EmissionCategory::ALL
            .iter()
            .map(|category| (*category, self.get(*category)))
            .collect()
    }
}

/// The result of one footprint calculation.
///
/// Produced by
/// [`FootprintCalculator::calculate`](crate::protocol::FootprintCalculator::calculate);
/// not intended to be constructed by hand.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmissionsResult {
    /// Total footprint
    /// unit: tonnes CO2e
    pub total_tonnes: FloatValue,
    pub by_scope: ScopeBreakdown,
    pub by_category: CategoryBreakdown,
}

impl EmissionsResult {
    /// Emissions attributed to a single scope.
    pub fn scope(&self, scope: Scope) -> FloatValue {
        self.by_scope.get(scope)
    }

    /// Emissions attributed to a single category.
    pub fn category(&self, category: EmissionCategory) -> FloatValue {
        self.by_category.get(category)
    }

    /// Share of the total attributed to a scope, in percent.
    /// Returns 0 for an empty footprint.
    pub fn scope_percentage(&self, scope: Scope) -> FloatValue {
        if self.total_tonnes > 0.0 {
            self.by_scope.get(scope) / self.total_tonnes * 100.0
        } else {
            0.0
        }
    }

    /// Categories with nonzero emissions, largest first.
    ///
    /// This ordering drives priority flagging in recommendations and
    /// scoring in offset matching.
    pub fn ranked_categories(&self) -> Vec<(EmissionCategory, FloatValue)> {
        let mut ranked: Vec<_> = self
            .by_category
            .entries()
            .into_iter()
            .filter(|(_, tonnes)| *tonnes > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// The scope contributing the most emissions.
    pub fn largest_scope(&self) -> Scope {
        let mut largest = Scope::One;
        for scope in [Scope::Two, Scope::Three] {
            if self.by_scope.get(scope) > self.by_scope.get(largest) {
                largest = scope;
            }
        }
        largest
    }

    /// Intensity per employee, or `None` when the headcount is zero.
    /// unit: tonnes CO2e per employee
    pub fn per_employee(&self, num_employees: u32) -> Option<FloatValue> {
        if num_employees == 0 {
            None
        } else {
            Some(self.total_tonnes / num_employees as FloatValue)
        }
    }
}
