//! Report rendering.
//!
//! Renders a footprint result, with its recommendations, into a Markdown
//! document suitable for export. Binary document formats (PDF, Excel) are
//! a concern of the consuming application; this module produces the text
//! content they would lay out.

use crate::recommendations::CategoryAdvice;
use ghgp_core::activity::OrganizationInfo;
use ghgp_core::inventory::{EmissionCategory, EmissionsResult, Scope};
use std::fmt::Write;

/// Render a complete footprint report as Markdown.
pub fn render_markdown(
    organization: &OrganizationInfo,
    result: &EmissionsResult,
    advice: &[CategoryAdvice],
) -> String {
    let mut out = String::new();

    writeln!(out, "# Carbon Footprint Report").unwrap();
    writeln!(out).unwrap();
    if !organization.name.is_empty() {
        writeln!(out, "**Organization:** {}", organization.name).unwrap();
    }
    writeln!(out, "**Industry:** {}", organization.industry).unwrap();
    writeln!(out, "**Reporting Year:** {}", organization.reporting_year).unwrap();
    writeln!(out, "**Number of Employees:** {}", organization.num_employees).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Total Carbon Footprint").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{:.2} tonnes CO2e", result.total_tonnes).unwrap();
    if let Some(intensity) = result.per_employee(organization.num_employees) {
        writeln!(out, "({:.2} tonnes CO2e per employee)", intensity).unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "## Emissions by Scope").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "| Scope | Emissions (tonnes CO2e) | Percentage |").unwrap();
    writeln!(out, "|-------|------------------------:|-----------:|").unwrap();
    for scope in [Scope::One, Scope::Two, Scope::Three] {
        writeln!(
            out,
            "| {} | {:.2} | {:.1}% |",
            scope,
            result.scope(scope),
            result.scope_percentage(scope)
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "## Emissions by Category").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "| Category | Emissions (tonnes CO2e) |").unwrap();
    writeln!(out, "|----------|------------------------:|").unwrap();
    for category in EmissionCategory::ALL {
        writeln!(out, "| {} | {:.2} |", category, result.category(category)).unwrap();
    }
    writeln!(out).unwrap();

    if !advice.is_empty() {
        writeln!(out, "## Recommendations").unwrap();
        for entry in advice {
            writeln!(out).unwrap();
            if entry.priority {
                writeln!(out, "### {} (priority)", entry.category).unwrap();
            } else {
                writeln!(out, "### {}", entry.category).unwrap();
            }
            for action in &entry.actions {
                writeln!(out, "- {}", action).unwrap();
            }
        }
    }

    out
}
