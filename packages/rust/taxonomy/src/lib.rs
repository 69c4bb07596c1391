//! The static taxonomy store: hand-curated industries and module lists.
//!
//! The taxonomy is the source of truth for which industries and modules
//! the platform advertises — the crawl is supplementary detail and never
//! adds to or removes from this set. It is authored here, constructed
//! once per process, and exposed read-only through [`Taxonomy::get`];
//! the builder takes its own deep copy so document mutation can never
//! reach back into the static data.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use industrykb_shared::{CompanyInfo, Industry, Module};

/// Fixed company display name.
pub const COMPANY_NAME: &str = "IndustryHub";

/// Fixed company description.
pub const COMPANY_DESCRIPTION: &str =
    "ERP platform providing tailored solutions for various industries";

/// The curated taxonomy: company identity, industries, and per-industry
/// module lists.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// Fixed company identity pair.
    pub company: CompanyInfo,
    /// All advertised industries, keyed by slug.
    pub industries: BTreeMap<String, Industry>,
    /// Curated module lists, keyed by industry slug. Industries without
    /// a curated list are simply absent.
    pub modules: BTreeMap<String, Vec<Module>>,
}

impl Taxonomy {
    /// Access the process-wide taxonomy, constructed on first use.
    pub fn get() -> &'static Taxonomy {
        static TAXONOMY: OnceLock<Taxonomy> = OnceLock::new();
        TAXONOMY.get_or_init(curated)
    }
}

fn industry(name: &str, description: &str, icon: &str) -> Industry {
    Industry {
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn module(id: u32, name: &str, description: &str, icon: &str) -> Module {
    Module {
        id,
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

/// Author the curated taxonomy.
fn curated() -> Taxonomy {
    let mut industries = BTreeMap::new();
    industries.insert(
        "education".to_string(),
        industry(
            "Education",
            "Solutions for schools, universities, and educational institutions",
            "🎓",
        ),
    );
    industries.insert(
        "manufacturing".to_string(),
        industry(
            "Manufacturing",
            "Industrial solutions for production and manufacturing processes",
            "🏭",
        ),
    );
    industries.insert(
        "retail".to_string(),
        industry(
            "Retail",
            "Comprehensive retail management and customer engagement tools",
            "🛒",
        ),
    );
    industries.insert(
        "food-beverage".to_string(),
        industry(
            "Food & Beverage",
            "Restaurant, catering, and food service management solutions",
            "🍽️",
        ),
    );
    industries.insert(
        "textile".to_string(),
        industry(
            "Textile",
            "Fashion, apparel, and textile industry management systems",
            "👕",
        ),
    );
    industries.insert(
        "healthcare".to_string(),
        industry(
            "Healthcare",
            "Medical and healthcare management solutions for providers",
            "❤️",
        ),
    );

    let mut modules = BTreeMap::new();
    modules.insert(
        "manufacturing".to_string(),
        vec![
            module(1, "Production Planning", "Plan and schedule manufacturing operations", "📋"),
            module(2, "Inventory Management", "Track raw materials and finished goods", "📦"),
            module(3, "Quality Control", "Monitor and ensure product quality standards", "✅"),
            module(4, "Equipment Maintenance", "Schedule and track machinery maintenance", "🔧"),
            module(5, "Supply Chain Management", "Manage suppliers and procurement", "🚚"),
            module(6, "Cost Analysis", "Analyze production costs and efficiency", "💰"),
            module(7, "Worker Safety", "Ensure workplace safety and compliance", "🦺"),
            module(8, "Order Management", "Handle customer orders and delivery", "📝"),
            module(9, "Compliance Tracking", "Ensure regulatory compliance", "📊"),
            module(10, "Workforce Management", "Manage staff schedules and productivity", "👥"),
        ],
    );
    modules.insert(
        "healthcare".to_string(),
        vec![
            module(1, "Patient Records", "Electronic health records and patient management", "📋"),
            module(2, "Appointment Scheduling", "Book and manage patient appointments", "📅"),
            module(3, "Billing & Insurance", "Handle medical billing and insurance claims", "💳"),
            module(4, "Prescription Management", "Manage prescriptions and medication tracking", "💊"),
            module(5, "Lab Results", "Track and manage laboratory test results", "🧪"),
            module(6, "Staff Management", "Manage healthcare staff schedules and credentials", "👩‍⚕️"),
            module(7, "Inventory Management", "Track medical supplies and equipment", "📦"),
            module(8, "Telemedicine", "Virtual consultations and remote care", "💻"),
            module(9, "Compliance Tracking", "Ensure HIPAA and regulatory compliance", "✅"),
            module(10, "Emergency Management", "Handle emergency cases and protocols", "🚨"),
        ],
    );
    modules.insert(
        "retail".to_string(),
        vec![
            module(1, "Point of Sale (POS)", "Complete checkout and payment processing", "💳"),
            module(2, "Inventory Management", "Track stock levels and product movement", "📦"),
            module(3, "Customer Management", "Manage customer profiles and loyalty programs", "👥"),
            module(4, "Sales Analytics", "Analyze sales trends and performance", "📊"),
            module(5, "E-commerce Integration", "Connect online and offline sales channels", "🌐"),
            module(6, "Staff Management", "Manage employee schedules and performance", "👤"),
            module(7, "Supplier Management", "Handle vendor relationships and orders", "🚚"),
            module(8, "Promotions & Discounts", "Create and manage promotional campaigns", "🏷️"),
            module(9, "Financial Reporting", "Generate financial reports and insights", "💰"),
            module(10, "Multi-Store Management", "Manage multiple retail locations", "🏪"),
        ],
    );

    Taxonomy {
        company: CompanyInfo {
            name: COMPANY_NAME.into(),
            description: COMPANY_DESCRIPTION.into(),
        },
        industries,
        modules,
    }
}
