//! Schema.org type inference from the declared business type.

/// Business types the tool knows how to classify. Anything else is treated
/// as a generic organization.
pub const BUSINESS_TYPES: &[&str] = &[
    "E-commerce",
    "SaaS/Software",
    "Blog/Content",
    "Portfolio",
    "Corporate/Business",
    "Restaurant/Food",
    "Health/Medical",
    "Education",
    "Real Estate",
    "Other Service",
];

/// Map a business type to its schema.org structured-data type.
///
/// Generic business categories resolve to `LocalBusiness` when the site
/// serves a physical location and `Organization` otherwise. Unknown types
/// fall back to `Organization`.
pub fn structured_data_type(business_type: &str, is_local: bool) -> &'static str {
    match business_type {
        "E-commerce" => "OnlineStore",
        "SaaS/Software" => "SoftwareApplication",
        "Blog/Content" => "Blog",
        "Portfolio" => "Person",
        "Restaurant/Food" => "Restaurant",
        "Health/Medical" => "MedicalBusiness",
        "Education" => "EducationalOrganization",
        "Real Estate" => "RealEstateAgent",
        "Corporate/Business" | "Other Service" => {
            if is_local {
                "LocalBusiness"
            } else {
                "Organization"
            }
        }
        _ => "Organization",
    }
}
