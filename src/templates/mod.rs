//! Template catalog module
//!
//! The catalog is versioned data, not logic: three complete HTML documents
//! embedded at compile time, each carrying the placeholder tokens
//! `LOGO_PLACEHOLDER`, `COMPANY_NAME`, and `DOMAIN_PLACEHOLDER` for
//! client-side substitution. IDs are unique and stable across releases.

use serde::Serialize;

/// One available document template and its full HTML content
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub html: &'static str,
}

/// Fixed, ordered catalog returned by the templates endpoint
pub static CATALOG: [TemplateDescriptor; 3] = [
    TemplateDescriptor {
        id: 1,
        name: "Basic Template",
        description: "A simple template with header, content, and footer",
        html: include_str!("../../templates/basic.html"),
    },
    TemplateDescriptor {
        id: 2,
        name: "Business Report",
        description: "A professional template for business reports",
        html: include_str!("../../templates/business_report.html"),
    },
    TemplateDescriptor {
        id: 3,
        name: "Newsletter",
        description: "A template for newsletters and announcements",
        html: include_str!("../../templates/newsletter.html"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_stable_ids() {
        let ids: Vec<u32> = CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn every_template_carries_placeholder_tokens() {
        for template in &CATALOG {
            assert!(!template.html.is_empty(), "{} is empty", template.name);
            for token in ["LOGO_PLACEHOLDER", "COMPANY_NAME", "DOMAIN_PLACEHOLDER"] {
                assert!(
                    template.html.contains(token),
                    "{} is missing {token}",
                    template.name
                );
            }
        }
    }

    #[test]
    fn descriptors_serialize_with_expected_fields() {
        let json = serde_json::to_value(&CATALOG[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Basic Template");
        assert!(json["html"].as_str().unwrap().contains("<!DOCTYPE html>"));
    }
}
