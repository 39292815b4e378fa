//! Repeated-section expansion and derived values for the page renderer.
//!
//! Icon assignment is positional: entry `i` gets catalog icon `i % 4`,
//! independent of the entry's content. Lists shorter than the catalog render
//! fewer cards (no padding); longer lists cycle back through the catalog.

use std::fmt::Write;

use crate::content::models::SectionEntry;

/// Icon catalog for service cards, cycled by list index.
pub const SERVICE_ICONS: [&str; 4] = [
    "fas fa-cogs",
    "fas fa-users",
    "fas fa-chart-line",
    "fas fa-lightbulb",
];

/// Icon catalog for feature items, cycled by list index.
pub const FEATURE_ICONS: [&str; 4] = [
    "fas fa-check-circle",
    "fas fa-star",
    "fas fa-shield-alt",
    "fas fa-rocket",
];

/// Derives the contact email local part from the business name:
/// lowercase first, then strip spaces, in that order. No other
/// sanitization — this mirrors the published contact address rule.
pub fn derive_email(business_name: &str) -> String {
    let slug = business_name.to_lowercase().replace(' ', "");
    format!("info@{slug}.com")
}

/// Expands the services list into card markup, in list order.
pub fn expand_service_cards(services: &[SectionEntry]) -> String {
    let mut out = String::new();
    for (i, service) in services.iter().enumerate() {
        let icon = SERVICE_ICONS[i % SERVICE_ICONS.len()];
        let _ = write!(
            out,
            r#"<div class="service-card">
                    <div class="service-icon"><i class="{icon}"></i></div>
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>"#,
            title = service.title,
            description = service.description,
        );
    }
    out
}

/// Expands the features list into item markup, in list order.
pub fn expand_feature_items(features: &[SectionEntry]) -> String {
    let mut out = String::new();
    for (i, feature) in features.iter().enumerate() {
        let icon = FEATURE_ICONS[i % FEATURE_ICONS.len()];
        let _ = write!(
            out,
            r#"<div class="feature-item">
                    <div class="feature-icon"><i class="{icon}"></i></div>
                    <div class="feature-text">
                        <h4>{title}</h4>
                        <p>{description}</p>
                    </div>
                </div>"#,
            title = feature.title,
            description = feature.description,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<SectionEntry> {
        (0..n)
            .map(|i| SectionEntry {
                title: format!("Entry {i}"),
                description: format!("Description {i}"),
            })
            .collect()
    }

    // ── derive_email ────────────────────────────────────────────────────────

    #[test]
    fn test_derive_email_multi_word_name() {
        assert_eq!(
            derive_email("Bella Vista Restaurant"),
            "info@bellavistarestaurant.com"
        );
    }

    #[test]
    fn test_derive_email_short_name() {
        assert_eq!(derive_email("A B"), "info@ab.com");
    }

    #[test]
    fn test_derive_email_keeps_punctuation() {
        // Only spaces are stripped; other characters pass through untouched.
        assert_eq!(derive_email("O'Brien & Sons"), "info@o'brien&sons.com");
    }

    // ── expansion ───────────────────────────────────────────────────────────

    #[test]
    fn test_four_services_get_four_distinct_icons() {
        let html = expand_service_cards(&entries(4));
        for icon in SERVICE_ICONS {
            assert!(html.contains(icon), "missing icon {icon}");
        }
        assert_eq!(html.matches(r#"<div class="service-card">"#).count(), 4);
    }

    #[test]
    fn test_fifth_service_reuses_first_icon() {
        let html = expand_service_cards(&entries(5));
        // Icons 0..3 each appear once for the first four cards; the fifth
        // card cycles back to icon 0.
        assert_eq!(html.matches(SERVICE_ICONS[0]).count(), 2);
        assert_eq!(html.matches(SERVICE_ICONS[1]).count(), 1);
    }

    #[test]
    fn test_short_list_renders_fewer_cards_without_padding() {
        let html = expand_service_cards(&entries(2));
        assert_eq!(html.matches(r#"<div class="service-card">"#).count(), 2);
        assert!(!html.contains(SERVICE_ICONS[2]));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(expand_service_cards(&[]), "");
        assert_eq!(expand_feature_items(&[]), "");
    }

    #[test]
    fn test_expansion_preserves_list_order() {
        let html = expand_feature_items(&entries(3));
        let first = html.find("Entry 0").unwrap();
        let second = html.find("Entry 1").unwrap();
        let third = html.find("Entry 2").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_feature_items_use_feature_catalog() {
        let html = expand_feature_items(&entries(1));
        assert!(html.contains(FEATURE_ICONS[0]));
        assert!(!html.contains(SERVICE_ICONS[0]));
    }
}
