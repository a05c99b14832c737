//! Subscription plans. Payment happens on the external checkout page.

use contracts::shared::plans::{PlanLimits, PlanTier};
use leptos::prelude::*;
use thaw::*;

fn quota(value: Option<u32>, unit: &str) -> String {
    match value {
        Some(n) => format!("{} {}", n, unit),
        None => format!("Sınırsız {}", unit),
    }
}

fn features(limits: &PlanLimits) -> Vec<String> {
    let mut out = vec![
        quota(limits.questions_per_day, "soru / gün"),
        quota(limits.petitions_per_month, "dilekçe / ay"),
        quota(limits.analyses_per_month, "sözleşme analizi / ay"),
    ];
    if limits.precedent_search {
        out.push("Emsal karar arama".to_string());
    }
    if limits.api_access {
        out.push("API erişimi".to_string());
    }
    out
}

#[component]
#[allow(non_snake_case)]
pub fn PlansPage() -> impl IntoView {
    view! {
        <div class="plans-grid">
            {PlanTier::all()
                .into_iter()
                .map(|tier| {
                    let limits = tier.limits();
                    let price = match limits.price {
                        Some(p) => format!("{} TL / ay", p),
                        None => "Ücretsiz".to_string(),
                    };
                    view! {
                        <div class="plan-card" class:featured=tier == PlanTier::Professional>
                            <h3>{tier.display_name()}</h3>
                            <div class="plan-price">{price}</div>
                            <ul class="plan-features">
                                {features(&limits)
                                    .into_iter()
                                    .map(|f| view! { <li>"✓ " {f}</li> })
                                    .collect_view()}
                            </ul>
                            {match tier.checkout_url() {
                                Some(url) => {
                                    view! {
                                        <a class="plan-buy" href=url target="_blank" rel="noopener noreferrer">
                                            "Satın Al"
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <Badge appearance=BadgeAppearance::Tint>"Mevcut Plan"</Badge>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_features() {
        let trial = features(&PlanTier::Trial.limits());
        assert_eq!(trial[0], "5 soru / gün");
        assert_eq!(trial[1], "1 dilekçe / ay");

        let enterprise = features(&PlanTier::Enterprise.limits());
        assert_eq!(enterprise[0], "Sınırsız soru / gün");
        assert!(enterprise.contains(&"API erişimi".to_string()));
    }
}
