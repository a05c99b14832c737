//! Subscription plans and usage limits.
//!
//! The identity/data service owns the user record; these functions only
//! interpret the plan name, end dates and usage counters it hands back.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Trial,
    Professional,
    Enterprise,
}

/// Per-plan quotas. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub questions_per_day: Option<u32>,
    pub petitions_per_month: Option<u32>,
    pub analyses_per_month: Option<u32>,
    pub precedent_search: bool,
    pub api_access: bool,
    /// Monthly price in TRY.
    pub price: Option<u32>,
}

impl PlanTier {
    pub fn all() -> [PlanTier; 3] {
        [PlanTier::Trial, PlanTier::Professional, PlanTier::Enterprise]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Trial => "trial",
            PlanTier::Professional => "professional",
            PlanTier::Enterprise => "enterprise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(PlanTier::Trial),
            "professional" => Some(PlanTier::Professional),
            "enterprise" => Some(PlanTier::Enterprise),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Trial => "Deneme",
            PlanTier::Professional => "Profesyonel",
            PlanTier::Enterprise => "Kurumsal",
        }
    }

    pub fn limits(&self) -> PlanLimits {
        match self {
            PlanTier::Trial => PlanLimits {
                questions_per_day: Some(5),
                petitions_per_month: Some(1),
                analyses_per_month: Some(2),
                precedent_search: true,
                api_access: false,
                price: None,
            },
            PlanTier::Professional => PlanLimits {
                questions_per_day: None,
                petitions_per_month: Some(20),
                analyses_per_month: Some(10),
                precedent_search: true,
                api_access: false,
                price: Some(1200),
            },
            PlanTier::Enterprise => PlanLimits {
                questions_per_day: None,
                petitions_per_month: None,
                analyses_per_month: None,
                precedent_search: true,
                api_access: true,
                price: Some(2000),
            },
        }
    }

    /// Third-party checkout page for paid plans.
    pub fn checkout_url(&self) -> Option<&'static str> {
        match self {
            PlanTier::Trial => None,
            PlanTier::Professional => Some("https://www.shopier.com/justlawai/42631944"),
            PlanTier::Enterprise => Some("https://www.shopier.com/justlawai/42631931"),
        }
    }
}

/// Resolved plan state of a user at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStatus {
    Active { tier: PlanTier, days_left: i64 },
    Expired,
    None,
}

/// Whole days remaining until `end`, rounded up.
pub fn days_left(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (end - now).num_seconds();
    if secs <= 0 {
        return 0;
    }
    (secs + 86_399) / 86_400
}

/// Decide the active plan from the stored user record.
///
/// A running premium period wins over the trial; a trial past its end date
/// reads as expired.
pub fn resolve_plan(
    plan: &str,
    trial_end: Option<DateTime<Utc>>,
    premium_end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> PlanStatus {
    if let Some(end) = premium_end {
        if end > now {
            if let Some(tier) = PlanTier::from_str(plan) {
                return PlanStatus::Active {
                    tier,
                    days_left: days_left(end, now),
                };
            }
        }
    }

    if plan == "trial" {
        if let Some(end) = trial_end {
            return if end > now {
                PlanStatus::Active {
                    tier: PlanTier::Trial,
                    days_left: days_left(end, now),
                }
            } else {
                PlanStatus::Expired
            };
        }
    }

    PlanStatus::None
}

/// Text shown on the plan badge and settings card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub status: &'static str,
    pub title: String,
    pub description: String,
    pub badge: String,
    pub badge_class: &'static str,
}

pub fn plan_summary(status: &PlanStatus) -> PlanSummary {
    match status {
        PlanStatus::Active { tier, days_left } => {
            let description = format!("{} gün kaldı", days_left);
            match tier {
                PlanTier::Trial => PlanSummary {
                    status: "trial",
                    title: "Deneme Sürümü".to_string(),
                    description,
                    badge: format!("🎁 Deneme ({} gün)", days_left),
                    badge_class: "trial",
                },
                PlanTier::Professional => PlanSummary {
                    status: "premium",
                    title: "Profesyonel Plan".to_string(),
                    description,
                    badge: "💎 Premium".to_string(),
                    badge_class: "premium",
                },
                PlanTier::Enterprise => PlanSummary {
                    status: "enterprise",
                    title: "Kurumsal Plan".to_string(),
                    description,
                    badge: "🏢 Kurumsal".to_string(),
                    badge_class: "enterprise",
                },
            }
        }
        PlanStatus::Expired | PlanStatus::None => PlanSummary {
            status: "expired",
            title: "Plan Süresi Doldu".to_string(),
            description: "Premium'a yükselterek tüm özelliklere sınırsız erişin.".to_string(),
            badge: "⚠️ Süresi Doldu".to_string(),
            badge_class: "expired",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    Question,
    Petition,
    Analysis,
}

/// Counters as stored by the data service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounters {
    #[serde(default)]
    pub questions_today: u32,
    #[serde(default)]
    pub petitions_this_month: u32,
    #[serde(default)]
    pub analyses_this_month: u32,
    pub questions_last_reset: Option<DateTime<Utc>>,
    pub monthly_reset: Option<DateTime<Utc>>,
}

impl UsageCounters {
    /// Counters with the daily/monthly windows rolled over to `now`.
    pub fn rolled_over(&self, now: DateTime<Utc>) -> Self {
        let mut out = self.clone();
        let same_day = self
            .questions_last_reset
            .map(|t| t.date_naive() == now.date_naive())
            .unwrap_or(false);
        if !same_day {
            out.questions_today = 0;
            out.questions_last_reset = Some(now);
        }
        let same_month = self
            .monthly_reset
            .map(|t| t.year() == now.year() && t.month() == now.month())
            .unwrap_or(false);
        if !same_month {
            out.petitions_this_month = 0;
            out.analyses_this_month = 0;
            out.monthly_reset = Some(now);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageDecision {
    Allowed,
    Denied { limit: u32, used: u32, message: String },
}

impl UsageDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, UsageDecision::Allowed)
    }
}

pub fn check_usage(
    tier: PlanTier,
    counters: &UsageCounters,
    kind: UsageKind,
    now: DateTime<Utc>,
) -> UsageDecision {
    let limits = tier.limits();
    let counters = counters.rolled_over(now);

    let (limit, used, what) = match kind {
        UsageKind::Question => (
            limits.questions_per_day,
            counters.questions_today,
            "Günlük soru limitinize",
        ),
        UsageKind::Petition => (
            limits.petitions_per_month,
            counters.petitions_this_month,
            "Aylık dilekçe limitinize",
        ),
        UsageKind::Analysis => (
            limits.analyses_per_month,
            counters.analyses_this_month,
            "Aylık sözleşme analizi limitinize",
        ),
    };

    match limit {
        Some(limit) if used >= limit => UsageDecision::Denied {
            limit,
            used,
            message: format!("{} ({}) ulaştınız.", what, limit),
        },
        _ => UsageDecision::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_days_left_rounds_up() {
        assert_eq!(days_left(now() + Duration::hours(1), now()), 1);
        assert_eq!(days_left(now() + Duration::days(3), now()), 3);
        assert_eq!(days_left(now() - Duration::days(1), now()), 0);
    }

    #[test]
    fn test_trial_active_and_expired() {
        let active = resolve_plan("trial", Some(now() + Duration::days(5)), None, now());
        assert_eq!(
            active,
            PlanStatus::Active {
                tier: PlanTier::Trial,
                days_left: 5
            }
        );

        let expired = resolve_plan("trial", Some(now() - Duration::days(1)), None, now());
        assert_eq!(expired, PlanStatus::Expired);
        assert_eq!(plan_summary(&expired).badge_class, "expired");
    }

    #[test]
    fn test_premium_wins() {
        let status = resolve_plan(
            "professional",
            None,
            Some(now() + Duration::days(30)),
            now(),
        );
        let summary = plan_summary(&status);
        assert_eq!(summary.status, "premium");
        assert_eq!(summary.description, "30 gün kaldı");
    }

    #[test]
    fn test_question_limit_resets_daily() {
        let counters = UsageCounters {
            questions_today: 5,
            questions_last_reset: Some(now() - Duration::hours(2)),
            ..Default::default()
        };
        let decision = check_usage(PlanTier::Trial, &counters, UsageKind::Question, now());
        assert!(!decision.is_allowed());

        let yesterday = UsageCounters {
            questions_today: 5,
            questions_last_reset: Some(now() - Duration::days(1)),
            ..Default::default()
        };
        assert!(check_usage(PlanTier::Trial, &yesterday, UsageKind::Question, now()).is_allowed());
    }

    #[test]
    fn test_enterprise_unlimited() {
        let counters = UsageCounters {
            petitions_this_month: 500,
            monthly_reset: Some(now()),
            ..Default::default()
        };
        assert!(
            check_usage(PlanTier::Enterprise, &counters, UsageKind::Petition, now()).is_allowed()
        );

        let professional = UsageCounters {
            petitions_this_month: 20,
            monthly_reset: Some(now()),
            ..Default::default()
        };
        let decision = check_usage(PlanTier::Professional, &professional, UsageKind::Petition, now());
        assert!(!decision.is_allowed());
    }
}
