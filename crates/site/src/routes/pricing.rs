//! Pricing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use docin_core::Plan;

use crate::filters;
use crate::i18n::Localizer;
use crate::middleware::PageContext;
use crate::services::SessionUser;

/// What the button at the bottom of a plan card does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Visitor is already on this plan; the button is disabled.
    Current,
    /// Enterprise is sold by contacting the team.
    ContactSales,
    /// Logged-in visitor on another plan.
    Upgrade,
    /// Anonymous visitor; links to signup.
    GetStarted,
}

/// One plan card, translated into the active language.
#[derive(Debug, Clone)]
pub struct PlanCard {
    pub plan: Plan,
    pub name: String,
    pub price: String,
    pub description: String,
    pub invoices: String,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub current: bool,
    pub action: PlanAction,
}

impl PlanCard {
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match (self.current, self.popular) {
            (true, _) => "plan plan--current",
            (false, true) => "plan plan--popular",
            (false, false) => "plan",
        }
    }
}

/// A frequently asked question.
#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What happens if I exceed my invoice limit?",
        answer: "You'll be notified when approaching your limit. Additional invoices can be processed at a per-unit rate.",
    },
    Faq {
        question: "Can I change my plan anytime?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    },
    Faq {
        question: "Do you support Algerian Dinar payments?",
        answer: "Yes, we accept payments in Algerian Dinar through local payment methods.",
    },
    Faq {
        question: "Is there a setup fee?",
        answer: "No setup fees. Pay only for your chosen plan with no hidden costs.",
    },
];

const fn plan_features(plan: Plan) -> &'static [&'static str] {
    match plan {
        Plan::Test => &[
            "25 invoices per month",
            "Basic AI processing",
            "Email support",
            "API access",
        ],
        Plan::Pro => &[
            "500 invoices per month",
            "Advanced AI processing",
            "Priority support",
            "API access",
            "Custom fields",
            "Batch processing",
        ],
        Plan::Enterprise => &[
            "Unlimited invoices",
            "Premium AI models",
            "24/7 dedicated support",
            "API access",
            "Custom integrations",
            "On-premise deployment",
            "SLA guarantee",
        ],
    }
}

/// Build the three plan cards for a visitor.
///
/// The visitor's own plan is marked current; only Pro is flagged popular.
#[must_use]
pub fn plan_cards(i18n: &Localizer, user: Option<&SessionUser>) -> Vec<PlanCard> {
    let current_plan = user.filter(|u| u.is_logged_in).map(|u| u.current_plan);

    Plan::ALL
        .iter()
        .map(|&plan| {
            let key = plan.key();
            let current = current_plan == Some(plan);
            let action = if current {
                PlanAction::Current
            } else if plan == Plan::Enterprise {
                PlanAction::ContactSales
            } else if current_plan.is_some() {
                PlanAction::Upgrade
            } else {
                PlanAction::GetStarted
            };

            PlanCard {
                plan,
                name: i18n.t(&format!("pricing.{key}.name")).to_string(),
                price: i18n.t(&format!("pricing.{key}.price")).to_string(),
                description: i18n.t(&format!("pricing.{key}.desc")).to_string(),
                invoices: i18n.t(&format!("pricing.{key}.invoices")).to_string(),
                features: plan_features(plan),
                popular: plan == Plan::Pro,
                current,
                action,
            }
        })
        .collect()
}

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub ctx: PageContext,
    pub plans: Vec<PlanCard>,
    pub faqs: &'static [Faq],
}

/// Display the pricing page.
#[instrument(skip_all)]
pub async fn pricing(ctx: PageContext) -> impl IntoResponse {
    PricingTemplate {
        plans: plan_cards(&ctx.i18n, ctx.user.as_ref()),
        faqs: FAQS,
        ctx,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::i18n::Catalog;
    use crate::services::{DemoCredentials, SessionStore};

    fn i18n() -> Localizer {
        Localizer::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_anonymous_visitor_gets_started() {
        let cards = plan_cards(&i18n(), None);

        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| !c.current));
        assert_eq!(cards[0].action, PlanAction::GetStarted);
        assert_eq!(cards[1].action, PlanAction::GetStarted);
        assert_eq!(cards[2].action, PlanAction::ContactSales);
        assert_eq!(cards[1].name, "Pro Plan");
        assert_eq!(cards[2].price, "Contact us");
    }

    #[test]
    fn test_demo_user_sees_pro_as_current() {
        let demo = DemoCredentials::default();
        let mut store = SessionStore::new(&demo);
        assert!(store.login("demo@ai.dz", "demo123"));

        let cards = plan_cards(&i18n(), store.current_user());
        let pro = cards.iter().find(|c| c.plan == Plan::Pro).unwrap();
        let test = cards.iter().find(|c| c.plan == Plan::Test).unwrap();

        assert!(pro.current);
        assert_eq!(pro.action, PlanAction::Current);
        assert_eq!(pro.css_class(), "plan plan--current");
        assert_eq!(test.action, PlanAction::Upgrade);
    }

    #[test]
    fn test_only_pro_is_popular() {
        let cards = plan_cards(&i18n(), None);
        let popular: Vec<_> = cards.iter().filter(|c| c.popular).map(|c| c.plan).collect();
        assert_eq!(popular, vec![Plan::Pro]);
    }

    #[test]
    fn test_enterprise_lists_every_feature() {
        assert_eq!(plan_features(Plan::Enterprise).len(), 7);
        assert!(plan_features(Plan::Test).contains(&"API access"));
    }
}
