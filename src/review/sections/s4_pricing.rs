//! S4: Pricing Plans
//!
//! Price display rules:
//! - numeric price `n` -> "$n/month" (shortest decimal form of `n`)
//! - "Custom" -> "Custom", no suffix
//!
//! A billing period other than "month" does not change the price string; it
//! is shown as a separate note ("Billed yearly").

use crate::review::types::{Price, PricingPlan, ProductRecord, SectionKind};
use crate::review::utils::format_amount;
use crate::review::view_models::{PricingCard, SectionBlock, SectionBody};

pub fn generate(record: &ProductRecord) -> SectionBlock {
    let cards = record.pricing_plans.iter().map(pricing_card).collect();

    SectionBlock::new(
        SectionKind::Pricing,
        format!("{} Pricing Plans", record.name),
        SectionBody::Pricing(cards),
    )
}

fn pricing_card(plan: &PricingPlan) -> PricingCard {
    PricingCard {
        plan_name: plan.plan_name.clone(),
        price_display: format_price(&plan.price),
        billing_note: billing_note(plan),
        features: plan.features.clone(),
    }
}

pub fn format_price(price: &Price) -> String {
    match price {
        Price::Amount(n) => format!("${}/month", format_amount(*n)),
        Price::Label(label) => label.clone(),
    }
}

fn billing_note(plan: &PricingPlan) -> Option<String> {
    if plan.price.amount().is_none() {
        return None;
    }
    let period = plan.billing_period.as_deref()?.trim().to_lowercase();
    match period.as_str() {
        "" | "month" | "monthly" | "mo" => None,
        "year" | "annual" | "annually" | "yearly" => Some("Billed yearly".to_string()),
        other => Some(format!("Billed per {}", other)),
    }
}
