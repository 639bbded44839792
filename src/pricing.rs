//! Team pricing calculator behind the pricing page slider.

use crate::config::PricingConfig;
use serde::Serialize;

/// Price for a team of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub team_size: u32,
    pub monthly: u64,
    pub annual: u64,
}

/// `base_monthly + per_seat * team_size`. With the stock config this is
/// `29 + team_size`.
pub fn monthly_price(config: &PricingConfig, team_size: u32) -> u64 {
    u64::from(config.base_monthly) + u64::from(config.per_seat) * u64::from(team_size)
}

pub fn quote(config: &PricingConfig, team_size: u32) -> Quote {
    let monthly = monthly_price(config, team_size);
    Quote {
        team_size,
        monthly,
        annual: monthly * 12,
    }
}
