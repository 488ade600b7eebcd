// Shared page state and timed reverts
// Developed with 💀 by The Folio Team (c)2026

use std::time::Duration;

use folio::effects::RevertTicket;
use folio::{Portfolio, SiteConfig};
use leptos::prelude::*;

pub fn use_portfolio() -> RwSignal<Portfolio> {
    expect_context::<RwSignal<Portfolio>>()
}

pub fn use_site() -> SiteConfig {
    expect_context::<SiteConfig>()
}

/// Hand `ticket` back to the state after `delay_ms`. A newer override for
/// the same target makes this a no-op.
pub fn schedule_revert(portfolio: RwSignal<Portfolio>, ticket: RevertTicket, delay_ms: u32) {
    set_timeout(
        move || {
            portfolio.update(|p| {
                p.revert(ticket);
            })
        },
        Duration::from_millis(u64::from(delay_ms)),
    );
}
