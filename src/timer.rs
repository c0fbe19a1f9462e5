//! Periodic user creation, firing on wall-clock multiples of the period
//! (the default 30s fires at :00 and :30 of every minute).

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use record_store::StoredRecord;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::ctx::Ctx;
use crate::model::user::{User, UserBmc, UserForCreate};
use crate::model::{self, ModelManager};

pub fn spawn(mm: ModelManager, period: Duration) -> JoinHandle<()> {
    tokio::spawn(run(mm, period))
}

async fn run(mm: ModelManager, period: Duration) {
    let mut next = next_schedule(Local::now(), period);

    loop {
        let wait = (next - Local::now()).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        let ctx = Ctx::timer();
        info!("{:<12} - Timer trigger function executed at: {}", "TIMER", Local::now());

        if let Err(e) = add_user_timer(&ctx, &mm) {
            error!("{:<12} - add_user_timer failed - {e}", "TIMER");
        }

        next = next_schedule(Local::now().max(next), period);
        info!("{:<12} - Next timer schedule at: {next}", "TIMER");
    }
}

/// The create-user flow with a synthesized payload.
pub fn add_user_timer(ctx: &Ctx, mm: &ModelManager) -> model::Result<StoredRecord<User>> {
    let user_c = UserForCreate::synthesized();
    info!("{:<12} - User Name: {}, User Age: {}", "TIMER", user_c.user_name, user_c.age);

    UserBmc::create(ctx, mm, Some(user_c))
}

/// Smallest multiple of `period` since the Unix epoch strictly after `now`.
pub fn next_schedule<Tz: TimeZone>(now: DateTime<Tz>, period: Duration) -> DateTime<Tz> {
    let period_ms = (period.as_millis() as i64).max(1);
    let now_ms = now.timestamp_millis();
    let next_ms = (now_ms.div_euclid(period_ms) + 1) * period_ms;

    now + TimeDelta::milliseconds(next_ms - now_ms)
}
