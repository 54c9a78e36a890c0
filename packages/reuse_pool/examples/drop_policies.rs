//! Demonstrates the two teardown behaviors selected by `DropPolicy`.

use reuse_pool::{DropPolicy, ItemLifecycle, ReusePool, Reusable};

struct Session {
    id: u32,
}

impl Reusable for Session {}

/// Announces destruction so the difference between the policies is visible.
struct Announcer;

impl ItemLifecycle<Session> for Announcer {
    fn on_destroy(&mut self, item: &mut Session) {
        println!("  closing session #{}", item.id);
    }
}

fn build_pool(policy: DropPolicy) -> Result<ReusePool<Session, Announcer>, reuse_pool::FactoryFailed> {
    let mut id = 0;
    let mut pool = ReusePool::builder()
        .factory(move || {
            id += 1;
            Session { id }
        })
        .lifecycle(Announcer)
        .drop_policy(policy)
        .build();

    pool.prewarm(3)?;
    Ok(pool)
}

fn main() -> Result<(), reuse_pool::FactoryFailed> {
    println!("dropping a NotifyItems pool with 3 parked sessions:");
    let pool = build_pool(DropPolicy::NotifyItems)?;
    drop(pool);

    println!("dropping a DiscardItems pool with 3 parked sessions:");
    let pool = build_pool(DropPolicy::DiscardItems)?;
    drop(pool);
    println!("  (no notifications - the sessions were dropped silently)");

    Ok(())
}
