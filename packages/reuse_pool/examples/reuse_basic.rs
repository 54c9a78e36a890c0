//! Basic usage of `ReusePool`: acquire, configure, release, reuse.

use reuse_pool::{ReusePool, Reusable};

/// A simulation object that is expensive enough to be worth recycling.
struct Product {
    serial: u32,
    defective: bool,
    visible: bool,
}

impl Reusable for Product {
    fn activate(&mut self) {
        self.visible = true;
    }

    fn deactivate(&mut self) {
        self.visible = false;
    }
}

fn main() -> Result<(), reuse_pool::FactoryFailed> {
    let mut serial = 0;
    let mut pool = ReusePool::builder()
        .factory(move || {
            serial += 1;
            println!("factory: manufacturing product #{serial}");
            Product {
                serial,
                defective: false,
                visible: false,
            }
        })
        .build();

    // Pay construction costs up front rather than mid-simulation.
    pool.prewarm(3)?;
    println!("prewarmed, {} products parked", pool.len());

    // Spawn a batch, configuring each product for its role.
    let mut spawned = Vec::new();
    for is_defect in [false, true, false] {
        let mut product = pool.acquire()?;
        product.defective = is_defect;
        product.activate();
        println!(
            "spawned product #{} (defective: {})",
            product.serial, product.defective
        );
        spawned.push(product);
    }

    // The batch came entirely from the prewarmed stock.
    assert!(pool.is_empty());

    // Return everything; the pool parks each product quiescent.
    for product in spawned {
        pool.release(product);
    }
    println!("{} products parked again", pool.len());

    // Reuse is FIFO: the first product released is the first one back out.
    let recycled = pool.acquire()?;
    println!("recycled product #{}", recycled.serial);
    assert!(!recycled.visible);

    Ok(())
}
