//! Items handing themselves back to the pool through a `ReturnQueue`.
//!
//! The consumer that retires an item never sees the pool. Instead, the pool's lifecycle
//! strategy installs a `ReturnSender` in each item on acquire and removes it on release;
//! the owner drains retired items back into the pool between simulation steps.

use reuse_pool::{ItemLifecycle, ReturnQueue, ReturnSender, ReusePool, Reusable};

struct Drone {
    serial: u32,
    return_to: Option<ReturnSender<Drone>>,
}

impl Reusable for Drone {}

impl Drone {
    /// Called by whoever is done with the drone, wherever they are.
    fn power_down(mut self) {
        println!("drone #{} powering down", self.serial);
        if let Some(sender) = self.return_to.take() {
            sender.send(self);
        }
    }
}

/// Wires each outgoing drone to the return queue, and unwires it when it comes back.
struct Hangar {
    returns: ReturnQueue<Drone>,
}

impl ItemLifecycle<Drone> for Hangar {
    fn on_acquire(&mut self, item: &mut Drone) {
        item.return_to = Some(self.returns.sender());
    }

    fn on_release(&mut self, item: &mut Drone) {
        item.return_to = None;
    }

    fn on_destroy(&mut self, item: &mut Drone) {
        item.return_to = None;
    }
}

fn main() -> Result<(), reuse_pool::FactoryFailed> {
    let returns = ReturnQueue::new();
    let mut serial = 0;
    let mut pool = ReusePool::builder()
        .factory(move || {
            serial += 1;
            Drone {
                serial,
                return_to: None,
            }
        })
        .lifecycle(Hangar {
            returns: returns.clone(),
        })
        .build();

    // Launch a flight of drones.
    let flight: Vec<Drone> = (0..3)
        .map(|_| pool.acquire())
        .collect::<Result<_, _>>()?;
    println!("{} drones launched", flight.len());

    // Elsewhere, each drone finishes its mission and powers down on its own.
    for drone in flight {
        drone.power_down();
    }
    println!("{} drones waiting in the return queue", returns.len());

    // Back at the owner: collect the returns between steps.
    let recovered = returns.drain_into(&mut pool);
    println!("{recovered} drones recovered, {} parked in the pool", pool.len());

    Ok(())
}
