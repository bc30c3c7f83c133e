//! Built-in robot strategies.
//!
//! The classic arena loaded strategies from shared libraries discovered
//! on disk; here the roster is assembled at registration time instead.
//! [`standard_roster`] returns the stock lineup, and front ends are free
//! to mix in their own [`Agent`] implementations.
//!
//! The stock strategies deliberately cover the weapon catalog:
//!
//! - [`Sweeper`]: railgun; sweeps its row with area scans and snipes.
//! - [`Brawler`]: hammer; walks a patrol loop and swings at neighbors.
//! - [`Pyro`]: flamethrower; rotates a radar beam, chases the closest
//!   contact, remembers obstacles.
//! - [`Mortar`]: grenade; slow-moving bombardier lobbing at the last
//!   sighting.

mod brawler;
mod mortar;
mod pyro;
mod sweeper;

pub use brawler::Brawler;
pub use mortar::Mortar;
pub use pyro::Pyro;
pub use sweeper::Sweeper;

use crate::agent::Agent;

/// The stock lineup, one robot per strategy, in a fixed order.
#[must_use]
pub fn standard_roster() -> Vec<Box<dyn Agent>> {
    vec![
        Box::new(Sweeper::new()),
        Box::new(Brawler::new()),
        Box::new(Pyro::new()),
        Box::new(Mortar::new()),
    ]
}
