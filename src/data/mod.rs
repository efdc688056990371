//! Static data tables.
//!
//! DESIGN
//! ======
//! Stand-ins for the real inference model, market feed, scheme registry and
//! speech backend. Every table is a `static` slice built at compile time and
//! never mutated; panels clone records out of them.

pub mod diagnosis;
pub mod market;
pub mod schemes;
pub mod voice;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
