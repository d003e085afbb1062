pub mod costing;
pub mod grid;
pub mod profile;
pub mod quote;
pub mod transverse;
