//! Catalog of named units, grouped by system.
//!
//! Every unit here is a type alias over the core constructors (or, for [`information`], a derived nominal unit). The
//! modules are also re-exported at the crate root.

pub mod fps;
pub mod helpers;
pub mod information;
pub mod non_si;
pub mod other;
pub mod si;
