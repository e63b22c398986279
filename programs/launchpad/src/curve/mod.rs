//! # Bonding Curve Module
//!
//! Step-function pricing for primary sales.
//!
//! ```text
//!  price
//!    ^
//!    |                    ┌──────
//!    |              ┌─────┘
//!    |        ┌─────┘
//!    |  ──────┘
//!    +------------------------------> units sold
//!       one step per PRICE_INCREMENT
//! ```
//!
//! The price never moves inside a step and increases by exactly one
//! `PRICE_STEP_LAMPORTS` at every `PRICE_INCREMENT` boundary, starting at
//! `BASE_PRICE_LAMPORTS`.

pub mod bonding_curve;

pub use bonding_curve::*;
