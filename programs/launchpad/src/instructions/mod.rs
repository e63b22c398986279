//! Instruction handlers for the launchpad
//!
//! Each instruction represents an action users can take:
//! - `initialize` - Set up the registry (once, at deployment)
//! - `create` - Register a new token and open its sale (permissionless, fee-gated)
//! - `buy` - Purchase tokens from an open sale at the curve price
//! - `settle` - Pay out a closed sale to its creator (permissionless)
//! - `withdraw` - Extract fee revenue (authority only)

pub mod buy;
pub mod create;
pub mod initialize;
pub mod settle;
pub mod withdraw;

pub use buy::*;
pub use create::*;
pub use initialize::*;
pub use settle::*;
pub use withdraw::*;
