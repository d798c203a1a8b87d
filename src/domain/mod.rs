//! Value types shared by every layer, plus the ports the application layer
//! depends on.

pub mod loan;
pub mod ports;
pub mod repayment;
