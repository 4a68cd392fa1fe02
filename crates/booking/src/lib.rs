//! Ticket bookkeeping for the cinema console.
//!
//! This crate keeps the queue of reservations made during a run and prices
//! ticket purchases. Nothing is persisted and no real payment happens.

pub mod error;
pub mod ledger;

pub use error::{BookingError, Result};
pub use ledger::{BookingLedger, Receipt, Reservation, TicketRequest, DEFAULT_TICKET_PRICE};
