//! Reservations and purchases.
//!
//! Reservations are queued in the order they are made. Purchases are priced
//! and acknowledged with a [`Receipt`] but are not queued.

use crate::error::{BookingError, Result};
use catalog::{Catalog, Movie};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::info;

/// Flat price of one ticket unless configured otherwise
pub const DEFAULT_TICKET_PRICE: f32 = 10.0;

/// What the user asked for, before it is checked against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub movie_title: String,
    pub cinema_hall: String,
    /// 1-based position in the movie's showtimes
    pub showtime: usize,
    pub num_tickets: u32,
}

/// A queued reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub movie_title: String,
    pub cinema_hall: String,
    pub showtime: usize,
    /// The showtime as displayed, e.g. "9:00 AM"
    pub showtime_label: String,
    pub num_tickets: u32,
}

/// Confirmation of a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub movie_title: String,
    pub cinema_hall: String,
    pub showtime: usize,
    pub showtime_label: String,
    pub num_tickets: u32,
    pub ticket_price: f32,
    pub total_price: f32,
    pub payment_method: String,
}

/// Keeps every reservation made during a run.
///
/// ## Usage
/// ```ignore
/// let mut ledger = BookingLedger::new(DEFAULT_TICKET_PRICE);
/// ledger.reserve(&catalog, request)?;
///
/// for reservation in ledger.reservations() {
///     println!("{}", reservation.movie_title);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BookingLedger {
    reservations: VecDeque<Reservation>,
    ticket_price: f32,
}

impl BookingLedger {
    pub fn new(ticket_price: f32) -> Self {
        Self {
            reservations: VecDeque::new(),
            ticket_price,
        }
    }

    pub fn ticket_price(&self) -> f32 {
        self.ticket_price
    }

    /// Reservations in the order they were made
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Check a request and add it to the reservation queue.
    ///
    /// # Errors
    /// * `MovieNotFound` - no movie has exactly this title
    /// * `InvalidShowtime` - showtime outside `1..=showtimes.len()`
    /// * `NoTickets` - zero tickets requested
    pub fn reserve(&mut self, catalog: &Catalog, request: TicketRequest) -> Result<&Reservation> {
        let showtime_label = checked_showtime(catalog, &request)?;

        info!(
            "Reserved {} ticket(s) for {} at {} in hall {}",
            request.num_tickets, request.movie_title, showtime_label, request.cinema_hall
        );

        self.reservations.push_back(Reservation {
            movie_title: request.movie_title,
            cinema_hall: request.cinema_hall,
            showtime: request.showtime,
            showtime_label,
            num_tickets: request.num_tickets,
        });
        Ok(&self.reservations[self.reservations.len() - 1])
    }

    /// Check a request and return what it would cost
    pub fn quote(&self, catalog: &Catalog, request: &TicketRequest) -> Result<f32> {
        checked_showtime(catalog, request)?;
        Ok(self.ticket_price * request.num_tickets as f32)
    }

    /// Price a request and confirm the purchase.
    ///
    /// Fails for the same reasons as [`BookingLedger::reserve`]. The payment
    /// method is recorded as given.
    pub fn purchase(
        &self,
        catalog: &Catalog,
        request: TicketRequest,
        payment_method: impl Into<String>,
    ) -> Result<Receipt> {
        let showtime_label = checked_showtime(catalog, &request)?;
        let total_price = self.ticket_price * request.num_tickets as f32;

        info!(
            "Purchased {} ticket(s) for {} (total ${:.2})",
            request.num_tickets, request.movie_title, total_price
        );

        Ok(Receipt {
            movie_title: request.movie_title,
            cinema_hall: request.cinema_hall,
            showtime: request.showtime,
            showtime_label,
            num_tickets: request.num_tickets,
            ticket_price: self.ticket_price,
            total_price,
            payment_method: payment_method.into(),
        })
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new(DEFAULT_TICKET_PRICE)
    }
}

/// Look up the requested movie and showtime, returning the showtime label
fn checked_showtime(catalog: &Catalog, request: &TicketRequest) -> Result<String> {
    let movie: &Movie = catalog
        .find_by_title(&request.movie_title)
        .ok_or_else(|| BookingError::MovieNotFound(request.movie_title.clone()))?;

    let label = movie
        .showtime(request.showtime)
        .ok_or(BookingError::InvalidShowtime {
            requested: request.showtime,
            available: movie.showtimes.len(),
        })?;

    if request.num_tickets == 0 {
        return Err(BookingError::NoTickets);
    }

    Ok(label.to_string())
}
