//! Error types for ticket bookings.

use thiserror::Error;

/// Why a reservation or purchase was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    /// Showtimes are numbered from 1 as shown to the user
    #[error("Invalid showtime {requested}: choose between 1 and {available}")]
    InvalidShowtime { requested: usize, available: usize },

    #[error("At least one ticket is required")]
    NoTickets,
}

/// Convenience alias for Results in this crate
pub type Result<T> = std::result::Result<T, BookingError>;
