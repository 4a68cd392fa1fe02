//! Output formatting shared by the menu and the one-shot subcommands.

use booking::{Receipt, Reservation};
use catalog::Movie;
use colored::Colorize;
use std::io::{self, Write};

/// Print search matches as `- title (duration min, classification)`
pub fn search_results<W: Write>(out: &mut W, matches: &[&Movie]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "{}", "No movies found. Please try again.".yellow());
    }

    writeln!(out, "{}", "Available movies:".bold().blue())?;
    for movie in matches {
        writeln!(
            out,
            "- {} ({} min, {})",
            movie.title, movie.duration, movie.classification
        )?;
    }
    Ok(())
}

/// Print recommended movies, one `title (genre)` per line
pub fn recommendations<W: Write>(out: &mut W, movies: &[Movie]) -> io::Result<()> {
    writeln!(out, "{}", "Here are some movies you might like:".bold().blue())?;
    for movie in movies {
        writeln!(out, "{}", movie)?;
    }
    Ok(())
}

pub fn showtimes<W: Write>(out: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(out, "Available showtimes for {}:", movie.title)?;
    for (idx, showtime) in movie.showtimes.iter().enumerate() {
        writeln!(out, "- Showtime {}: {}", idx + 1, showtime)?;
    }
    Ok(())
}

pub fn booked_tickets<'a, W, I>(out: &mut W, reservations: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut reservations = reservations.into_iter().peekable();
    if reservations.peek().is_none() {
        return writeln!(out, "No tickets have been booked yet.");
    }

    writeln!(out, "{}", "Booked Tickets:".bold().blue())?;
    for (idx, reservation) in reservations.enumerate() {
        writeln!(out, "Ticket {}:", idx + 1)?;
        writeln!(out, "Movie Title: {}", reservation.movie_title)?;
        writeln!(out, "Cinema Hall: {}", reservation.cinema_hall)?;
        writeln!(
            out,
            "Showtime: {} ({})",
            reservation.showtime, reservation.showtime_label
        )?;
        writeln!(out, "Number of Tickets: {}", reservation.num_tickets)?;
    }
    Ok(())
}

pub fn receipt<W: Write>(out: &mut W, receipt: &Receipt) -> io::Result<()> {
    writeln!(
        out,
        "{} {} ticket(s) for {} at {}, hall {}, paid by {}",
        "✓".green(),
        receipt.num_tickets,
        receipt.movie_title,
        receipt.showtime_label,
        receipt.cinema_hall,
        receipt.payment_method
    )?;
    writeln!(out, "Purchase successful. Enjoy the movie!")
}
