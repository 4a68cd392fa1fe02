//! The interactive main menu.
//!
//! Each action reads what it needs from the console, reports problems to the
//! user and returns to the menu. Running out of input ends the loop.

use crate::console::Console;
use crate::render;
use anyhow::Result;
use booking::{BookingLedger, TicketRequest};
use catalog::Catalog;
use colored::Colorize;
use recommender::recommend;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Search,
    Reserve,
    Purchase,
    Recommend,
    CheckBooked,
    Quit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::Search),
            2 => Some(MenuChoice::Reserve),
            3 => Some(MenuChoice::Purchase),
            4 => Some(MenuChoice::Recommend),
            5 => Some(MenuChoice::CheckBooked),
            0 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\nPlease select an option:\n\
                    1. Search for available movies\n\
                    2. Reserve a ticket\n\
                    3. Purchase a ticket\n\
                    4. Get movie recommendations\n\
                    5. Check booked tickets\n\
                    0. Quit\n";

pub struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    ledger: BookingLedger,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a Catalog, ledger: BookingLedger, console: Console<R, W>) -> Self {
        Self {
            catalog,
            ledger,
            console,
        }
    }

    /// Show the menu until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(input) = self.console.prompt(MENU)? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Reserve) => self.reserve()?,
                Some(MenuChoice::Purchase) => self.purchase()?,
                Some(MenuChoice::Recommend) => self.recommend()?,
                Some(MenuChoice::CheckBooked) => {
                    render::booked_tickets(self.console.out(), self.ledger.reservations())?
                }
                Some(MenuChoice::Quit) => {
                    writeln!(
                        self.console.out(),
                        "Thank you for using the cinema ticket reservation system. Goodbye!"
                    )?;
                    return Ok(());
                }
                None => writeln!(
                    self.console.out(),
                    "{}",
                    "Invalid choice. Please try again.".yellow()
                )?,
            }
        }
    }

    fn search(&mut self) -> Result<()> {
        let Some(query) = self.console.prompt("Please enter your search criteria: ")? else {
            return Ok(());
        };

        let matches = self.catalog.search(&query);
        render::search_results(self.console.out(), &matches)?;
        Ok(())
    }

    fn reserve(&mut self) -> Result<()> {
        let Some(request) =
            self.ticket_request("Please enter the title of the movie you want to reserve: ")?
        else {
            return Ok(());
        };

        match self.ledger.reserve(self.catalog, request) {
            Ok(reservation) => {
                let line = format!(
                    "Reserved {} ticket(s) for {} at {}.",
                    reservation.num_tickets, reservation.movie_title, reservation.showtime_label
                );
                writeln!(self.console.out(), "{} {}", "✓".green(), line)?;
            }
            Err(err) => writeln!(self.console.out(), "{}", err.to_string().red())?,
        }
        Ok(())
    }

    fn purchase(&mut self) -> Result<()> {
        let Some(request) =
            self.ticket_request("Please enter the title of the movie you want to purchase: ")?
        else {
            return Ok(());
        };

        let total = match self.ledger.quote(self.catalog, &request) {
            Ok(total) => total,
            Err(err) => {
                writeln!(self.console.out(), "{}", err.to_string().red())?;
                return Ok(());
            }
        };
        writeln!(self.console.out(), "Total cost: ${:.2}", total)?;

        let Some(payment_method) = self
            .console
            .prompt("Please choose a payment method (credit card, debit card, cash): ")?
        else {
            return Ok(());
        };

        match self.ledger.purchase(self.catalog, request, payment_method) {
            Ok(receipt) => render::receipt(self.console.out(), &receipt)?,
            Err(err) => writeln!(self.console.out(), "{}", err.to_string().red())?,
        }
        Ok(())
    }

    fn recommend(&mut self) -> Result<()> {
        match recommend(self.catalog.movies(), &mut self.console) {
            Ok(movies) => render::recommendations(self.console.out(), &movies)?,
            Err(err) => writeln!(self.console.out(), "{}", err.to_string().red())?,
        }
        Ok(())
    }

    /// Collect title, hall, showtime and ticket count.
    ///
    /// Returns `None` when the title is unknown, a number doesn't parse, or
    /// input ends; the user has already been told why.
    fn ticket_request(&mut self, title_prompt: &str) -> Result<Option<TicketRequest>> {
        let Some(movie_title) = self.console.prompt(title_prompt)? else {
            return Ok(None);
        };

        let Some(movie) = self.catalog.find_by_title(&movie_title) else {
            writeln!(
                self.console.out(),
                "{}",
                "Movie not found. Please try again.".yellow()
            )?;
            return Ok(None);
        };
        render::showtimes(self.console.out(), movie)?;

        let Some(cinema_hall) = self.console.prompt("Please enter the cinema hall: ")? else {
            return Ok(None);
        };

        let showtime_prompt = format!(
            "Please enter the showtime (1-{}): ",
            movie.showtimes.len()
        );
        let Some(showtime) = self.read_number::<usize>(&showtime_prompt)? else {
            return Ok(None);
        };

        let Some(num_tickets) = self.read_number::<u32>("Please enter the number of tickets: ")?
        else {
            return Ok(None);
        };

        Ok(Some(TicketRequest {
            movie_title,
            cinema_hall,
            showtime,
            num_tickets,
        }))
    }

    fn read_number<T: std::str::FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        match self.console.prompt_parsed::<T>(text)? {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(raw)) => {
                let line = format!("'{}' is not a valid number. Please try again.", raw);
                writeln!(self.console.out(), "{}", line.yellow())?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.console.into_output()
    }
}
