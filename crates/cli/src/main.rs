// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use roomkeep_api::{ApiError, HotelService, ImportRoomsResponse, ReservationRequest, SystemClock};
use roomkeep_domain::ValidationRules;
use roomkeep_persistence::FileStore;
use serde::Serialize;
use tracing::{debug, info, warn};

type Service = HotelService<FileStore, SystemClock>;

/// roomkeep - hotel room and reservation manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Room inventory file (`;`-separated, one room per line)
    #[arg(long, global = true, default_value = "data/rooms.txt")]
    rooms: PathBuf,

    /// Reservation file (`,`-separated, one reservation per line)
    #[arg(long, global = true, default_value = "data/reservations.txt")]
    reservations: PathBuf,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Do not write changes back to the reservation file
    #[arg(long, global = true)]
    dry_run: bool,

    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Raw reservation fields as typed by the operator.
#[derive(ClapArgs, Debug, Clone)]
struct ReservationFields {
    /// Guest full name
    #[arg(long)]
    name: String,
    /// Birthdate, dd/MM/yyyy
    #[arg(long)]
    birthdate: String,
    /// `male` or `female`
    #[arg(long)]
    gender: String,
    /// 10-digit mobile number
    #[arg(long)]
    phone: String,
    /// Room to book
    #[arg(long)]
    room: String,
    /// Number of nights
    #[arg(long)]
    days: String,
    /// Check-in date, dd/MM/yyyy
    #[arg(long)]
    start: String,
    /// Optional co-tenant name
    #[arg(long, default_value = "")]
    co_tenant: String,
}

impl ReservationFields {
    fn into_request(self, national_id: String) -> ReservationRequest {
        ReservationRequest {
            national_id,
            full_name: self.name,
            birthdate: self.birthdate,
            gender: self.gender,
            phone_number: self.phone,
            room_id: self.room,
            rental_days: self.days,
            start_date: self.start,
            co_tenant_name: self.co_tenant,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every room ordered by ID
    Rooms,
    /// List rooms with no guest tonight
    Vacant,
    /// Re-import the room inventory and report skipped records
    Import,
    /// Check whether a room is free for a stay
    Available {
        /// Room ID
        #[arg(long)]
        room: String,
        /// Check-in date, dd/MM/yyyy
        #[arg(long)]
        start: String,
        /// Number of nights
        #[arg(long)]
        days: String,
    },
    /// List every reservation ordered by guest name
    Reservations,
    /// Show one reservation with its room
    Show {
        /// Guest national ID
        national_id: String,
    },
    /// Book a room
    Book {
        /// Guest national ID (12 digits)
        #[arg(long)]
        national_id: String,
        #[command(flatten)]
        fields: ReservationFields,
    },
    /// Replace every field of a reservation
    Update {
        /// National ID of the reservation to replace
        national_id: String,
        #[command(flatten)]
        fields: ReservationFields,
    },
    /// Cancel a reservation that has not started
    Cancel {
        /// Guest national ID
        national_id: String,
    },
    /// Revenue per room for a month
    RevenueMonth {
        /// Month as MM/yyyy
        month: String,
    },
    /// Revenue by room type; all types when none is given
    RevenueType {
        /// Deluxe, Standard, Superior or Suite
        room_type: Option<String>,
    },
}

impl Command {
    const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Book { .. } | Self::Update { .. } | Self::Cancel { .. }
        )
    }
}

/// Command failures: service errors, or JSON output that failed to encode.
#[derive(Debug)]
enum CliError {
    Api(ApiError),
    Output(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "Failed to encode output: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err)
    }
}

fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> Result<String, CliError> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
    } else {
        Ok(text(value))
    }
}

fn run(service: &Service, command: Command, json: bool) -> Result<String, CliError> {
    match command {
        Command::Rooms => emit(&service.list_rooms()?, json, |rooms| render::rooms(rooms)),
        Command::Vacant => emit(&service.vacant_rooms()?, json, |rooms| render::rooms(rooms)),
        Command::Import => emit(&service.import_rooms()?, json, render::import),
        Command::Available { room, start, days } => {
            let available: bool = service.check_availability(&room, &start, &days)?;
            emit(&available, json, |available| {
                if *available {
                    format!("Room {} is available.\n", room.trim().to_uppercase())
                } else {
                    format!("Room {} is not available.\n", room.trim().to_uppercase())
                }
            })
        }
        Command::Reservations => emit(&service.list_reservations()?, json, |list| {
            render::reservations(list)
        }),
        Command::Show { national_id } => {
            emit(&service.find_reservation(&national_id)?, json, render::detail)
        }
        Command::Book {
            national_id,
            fields,
        } => {
            let request: ReservationRequest = fields.into_request(national_id);
            emit(
                &service.create_reservation(&request)?,
                json,
                render::reservation,
            )
        }
        Command::Update {
            national_id,
            fields,
        } => {
            let request: ReservationRequest = fields.into_request(national_id.clone());
            emit(
                &service.update_reservation(&national_id, &request)?,
                json,
                render::reservation,
            )
        }
        Command::Cancel { national_id } => emit(
            &service.cancel_reservation(&national_id)?,
            json,
            |view| format!("Cancelled reservation {} ({}).\n", view.national_id, view.full_name),
        ),
        Command::RevenueMonth { month } => emit(
            &service.monthly_revenue_report(&month)?,
            json,
            render::monthly_revenue,
        ),
        Command::RevenueType { room_type } => {
            let totals = match room_type {
                Some(room_type) => vec![service.revenue_by_room_type(&room_type)?],
                None => service.revenue_by_all_room_types()?,
            };
            emit(&totals, json, |totals| render::room_type_revenue(totals))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    let default_filter: &str = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(
        rooms = %args.rooms.display(),
        reservations = %args.reservations.display(),
        "Opening stores"
    );
    let rules: ValidationRules = ValidationRules::standard()?;
    let (service, summary): (Service, ImportRoomsResponse) = HotelService::open(
        FileStore::new(&args.rooms),
        FileStore::new(&args.reservations),
        rules,
        SystemClock,
    )?;
    if summary.failed > 0 {
        warn!(
            loaded = summary.loaded,
            failed = summary.failed,
            "Some room records were skipped"
        );
    }

    let mutates: bool = args.command.mutates();
    match run(&service, args.command, args.json) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    if mutates {
        if args.dry_run {
            info!("Dry run: reservation changes not saved");
        } else {
            let saved: usize = service.save()?;
            debug!(saved, "Reservation file written");
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_point_at_data_directory() {
        let args: Args = Args::try_parse_from(["roomkeep", "rooms"]).unwrap();
        assert_eq!(args.rooms, PathBuf::from("data/rooms.txt"));
        assert_eq!(args.reservations, PathBuf::from("data/reservations.txt"));
        assert!(!args.json && !args.dry_run && !args.verbose);
    }

    #[test]
    fn test_book_collects_every_field() {
        let args: Args = Args::try_parse_from([
            "roomkeep",
            "--dry-run",
            "book",
            "--national-id",
            "123456789012",
            "--name",
            "Nguyen Van An",
            "--birthdate",
            "15/03/1990",
            "--gender",
            "male",
            "--phone",
            "0912345678",
            "--room",
            "R101",
            "--days",
            "3",
            "--start",
            "10/06/2030",
        ])
        .unwrap();

        assert!(args.dry_run);
        assert!(args.command.mutates());
        let Command::Book {
            national_id,
            fields,
        } = args.command
        else {
            panic!("expected book command");
        };
        let request: ReservationRequest = fields.into_request(national_id);
        assert_eq!(request.national_id, "123456789012");
        assert_eq!(request.room_id, "R101");
        assert_eq!(request.co_tenant_name, "");
    }

    #[test]
    fn test_revenue_type_is_optional() {
        let args: Args = Args::try_parse_from(["roomkeep", "revenue-type"]).unwrap();
        assert!(matches!(args.command, Command::RevenueType { room_type: None }));
        assert!(!args.command.mutates());
    }
}
