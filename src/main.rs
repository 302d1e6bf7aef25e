use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use voyage_console::core::datetime::DateTimeComposer;
use voyage_console::core::selection::{ChecklistOptions, SelectionAggregator};
use voyage_console::domain::model::UnitType;
use voyage_console::domain::ports::ConfigProvider;
use voyage_console::utils::validation::Validate;
use voyage_console::utils::{error::Result, logger};
use voyage_console::{
    ApiClient, CliConfig, FileConfig, LogNotifier, RandomFaultPolicy, SubmitOutcome, VoyageConsole,
};

#[derive(Debug, Parser)]
#[command(name = "voyage-console")]
#[command(about = "A scheduling console for maritime voyages")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    /// TOML config file; overrides the connection flags.
    #[arg(long = "config-file")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the scheduled voyages.
    List,
    /// List the selectable vessels.
    Vessels,
    /// List the cargo unit types.
    UnitTypes,
    /// Create a voyage.
    Create {
        #[arg(long)]
        port_of_loading: String,
        #[arg(long)]
        port_of_discharge: String,
        /// Vessel id.
        #[arg(long)]
        vessel: String,
        #[arg(long)]
        departure_date: NaiveDate,
        /// Departure time of day, HH:MM. Omitting it schedules midnight.
        #[arg(long)]
        departure_time: Option<String>,
        #[arg(long)]
        arrival_date: NaiveDate,
        #[arg(long)]
        arrival_time: Option<String>,
        /// Comma-separated unit-type ids (at least 5).
        #[arg(long, value_delimiter = ',')]
        unit_types: Vec<String>,
    },
    /// Delete a voyage by id.
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.config.verbose);

    let (client, failure_rate) = match build_client(&cli) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("Configuration validation failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let fault = RandomFaultPolicy::new(failure_rate);
    let mut console = VoyageConsole::new(client, LogNotifier, fault);

    match cli.command {
        Command::List => {
            let voyages = console.voyages().await?;
            for voyage in voyages {
                println!(
                    "{}  {} -> {}  {} -> {}  {}  {} unit type(s)",
                    voyage.id,
                    voyage.scheduled_departure.format("%d/%m/%Y %H:%M"),
                    voyage.scheduled_arrival.format("%d/%m/%Y %H:%M"),
                    voyage.port_of_loading,
                    voyage.port_of_discharge,
                    voyage.vessel.name,
                    voyage.unit_types.len(),
                );
            }
        }
        Command::Vessels => {
            for vessel in console.vessels().await? {
                println!("{}  {}", vessel.value, vessel.label);
            }
        }
        Command::UnitTypes => {
            let unit_types = console.unit_types().await?;
            let options = ChecklistOptions::new(
                &unit_types,
                |unit: &UnitType| unit.id.as_str(),
                |unit: &UnitType| format!("{} - {}", unit.name, unit.default_length),
            );
            for (id, label) in options.iter() {
                println!("{id}  {label}");
            }
        }
        Command::Create {
            port_of_loading,
            port_of_discharge,
            vessel,
            departure_date,
            departure_time,
            arrival_date,
            arrival_time,
            unit_types,
        } => {
            console.open_form();
            console.session_mut().set_port_of_loading(&port_of_loading);
            console
                .session_mut()
                .set_port_of_discharge(&port_of_discharge);
            console.session_mut().select_vessel(&vessel);

            let mut departure_picker = DateTimeComposer::new();
            departure_picker.open();
            departure_picker.select_day(departure_date);
            if let Some(time) = &departure_time {
                departure_picker.edit_time(time);
            }
            if let Some(value) = departure_picker.confirm() {
                console.session_mut().set_departure(value);
            }

            // The arrival picker's minimum is the departure field's value.
            let mut arrival_picker = DateTimeComposer::new();
            arrival_picker.set_min(console.session().state().departure);
            arrival_picker.open();
            arrival_picker.select_day(arrival_date);
            if let Some(time) = &arrival_time {
                arrival_picker.edit_time(time);
            }
            if let Some(value) = arrival_picker.confirm() {
                console.session_mut().set_arrival(value);
            }

            let mut aggregator = SelectionAggregator::new();
            aggregator.set_observer(Box::new(|selected| {
                tracing::debug!("unit types selected: {selected:?}");
            }));
            for id in &unit_types {
                aggregator.toggle(id);
            }
            console.session_mut().set_unit_types(aggregator.selected());

            match console.submit_create().await {
                SubmitOutcome::Accepted => {
                    println!("Voyage was successfully created");
                }
                SubmitOutcome::RejectedByValidation => {
                    for (field, message) in console.session().errors() {
                        eprintln!("{field}: *{message}");
                    }
                    std::process::exit(1);
                }
                SubmitOutcome::RemoteFailure => {
                    eprintln!("Voyage creation failed");
                    std::process::exit(2);
                }
            }
        }
        Command::Delete { id } => match console.submit_delete(&id).await {
            SubmitOutcome::Accepted => {
                println!("Voyage {id} deleted");
            }
            _ => {
                eprintln!("Voyage deletion failed");
                std::process::exit(2);
            }
        },
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<(ApiClient, f64)> {
    match &cli.config_file {
        Some(path) => {
            let file_config = FileConfig::from_file(path)?;
            file_config.validate()?;
            let rate = file_config.delete_failure_rate();
            Ok((ApiClient::new(&file_config)?, rate))
        }
        None => {
            cli.config.validate()?;
            Ok((ApiClient::new(&cli.config)?, cli.config.delete_failure_rate))
        }
    }
}
