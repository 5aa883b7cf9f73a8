use anyhow::{Context, Result};
use aqi::{report_stations, AqiClient, Dashboard, LocationFlags, LocationQuery, DEFAULT_BASE_URL};
use clap::{Args, Parser, Subcommand};
use log::error;

#[derive(Debug, Parser)]
#[command(author, version, about = "Air Quality Index in your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Get the Air Quality Index
    ///
    /// Fetches the Air Quality Index of a location, given either a city, a postal
    /// code with its country, or a latitude with its longitude.
    Get(GetArgs),
}

#[derive(Debug, Args)]
struct GetArgs {
    /// City name, e.g. --city=Lahore
    #[arg(short = 'c', long)]
    city: Option<String>,

    /// Postal code, used together with --country
    #[arg(short = 'p', long)]
    postal: Option<String>,

    /// Country, used together with --postal
    #[arg(short = 'o', long)]
    country: Option<String>,

    /// Latitude, used together with --longitude
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    latitude: Option<String>,

    /// Longitude, used together with --latitude
    #[arg(short = 'g', long, allow_hyphen_values = true)]
    longitude: Option<String>,

    /// Address of the air-quality service
    #[arg(long, env = "AQI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl From<&GetArgs> for LocationFlags {
    fn from(args: &GetArgs) -> Self {
        LocationFlags {
            city: args.city.clone(),
            postal: args.postal.clone(),
            country: args.country.clone(),
            latitude: args.latitude.clone(),
            longitude: args.longitude.clone(),
        }
    }
}

async fn get(args: GetArgs) -> Result<()> {
    let query = LocationQuery::from_flags(LocationFlags::from(&args))?;
    let client = AqiClient::builder().base_url(args.base_url).build()?;

    let stations = client
        .fetch_stations(&query)
        .await
        .with_context(|| format!("failed to get the air quality for {}", query))?;

    report_stations(&stations, &mut Dashboard::new())?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Get(args) => get(args).await,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
