use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lightbnb_data::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the LightBnB database")]
struct Cli {
    #[command(flatten)]
    conn: ConnArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ConnArgs {
    #[arg(long, env = "PGHOST", default_value = "localhost")]
    host: String,
    #[arg(long, env = "PGPORT", default_value_t = 5432)]
    port: u16,
    #[arg(long, env = "PGDATABASE", default_value = "lightbnb")]
    dbname: String,
    #[arg(long, env = "PGUSER", default_value = "labber")]
    user: String,
    #[arg(long, env = "PGPASSWORD", default_value = "labber", hide_env_values = true)]
    password: String,
}

impl ConnArgs {
    fn into_config(self) -> deadpool_postgres::Config {
        let mut cfg = deadpool_postgres::Config::new();
        cfg.host = Some(self.host);
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname);
        cfg.user = Some(self.user);
        cfg.password = Some(self.password);
        cfg
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    UserByEmail {
        email: String,
    },
    UserById {
        id: i32,
    },
    /// Past reservations of a guest, oldest first
    Reservations {
        guest_id: i32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,
    },
    /// Reviewed properties matching the filters, cheapest first
    Properties {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        owner_id: Option<i32>,
        /// Dollars
        #[arg(long)]
        min_price: Option<f64>,
        /// Dollars
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: i64,
    },
}

async fn run(cli: Cli) -> Result<String, LightbnbDbError> {
    let db = ConfigAndPool::new_postgres(cli.conn.into_config()).await?;

    match cli.command {
        Command::UserByEmail { email } => to_json(&get_user_with_email(&db, &email).await?),
        Command::UserById { id } => to_json(&get_user_with_id(&db, id).await?),
        Command::Reservations { guest_id, limit } => {
            to_json(&get_all_reservations(&db, guest_id, limit).await?)
        }
        Command::Properties {
            city,
            owner_id,
            min_price,
            max_price,
            min_rating,
            limit,
        } => {
            let search = PropertySearch {
                city,
                owner_id,
                minimum_price_per_night: min_price,
                maximum_price_per_night: max_price,
                minimum_rating: min_rating,
            };
            let listings = get_all_properties(&db, &search, limit).await?;
            tracing::info!(count = listings.len(), "properties found");
            to_json(&listings)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, LightbnbDbError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| LightbnbDbError::ExecutionError(format!("cannot encode result: {err}")))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
