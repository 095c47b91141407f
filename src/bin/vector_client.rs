//! Demo client for `vector_algebra`.
//!
//! Builds two vectors from the command line and prints their sum, a scaled
//! copy of the first, its magnitude, the inner product and the distance
//! between them.
//!
//! ```bash
//! cargo run --bin vector_client -- --x 1,2,3,4 --y 5,2,4,1 --format json
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::{Serialize, Serializer};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};
use vector_algebra::Vector;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// CLI arguments for the demo client.
#[derive(Parser, Debug)]
#[command(name = "vector_client")]
#[command(about = "Run the standard vector operations on two vectors")]
struct Args {
    /// Components of x, comma separated.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [1.0, 2.0, 3.0, 4.0])]
    x: Vec<f64>,

    /// Components of y, comma separated.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [5.0, 2.0, 4.0, 1.0])]
    y: Vec<f64>,

    /// Factor applied to x.
    #[arg(long, allow_hyphen_values = true, default_value_t = 10.0)]
    factor: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(serialize_with = "components")]
    x: Vector,
    #[serde(serialize_with = "components")]
    y: Vector,
    #[serde(serialize_with = "components")]
    sum: Vector,
    factor: f64,
    #[serde(serialize_with = "components")]
    scaled: Vector,
    magnitude: f64,
    dot: f64,
    distance: f64,
}

/// Vectors appear in the JSON report as plain arrays of components.
fn components<S: Serializer>(vector: &Vector, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(vector.iter())
}

impl Report {
    fn build(x: Vector, y: Vector, factor: f64) -> vector_algebra::Result<Self> {
        let sum = x.plus(&y)?;
        let dot = x.dot(&y)?;
        let distance = x.distance_to(&y)?;
        Ok(Self {
            scaled: x.scale(factor),
            magnitude: x.magnitude(),
            x,
            y,
            sum,
            factor,
            dot,
            distance,
        })
    }

    fn render_text(&self) -> String {
        [
            format!("x        =  {}", self.x),
            format!("y        =  {}", self.y),
            format!("x + y    =  {}", self.sum),
            format!("{:<9}=  {}", format!("{}x", self.factor), self.scaled),
            format!("|x|      =  {:?}", self.magnitude),
            format!("<x, y>   =  {:?}", self.dot),
            format!("|x - y|  =  {:?}", self.distance),
        ]
        .join("\n")
    }

    fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut xdata = args.x.clone();
    let x = Vector::from_slice(&xdata);
    // x holds its own copy, so this write is not visible through it.
    if let Some(first) = xdata.first_mut() {
        *first = 0.0;
    }
    debug!(?xdata, %x, "source buffer changed after construction");
    let y = Vector::from(args.y.clone());
    info!(dimension_x = x.len(), dimension_y = y.len(), "vectors constructed");

    let report = Report::build(x, y, args.factor).context("failed to run vector operations")?;

    match args.format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => {
            let json = report.render_json().context("failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
