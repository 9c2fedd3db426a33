use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use sez_core::{ecef_to_sez, EcefPosition, LookAngles, SezVector};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ecef-to-sez")]
#[command(about = "Convert an ECEF position to the South/East/Zenith frame of an ECEF observer")]
struct Cli {
    /// Observer ECEF X (km)
    #[arg(allow_negative_numbers = true)]
    o_x_km: f64,
    /// Observer ECEF Y (km)
    #[arg(allow_negative_numbers = true)]
    o_y_km: f64,
    /// Observer ECEF Z (km)
    #[arg(allow_negative_numbers = true)]
    o_z_km: f64,
    /// Target ECEF X (km)
    #[arg(allow_negative_numbers = true)]
    x_km: f64,
    /// Target ECEF Y (km)
    #[arg(allow_negative_numbers = true)]
    y_km: f64,
    /// Target ECEF Z (km)
    #[arg(allow_negative_numbers = true)]
    z_km: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also report azimuth, elevation and range
    #[arg(long)]
    look_angles: bool,
}

impl Cli {
    fn observer(&self) -> EcefPosition {
        EcefPosition::new(self.o_x_km, self.o_y_km, self.o_z_km)
    }

    fn target(&self) -> EcefPosition {
        EcefPosition::new(self.x_km, self.y_km, self.z_km)
    }
}

#[derive(Serialize)]
struct JsonReport {
    #[serde(flatten)]
    sez: SezVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    look_angles: Option<LookAngles>,
}

fn render(cli: &Cli, sez: &SezVector) -> anyhow::Result<String> {
    let look = cli.look_angles.then(|| sez.look_angles());

    match cli.format {
        OutputFormat::Json => {
            let report = JsonReport {
                sez: *sez,
                look_angles: look,
            };
            Ok(serde_json::to_string(&report)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "s: {} km", sez.s_km)?;
            writeln!(out, "e: {} km", sez.e_km)?;
            writeln!(out, "z: {} km", sez.z_km)?;
            if let Some(look) = look {
                writeln!(out, "azimuth: {} deg", look.azimuth_rad.to_degrees())?;
                writeln!(out, "elevation: {} deg", look.elevation_rad.to_degrees())?;
                writeln!(out, "range: {} km", look.range_km)?;
            }
            Ok(out)
        }
    }
}

fn main() -> anyhow::Result<()> {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }

    let cli = Cli::parse();
    debug!(observer = ?cli.observer(), target = ?cli.target(), "converting");

    let sez = ecef_to_sez(&cli.observer(), &cli.target())?;
    print!("{}", render(&cli, &sez)?);

    Ok(())
}
