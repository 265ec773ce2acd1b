use clap::Parser;
use tracing_subscriber::EnvFilter;
use wx_diag_core::{
    AtmosResult, Atmosphere, AtmosphereConfig, KilometersPerHour, MilesPerHour, Percent, Pressure, PressureUnit,
    Temperature, TemperatureUnit,
};

/// Atmospheric diagnostics for one observation
#[derive(Parser, Debug)]
#[command(name = "wx-diag-demo")]
#[command(about = "Compute meteorological diagnostics from a single observation", long_about = None)]
struct Args {
    /// Dry-bulb temperature
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Dew point temperature
    #[arg(short, long)]
    dew_point: Option<f64>,

    /// Unit of temperature and dew point (C, F, K)
    #[arg(short, long, default_value = "F")]
    unit: TemperatureUnit,

    /// Station pressure
    #[arg(short, long)]
    pressure: Option<f64>,

    /// Unit of pressure (mb, hPa, inHg)
    #[arg(long, default_value = "mb")]
    pressure_unit: PressureUnit,

    /// Wind speed in mph
    #[arg(short, long, conflicts_with = "wind_kmh")]
    wind_mph: Option<f64>,

    /// Wind speed in km/h
    #[arg(long)]
    wind_kmh: Option<f64>,

    /// Relative humidity (%) above 100 tolerated before flagging supersaturation
    #[arg(long, default_value_t = 1.0)]
    supersaturation_tolerance: f64,

    /// Run validation checks against reference values instead
    #[arg(short, long)]
    validate: bool,
}

fn build_atmosphere(args: &Args) -> AtmosResult<Atmosphere> {
    let config =
        AtmosphereConfig::default().with_supersaturation_tolerance(Percent::new(args.supersaturation_tolerance))?;
    let mut builder = Atmosphere::builder().config(config);

    if let Some(value) = args.temperature {
        builder = builder.temperature(Temperature::new(value, args.unit)?);
    }
    if let Some(value) = args.dew_point {
        builder = builder.dew_point(Temperature::new(value, args.unit)?);
    }
    if let Some(value) = args.pressure {
        builder = builder.pressure(Pressure::new(value, args.pressure_unit)?);
    }
    if let Some(value) = args.wind_mph {
        builder = builder.wind_speed(MilesPerHour::new(value)?);
    } else if let Some(value) = args.wind_kmh {
        builder = builder.wind_speed(MilesPerHour::try_from(KilometersPerHour::new(value))?);
    }

    Ok(builder.build())
}

/// Reference checks, each printed as pass/fail
fn run_validation() -> AtmosResult<bool> {
    let empty = Atmosphere::default();
    let c = Temperature::celsius;

    let checks = [
        (
            "32°F converts to exactly 0°C",
            Temperature::fahrenheit(32.0)?.value_in(TemperatureUnit::Celsius)? == 0.0,
        ),
        (
            "vapor pressure at 0°C ≈ 6.11 mb",
            (empty.vapor_pressure(Some(c(0.0)?))?.value() - 6.11).abs() < 0.01,
        ),
        (
            "RH(T, T) = 100%",
            (empty.relative_humidity(Some(c(18.0)?), Some(c(18.0)?))?.value().value() - 100.0).abs() < 1e-9,
        ),
        (
            "dew point at 100% RH ≈ T",
            (empty.dew_point(Some(c(22.0)?), Some(Percent::SATURATED))?.value().value() - 22.0).abs() < 0.1,
        ),
        (
            "θ at 1000 mb equals T in Kelvin",
            empty.potential_temperature(Some(c(15.0)?), Some(Pressure::REFERENCE))?
                == c(15.0)?.convert(TemperatureUnit::Kelvin)?,
        ),
        (
            "heat index at 70°F is out of range",
            !empty
                .heat_index(Some(Temperature::fahrenheit(70.0)?), Some(Percent::new(50.0)))?
                .is_valid(),
        ),
    ];

    let mut all_passed = true;
    for (name, passed) in checks {
        println!("{} {name}", if passed { "✓" } else { "✗" });
        all_passed &= passed;
    }
    Ok(all_passed)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    if args.validate {
        match run_validation() {
            Ok(true) => println!("\nAll reference checks passed"),
            Ok(false) => {
                println!("\nSome reference checks failed");
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("Validation aborted: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let atmosphere = match build_atmosphere(&args) {
        Ok(atmosphere) => atmosphere,
        Err(err) => {
            eprintln!("Invalid observation: {err}");
            std::process::exit(2);
        }
    };

    println!("=== Atmospheric Diagnostics ===\n");
    if let Some(t) = atmosphere.temperature() {
        println!("Temperature: {t}");
    }
    if let Some(td) = atmosphere.dew_point_observation() {
        println!("Dew point:   {td}");
    }
    if let Some(p) = atmosphere.pressure() {
        println!("Pressure:    {p}");
    }
    if let Some(v) = atmosphere.wind_speed() {
        println!("Wind:        {v}");
    }
    println!();
    print!("{}", atmosphere.report());
}
