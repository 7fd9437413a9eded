mod format;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use waqt_config::CalculationConfig;
use waqt_rs::{
    ALL_METHODS, ALL_PRAYERS, AngleOrMinutes, AsrJuristic, CalculationMethod, CalendarDate,
    Coordinate, HighLatitudeAdjustment, MidnightMethod, PrayerCalculator, WaqtConfig,
};
use waqt_solar::sun_position;

use crate::format::{TimeFormat, describe_rule, format_hours, format_utc_offset};

#[derive(Parser)]
#[command(name = "waqt", about = "Islamic prayer times CLI")]
struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer times for one day
    Times(TimesArgs),
    /// List the calculation methods and their parameters
    Methods,
    /// Solar declination and equation of time at 0h UT
    Sun {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<CalendarDate>,
    },
}

#[derive(Args)]
struct TimesArgs {
    /// TOML configuration file (default: ./waqt.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Elevation above sea level in meters
    #[arg(long)]
    elevation: Option<f64>,
    /// Date (YYYY-MM-DD), default today
    #[arg(long)]
    date: Option<CalendarDate>,
    /// UTC offset in hours, default from config or the host zone
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,
    /// Calculation method: mwl, isna, egypt, makkah, karachi, tehran, jafari, custom
    #[arg(long)]
    method: Option<CalculationMethod>,
    /// Asr school: shafii, hanafi
    #[arg(long)]
    asr: Option<AsrJuristic>,
    /// High-latitude rule: none, midnight, one-seventh, angle-based
    #[arg(long)]
    high_lat: Option<HighLatitudeAdjustment>,
    /// Midnight convention: standard, jafari
    #[arg(long)]
    midnight: Option<MidnightMethod>,
    /// Fajr depression angle in degrees
    #[arg(long)]
    fajr_angle: Option<f64>,
    /// Maghrib depression angle in degrees
    #[arg(long, conflicts_with = "maghrib_minutes")]
    maghrib_angle: Option<f64>,
    /// Maghrib as minutes after sunset
    #[arg(long)]
    maghrib_minutes: Option<f64>,
    /// Isha depression angle in degrees
    #[arg(long, conflicts_with = "isha_minutes")]
    isha_angle: Option<f64>,
    /// Isha as minutes after maghrib
    #[arg(long)]
    isha_minutes: Option<f64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = TimeFormat::H24)]
    format: TimeFormat,
}

impl TimesArgs {
    /// Flag overrides expressed as a `[calculation]` section.
    fn calculation_overrides(&self) -> CalculationConfig {
        let rule = |angle: Option<f64>, minutes: Option<f64>| {
            angle
                .map(AngleOrMinutes::Angle)
                .or(minutes.map(AngleOrMinutes::Minutes))
        };
        CalculationConfig {
            method: self.method,
            asr: self.asr,
            high_latitude: self.high_lat,
            midnight: self.midnight,
            fajr_angle: self.fajr_angle,
            maghrib: rule(self.maghrib_angle, self.maghrib_minutes),
            isha: rule(self.isha_angle, self.isha_minutes),
            ..CalculationConfig::default()
        }
    }

    fn coordinate(&self, config: &WaqtConfig) -> Result<Option<Coordinate>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                let elevation = self.elevation.or(config.location.elevation).unwrap_or(0.0);
                Ok(Some(Coordinate::validated(lat, lon, elevation)?))
            }
            (None, None) => {
                let mut c = config.coordinate()?;
                if let (Some(c), Some(e)) = (c.as_mut(), self.elevation) {
                    c.elevation = e;
                }
                Ok(c)
            }
            _ => bail!("--lat and --lon must be given together"),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_times(args: &TimesArgs) -> Result<()> {
    let context = match &args.config {
        Some(p) => format!("failed to load config {}", p.display()),
        None => "failed to load configuration".to_string(),
    };
    let config = WaqtConfig::load(args.config.as_deref()).context(context)?;

    let Some(coordinate) = args.coordinate(&config)? else {
        bail!("no location: pass --lat and --lon, or set [location] in the config file");
    };

    let settings = args.calculation_overrides().apply(config.settings());
    let mut calc = PrayerCalculator::new(settings).with_coordinate(coordinate);
    if let Some(date) = args.date {
        calc = calc.with_date(date);
    }
    if let Some(tz) = args.tz.or(config.location.utc_offset_hours) {
        calc = calc.with_utc_offset(tz);
    }
    debug!(?coordinate, method = calc.settings().method().name(), "computing");

    let date = calc.date();
    let tz = calc.utc_offset_hours();
    let Some(times) = calc.times_for(date) else {
        bail!("no location set");
    };

    let method = calc.settings().method();
    println!("Date:     {date}");
    println!(
        "Location: {:.4}, {:.4} (UTC{})",
        coordinate.latitude,
        coordinate.longitude,
        format_utc_offset(tz)
    );
    println!("Method:   {} ({})", method.name(), method.description());
    println!();
    for name in ALL_PRAYERS {
        println!(
            "{:<9} {}",
            name.display_name(),
            format_hours(times.hours(name), args.format)
        );
    }
    Ok(())
}

fn run_methods() {
    for method in ALL_METHODS {
        let p = method.params();
        println!(
            "{:<8} fajr {:>5} deg  maghrib {:<8} isha {:<8} midnight {:<8}  {}",
            method.name(),
            p.fajr_angle,
            describe_rule(p.maghrib),
            describe_rule(p.isha),
            p.midnight.name(),
            method.description()
        );
    }
}

fn run_sun(date: Option<CalendarDate>) {
    let date = date.unwrap_or_else(CalendarDate::today);
    let jd = date.to_jd();
    let pos = sun_position(jd);
    println!("Date:               {date} (JD {jd:.1})");
    println!("Declination:        {:.4} deg", pos.declination_deg);
    let eqt_min = pos.equation_of_time_h * 60.0;
    println!("Equation of time:   {eqt_min:.2} min");
    println!("Right ascension:    {:.4} h", pos.right_ascension_h);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Times(args) => run_times(&args)?,
        Commands::Methods => run_methods(),
        Commands::Sun { date } => run_sun(date),
    }
    Ok(())
}
