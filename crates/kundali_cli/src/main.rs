use clap::{Parser, Subcommand};
use kundali_base::dasha::{
    CharaInputs, DEFAULT_NUM_YEARS, DashaPeriod, DashaSystem, chara_snapshot_at, chara_tree,
    expand_tree, ruleset_for, snapshot_at,
};
use kundali_base::{
    Varga, degree_in_rasi, divisional_position_by_code, nakshatra_fraction, nakshatra_index,
    nakshatra_name, pada_of, rasi_of,
};

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal computation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign from sidereal longitude
    Rasi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Divisional chart position from sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Divisional order (1, 2, 3, ..., 60)
        #[arg(long, default_value = "9")]
        order: u16,
    },
    /// Top-level dasha periods from the Moon's sidereal longitude
    Dasha {
        /// Moon's sidereal longitude in degrees
        moon_lon: f64,
        /// Birth Julian Day (UTC)
        #[arg(long)]
        birth_jd: f64,
        /// System: vimshottari, yogini, ashtottari, "kala chakra"
        #[arg(long, default_value = "vimshottari")]
        system: String,
        /// Hierarchy depth (1..=5)
        #[arg(long, default_value = "1")]
        depth: u8,
    },
    /// Active dasha chain at a query date
    Snapshot {
        /// Moon's sidereal longitude in degrees
        moon_lon: f64,
        /// Birth Julian Day (UTC)
        #[arg(long)]
        birth_jd: f64,
        /// Query Julian Day (UTC)
        #[arg(long)]
        query_jd: f64,
        /// System: vimshottari, yogini, ashtottari, "kala chakra"
        #[arg(long, default_value = "vimshottari")]
        system: String,
        /// Hierarchy depth (1..=5)
        #[arg(long, default_value = "3")]
        depth: u8,
    },
    /// Chara dasha periods from ascendant and planet longitudes
    Chara {
        /// Ascendant sidereal longitude in degrees
        lagna_lon: f64,
        /// Birth Julian Day (UTC)
        #[arg(long)]
        birth_jd: f64,
        /// Nine planet sidereal longitudes (Sun, Moon, Mercury, Venus,
        /// Mars, Jupiter, Saturn, Rahu, Ketu)
        #[arg(long, num_args = 9, value_delimiter = ',')]
        planets: Vec<f64>,
        /// Query Julian Day for a snapshot instead of the full list
        #[arg(long)]
        query_jd: Option<f64>,
        /// Hierarchy depth (1..=5)
        #[arg(long, default_value = "1")]
        depth: u8,
    },
}

fn parse_system(name: &str) -> Result<DashaSystem, String> {
    DashaSystem::from_name(name).ok_or_else(|| format!("unknown dasha system: {name}"))
}

/// Print one level's periods under `parent`, recursing into deeper
/// levels, indented two spaces per level.
fn print_periods(levels: &[Vec<DashaPeriod>], level: usize, parent: u32) {
    for (i, period) in levels[level].iter().enumerate() {
        if level > 0 && period.parent_idx != parent {
            continue;
        }
        println!(
            "{:indent$}{:<12} {:14.5} - {:14.5} ({:8.2} days)",
            "",
            period.lord.name(),
            period.start_jd,
            period.end_jd,
            period.duration_days(),
            indent = level * 2
        );
        if level + 1 < levels.len() {
            print_periods(levels, level + 1, i as u32);
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rasi { lon } => {
            let rasi = rasi_of(lon);
            println!(
                "Rasi {} ({:.4} deg in sign)",
                rasi,
                degree_in_rasi(lon)
            );
        }

        Commands::Nakshatra { lon } => {
            let idx = nakshatra_index(lon);
            println!(
                "{} (index {}) - Pada {} ({:.2}% traversed)",
                nakshatra_name(idx),
                idx,
                pada_of(lon),
                nakshatra_fraction(lon) * 100.0
            );
        }

        Commands::Varga { lon, order } => {
            let varga = Varga::from_code(order).map_err(|e| e.to_string())?;
            let pos = divisional_position_by_code(lon, order).map_err(|e| e.to_string())?;
            println!("{} (D{}): sign {}", varga.name(), order, pos);
        }

        Commands::Dasha {
            moon_lon,
            birth_jd,
            system,
            depth,
        } => {
            let system = parse_system(&system)?;
            let rs = ruleset_for(system)
                .ok_or("chara requires the chara subcommand with planet positions")?;
            let tree = expand_tree(birth_jd, moon_lon, &rs, depth, DEFAULT_NUM_YEARS)
                .map_err(|e| e.to_string())?;
            print_periods(&tree.levels, 0, 0);
        }

        Commands::Snapshot {
            moon_lon,
            birth_jd,
            query_jd,
            system,
            depth,
        } => {
            let system = parse_system(&system)?;
            let rs = ruleset_for(system)
                .ok_or("chara requires the chara subcommand with planet positions")?;
            let snap = snapshot_at(birth_jd, moon_lon, &rs, query_jd, depth, DEFAULT_NUM_YEARS)
                .map_err(|e| e.to_string())?;
            for period in &snap.periods {
                println!(
                    "{:<16} {:<12} {:14.5} - {:14.5}",
                    period.level.name(),
                    period.lord.name(),
                    period.start_jd,
                    period.end_jd
                );
            }
        }

        Commands::Chara {
            lagna_lon,
            birth_jd,
            planets,
            query_jd,
            depth,
        } => {
            let lons: [f64; 9] = planets
                .try_into()
                .map_err(|_| "exactly 9 planet longitudes required".to_string())?;
            let inputs = CharaInputs::from_longitudes(lons, lagna_lon);
            match query_jd {
                Some(query_jd) => {
                    let snap = chara_snapshot_at(birth_jd, &inputs, query_jd, depth)
                        .map_err(|e| e.to_string())?;
                    for period in &snap.periods {
                        println!(
                            "{:<16} {:<12} {:14.5} - {:14.5}",
                            period.level.name(),
                            period.lord.name(),
                            period.start_jd,
                            period.end_jd
                        );
                    }
                }
                None => {
                    let tree = chara_tree(birth_jd, &inputs, depth).map_err(|e| e.to_string())?;
                    print_periods(&tree.levels, 0, 0);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
