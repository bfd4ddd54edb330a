use clap::{Parser, Subcommand};
use std::process::ExitCode;

use hg_core::{HgError, HgResult, Real};
use hg_flow::{darcy_flow, gradient};
use hg_pumping::{bouwer_rice_k, hvorslev_k, storativity, theis_drawdown, transmissivity};

#[derive(Parser)]
#[command(name = "hg-cli")]
#[command(about = "HydroGeo CLI - conversions and calculators for groundwater and environmental science", long_about = None)]
struct Cli {
    /// Print results as a JSON object instead of plain numbers
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unit conversions (length, flow, conductivity)
    #[command(subcommand)]
    Convert(ConvertCommands),
    /// Darcy's Law: Q = K * I * A
    Darcy {
        /// Hydraulic conductivity (e.g. m/s)
        #[arg(long)]
        k: f64,
        /// Hydraulic gradient (dimensionless)
        #[arg(long)]
        i: f64,
        /// Cross-sectional area perpendicular to flow (e.g. m²)
        #[arg(long)]
        a: f64,
    },
    /// Hydraulic gradient: I = Δh / ΔL
    Gradient {
        /// Head difference (e.g. m)
        #[arg(long)]
        dh: f64,
        /// Distance along flow path (same units as --dh)
        #[arg(long)]
        dl: f64,
    },
    /// Contamination concentration conversions
    #[command(subcommand)]
    Contam(ContamCommands),
    /// Pumping test analysis (Cooper-Jacob, Theis)
    #[command(subcommand)]
    Pumping(PumpingCommands),
    /// Slug test analysis (Hvorslev, Bouwer-Rice)
    #[command(subcommand)]
    Slug(SlugCommands),
}

#[derive(Subcommand)]
enum ConvertCommands {
    /// Convert length between feet (ft) and metres (m)
    Length {
        /// Source unit: ft or m
        #[arg(long = "from")]
        frm: String,
        /// Target unit: ft or m
        #[arg(long)]
        to: String,
        /// Numeric value to convert
        #[arg(long)]
        value: f64,
    },
    /// Convert flow rate between US gpm and L/s
    Flow {
        /// Source unit: gpm or L/s
        #[arg(long = "from")]
        frm: String,
        /// Target unit: gpm or L/s
        #[arg(long)]
        to: String,
        /// Numeric value to convert
        #[arg(long)]
        value: f64,
    },
    /// Convert hydraulic conductivity between m/s and m/day
    Conductivity {
        /// Source unit: m/s or m/day
        #[arg(long = "from")]
        frm: String,
        /// Target unit: m/s or m/day
        #[arg(long)]
        to: String,
        /// Numeric value to convert
        #[arg(long)]
        value: f64,
    },
}

#[derive(Subcommand)]
enum ContamCommands {
    /// Convert mg/L to µg/L
    Mg2ug {
        /// Concentration in mg/L
        #[arg(long)]
        value: f64,
    },
    /// Convert µg/L to mg/L
    Ug2mg {
        /// Concentration in µg/L
        #[arg(long)]
        value: f64,
    },
    /// Convert mol/L to mg/L using molecular weight
    Mol2mg {
        /// Concentration in mol/L
        #[arg(long)]
        value: f64,
        /// Molecular weight (g/mol)
        #[arg(long)]
        mw: f64,
    },
    /// Convert mg/L to mol/L using molecular weight
    Mg2mol {
        /// Concentration in mg/L
        #[arg(long)]
        value: f64,
        /// Molecular weight (g/mol)
        #[arg(long)]
        mw: f64,
    },
}

#[derive(Subcommand)]
enum PumpingCommands {
    /// Cooper-Jacob straight-line analysis
    #[command(subcommand)]
    CooperJacob(CooperJacobCommands),
    /// Theis transient solution
    #[command(subcommand)]
    Theis(TheisCommands),
}

#[derive(Subcommand)]
enum CooperJacobCommands {
    /// Transmissivity from the straight-line slope: T = 2.3 Q / (4π Δs)
    Transmissivity {
        /// Pumping rate (e.g. m³/s)
        #[arg(long)]
        q: f64,
        /// Drawdown per log cycle of time (e.g. m)
        #[arg(long)]
        ds: f64,
    },
    /// Storativity from the time intercept: S = 2.25 T t0 / r²
    Storativity {
        /// Transmissivity (e.g. m²/s)
        #[arg(long)]
        t: f64,
        /// Time intercept at zero drawdown (e.g. s)
        #[arg(long)]
        t0: f64,
        /// Radial distance to observation well (e.g. m)
        #[arg(long)]
        r: f64,
    },
}

#[derive(Subcommand)]
enum TheisCommands {
    /// Drawdown at radius r and elapsed time: s = Q / (4πT) * W(u)
    Drawdown {
        /// Pumping rate (e.g. m³/s)
        #[arg(long)]
        q: f64,
        /// Transmissivity (e.g. m²/s)
        #[arg(long)]
        t: f64,
        /// Storativity (dimensionless)
        #[arg(long)]
        s: f64,
        /// Radial distance to observation well (e.g. m)
        #[arg(long)]
        r: f64,
        /// Elapsed time since pumping started (e.g. s)
        #[arg(long)]
        time: f64,
    },
}

#[derive(Subcommand)]
enum SlugCommands {
    /// Hvorslev method: K = r² ln(L/r) / (2 L t37)
    Hvorslev {
        /// Well radius (e.g. m)
        #[arg(long)]
        r: f64,
        /// Screened interval length (e.g. m)
        #[arg(long)]
        length: f64,
        /// Time to 37% recovery (e.g. s)
        #[arg(long)]
        t37: f64,
    },
    /// Bouwer-Rice method: K = rw² ln(re/rw) / (2 L t37)
    BouwerRice {
        /// Well radius (e.g. m)
        #[arg(long)]
        rw: f64,
        /// Effective radius of influence (e.g. m)
        #[arg(long)]
        re: f64,
        /// Screen length (e.g. m)
        #[arg(long)]
        length: f64,
        /// Time to 37% recovery (e.g. s)
        #[arg(long)]
        t37: f64,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Calc(#[from] HgError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    match cli.command {
        Commands::Convert(convert) => cmd_convert(convert, json),
        Commands::Darcy { k, i, a } => {
            print_scalar(darcy_flow(k, i, a)?, json);
            Ok(())
        }
        Commands::Gradient { dh, dl } => {
            print_scalar(gradient(dh, dl)?, json);
            Ok(())
        }
        Commands::Contam(contam) => cmd_contam(contam, json),
        Commands::Pumping(pumping) => cmd_pumping(pumping, json),
        Commands::Slug(slug) => cmd_slug(slug, json),
    }
}

fn cmd_convert(convert: ConvertCommands, json: bool) -> Result<(), CliError> {
    let result = match convert {
        ConvertCommands::Length { frm, to, value } => convert_length(&frm, &to, value)?,
        ConvertCommands::Flow { frm, to, value } => convert_flow(&frm, &to, value)?,
        ConvertCommands::Conductivity { frm, to, value } => {
            convert_conductivity(&frm, &to, value)?
        }
    };
    print_scalar(result, json);
    Ok(())
}

fn cmd_contam(contam: ContamCommands, json: bool) -> Result<(), CliError> {
    let result = match contam {
        ContamCommands::Mg2ug { value } => hg_convert::mg_to_ug(value)?,
        ContamCommands::Ug2mg { value } => hg_convert::ug_to_mg(value)?,
        ContamCommands::Mol2mg { value, mw } => hg_convert::mol_to_mg(value, mw)?,
        ContamCommands::Mg2mol { value, mw } => hg_convert::mg_to_mol(value, mw)?,
    };
    print_scalar(result, json);
    Ok(())
}

fn cmd_pumping(pumping: PumpingCommands, json: bool) -> Result<(), CliError> {
    match pumping {
        PumpingCommands::CooperJacob(cj) => {
            let result = match cj {
                CooperJacobCommands::Transmissivity { q, ds } => transmissivity(q, ds)?,
                CooperJacobCommands::Storativity { t, t0, r } => storativity(t, t0, r)?,
            };
            print_scalar(result, json);
            Ok(())
        }
        PumpingCommands::Theis(TheisCommands::Drawdown { q, t, s, r, time }) => {
            let result = theis_drawdown(q, t, s, r, time)?;
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("u = {:?}", result.u);
                println!("s = {:?}", result.drawdown);
            }
            Ok(())
        }
    }
}

fn cmd_slug(slug: SlugCommands, json: bool) -> Result<(), CliError> {
    let result = match slug {
        SlugCommands::Hvorslev { r, length, t37 } => hvorslev_k(r, length, t37)?,
        SlugCommands::BouwerRice {
            rw,
            re,
            length,
            t37,
        } => bouwer_rice_k(rw, re, length, t37)?,
    };
    print_scalar(result, json);
    Ok(())
}

/// Normalize a unit token: trimmed, lowercased, inner spaces removed.
fn norm(unit: &str) -> String {
    unit.trim().to_lowercase().replace(' ', "")
}

fn convert_length(frm: &str, to: &str, value: Real) -> HgResult<Real> {
    match (norm(frm).as_str(), norm(to).as_str()) {
        ("ft", "m") => hg_convert::feet_to_meters(value),
        ("m", "ft") => hg_convert::meters_to_feet(value),
        ("ft", "ft") | ("m", "m") => Ok(value),
        _ => Err(HgError::InvalidInput {
            what: r#"length units must be "ft" or "m""#,
        }),
    }
}

fn convert_flow(frm: &str, to: &str, value: Real) -> HgResult<Real> {
    // Accept "ls" as a slash-free spelling of L/s.
    let canon = |unit: &str| -> String {
        let unit = norm(unit);
        if unit == "ls" { "l/s".to_string() } else { unit }
    };
    match (canon(frm).as_str(), canon(to).as_str()) {
        ("gpm", "l/s") => hg_convert::gpm_to_l_per_s(value),
        ("l/s", "gpm") => hg_convert::l_per_s_to_gpm(value),
        ("gpm", "gpm") | ("l/s", "l/s") => Ok(value),
        _ => Err(HgError::InvalidInput {
            what: r#"flow rate units must be "gpm" or "L/s""#,
        }),
    }
}

fn convert_conductivity(frm: &str, to: &str, value: Real) -> HgResult<Real> {
    match (norm(frm).as_str(), norm(to).as_str()) {
        ("m/s", "m/day") => hg_convert::m_per_s_to_m_per_day(value),
        ("m/day", "m/s") => hg_convert::m_per_day_to_m_per_s(value),
        ("m/s", "m/s") | ("m/day", "m/day") => Ok(value),
        _ => Err(HgError::InvalidInput {
            what: r#"conductivity units must be "m/s" or "m/day""#,
        }),
    }
}

fn print_scalar(value: Real, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "result": value }));
    } else {
        // Debug formatting prints the shortest round-trip decimal,
        // e.g. 500.0 rather than 500.
        println!("{value:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_tokens_normalize() {
        assert_eq!(convert_length(" FT ", "m", 10.0).unwrap(), 3.048);
        assert_eq!(convert_length("m", "m", 2.5).unwrap(), 2.5);
        assert!(convert_length("yd", "m", 1.0).is_err());

        assert_eq!(convert_flow("LS", "l/s", 4.0).unwrap(), 4.0);
        assert!(convert_flow("gpm", "m/s", 1.0).is_err());

        assert!(convert_conductivity("m/s", "m/day", 1.0).is_ok());
        assert!(convert_conductivity("cm/s", "m/day", 1.0).is_err());
    }
}
