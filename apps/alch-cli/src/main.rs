use alch_core::Rational;
use alch_ingredients::{AlchemicalIngredient, IngredientError, IngredientType, Name, Temperature};
use alch_measure::{
    Capacity, MeasureError, Quantity, State, Unit, parse_quantity, parse_quantity_in,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "alch-cli")]
#[command(about = "Alchemy mixer CLI - exact ingredient quantities and names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a quantity such as "2 vials" to spoons, storerooms or another unit
    Convert {
        /// Amount and unit, e.g. "3 pinches"
        quantity: String,
        /// Target unit
        #[arg(long)]
        to: Option<Unit>,
        /// Require the unit to be valid for this state
        #[arg(long)]
        state: Option<State>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build an ingredient type from component names and print its names
    Name {
        /// Component names, e.g. "Mint" "Water"
        #[arg(required = true)]
        components: Vec<String>,
        /// Standard state
        #[arg(long, default_value = "liquid")]
        state: State,
        /// Special name (mixtures only)
        #[arg(long)]
        special: Option<String>,
        /// Heat the instance above its standard temperature
        #[arg(long, default_value_t = 0)]
        heat: i64,
        /// Cool the instance below its standard temperature
        #[arg(long, default_value_t = 0)]
        cool: i64,
        /// Quantity of the instance; checked against containers
        #[arg(long, default_value = "1 spoon")]
        quantity: String,
        /// Container unit to check the instance against
        #[arg(long)]
        container: Option<Unit>,
    },
    /// Apply heating and cooling to a temperature
    Temperature {
        #[arg(long, default_value_t = 0)]
        coldness: i64,
        #[arg(long, default_value_t = 0)]
        hotness: i64,
        #[arg(long, default_value_t = 0)]
        heat: i64,
        #[arg(long, default_value_t = 0)]
        cool: i64,
    },
    /// List units, optionally only those valid for a state
    Units {
        #[arg(long)]
        state: Option<State>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Measure(#[from] MeasureError),

    #[error(transparent)]
    Ingredient(#[from] IngredientError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Serialize)]
struct ConversionReport {
    quantity: Quantity,
    spoons: Rational,
    storerooms: Rational,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<TargetReport>,
}

#[derive(Serialize)]
struct TargetReport {
    unit: Unit,
    value: Rational,
    exact: Option<Quantity>,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Convert {
            quantity,
            to,
            state,
            json,
        } => cmd_convert(&quantity, to, state, json),
        Commands::Name {
            components,
            state,
            special,
            heat,
            cool,
            quantity,
            container,
        } => cmd_name(
            &components,
            state,
            special.as_deref(),
            heat,
            cool,
            &quantity,
            container,
        ),
        Commands::Temperature {
            coldness,
            hotness,
            heat,
            cool,
        } => {
            cmd_temperature(coldness, hotness, heat, cool);
            Ok(())
        }
        Commands::Units { state } => {
            cmd_units(state);
            Ok(())
        }
    }
}

fn cmd_convert(text: &str, to: Option<Unit>, state: Option<State>, json: bool) -> CliResult<()> {
    let quantity = match state {
        Some(state) => parse_quantity_in(text, state)?,
        None => parse_quantity(text)?,
    };

    let spoons = quantity.base_value()?;
    let target = match to {
        Some(unit) => Some(TargetReport {
            unit,
            value: quantity.value_in(unit)?,
            exact: Quantity::from_base_value(spoons, unit).ok(),
        }),
        None => None,
    };
    let report = ConversionReport {
        quantity,
        spoons,
        storerooms: quantity.bulk_value()?,
        target,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.quantity);
    println!("  Spoons:     {}", report.spoons);
    println!("  Storerooms: {} (~{:.6})", report.storerooms, report.storerooms.to_f64());
    if let Some(t) = &report.target {
        match &t.exact {
            Some(exact) => println!("  As {}: {}", t.unit, exact),
            None => println!("  As {}: {} (~{:.3})", t.unit, t.value, t.value.to_f64()),
        }
    }
    Ok(())
}

fn cmd_name(
    components: &[String],
    state: State,
    special: Option<&str>,
    heat: i64,
    cool: i64,
    quantity: &str,
    container: Option<Unit>,
) -> CliResult<()> {
    let names = components
        .iter()
        .map(|c| Name::new(c.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut ingredient_type = IngredientType::new(names, state, Temperature::new(0, 20))?;
    if let Some(special) = special {
        ingredient_type.set_special_name(Name::new(special)?)?;
    }

    let mut ingredient =
        AlchemicalIngredient::of_type(ingredient_type, parse_quantity(quantity)?)?;
    ingredient.heat(heat);
    ingredient.cool(cool);

    println!("Simple name: {}", ingredient.simple_name());
    println!("Full name:   {}", ingredient.full_name());
    println!(
        "Mixture:     {}",
        if ingredient.ingredient_type().is_mixture() {
            "yes"
        } else {
            "no"
        }
    );
    println!("Temperature: {}", ingredient.temperature());
    println!("Quantity:    {} ({})", ingredient.quantity(), ingredient.state());

    if let Some(unit) = container {
        let capacity = Capacity::of(unit)?;
        let verdict = if ingredient.fits_in(&capacity) {
            "fits"
        } else {
            "does not fit"
        };
        println!("Container:   {} {}", verdict, unit);
    }
    Ok(())
}

fn cmd_temperature(coldness: i64, hotness: i64, heat: i64, cool: i64) {
    let start = Temperature::new(coldness, hotness);
    let end = start.heat(heat).cool(cool);
    println!("Start: {}", start);
    println!("End:   {}", end);
}

fn cmd_units(state: Option<State>) {
    let units: Vec<Unit> = match state {
        Some(state) => state.representative_units().to_vec(),
        None => Unit::ALL.to_vec(),
    };
    for unit in units {
        println!(
            "  {:<10} {:>6} spoons{}",
            unit.key(),
            unit.value().to_string(),
            if unit.is_container() { "  (container)" } else { "" }
        );
    }
}
