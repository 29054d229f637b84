//! Hexfire - command line entry point
//!
//! Resolves a single attack or skill check and prints the result as JSON
//! (for battle-log tooling) or text.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hexfire::catalog::WeaponCatalog;
use hexfire::combat::{
    explain_tn, hit_probability, resolve_attack, skill_check, AttackResult, Attacker,
    EngagementContext, Facing, LineOfSight, MovementMode, SkillCheckResult, Target,
    ToHitBreakdown, WoodsDensity,
};
use hexfire::core::{EngineConfig, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Resolve tabletop attacks and skill checks
#[derive(Parser, Debug)]
#[command(name = "hexfire")]
#[command(about = "Resolve 2d6 tabletop attacks and skill checks")]
struct Cli {
    /// Session config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll one attack
    Attack(AttackArgs),
    /// Show the target number and hit odds without rolling
    Odds(AttackArgs),
    /// Roll a skill check
    Check {
        #[arg(long)]
        skill: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
    },
    /// List catalog weapons
    Weapons,
}

#[derive(Args, Debug)]
struct AttackArgs {
    /// Weapon name from the catalog
    #[arg(long)]
    weapon: String,

    #[arg(long, default_value_t = 4)]
    gunnery: i32,

    #[arg(long, default_value_t = 5)]
    piloting: i32,

    #[arg(long, value_enum, default_value_t = MovementArg::Stationary)]
    movement: MovementArg,

    #[arg(long)]
    targeting_computer: bool,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    theater_bonus: i32,

    /// Hexes the target moved this turn
    #[arg(long, default_value_t = 0)]
    target_moved: u32,

    /// Woods in the target's hex
    #[arg(long, value_enum)]
    target_woods: Option<WoodsArg>,

    #[arg(long)]
    partial_cover: bool,

    #[arg(long)]
    prone: bool,

    #[arg(long)]
    immobile: bool,

    /// front, left, right or rear (anything else is front)
    #[arg(long, default_value = "front")]
    facing: String,

    /// Range in hexes
    #[arg(long)]
    range: u32,

    #[arg(long, value_enum, default_value_t = LosArg::Clear)]
    los: LosArg,

    #[arg(long, default_value_t = 0)]
    light_woods: u32,

    #[arg(long, default_value_t = 0)]
    heavy_woods: u32,

    #[arg(long)]
    night: bool,

    #[arg(long)]
    called_shot: bool,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    custom_modifier: i32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MovementArg {
    Stationary,
    Walked,
    Ran,
    Jumped,
}

impl From<MovementArg> for MovementMode {
    fn from(arg: MovementArg) -> Self {
        match arg {
            MovementArg::Stationary => MovementMode::Stationary,
            MovementArg::Walked => MovementMode::Walked,
            MovementArg::Ran => MovementMode::Ran,
            MovementArg::Jumped => MovementMode::Jumped,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WoodsArg {
    Light,
    Heavy,
}

impl From<WoodsArg> for WoodsDensity {
    fn from(arg: WoodsArg) -> Self {
        match arg {
            WoodsArg::Light => WoodsDensity::Light,
            WoodsArg::Heavy => WoodsDensity::Heavy,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LosArg {
    Clear,
    Woods,
    Partial,
}

impl From<LosArg> for LineOfSight {
    fn from(arg: LosArg) -> Self {
        match arg {
            LosArg::Clear => LineOfSight::Clear,
            LosArg::Woods => LineOfSight::Woods,
            LosArg::Partial => LineOfSight::Partial,
        }
    }
}

impl AttackArgs {
    fn records(&self) -> (Attacker, Target, EngagementContext) {
        let attacker = Attacker {
            gunnery: self.gunnery,
            piloting: self.piloting,
            movement: self.movement.into(),
            targeting_computer: self.targeting_computer,
            theater_bonus: self.theater_bonus,
        };
        let target = Target {
            hexes_moved: self.target_moved,
            woods: self.target_woods.map(Into::into),
            partial_cover: self.partial_cover,
            prone: self.prone,
            immobile: self.immobile,
            facing: Facing::parse(&self.facing),
        };
        let context = EngagementContext {
            distance: self.range,
            line_of_sight: self.los.into(),
            light_woods: self.light_woods,
            heavy_woods: self.heavy_woods,
            night: self.night,
            called_shot: self.called_shot,
            custom_modifier: self.custom_modifier,
        };
        (attacker, target, context)
    }
}

/// JSON output for `attack` and `odds`
#[derive(Serialize)]
struct AttackReport<'a> {
    weapon: &'a str,
    breakdown: ToHitBreakdown,
    hit_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<AttackResult>,
}

/// JSON output for `check`
#[derive(Serialize)]
struct CheckReport {
    skill: i32,
    modifier: i32,
    result: SkillCheckResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = config.weapon_catalog()?;
    tracing::debug!("Catalog holds {} weapons", catalog.len());

    match &cli.command {
        Command::Attack(args) => run_attack(&cli, &config, &catalog, args, true),
        Command::Odds(args) => run_attack(&cli, &config, &catalog, args, false),
        Command::Check { skill, modifier } => {
            let mut rolls = config.roll_source();
            let result = skill_check(*skill, *modifier, &mut rolls);
            match cli.format {
                Format::Json => {
                    let report = CheckReport {
                        skill: *skill,
                        modifier: *modifier,
                        result,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Format::Text => println!(
                    "{}: rolled {} vs TN {}",
                    if result.success { "PASS" } else { "FAIL" },
                    result.roll,
                    result.target_number
                ),
            }
            Ok(())
        }
        Command::Weapons => {
            for weapon in catalog.all() {
                println!(
                    "{:<20} dmg {:>2}  heat {:>2}  {}/{}/{}",
                    weapon.name,
                    weapon.damage,
                    weapon.heat,
                    weapon.range.short,
                    weapon.range.medium,
                    weapon.range.long
                );
            }
            Ok(())
        }
    }
}

fn run_attack(
    cli: &Cli,
    config: &EngineConfig,
    catalog: &WeaponCatalog,
    args: &AttackArgs,
    roll: bool,
) -> Result<()> {
    let weapon = catalog.require(&args.weapon)?;
    let (attacker, target, context) = args.records();

    let breakdown = explain_tn(&attacker, &target, weapon, &context);
    let probability = hit_probability(breakdown.target_number);
    let result = if roll {
        let mut rolls = config.roll_source();
        Some(resolve_attack(&attacker, &target, weapon, &context, &mut rolls))
    } else {
        None
    };

    match cli.format {
        Format::Json => {
            let report = AttackReport {
                weapon: &weapon.name,
                breakdown,
                hit_probability: probability,
                result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text => {
            println!("{} at {} hexes", weapon.name, context.distance);
            for modifier in &breakdown.modifiers {
                println!("  {:<20} {:+}", format!("{:?}", modifier.kind), modifier.value);
            }
            println!(
                "  TN {} ({:.1}% to hit)",
                breakdown.target_number,
                probability * 100.0
            );
            if let Some(result) = result {
                println!("{}", result);
                if result.heat > 0 {
                    println!("  heat +{}", result.heat);
                }
            }
        }
    }
    Ok(())
}
