use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fqdn_rand::config::Config;
use fqdn_rand::{fqdn_rand_report, SeedPart};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Repeatable per-node random integer in [0, MAX), for spreading scheduled
/// jobs across a fleet.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Exclusive upper bound
    max: String,
    /// Extra seed values; different seeds give unrelated numbers
    seed: Vec<String>,
    /// Node identifier (default: FQDN_RAND_FQDN, then host name + resolver domain)
    #[arg(long)]
    fqdn: Option<String>,
    /// Force SHA-256 (default: FQDN_RAND_FIPS, then the kernel FIPS flag)
    #[arg(long, conflicts_with = "no_fips")]
    fips: bool,
    /// Force the legacy MD5 digest
    #[arg(long)]
    no_fips: bool,
    /// Parse MAX and each SEED as JSON values instead of plain text
    #[arg(long)]
    typed: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Args {
    fn fips_override(&self) -> Option<bool> {
        match (self.fips, self.no_fips) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn host_args(&self) -> anyhow::Result<Vec<SeedPart>> {
        std::iter::once(&self.max)
            .chain(self.seed.iter())
            .map(|raw| {
                if self.typed {
                    serde_json::from_str(raw).with_context(|| format!("invalid JSON value {raw:?}"))
                } else {
                    Ok(SeedPart::Text(raw.clone()))
                }
            })
            .collect()
    }

    /// Command-line values take precedence over the environment.
    fn apply_to(&self, env_config: Config) -> Config {
        env_config
            .with_fqdn(self.fqdn.clone())
            .with_fips(self.fips_override())
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = args.apply_to(Config::from_env().context("reading configuration from environment")?);
    config.validate()?;
    init_tracing(&config.log_level);

    let ctx = config.node_context().context("resolving node identity")?;
    tracing::debug!(fips = ctx.fips_enabled, "resolved host context");

    let report = fqdn_rand_report(&ctx, &args.host_args()?)?;
    match args.format {
        Format::Text => println!("{}", report.value),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
