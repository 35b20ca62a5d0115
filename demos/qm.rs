//! Minimize a function given by its true indices.
//!
//! ```bash
//! cargo run --example qm -- A B C --values 1,3,5,7
//! cargo run --example qm -- A B C D --values 0,2,5,7,8,10,13,15 --dont-cares 1,14 --table
//! ```

use clap::Parser;

use qm_rs::qm::Qm;
use qm_rs::render::RenderConfig;
use qm_rs::table::{TruthTable, MAX_TABLE_VARIABLES};
use qm_rs::types::Mode;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Variable names, most significant first.
    #[arg(value_name = "NAME", required = true)]
    variables: Vec<String>,

    /// Indices where the function is true (false with `--maxterm`).
    #[arg(long, value_name = "INT", value_delimiter = ',')]
    values: Vec<u32>,

    /// Indices where the function value does not matter.
    #[arg(long, value_name = "INT", value_delimiter = ',')]
    dont_cares: Vec<u32>,

    /// Treat `--values` as the indices where the function is false.
    #[arg(long)]
    maxterm: bool,

    /// Use `~`, `*` and `+` instead of `NOT`, `AND` and `OR`.
    #[arg(long)]
    symbols: bool,

    /// Print the truth table of the shorter of both forms.
    #[arg(long)]
    table: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let mode = if args.maxterm { Mode::Maxterm } else { Mode::Minterm };
    let qm = Qm::new(&args.variables, &args.values, &args.dont_cares, mode)?;

    let config = if args.symbols {
        RenderConfig {
            not: "~",
            and: " * ",
            or: " + ",
        }
    } else {
        RenderConfig::default()
    };

    println!("mode = {}", qm.mode());
    println!("prime implicants = {}", qm.prime_implicants().len());
    for term in qm.implicants() {
        println!("  {}", term);
    }
    println!("f = {}", qm.render(&config));

    if args.table {
        if args.variables.len() > MAX_TABLE_VARIABLES {
            color_eyre::eyre::bail!("truth tables are limited to {} variables", MAX_TABLE_VARIABLES);
        }
        let true_values: Vec<u32> = if args.maxterm {
            (0..1u32 << args.variables.len())
                .filter(|i| !args.values.contains(i) && !args.dont_cares.contains(i))
                .collect()
        } else {
            args.values.clone()
        };
        let table = TruthTable::new(&args.variables, &true_values, &args.dont_cares)?;
        println!("sop = {}", table.minterm());
        println!("pos = {}", table.maxterm());
        println!("{}", table);
    }

    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
