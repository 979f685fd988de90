use clap::Parser;
use log::info;

use logic_rs::table::TruthTable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Boolean expression, e.g. "P -> Q" or "~(A & B)".
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Only print rows where the expression is true.
    #[clap(long)]
    only_true: bool,

    /// Show library logs.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let table = TruthTable::parse(&args.expression)?;
    info!("parsed: {}", table.expr());

    let header: Vec<String> = table.variables().iter().map(|v| v.to_string()).collect();
    println!("{} | {}", header.join(" "), table.expr());
    println!("{}", "-".repeat(header.len() * 2 + 2 + table.expr().to_string().chars().count()));
    for row in table.rows() {
        if args.only_true && !row.result {
            continue;
        }
        let values: Vec<String> = row.assignment.iter().map(|&(_, b)| (b as u8).to_string()).collect();
        println!("{} | {}", values.join(" "), row.result as u8);
    }

    println!();
    println!("minterms = {:?}", table.minterms());
    println!("classification = {}", table.classification());

    Ok(())
}
