use clap::Parser;
use log::info;

use logic_rs::workbench::Workbench;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Sum-of-products equation over A, B and C.
    #[arg(value_name = "EQUATION", default_value = "f = AB + A'C")]
    equation: String,

    /// Print the circuit in DOT format as well.
    #[clap(long)]
    dot: bool,

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

    let mut wb = Workbench::new();
    wb.set_equation_text(&args.equation)?;
    info!("synthesized {} component(s)", wb.components().len());

    println!("Karnaugh map:");
    println!("{}", wb.karnaugh_map());
    println!();

    println!("Netlist:");
    println!("{}", wb.circuit().canonical_text());
    println!();

    println!("Read back: {}", wb.equation_text());

    // Walk all eight input combinations through the live circuit.
    println!();
    println!("A B C | f");
    let ids: Vec<_> = ["A", "B", "C"]
        .iter()
        .filter_map(|name| wb.circuit().find_input(name).map(|c| c.id()))
        .collect();
    for m in 0..8u32 {
        for (k, &id) in ids.iter().enumerate() {
            wb.set_input_value(id, (m >> (2 - k)) & 1 == 1)?;
        }
        println!("{} {} {} | {}", (m >> 2) & 1, (m >> 1) & 1, m & 1, wb.output_value() as u8);
    }

    if args.dot {
        println!();
        println!("{}", wb.circuit().to_dot()?);
    }

    Ok(())
}
