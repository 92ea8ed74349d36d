use clap::Parser;
use std::{fs::File, io::BufWriter, path::PathBuf};
use tabled::{Table, settings::Style};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};
use vcg_allocation::{
    AllocationSearchBuilder, DEFAULT_TIE_BREAK_SEED, Partition, SeededTieBreak, SetPartitions,
    WriterSink,
    error::Result,
    io::{DEFAULT_DELIMITER, delimiter_byte, read_partitions, read_value_matrix},
};

/// Search item partitions for the one that maximizes VCG revenue
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Delimited file of bidder values, one row per bidder and one column per item
    #[arg(short, long, env = "VCG_VALUES")]
    values: PathBuf,

    /// Field delimiter of the value file
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER as char)]
    delimiter: char,

    /// JSON file of candidate partitions; every partition of the items when omitted
    #[arg(short, long, env = "VCG_PARTITIONS")]
    partitions: Option<PathBuf>,

    /// Where to write one line per evaluated partition
    #[arg(short, long, default_value = "allocation_price.txt")]
    log: PathBuf,

    /// Seed reused for every tie-break
    #[arg(short, long, default_value_t = DEFAULT_TIE_BREAK_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let values = read_value_matrix(&cli.values, delimiter_byte(cli.delimiter)?)?;
    println!(
        "Loaded values for {} bidders and {} items",
        values.bidder_count(),
        values.item_count()
    );

    let candidates: Box<dyn Iterator<Item = Partition>> = match &cli.partitions {
        Some(path) => Box::new(read_partitions(path)?.into_iter()),
        None => Box::new(SetPartitions::new(values.item_count())?),
    };

    let mut search = AllocationSearchBuilder::default()
        .values(values)
        .tie_break(SeededTieBreak::new(cli.seed))
        .build()?;

    let mut sink = WriterSink::new(BufWriter::new(File::create(&cli.log)?));
    search.run(candidates, &mut sink)?;
    sink.into_inner()?;

    let evaluated = search.evaluated();
    let best = search.best().clone();
    match best.allocation() {
        None => println!("No allocation evaluated"),
        Some(allocation) => {
            println!(
                "Best allocation: {} and the mechanism charges {} ({} candidates)",
                allocation,
                best.score(),
                evaluated
            );
            let outcome = search.evaluate(allocation)?;
            let table = Table::new(outcome.bundle_rows())
                .with(Style::psql().remove_horizontals())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
