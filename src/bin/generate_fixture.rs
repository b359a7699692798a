use bsearch_fixture::Fixture;
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Number of keys; the array holds 0..size-1 in order.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    size: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let fixture = Fixture::new(args.size)?;
    let stdout = std::io::stdout();
    fixture.write_to(&mut stdout.lock())?;

    Ok(())
}
