use color_eyre::Result;

fn main() -> Result<()> {
    heapspark::run_cli()
}
