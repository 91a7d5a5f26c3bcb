use clap::Parser;
use zigzag::{run, Args};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("{}", run(&args)?);

    Ok(())
}
