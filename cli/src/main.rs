use {
    clap::Parser,
    datagen::{Generator, Result},
    indicatif::ProgressBar,
    std::io,
    tracing::debug,
    tracing_subscriber::EnvFilter,
};

fn validate_count(s: &str) -> std::result::Result<usize, String> {
    datagen::parse_count(s).map_err(|e| format!("{e}"))
}

#[derive(Parser)]
#[command(about = "Writes some_data_file_<ROWS>_<COLS>.txt with the row index repeated in every column")]
struct Args {
    #[arg(value_parser = validate_count, help = "Number of rows")]
    rows: usize,

    #[arg(value_parser = validate_count, help = "Number of columns")]
    cols: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(rows = args.rows, cols = args.cols, "arguments parsed");

    let pb = ProgressBar::new(args.rows as u64);

    let time = std::time::Instant::now();
    let file = Generator::new(args.rows, args.cols).run(&mut io::stdout(), || pb.inc(1))?;
    pb.finish_and_clear();

    debug!(
        path = %file.path.display(),
        secs = time.elapsed().as_secs_f32(),
        "generation done"
    );
    Ok(())
}
