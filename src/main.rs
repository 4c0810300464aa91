use asciify::cli::Args;
use asciify::config::Config;
use asciify::pipeline;
use asciify::render::OutputType;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), asciify::AsciifyError> {
    // An explicit --config must exist; the default location is optional.
    let cfg = Config::load(args.config.as_deref())?;
    let options = args.resolve(&cfg);
    log::debug!("Options: {:?}", options);

    let mut bytes = pipeline::run(&args.image, &options)?;
    if args.out.is_none() && options.output == OutputType::Text {
        bytes.push(b'\n');
    }
    pipeline::write_output(&bytes, args.out.as_deref())
}
