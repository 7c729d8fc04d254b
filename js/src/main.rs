use esdate::*;

#[derive(clap::Parser)]
#[command(name = "esjs", version, about = "esjs Date regression suite runner")]
struct Cli {
    /// List the registered cases and exit
    #[arg(short, long)]
    list: bool,

    /// Local time zone: `local`, `UTC`, or an offset such as `+09:00`
    #[arg(long, default_value = "local")]
    tz: LocalZone,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Cases to run (all when omitted)
    cases: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logger (controlled by RUST_LOG)
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();

    if cli.list {
        for case in cases() {
            println!("{:<14} {}", case.id, case.description);
        }
        return Ok(());
    }

    let mut harness = Harness::new(cli.tz, OutputStream::stdout());
    let report = match run_cases(cli.cases.as_slice(), &mut harness) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        println!("{report}");
    }

    if !report.all_passed() {
        log::debug!("{} checks failed", report.failed());
        std::process::exit(1);
    }
    Ok(())
}
