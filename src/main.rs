use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use mobile_pattern_summary::analysis::pattern_analysis;
use mobile_pattern_summary::args::Args;
use mobile_pattern_summary::compile_mobile_patterns;
use mobile_pattern_summary::output::print_patterns;
use mobile_pattern_summary::ucm::{provision_patterns, AxlClient, ProvisionOptions};
use mobile_pattern_summary::{ift, output};
use std::error::Error;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse(std::env::args()).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });
    init_logging(args.debug);
    log::info!("#Start main()");

    if args.analysis {
        pattern_analysis(Path::new("."), args.show_patterns)?;
        return Ok(());
    }

    let zip_path: PathBuf = match args.from_file.as_deref() {
        Some(".") => ift::latest_snapshot(Path::new("."))?,
        Some(name) => PathBuf::from(name),
        None => ift::download_latest(Path::new(".")).await?,
    };

    let records = ift::read_records(&zip_path)?;
    let patterns = compile_mobile_patterns(&records)?;
    if args.show_patterns {
        print_patterns(&patterns)?;
    }
    log::info!(
        "Summarized to {}",
        output::snapshot_summary(&zip_path.display().to_string(), &patterns)
    );

    let Some(host) = args.ucm.as_deref() else {
        return Ok(());
    };
    let user = args.user.as_deref().ok_or("--user or AXL_USER is required")?;
    let password = args
        .password
        .as_deref()
        .ok_or("--pwd or AXL_PASSWORD is required")?;
    let client = AxlClient::new(host, user, password)?;
    let options = ProvisionOptions {
        read_only: args.read_only,
        route_list: args.route_list.clone(),
    };
    provision_patterns(&client, &patterns, &options).await?;

    Ok(())
}

fn init_logging(debug: bool) {
    if debug {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(
                Root::builder()
                    .appender("stdout")
                    .build(log::LevelFilter::Debug),
            )
            .expect("Error building debug log config");
        log4rs::init_config(config).expect("Error initializing log4rs");
    } else {
        log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    }
}
