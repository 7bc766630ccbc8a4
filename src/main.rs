use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::PathBuf;

use subnet_explorer::models::{Cidr, HostRange};
use subnet_explorer::output::{export_csv, export_text, print_diagram, print_page, print_report};
use subnet_explorer::processing::{
    compute_subnet, filter_addresses, paginate, DEFAULT_PAGE_SIZE,
};

/// IPv4 subnet calculator: ranges, host lists, and one-level splits.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Subnet in CIDR notation, e.g. 192.168.1.10/24
    cidr: Cidr,

    /// Page of the usable-address table to display
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Addresses per page (falls back to PAGE_SIZE from the environment, then 50)
    #[arg(long)]
    page_size: Option<usize>,

    /// Keep only addresses containing this substring
    #[arg(short, long, default_value = "")]
    filter: String,

    /// Show per-octet binary detail next to each address
    #[arg(short, long)]
    binary: bool,

    /// Draw the per-address box diagram
    #[arg(short, long)]
    diagram: bool,

    /// Print the whole report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Zoom into child subnet 0 or 1; repeat to descend several levels
    #[arg(short, long)]
    zoom: Vec<u8>,

    /// Dump the usable addresses in this format
    #[arg(short, long, value_enum)]
    export: Option<ExportFormat>,

    /// Write the export to this file instead of stdout
    #[arg(short, long, requires = "export")]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    Csv,
    Text,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();

    let args = Args::parse();
    log::info!("#Start main() {}", args.cidr);

    let mut report = compute_subnet(args.cidr.addr, args.cidr.prefix)?;
    for &choice in &args.zoom {
        let child = *report
            .children
            .get(choice as usize)
            .ok_or_else(|| format!("{} has no child subnet #{choice}", report.cidr))?;
        log::debug!("zoom into {child}");
        report = compute_subnet(child.addr, child.prefix)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report)?;

    match &report.hosts {
        HostRange::Enumerated(addrs) => {
            let filtered = filter_addresses(addrs, &args.filter);
            let page = paginate(&filtered, page_size(&args), args.page);
            print_page(&page, args.binary);
        }
        HostRange::TooMany { count } => {
            log::warn!(
                "{count} usable hosts exceed the generation ceiling; zoom into a child subnet to enumerate"
            );
        }
    }

    if args.diagram {
        print_diagram(&report);
    }

    if let Some(format) = args.export {
        let addrs = report
            .hosts
            .addresses()
            .ok_or("no address list to export; zoom into a child subnet first")?;
        let contents = match format {
            ExportFormat::Csv => export_csv(addrs),
            ExportFormat::Text => export_text(addrs),
        };
        match &args.output {
            Some(path) => {
                std::fs::write(path, contents)?;
                println!("{} {}", "Exported to".bold(), path.display());
            }
            None => print!("{contents}"),
        }
    }

    Ok(())
}

fn page_size(args: &Args) -> usize {
    args.page_size
        .or_else(|| std::env::var("PAGE_SIZE").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

fn init_logging() {
    // log4rs.yml is optional; without it, warnings go to stderr.
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
            .expect("Error building fallback log config");
        log4rs::init_config(config).expect("Error initializing log4rs");
    }
}
