use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use osm2road::road::{Printable, Road};
use osm2road::transform::{tags_to_road, Config, RoadError, RoadFromTags};
use osm_tags::Tags;

/// Road cross-sections from OpenStreetMap way tags
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Tags of a single way, as `key=value`
    #[clap(required_unless_present = "input", conflicts_with = "input")]
    tags: Vec<String>,

    /// Read ways from a file, or `-` for stdin. Ways are separated by blank lines.
    #[clap(short, long)]
    input: Option<String>,

    /// Print JSON, one document per way
    #[clap(long)]
    json: bool,

    /// Treat warnings as errors
    #[clap(long)]
    strict: bool,

    /// Log specification, such as `debug` or `osm2road=trace`
    #[clap(long, default_value = "warn")]
    log: String,
}

/// Split text into the tags of each way, skipping empty blocks
fn split_ways(text: &str) -> Vec<String> {
    let mut ways = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                ways.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    if !current.is_empty() {
        ways.push(current);
    }
    ways
}

fn diagram(road: &Road) -> String {
    road.segments()
        .iter()
        .map(|segment| format!("{:<2}", segment.as_ascii()))
        .collect()
}

fn print_text(tags: &Tags, result: &Result<RoadFromTags, RoadError>) {
    println!("{}", tags.to_vec().join(" "));
    match result {
        Ok(RoadFromTags { road, warnings }) => {
            println!("    {}", road);
            println!("    {}", diagram(road));
            if !warnings.is_empty() {
                println!("{}", warnings);
            }
        },
        Err(RoadError::Warnings(warnings)) => println!("{}", warnings),
        Err(RoadError::Msg(msg)) => println!("Error: {}", msg),
    }
}

fn print_json(result: &Result<RoadFromTags, RoadError>) -> Result<(), serde_json::Error> {
    let json = match result {
        Ok(road_from_tags) => serde_json::to_string(road_from_tags)?,
        Err(e) => serde_json::to_string(e)?,
    };
    println!("{}", json);
    Ok(())
}

/// Transform and print a single way, returning whether it succeeded
fn process(way: &str, args: &Args, config: &Config) -> Result<bool, serde_json::Error> {
    let tags: Tags = match way.parse() {
        Ok(tags) => tags,
        Err(e) => {
            log::error!("invalid tags: {}", e);
            return Ok(false);
        },
    };
    let result = tags_to_road(&tags, config);
    if let Err(e) = &result {
        log::warn!("{}: {}", tags.to_vec().join(" "), e);
    }
    if args.json {
        print_json(&result)?;
    } else {
        print_text(&tags, &result);
    }
    Ok(result.is_ok())
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = flexi_logger::Logger::try_with_str(&args.log)?.start()?;

    let config = Config::new(args.strict);

    let ways = match args.input.as_deref() {
        Some("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            split_ways(&text)
        },
        Some(path) => split_ways(&std::fs::read_to_string(path)?),
        None => vec![args.tags.join("\n")],
    };
    log::info!("{} ways", ways.len());

    let mut failed = 0_usize;
    for way in &ways {
        if !process(way, &args, &config)? {
            failed += 1;
        }
    }

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!("{} of {} ways failed", failed, ways.len());
        Ok(ExitCode::FAILURE)
    }
}
