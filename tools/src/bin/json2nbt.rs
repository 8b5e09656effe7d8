//! Convert a tagged JSON or YAML document to NBT.
//!
//! Reads from INPUT, or stdin when no input is given, and writes the NBT to
//! `--output` or stdout. YAML is picked with `--yaml` or a `.yaml`/`.yml`
//! input file.
//!
//! `--config` reads encode options from a YAML or JSON file, eg
//! `{ "byte_order": "little", "max_depth": 64 }`. Flags win over the file.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{info, warn};
use nbtjson::{json_to_nbt, yaml_to_nbt, EncodeOpts, Endian};

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut buf = vec![];
    match path {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("could not open {}", path))?
                .read_to_end(&mut buf)
                .with_context(|| format!("could not read {}", path))?;
        }
        None => {
            io::stdin()
                .read_to_end(&mut buf)
                .context("could not read stdin")?;
        }
    }
    Ok(buf)
}

fn is_yaml(args: &ArgMatches, input: Option<&str>) -> bool {
    if args.is_present("yaml") {
        return true;
    }

    input
        .and_then(|p| Path::new(p).extension())
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

fn load_config(path: &str) -> Result<EncodeOpts> {
    let file = File::open(path).with_context(|| format!("could not open {}", path))?;
    serde_yaml::from_reader(file).with_context(|| format!("invalid config {}", path))
}

fn opts(args: &ArgMatches) -> Result<EncodeOpts> {
    let mut opts = match args.value_of("config") {
        Some(path) => load_config(path)?,
        None => EncodeOpts::new(),
    };

    if args.is_present("little-endian") {
        opts = opts.byte_order(Endian::Little);
    }

    if let Some(depth) = args.value_of("max-depth") {
        let depth = depth
            .parse()
            .with_context(|| format!("invalid --max-depth: {}", depth))?;
        opts = opts.max_depth(depth);
    }

    Ok(opts)
}

fn write_output(path: Option<&str>, gzip: bool, nbt: &[u8]) -> Result<()> {
    let mut out: Box<dyn Write> = match path {
        Some(path) => {
            Box::new(File::create(path).with_context(|| format!("could not create {}", path))?)
        }
        None => Box::new(io::stdout()),
    };

    if gzip {
        let mut encoder = GzEncoder::new(out, Compression::default());
        encoder.write_all(nbt).context("could not write output")?;
        encoder
            .finish()
            .context("could not finish gzip stream")?
            .flush()?;
    } else {
        out.write_all(nbt).context("could not write output")?;
        out.flush()?;
    }

    Ok(())
}

fn run(args: &ArgMatches) -> Result<()> {
    let input = args.value_of("input");
    let opts = opts(args)?;
    let data = read_input(input)?;

    let nbt = if is_yaml(args, input) {
        yaml_to_nbt(&data, &opts).context("could not convert YAML to NBT")?
    } else {
        json_to_nbt(&data, &opts).context("could not convert JSON to NBT")?
    };

    if nbt.is_empty() {
        warn!("document has no tags, output is empty");
    }

    write_output(args.value_of("output"), args.is_present("gzip"), &nbt)?;
    info!(
        "wrote {} bytes of {:?} endian NBT",
        nbt.len(),
        opts.byte_order
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("json2nbt")
        .about("Convert tagged JSON or YAML to NBT")
        .arg(
            Arg::with_name("input")
                .help("JSON or YAML document, stdin if omitted")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("file to write the NBT to, stdout if omitted")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("yaml")
                .long("yaml")
                .help("read the input as YAML")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("little-endian")
                .long("little-endian")
                .help("write little endian (Bedrock) NBT")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("gzip")
                .long("gzip")
                .help("gzip the output")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .help("YAML or JSON file of encode options")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .help("deepest nesting of compounds and lists allowed")
                .takes_value(true)
                .required(false),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
