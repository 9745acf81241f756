use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use tarn::{timed, GlyphPalette, Map, MapConfig, MapRenderer, RenderConfig};

/// CLI for generating lake maps via the Tarn generation kit.
#[derive(Debug, StructOpt)]
#[structopt(name = "tarn")]
struct Opt {
    /// Path to a config file that defines the map to be generated. Supported
    /// formats: JSON, TOML. If not given, the default config is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// RNG seed to generate with, overriding whatever the config file says.
    #[structopt(short, long)]
    seed: Option<u64>,

    /// If given, the generated map will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info. If not given, the
    /// rendered map is printed to stdout instead.
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the map in. Supported formats:
    ///
    /// cfg - The full config object used for the map, in TOML format
    ///
    /// json - JSON representation, which can be reloaded by other tools
    ///
    /// text - Rendered character grid, the same thing printed to stdout
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The glyph palette used to draw depth buckets. Only relevant for the
    /// text output format.
    #[structopt(long, default_value = "blocks")]
    charset: GlyphPalette,

    /// The logging level to use during map generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the map's full config in a human-readable file
    Cfg,
    /// Export the map in a serialized JSON format, which can be deserialized
    /// later to recover the map
    Json,
    /// Render the map as a character grid
    Text,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<MapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Generate an output form of the map in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    map: &Map,
    renderer: &MapRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        map: &Map,
        renderer: &MapRenderer,
    ) -> Vec<u8> {
        match output_format {
            OutputFormat::Cfg => {
                // Serialize just the map config via toml
                toml::to_string_pretty(map.config())
                    // Panics only if config format isn't serializable (a bug)
                    .expect("error serializing config")
                    .into_bytes()
            }
            OutputFormat::Json => {
                // Serialize the entire map via JSON
                map.to_json().into_bytes()
            }
            OutputFormat::Text => {
                // Render the map as a character grid
                renderer.render_as_text(map).into_bytes()
            }
        }
    }

    let output_file_path = output_dir
        .join("map")
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, map, renderer);
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut map_config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => MapConfig::default(),
    };
    if let Some(seed) = opt.seed {
        map_config.seed = seed;
    }

    let map = Map::generate(map_config)?;
    let renderer = MapRenderer::new(RenderConfig {
        palette: opt.charset,
    });

    match opt.output {
        // An output dir was specified, write out output format(s) there
        Some(output_dir) => {
            if opt.output_formats.is_empty() {
                bail!(
                    "output dir was specified, but no output formats were \
                    given"
                )
            }
            fs::create_dir_all(&output_dir)?;
            for output_format in opt.output_formats {
                gen_output(&output_dir, output_format, &map, &renderer)?;
            }
        }
        // No output dir, just show the map
        None => {
            print!("{}", renderer.render_as_text(&map));
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
