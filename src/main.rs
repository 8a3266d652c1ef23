use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::debug;

use rngtv::manifest::format_manifest;
use rngtv::wav::encode_wav;
use rngtv::{render, Generator, NoiseField, RenderSettings, Source};

fn parse_duration(s: &str) -> Result<Duration, std::num::ParseIntError> {
    let ms: u64 = s.parse()?;
    Ok(Duration::from_millis(ms))
}

/// Dump and render reproducible random streams and simplex noise
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ClapArgs, Debug)]
struct Seed {
    /// Seed of the stream
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    seed: i64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print integers in [0, 32766], one per line
    Ints {
        #[command(flatten)]
        seed: Seed,

        /// Number of values to print
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Print floats in [0, 1), one per line
    Floats {
        #[command(flatten)]
        seed: Seed,

        /// Number of values to print
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Print normally distributed values, one per line
    Normals {
        #[command(flatten)]
        seed: Seed,

        /// Number of values to print
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Mean of the distribution
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        mean: f32,

        /// Standard deviation of the distribution
        #[arg(long, default_value_t = 1.0)]
        std: f32,
    },
    /// Print a grid of noise samples, one row per line
    Noise {
        #[command(flatten)]
        seed: Seed,

        /// Samples per row
        #[arg(long, default_value_t = 16)]
        width: usize,

        /// Number of rows
        #[arg(long, default_value_t = 16)]
        height: usize,

        /// Distance between neighbouring samples
        #[arg(long, default_value_t = 0.1)]
        step: f32,

        /// X coordinate of the first sample
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x0: f32,

        /// Y coordinate of the first sample
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y0: f32,

        /// Fractal octaves; 1 is plain simplex noise
        #[arg(long, default_value_t = 1)]
        octaves: u32,
    },
    /// Render a stream to <name>/<name>.wav with a TOML manifest
    Render {
        /// Output name, used for the directory and both files
        name: String,

        /// Stream to render
        #[arg(long, value_enum, default_value_t = Source::Noise)]
        source: Source,

        #[command(flatten)]
        seed: Seed,

        /// Seed of the noise field
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        noise_seed: i64,

        /// Render length in milliseconds
        #[arg(long, default_value = "2000", value_parser = parse_duration)]
        duration_ms: Duration,

        /// Output sample rate
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Lattice cells per second crossed by the noise source
        #[arg(long, default_value_t = 440.0)]
        frequency: f32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Commands::Ints { seed, count } => {
            check_count(count)?;
            let mut generator = Generator::new(seed.seed, 0);
            for _ in 0..count {
                writeln!(out, "{}", generator.next_int())?;
            }
        }
        Commands::Floats { seed, count } => {
            check_count(count)?;
            let mut generator = Generator::new(seed.seed, 0);
            for _ in 0..count {
                writeln!(out, "{}", generator.next_float())?;
            }
        }
        Commands::Normals {
            seed,
            count,
            mean,
            std,
        } => {
            check_count(count)?;
            if !mean.is_finite() || !std.is_finite() {
                bail!("mean and std must be finite (got {} and {})", mean, std);
            }
            let mut generator = Generator::new(seed.seed, 0);
            for _ in 0..count {
                writeln!(out, "{}", generator.next_normal(mean, std)?)?;
            }
        }
        Commands::Noise {
            seed,
            width,
            height,
            step,
            x0,
            y0,
            octaves,
        } => {
            if width == 0 || height == 0 {
                bail!("grid must be at least 1x1 (got {}x{})", width, height);
            }
            if !(step.is_finite() && step > 0.0) {
                bail!("step must be positive (got {})", step);
            }
            if octaves == 0 {
                bail!("octaves must be at least 1");
            }

            let field = NoiseField::new(seed.seed);
            for row in 0..height {
                let y = y0 + row as f32 * step;
                let line: Vec<String> = (0..width)
                    .map(|col| {
                        let x = x0 + col as f32 * step;
                        format!("{:.6}", field.fractal(x, y, octaves, 0.5, 2.0))
                    })
                    .collect();
                writeln!(out, "{}", line.join(" "))?;
            }
        }
        Commands::Render {
            name,
            source,
            seed,
            noise_seed,
            duration_ms,
            sample_rate,
            frequency,
        } => {
            let name = sanitize(&name);
            if name.is_empty() {
                bail!("render name has no usable characters");
            }

            let settings = RenderSettings {
                source,
                generator_seed: seed.seed,
                noise_seed,
                sample_rate,
                duration: duration_ms,
                frequency,
            };

            let samples = render(&settings)?;
            let wav_data = encode_wav(&samples, sample_rate)?;
            let toml_data = format_manifest(&name, &settings, samples.len());

            let base_path = PathBuf::from(&name);
            std::fs::create_dir_all(&base_path)
                .map_err(|e| anyhow!("Failed to create directory '{}': {}", name, e))?;

            let wav_path = base_path.join(format!("{}.wav", name));
            std::fs::write(&wav_path, &wav_data)
                .map_err(|e| anyhow!("Failed to write '{}': {}", wav_path.display(), e))?;

            let toml_path = base_path.join(format!("{}.toml", name));
            std::fs::write(&toml_path, toml_data)
                .map_err(|e| anyhow!("Failed to write '{}': {}", toml_path.display(), e))?;

            debug!("RENDER: wrote {} samples to {}", samples.len(), wav_path.display());
            writeln!(out, "{}", wav_path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        bail!("count must be at least 1");
    }
    Ok(())
}

fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}
