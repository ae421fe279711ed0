use clap::Parser;
use flow_particles::{
    particles::{self, ColorMode, Distribution, ParticleParams},
    post::PostSettings,
};

/// Animate a sphere of particles through a noise field.
#[derive(Parser, Debug)]
#[command(name = "sphere")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Noise-driven particle sphere", long_about = None)]
struct Args {
    /// Place particles on the sphere surface instead of inside it
    #[arg(long)]
    surface: bool,

    /// Colour particles from the noise field instead of by face
    #[arg(long)]
    noise_colors: bool,

    /// Disable after-image and bloom
    #[arg(long)]
    no_post: bool,

    /// Slowly rotate the whole cloud
    #[arg(long)]
    spin: bool,

    /// Seed for sphere sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Particles are laid out on a SIZE x SIZE grid
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..=4096))]
    size: u32,
}

impl Args {
    fn into_params(self) -> ParticleParams {
        let mut params = ParticleParams {
            texture_size: self.size,
            sampling_seed: self.seed,
            ..ParticleParams::default()
        };
        if self.surface {
            params.distribution = Distribution::Surface;
        }
        if self.noise_colors {
            params.point.color_mode = ColorMode::Noise;
        }
        if self.no_post {
            params.post = PostSettings::none();
        }
        if self.spin {
            params.spin = [0.1, 0.2];
        }
        params
    }
}

fn main() -> anyhow::Result<()> {
    particles::run(Args::parse().into_params())
}
