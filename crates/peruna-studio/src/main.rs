use anyhow::Result;
use winit::dpi::LogicalSize;

use peruna_engine::device::GpuInit;
use peruna_engine::logging::{init_logging, LoggingConfig};
use peruna_engine::window::{Runtime, RuntimeConfig};

mod sketches;

use sketches::SketchName;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let arg = std::env::args().nth(1);
    let name = match arg.as_deref() {
        None => SketchName::Pulse,
        Some(s) => match SketchName::parse(s) {
            Some(name) => name,
            None => {
                eprintln!("unknown sketch {s:?}; available: {}", SketchName::list());
                std::process::exit(2);
            }
        },
    };

    log::info!("running sketch {:?}", name.as_str());

    let config = RuntimeConfig {
        title: format!("peruna studio | {}", name.as_str()),
        initial_size: LogicalSize::new(720.0, 720.0),
        ..RuntimeConfig::default()
    };

    match name {
        SketchName::Pulse => Runtime::run(config, GpuInit::default(), sketches::Pulse),
        SketchName::Shapes => {
            Runtime::run(config, GpuInit::default(), sketches::ScatteredShapes::default())
        }
        SketchName::NoisyLines => {
            Runtime::run(config, GpuInit::default(), sketches::NoisyLines::default())
        }
        SketchName::Particles => {
            Runtime::run(config, GpuInit::default(), sketches::Particles::default())
        }
        SketchName::Landscape => {
            Runtime::run(config, GpuInit::default(), sketches::Landscape::default())
        }
    }
}
