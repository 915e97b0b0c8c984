use trichrome_engine::device::GpuInit;
use trichrome_engine::logging::{init_logging, LoggingConfig};
use trichrome_engine::window::{Runtime, RuntimeConfig};

mod app;
mod controls;

use app::TriangleApp;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        TriangleApp::new(),
    )
}
