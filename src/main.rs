use std::io;
use std::path::Path;

use structured_logger::json::new_writer;
use structured_logger::Builder;

use travel_map::data::locations;
use travel_map::errors::Result;
use travel_map::etl::render_map::{RenderMapEtl, OUTPUT_FILE_NAME};
use travel_map::etl::Etl;
use travel_map::{default_render_config, summary};

fn setup_logging() {
    Builder::with_level("info")
        .with_target_writer("*", new_writer(io::stdout()))
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let config = default_render_config()?;
    let mut etl = RenderMapEtl::new(&config)?;
    etl.process(Path::new("."))?;

    println!("Map saved successfully to {}!", OUTPUT_FILE_NAME);

    let records = locations::build_dataset();
    let summary = summary::summarize(&records);
    summary::print_summary(&summary);

    Ok(())
}
