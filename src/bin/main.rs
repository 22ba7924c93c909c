use helical_wheel::{HelicalWheel, DEFAULT_CANVAS_SIZE};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "helical-wheel",
    about = "Generate helical wheel based on provided sequence"
)]
struct Opt {
    /// Sequence to be visualized in a helical wheel
    #[structopt(short, long)]
    sequence: String,
    /// File name of the image, the format follows the extension
    #[structopt(short, long, parse(from_os_str), default_value = "hw.png")]
    output: PathBuf,
    /// Image width and height in pixels
    #[structopt(long, default_value = "1000")]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    log::debug!("{:?}", opt);
    if opt.size != DEFAULT_CANVAS_SIZE {
        log::info!("Image size: {0}x{0}px", opt.size);
    }

    HelicalWheel::new(&opt.sequence)?
        .canvas_size(opt.size)
        .render(&opt.output)?;

    Ok(())
}
