//! oxcvd CLI - simulate color vision deficiencies on image files

use anyhow::{Context, Result};
use clap::Parser;
use oxcvd_core::{
    Brettel1997, Deficiency, Error, LmsModel, Machado2009, Simulator, SrgbImage, Vienot1999,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxcvd")]
#[command(about = "Toolbox to simulate color vision deficiencies")]
#[command(version)]
struct Cli {
    /// Image to process
    input_image: PathBuf,

    /// Output image
    output_image: PathBuf,

    /// Color model to apply: auto, vienot, brettel, machado, vischeck,
    /// coblisV1, coblisV2
    #[arg(short, long, default_value = "auto")]
    model: String,

    /// Filter to apply: simulate or daltonize
    #[arg(short, long, default_value = "simulate")]
    filter: String,

    /// Deficiency type: protan, deutan or tritan
    #[arg(short, long, default_value = "protan")]
    deficiency: String,

    /// Severity between 0 and 1; out-of-range values are rejected,
    /// not clamped
    #[arg(short, long, default_value_t = 1.0)]
    severity: f32,
}

/// Build the simulator named on the command line
///
/// Unknown names fail loudly; there is no fallback model.
fn simulator_from_str(name: &str) -> Result<Simulator, Error> {
    match name {
        "auto" => Simulator::auto(),
        "vienot" => Ok(Vienot1999::with_default_model()?.into()),
        "brettel" => Ok(Brettel1997::with_default_model()?.into()),
        "machado" => Ok(Machado2009::new().into()),
        "vischeck" => Ok(Brettel1997::new(LmsModel::vischeck_gimp()?).into()),
        // Recognized names whose algorithms are not shipped
        "coblisV1" | "coblisV2" => Err(Error::UnsupportedModel(name.to_string())),
        other => Err(Error::UnknownModel(other.to_string())),
    }
}

fn run(args: &Cli) -> Result<()> {
    let deficiency: Deficiency = args.deficiency.parse()?;
    let simulator = simulator_from_str(&args.model)?;

    match args.filter.as_str() {
        "simulate" => {}
        "daltonize" => return Err(Error::UnimplementedFilter(args.filter.clone()).into()),
        other => return Err(Error::UnknownFilter(other.to_string()).into()),
    }

    let input = image::open(&args.input_image)
        .with_context(|| format!("Cannot read {}", args.input_image.display()))?
        .to_rgb8();
    let (width, height) = (input.width() as usize, input.height() as usize);
    let image = SrgbImage::from_raw(width, height, input.into_raw())?;

    let simulated = simulator.simulate_srgb(&image, deficiency, args.severity)?;

    let output = image::RgbImage::from_raw(width as u32, height as u32, simulated.into_raw())
        .context("Simulated buffer has the wrong size")?;
    output
        .save(&args.output_image)
        .with_context(|| format!("Cannot write {}", args.output_image.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    run(&args)
}
