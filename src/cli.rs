use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "image-comparer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compares all images in the provided folders to find duplicates",
    after_help = "Review the similar images, then run the generated delete script yourself."
)]
pub struct Args {
    /// Folders to search for images (searched recursively)
    #[arg(required = true, value_name = "FOLDER")]
    pub folders: Vec<PathBuf>,

    /// Maximum hash distance for two images to count as similar
    #[arg(short = 't', long, value_name = "N")]
    pub threshold: Option<u32>,

    /// Side length of the average hash grid
    #[arg(long = "hash-size", value_name = "N")]
    pub hash_size: Option<u32>,

    /// Write an HTML report instead of opening the review screen
    #[arg(long)]
    pub report: bool,

    /// Directory where reports and delete scripts are written
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
