//! Load a structure file (or a PDB id with the `fetch` feature) and log
//! what was parsed: models, subunits, compositions, and sequence rows.

use std::path::{Path, PathBuf};

use bioview::options::Options;
use bioview::parser::parse_file;
use bioview::sequence::{MonospaceMetrics, SequencePanel};
use bioview::structure::{AtomElement, ProteinFile, SecondaryStructure};
use bioview::visualization::{atom_colors, ProteinColorByOption};
use bioview::BioViewError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bioview")]
#[command(about = "Inspect PDB, mmCIF and XYZ protein structures", long_about = None)]
struct Cli {
    /// Structure file path, or a four-character PDB id
    #[arg(value_name = "PATH_OR_ID")]
    input: String,

    /// Options preset (TOML)
    #[arg(short, long, value_name = "FILE")]
    preset: Option<PathBuf>,

    /// Override the preset's color mode
    #[arg(short, long, value_enum)]
    color_by: Option<ColorByArg>,

    /// Where downloaded PDB files are cached
    #[arg(long, value_name = "DIR", default_value = "assets/models")]
    cache_dir: PathBuf,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ColorByArg {
    Element,
    Subunit,
    Residue,
}

impl From<ColorByArg> for ProteinColorByOption {
    fn from(arg: ColorByArg) -> Self {
        match arg {
            ColorByArg::Element => Self::Element,
            ColorByArg::Subunit => Self::Subunit,
            ColorByArg::Residue => Self::Residue,
        }
    }
}

#[cfg(feature = "fetch")]
fn resolve_input(input: &str, cache_dir: &Path) -> Result<PathBuf, BioViewError> {
    bioview::fetch::resolve_structure_path(input, cache_dir)
}

#[cfg(not(feature = "fetch"))]
fn resolve_input(input: &str, _cache_dir: &Path) -> Result<PathBuf, BioViewError> {
    let path = Path::new(input);
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(BioViewError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{input} (build with --features fetch to download PDB ids)"),
        )))
    }
}

fn report(file: &ProteinFile, options: &Options) {
    log::info!(
        "{}.{}: {} model(s), {:?}, {} bytes",
        file.name,
        file.extension,
        file.model_count(),
        file.kind,
        file.byte_size.unwrap_or(0)
    );
    if let Some(id) = &file.info.pdb_id {
        log::info!("PDB id {id}");
    }
    if let Some(description) = &file.info.description {
        log::info!("{description}");
    }
    if let Some(authors) = &file.info.authors {
        log::info!("Authors: {authors}");
    }
    if !file.info.warning_lines.is_empty() {
        log::warn!(
            "{} malformed line(s), first at line {}",
            file.info.warning_lines.len(),
            file.info.warning_lines[0]
        );
    }

    let Some(protein) = file.first_model() else {
        return;
    };

    for subunit in protein.subunits() {
        log::info!("{}: {} atoms", subunit.name(), subunit.atom_count);
    }
    let elements = protein.element_composition();
    for element in AtomElement::ALL {
        let count = elements.count(element);
        if count > 0 {
            log::info!("{:>12}: {count}", element.long_name());
        }
    }
    for kind in SecondaryStructure::ALL {
        let count = protein
            .secondary_structure()
            .iter()
            .filter(|&&s| s == kind)
            .count();
        if count > 0 {
            log::debug!("{:>12}: {count} atoms, {:?}", kind.name(), kind.default_color());
        }
    }
    if let Some(energy) = protein.energy() {
        log::info!("Energy: {energy}");
    }

    let configuration = options.visualization_configuration();
    let palette = options.colors.palette();
    let colors = atom_colors(protein, &configuration, &palette);
    log::info!(
        "Coloring {} atoms by {}",
        colors.len(),
        configuration.color_by().display_name()
    );

    let panel = SequencePanel::from_protein(protein);
    let layout = panel.layout(
        &options.sequence.nucleotide,
        &options.sequence.protein,
        &MonospaceMetrics::BODY,
    );
    for (row, placed) in panel.rows().iter().zip(&layout.rows) {
        log::info!("{row}");
        log::debug!("row at y={} width={}", placed.y, placed.layout.width);
    }
}

fn run(cli: &Cli) -> Result<(), BioViewError> {
    let mut options = match &cli.preset {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(color_by) = cli.color_by {
        options.display.color_by = color_by.into();
    }

    let path = resolve_input(&cli.input, &cli.cache_dir)?;
    let file = parse_file(&path)?;
    report(&file, &options);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
