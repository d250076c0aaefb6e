use clap::{ArgGroup, Parser};
use eyre::{Context, Result};
use hpx_skel_codegen::{ProjectIndex, Skeleton};

/// Scaffold a new HPX library and rebuild the aggregate project files.
///
/// The aggregate `CMakeLists.txt` and `index.rst` are regenerated on every
/// run; `--recreate-index` skips the scaffolding step.
#[derive(Parser)]
#[command(name = "hpx-skel")]
#[command(version)]
#[command(about = "Generate the skeleton for an HPX library in the current working directory")]
#[command(group = ArgGroup::new("mode").required(true).args(["name", "recreate_index"]))]
pub(crate) struct Cli {
    /// Name of the library to scaffold
    name: Option<String>,

    /// Skip scaffolding and only rebuild CMakeLists.txt and index.rst
    #[arg(long)]
    recreate_index: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;

        if let Some(name) = &self.name {
            Skeleton::new(name).generate(&cwd)?;
            println!("Created skeleton for {} in {}", name, cwd.join(name).display());
        }

        let index = ProjectIndex::scan(&cwd)?;
        index.write(&cwd)?;
        println!(
            "Regenerated CMakeLists.txt and index.rst ({} libraries)",
            index.libraries().len()
        );

        Ok(())
    }
}
