use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mdsite::{
    assets::{copy_static, prepare_output_dir},
    config::Config,
    page::{generate_pages_recursive, normalize_base_path},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static site from Markdown content")]
struct Cli {
    /// Prefix for root-relative links, e.g. /my-repo/
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = Config::DEFAULT_PATH)]
    config: PathBuf,

    /// Directory copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Directory holding the Markdown pages
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} markers
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (cleared before generation)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(content_dir) = self.content_dir {
            config.content_dir = content_dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);

    let base_path = normalize_base_path(&config.base_path);

    prepare_output_dir(&config.output_dir).context("preparing output directory")?;
    let files = copy_static(&config.static_dir, &config.output_dir)
        .context("copying static files")?;
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &base_path,
    )
    .context("generating pages")?;

    info!(
        files,
        pages,
        output = %config.output_dir.display(),
        base_path = %base_path,
        "site generated"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use mdsite::config::Config;

    use super::Cli;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["mdsite", "/repo/", "--output-dir", "docs"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.base_path, "/repo/");
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.template, PathBuf::from("template.html"));
    }

    #[test]
    fn every_directory_flag() {
        let cli = Cli::parse_from([
            "mdsite",
            "--static-dir",
            "assets",
            "--content-dir",
            "pages",
            "--template",
            "layout.html",
            "-o",
            "out",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(
            config,
            Config {
                static_dir: PathBuf::from("assets"),
                content_dir: PathBuf::from("pages"),
                template: PathBuf::from("layout.html"),
                output_dir: PathBuf::from("out"),
                base_path: "/".to_string(),
            }
        );
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["mdsite"]);
        assert_eq!(cli.config, PathBuf::from(Config::DEFAULT_PATH));

        let mut config = Config {
            base_path: "/site/".to_string(),
            ..Config::default()
        };
        let expected = config.clone();
        cli.apply(&mut config);
        assert_eq!(config, expected);
    }
}
