//! Writes the rendered page and public files to the output directory.

use crate::assets::missing_assets;
use crate::config::BuildConfig;
use audara_site::{PageContext, render_page};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("public directory {} does not exist", .0.display())]
    MissingPublicDir(PathBuf),
    #[error("public directory {} is also the output directory", .0.display())]
    PublicIsOutput(PathBuf),
    #[error("failed to resolve {}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to walk public directory")]
    Walk(#[from] walkdir::Error),
}

/// Fully resolved build settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    pub public_dir: Option<PathBuf>,
    pub context: PageContext,
}

impl BuildOptions {
    /// Merge CLI flags over config values over defaults.
    pub fn resolve(
        out: Option<PathBuf>,
        public: Option<PathBuf>,
        year: Option<i32>,
        config: &BuildConfig,
    ) -> Self {
        let context = year
            .or(config.year)
            .map(PageContext::for_year)
            .unwrap_or_else(PageContext::now);

        BuildOptions {
            out_dir: out
                .or_else(|| config.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            public_dir: public.or_else(|| config.public_dir.clone()),
            context,
        }
    }
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub copied_files: usize,
    /// The public tree had its own `index.html`, replaced by the rendered page.
    pub replaced_public_index: bool,
    pub missing_assets: Vec<&'static str>,
}

/// Render the page into `out_dir/index.html` and copy public files alongside.
pub fn build_site(opts: &BuildOptions) -> Result<BuildReport, BuildError> {
    fs::create_dir_all(&opts.out_dir).map_err(|source| BuildError::CreateDir {
        path: opts.out_dir.clone(),
        source,
    })?;

    let copied = match &opts.public_dir {
        Some(public) => copy_public(public, &opts.out_dir)?,
        None => PublicCopy::default(),
    };

    let html = render_page(&opts.context);
    let index = opts.out_dir.join("index.html");
    fs::write(&index, &html).map_err(|source| BuildError::Write {
        path: index.clone(),
        source,
    })?;
    info!(path = %index.display(), bytes = html.len(), year = opts.context.year, "wrote page");

    let missing = missing_assets(&opts.out_dir);
    for asset in &missing {
        warn!(asset, "referenced asset not found in output, browsers will show a placeholder");
    }

    Ok(BuildReport {
        index,
        copied_files: copied.files,
        replaced_public_index: copied.index_html,
        missing_assets: missing,
    })
}

#[derive(Debug, Default)]
struct PublicCopy {
    files: usize,
    index_html: bool,
}

fn canonical(path: &Path) -> Result<PathBuf, BuildError> {
    path.canonicalize().map_err(|source| BuildError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy every file under `public` into `out`, keeping relative paths.
///
/// `out` must already exist. When it sits inside `public` its subtree is
/// skipped, so the copy never feeds on its own output.
fn copy_public(public: &Path, out: &Path) -> Result<PublicCopy, BuildError> {
    if !public.is_dir() {
        return Err(BuildError::MissingPublicDir(public.to_path_buf()));
    }
    let public = canonical(public)?;
    let out = canonical(out)?;
    if public == out {
        return Err(BuildError::PublicIsOutput(public));
    }

    let nested_out = out.starts_with(&public).then_some(out.as_path());
    let mut copied = PublicCopy::default();
    let walker = WalkDir::new(&public)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| nested_out.is_none_or(|skip| !entry.path().starts_with(skip)));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        // WalkDir yields paths rooted at `public`.
        let Ok(relative) = entry.path().strip_prefix(&public) else {
            continue;
        };
        if relative == Path::new("index.html") {
            warn!(path = %entry.path().display(), "public index.html is replaced by the rendered page");
            copied.index_html = true;
        }
        let target = out.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| BuildError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::copy(entry.path(), &target).map_err(|source| BuildError::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        })?;
        debug!(file = %relative.display(), "copied public file");
        copied.files += 1;
    }

    info!(count = copied.files, from = %public.display(), "copied public files");
    Ok(copied)
}
