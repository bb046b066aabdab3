use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Files carrying this suffix get their contents rendered and the suffix
/// stripped from the output name. Everything else is copied verbatim.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Overrides the bundled template location, mainly for the test suite.
pub const TEMPLATE_DIR_ENV: &str = "CREATE_APP_TEMPLATE_DIR";

/// Placeholder keys and their replacement values, fixed for one walk.
pub type TemplateContext = HashMap<String, String>;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("no template variable `{name}` for `{file}`")]
    UnresolvedPlaceholder { name: String, file: PathBuf },
}

/// Mirror `template_dir` into `output_dir`, rendering `.tmpl` files against
/// `context` and copying everything else byte-for-byte.
///
/// Directory creation is idempotent. An unresolved placeholder aborts the
/// walk immediately; files already written stay on disk.
pub fn instantiate(
    template_dir: &Path,
    output_dir: &Path,
    context: &TemplateContext,
) -> Result<()> {
    let placeholder = Regex::new(r"\{\{\s*(\w+)\s*\}\}")?;
    walk_entry(template_dir, output_dir, Path::new(""), &placeholder, context)
}

fn walk_entry(
    template_root: &Path,
    output_root: &Path,
    step: &Path,
    placeholder: &Regex,
    context: &TemplateContext,
) -> Result<()> {
    let template_path = template_root.join(step);
    let output_path = output_root.join(step);

    let metadata = fs::metadata(&template_path)
        .with_context(|| format!("cannot stat template entry `{}`", template_path.display()))?;

    if metadata.is_dir() {
        create_dir_idempotent(&output_path)?;
        for entry in fs::read_dir(&template_path)
            .with_context(|| format!("cannot list `{}`", template_path.display()))?
        {
            let entry = entry?;
            walk_entry(
                template_root,
                output_root,
                &step.join(entry.file_name()),
                placeholder,
                context,
            )?;
        }
        return Ok(());
    }

    let file_name = template_path.file_name().and_then(|n| n.to_str()).with_context(|| {
        format!("template entry `{}` has no usable name", template_path.display())
    })?;

    match file_name.strip_suffix(TEMPLATE_SUFFIX) {
        Some(rendered_name) => {
            let contents = fs::read_to_string(&template_path).with_context(|| {
                format!("cannot read template file `{}`", template_path.display())
            })?;
            let rendered = substitute(placeholder, &contents, context, &template_path)?;
            let output_path = output_path.with_file_name(rendered_name);
            fs::write(&output_path, rendered)
                .with_context(|| format!("cannot write `{}`", output_path.display()))?;
        }
        None => {
            fs::copy(&template_path, &output_path).with_context(|| {
                format!(
                    "cannot copy `{}` to `{}`",
                    template_path.display(),
                    output_path.display()
                )
            })?;
        }
    }
    Ok(())
}

// "Already exists" is fine, anything else (permissions, missing parent,
// full disk) aborts the walk.
fn create_dir_idempotent(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e).with_context(|| format!("cannot create directory `{}`", path.display())),
    }
}

/// Replace every `{{ key }}` occurrence with its context value.
///
/// A key missing from the context is fatal; a key present with an empty
/// value substitutes the empty string.
fn substitute(
    placeholder: &Regex,
    contents: &str,
    context: &TemplateContext,
    file: &Path,
) -> Result<String> {
    let mut rendered = String::with_capacity(contents.len());
    let mut tail = 0;
    for captures in placeholder.captures_iter(contents) {
        let token = captures.get(0).expect("capture 0 is the whole match");
        let name = &captures[1];
        let value =
            context
                .get(name)
                .ok_or_else(|| TemplateError::UnresolvedPlaceholder {
                    name: name.to_owned(),
                    file: file.to_owned(),
                })?;
        rendered.push_str(&contents[tail..token.start()]);
        rendered.push_str(value);
        tail = token.end();
    }
    rendered.push_str(&contents[tail..]);
    Ok(rendered)
}

/// Locate the `template` directory shipped with the binary.
///
/// Checks [`TEMPLATE_DIR_ENV`] first, then every ancestor of the executable
/// path, which covers both a `target/debug` checkout and an install that
/// keeps `template` next to the binary.
pub fn locate_template_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(TEMPLATE_DIR_ENV) {
        let dir = PathBuf::from(dir);
        if !dir.is_dir() {
            bail!(
                "{TEMPLATE_DIR_ENV} points at `{}`, which is not a directory",
                dir.display()
            );
        }
        return Ok(dir);
    }

    let exe = env::current_exe().context("cannot locate own executable")?;
    for dir in exe.ancestors().skip(1) {
        let candidate = dir.join("template");
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }
    bail!("no `template` directory found near `{}`", exe.display());
}
