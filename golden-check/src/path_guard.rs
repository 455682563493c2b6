use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse report paths that would overwrite the config or the template.
pub fn ensure_outputs_distinct(outputs: &[&Path], inputs: &[&Path]) -> Result<()> {
    let inputs_norm = inputs
        .iter()
        .map(|input| {
            normalize_for_compare(input)
                .with_context(|| format!("failed to normalize input path {}", input.display()))
                .map(|norm| (norm, *input))
        })
        .collect::<Result<Vec<_>>>()?;

    for output in outputs {
        let out_norm = normalize_for_compare(output)
            .with_context(|| format!("failed to normalize report path {}", output.display()))?;
        if let Some((_, input)) = inputs_norm.iter().find(|(norm, _)| *norm == out_norm) {
            bail!(
                "refusing to overwrite input file: report {} matches input {}",
                output.display(),
                input.display()
            );
        }
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Report files usually do not exist yet; `..` segments are left as-is.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::ensure_outputs_distinct;

    #[test]
    fn rejects_report_path_equal_to_config() {
        let dir = tempdir().expect("tempdir");
        let config = dir.path().join("r1.cfg");
        fs::write(&config, "hostname r1\n").expect("write");

        let err = ensure_outputs_distinct(&[config.as_path()], &[config.as_path()])
            .expect_err("same path");
        assert!(err.to_string().contains("refusing to overwrite"));
    }

    #[test]
    fn accepts_fresh_report_paths() {
        let dir = tempdir().expect("tempdir");
        let config = dir.path().join("r1.cfg");
        fs::write(&config, "hostname r1\n").expect("write");
        let report = dir.path().join("r1-validation_failures.txt");

        assert!(ensure_outputs_distinct(&[report.as_path()], &[config.as_path()]).is_ok());
    }
}
