//! Golden fixtures: every `<name>.input` must fix to `<name>.golden`, and
//! the golden file must already be a fixed point.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use fmtlint::{
    config::RuleSet,
    core::{fix_source, lint_source},
};
use pretty_assertions::assert_eq;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_pairs() -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut pairs = Vec::new();
    for entry in fs::read_dir(fixtures_dir())? {
        let input = entry?.path();
        if input.extension().and_then(|e| e.to_str()) == Some("input") {
            let golden = input.with_extension("golden");
            pairs.push((input, golden));
        }
    }
    pairs.sort();
    Ok(pairs)
}

#[test]
fn test_golden_fixtures() -> Result<()> {
    let rules = RuleSet::default();
    let pairs = fixture_pairs()?;
    assert!(!pairs.is_empty());

    for (input, golden) in pairs {
        let source = fs::read_to_string(&input)?;
        let expected = fs::read_to_string(&golden)
            .with_context(|| format!("missing golden file {}", golden.display()))?;

        let fixed = fix_source(&source, &rules)?;
        assert_eq!(fixed, expected, "{}", input.display());

        assert!(
            lint_source(&expected, &rules)?.is_empty(),
            "{} is not a fixed point",
            golden.display()
        );
        assert_eq!(fix_source(&expected, &rules)?, expected);
    }
    Ok(())
}
