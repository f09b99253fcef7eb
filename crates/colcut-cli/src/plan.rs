//! Replays position-sensitive arguments into a per-source plan.

use std::path::PathBuf;

use clap::ArgMatches;
use colcut_core::{CutOptions, HeaderMode, IndexBase, Source};

use crate::cli::{INPUTS, ONE_BASED, SKIP_HEADER, ZERO_BASED};

/// A source together with the options in effect at its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSource {
    pub source: Source,
    pub options: CutOptions,
}

/// One option or input, in command-line order.
#[derive(Debug)]
enum Step {
    SkipHeader,
    Spec(IndexBase, String),
    Input(PathBuf),
}

/// Builds the ordered list of sources to cut.
///
/// Each input gets a snapshot of the options seen before it. Standard input
/// is appended, with the final options, when no input follows the last
/// `-c`/`-K` (including when no input is given at all).
pub fn build_plan(matches: &ArgMatches) -> Vec<PlannedSource> {
    let mut steps: Vec<(usize, Step)> = Vec::new();

    if let Some(indices) = matches.indices_of(SKIP_HEADER) {
        steps.extend(indices.map(|index| (index, Step::SkipHeader)));
    }
    collect_specs(matches, ONE_BASED, IndexBase::OneBased, &mut steps);
    collect_specs(matches, ZERO_BASED, IndexBase::ZeroBased, &mut steps);
    if let (Some(indices), Some(paths)) = (
        matches.indices_of(INPUTS),
        matches.get_many::<PathBuf>(INPUTS),
    ) {
        steps.extend(
            indices
                .zip(paths)
                .map(|(index, path)| (index, Step::Input(path.clone()))),
        );
    }
    steps.sort_by_key(|(index, _)| *index);

    let mut plan = Vec::new();
    let mut options = CutOptions::default();
    let mut wants_stdin = true;
    for (_, step) in steps {
        match step {
            Step::SkipHeader => options.header = HeaderMode::Skip,
            Step::Spec(base, spec) => {
                options.spec = Some(spec);
                options.base = base;
                wants_stdin = true;
            }
            Step::Input(path) => {
                plan.push(PlannedSource {
                    source: Source::File(path),
                    options: options.clone(),
                });
                wants_stdin = false;
            }
        }
    }
    if wants_stdin {
        plan.push(PlannedSource {
            source: Source::Stdin,
            options,
        });
    }
    plan
}

fn collect_specs(
    matches: &ArgMatches,
    id: &str,
    base: IndexBase,
    steps: &mut Vec<(usize, Step)>,
) {
    if let (Some(indices), Some(specs)) = (matches.indices_of(id), matches.get_many::<String>(id)) {
        steps.extend(
            indices
                .zip(specs)
                .map(|(index, spec)| (index, Step::Spec(base, spec.clone()))),
        );
    }
}
