use std::io::Write;

use colcut_core::{Result, cut_source};
use tracing::{info, info_span};

use crate::plan::PlannedSource;

/// Cuts every planned source into `writer`, in order.
///
/// Stops at the first error. Output for sources already finished has been
/// flushed by then.
pub fn run_plan<W: Write>(plan: &[PlannedSource], writer: &mut W) -> Result<()> {
    for planned in plan {
        let span = info_span!("source", source = %planned.source);
        let _guard = span.enter();
        let summary = cut_source(&planned.source, &planned.options, writer)?;
        info!(
            columns = summary.columns,
            rows = summary.rows,
            header = summary.header_written,
            "source cut"
        );
    }
    Ok(())
}
