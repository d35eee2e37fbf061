use anyhow::Result;
use georel::context::SpatialContext;
use georel::geometry::AnyShape;
use georel::geometry::geo_traits::{Relate, Shape};
use georel::geometry::primitives::Rect;
use itertools::Itertools;
use log::{debug, info};

use crate::io::ext_repr::ExtQuerySet;
use crate::io::import::Importer;
use crate::io::output::{ExtRectSummary, ExtRelateResult};

/// Evaluates every query of the set under `ctx`.
/// Fails on the first query containing an invalid shape.
pub fn evaluate(query_set: &ExtQuerySet, ctx: &SpatialContext) -> Result<Vec<ExtRelateResult>> {
    let importer = Importer::new(ctx.coords());

    let results = query_set
        .queries
        .iter()
        .map(|ext_query| -> Result<ExtRelateResult> {
            let (subject, other) = importer.import_query(ext_query)?;
            let relation = subject.relate(&other);
            debug!("[EVAL] query {}: {subject:?} is {relation} to {other:?}", ext_query.id);

            let subject_rect = match subject {
                AnyShape::Rect(rect) => Some(summarize(&rect, ctx)),
                AnyShape::Point(_) => None,
            };

            Ok(ExtRelateResult {
                id: ext_query.id,
                relation,
                subject_rect,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let counts = results.iter().map(|r| r.relation).counts();
    info!(
        "[EVAL] evaluated {} queries of '{}': {}",
        results.len(),
        query_set.name,
        counts
            .iter()
            .sorted_by_key(|(rel, _)| rel.to_string())
            .map(|(rel, n)| format!("{rel}: {n}"))
            .join(", ")
    );

    Ok(results)
}

pub fn summarize(rect: &Rect, ctx: &SpatialContext) -> ExtRectSummary {
    let center = rect.center();
    ExtRectSummary {
        repr: rect.to_string(),
        width: rect.width(),
        height: rect.height(),
        area: rect.area(Some(ctx)),
        center: center.into(),
        crosses_dateline: rect.crosses_dateline(),
    }
}
