//! Print every merge of a small random cloud: tangents and fused boundary.
//!
//! Usage:
//!   cargo run -p dchull --example merge_trace -- 12
//!
//! The optional argument is the point count (default 10).

use dchull::prelude::*;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10usize);
    let cfg = CloudCfg {
        count,
        shape: CloudShape::Square,
        radius: 10.0,
        grid: 1.0,
    };
    let pts: Vec<Point2<usize>> = draw_cloud(cfg, ReplayToken { seed: 2025, index: 0 })
        .into_iter()
        .enumerate()
        .map(|(i, p)| Point2::new(p.x, p.y, i))
        .collect();

    let mut log = MergeLog::new();
    let hull = match ConvexHull::with_observer(pts, &mut log) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("merge_trace: {e}");
            return;
        }
    };
    let show = |id: NodeId| {
        let p = &hull.node(id).point;
        format!("#{}({}, {})", p.tag, p.x(), p.y())
    };
    for (i, rec) in log.records.iter().enumerate() {
        println!(
            "merge {i}: upper {} -> {}, lower {} -> {}, hull size {}",
            show(rec.tangents.upper.0),
            show(rec.tangents.upper.1),
            show(rec.tangents.lower.0),
            show(rec.tangents.lower.1),
            rec.hull.len()
        );
    }
    let boundary: Vec<String> = hull.vertex_ids().iter().map(|&id| show(id)).collect();
    println!("hull: {}", boundary.join(" -> "));
}
