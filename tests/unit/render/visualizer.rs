use super::*;

fn small_config() -> VisualizerConfig {
    VisualizerConfig {
        width: 32,
        height: 16,
        min_time: 0,
        max_time: 100,
        run_time_scale: 2.0,
        color_steps: 4,
        x_grid: 4,
    }
}

#[test]
fn every_kind_builds_and_renders_at_the_configured_size() {
    let cfg = small_config();
    for kind in VisualizerKind::ALL {
        let mut v = create_visualizer(kind, &cfg).unwrap();
        v.record(EventDataPoint::new(10, 20, 0));
        v.record(EventDataPoint::new(30, 5, 2));
        let c = v.render();
        assert_eq!((c.width(), c.height()), (32, 16), "{kind}");
    }
}

#[test]
fn invalid_config_is_rejected_for_every_kind() {
    for kind in VisualizerKind::ALL {
        let mut cfg = small_config();
        cfg.width = 0;
        assert!(create_visualizer(kind, &cfg).is_err(), "{kind}");

        let mut cfg = small_config();
        cfg.color_steps = 0;
        assert!(create_visualizer(kind, &cfg).is_err(), "{kind}");
    }
}

#[test]
fn time_range_only_matters_to_time_axis_kinds() {
    let mut cfg = small_config();
    cfg.min_time = 100;
    cfg.max_time = 100;
    for kind in VisualizerKind::ALL {
        let needs_range = !matches!(
            kind,
            VisualizerKind::Histogram | VisualizerKind::ErrorStack | VisualizerKind::StatusStack
        );
        assert_eq!(create_visualizer(kind, &cfg).is_err(), needs_range, "{kind}");
    }
}

#[test]
fn names_match_serde() {
    for kind in VisualizerKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
        let back: VisualizerKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
    assert_eq!(VisualizerKind::SortedWave.to_string(), "wave-sorted");
}

#[test]
fn all_lists_each_kind_once() {
    let mut names: Vec<_> = VisualizerKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), VisualizerKind::ALL.len());
}
