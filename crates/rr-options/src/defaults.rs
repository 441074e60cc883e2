//! Seeded option sets.
//!
//! Literal production defaults for every analysis kind, plus the cheaper
//! "test" variant used for iterative debugging before a full production run.
//! The test variant is a deep copy of production with a reduced turn count
//! or grid resolution.

use rr_core::AnalysisKind;

use crate::schema::{OptionSet, RemoteJobSpec};

/// Name of the seeded full-cost option set.
pub const PRODUCTION: &str = "production";

/// Name of the seeded reduced-cost option set.
pub const TEST: &str = "test";

/// The canonical production option set for a kind.
///
/// Also serves as the reference schema: the keys present here are the keys
/// expected for the kind.
pub fn production_defaults(kind: AnalysisKind) -> OptionSet {
    match kind {
        AnalysisKind::XyAperture => xy_aperture_production(),
        // Chaos maps track over the same grids as the frequency maps.
        AnalysisKind::FreqMapXy | AnalysisKind::ChaosMapXy => xy_map_production(),
        AnalysisKind::FreqMapMomentum | AnalysisKind::ChaosMapMomentum => {
            momentum_map_production()
        }
        AnalysisKind::TuneShiftWithAmplitude => tune_shift_production(),
        AnalysisKind::NonlinearChromaticity => chromaticity_production(),
        AnalysisKind::MomentumAperture => momentum_aperture_production(),
    }
}

/// Deep copy of `production` with per-kind cost reductions.
pub fn test_variant(kind: AnalysisKind, production: &OptionSet) -> OptionSet {
    let mut set = production.clone();
    set.name = TEST.to_string();
    let p = &mut set.parameters;
    match kind {
        AnalysisKind::XyAperture => {
            p.set("n_turns", 128);
        }
        AnalysisKind::FreqMapXy => {
            p.set("nx", 21);
            p.set("ny", 21);
        }
        AnalysisKind::FreqMapMomentum => {
            p.set("ndelta", 21);
            p.set("nx", 21);
        }
        AnalysisKind::ChaosMapXy => {
            p.set("nx", 21);
            p.set("ny", 21);
            p.set("n_turns", 128);
        }
        AnalysisKind::ChaosMapMomentum => {
            p.set("ndelta", 21);
            p.set("nx", 21);
            p.set("n_turns", 128);
        }
        AnalysisKind::TuneShiftWithAmplitude => {
            p.set("n_turns", 128);
        }
        AnalysisKind::NonlinearChromaticity => {
            p.set("n_turns", 128);
        }
        AnalysisKind::MomentumAperture => {
            p.set("n_turns", 16);
            p.set("include_name_pattern", "O*");
        }
    }
    set
}

fn xy_aperture_production() -> OptionSet {
    let mut set = OptionSet::new(PRODUCTION);
    let p = &mut set.parameters;
    p.set("n_turns", 1024);
    p.set("abs_xmax", 10e-3);
    p.set("abs_ymax", 10e-3);
    p.set("ini_ndiv", 51);
    p.set("n_lines", 21);
    // Optional (below)
    p.set("neg_y_search", false);
    set
}

fn xy_map_production() -> OptionSet {
    let mut set = OptionSet::new(PRODUCTION);
    let p = &mut set.parameters;
    p.set("n_turns", 1024);
    p.set("xmin", -10e-3);
    p.set("xmax", 10e-3);
    p.set("ymin", 0.0);
    p.set("ymax", 5e-3);
    p.set("nx", 201);
    p.set("ny", 201);
    // Optional (below)
    p.set("x_offset", 1e-6);
    p.set("y_offset", 1e-6);
    p.set("delta_offset", 0.0);
    set
}

fn momentum_map_production() -> OptionSet {
    let mut set = OptionSet::new(PRODUCTION);
    let p = &mut set.parameters;
    p.set("n_turns", 1024);
    p.set("delta_min", -0.05);
    p.set("delta_max", 0.05);
    p.set("xmin", -10e-3);
    p.set("xmax", 10e-3);
    p.set("ndelta", 201);
    p.set("nx", 201);
    // Optional (below)
    p.set("x_offset", 1e-6);
    p.set("y_offset", 1e-6);
    p.set("delta_offset", 0.0);
    set
}

fn tune_shift_production() -> OptionSet {
    let mut set = OptionSet::new(PRODUCTION);
    let p = &mut set.parameters;
    p.set("n_turns", 1024);
    p.set("abs_xmax", 5e-3);
    p.set("nx", 50);
    p.set("abs_ymax", 3e-3);
    p.set("ny", 50);
    // Optional (below)
    p.set("x_offset", 1e-6);
    p.set("y_offset", 1e-6);
    set.remote_job = Some(RemoteJobSpec {
        partition: Some("short".to_string()),
        wall_time: Some("30:00".to_string()),
        ..RemoteJobSpec::default()
    });
    set
}

fn chromaticity_production() -> OptionSet {
    let mut set = OptionSet::new(PRODUCTION);
    let p = &mut set.parameters;
    p.set("n_turns", 1024);
    p.set("delta_min", -3e-2);
    p.set("delta_max", 3e-2);
    p.set("ndelta", 100);
    // Optional (below)
    p.set("x_offset", 1e-6);
    p.set("y_offset", 1e-6);
    p.set("delta_offset", 0.0);
    p.set("save_fft", false);
    set.remote_job = Some(RemoteJobSpec {
        partition: Some("short".to_string()),
        wall_time: Some("30:00".to_string()),
        ..RemoteJobSpec::default()
    });
    set
}

fn momentum_aperture_production() -> OptionSet {
    let mut set = OptionSet::new(PRODUCTION);
    let p = &mut set.parameters;
    p.set("n_turns", 1024);
    p.set("x_initial", 10e-6);
    p.set("y_initial", 10e-6);
    p.set("delta_negative_start", -0.1e-2);
    p.set("delta_negative_limit", -5e-2);
    p.set("delta_positive_start", 0.1e-2);
    p.set("delta_positive_limit", 5e-2);
    p.set("init_delta_step_size", 5e-3);
    p.set("include_name_pattern", "[QSO]*");
    set
}
