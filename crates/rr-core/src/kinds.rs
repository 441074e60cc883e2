use core::fmt;

use serde::{Deserialize, Serialize};

/// One nonlinear-dynamics computation type.
///
/// The set is closed: the report generator drives a fixed collection of
/// analyses, each with its own parameter schema. Per-kind storage indexes
/// densely via [`AnalysisKind::index`]; there is no runtime construction of
/// kind names anywhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    XyAperture,
    FreqMapXy,
    FreqMapMomentum,
    ChaosMapXy,
    ChaosMapMomentum,
    TuneShiftWithAmplitude,
    NonlinearChromaticity,
    MomentumAperture,
}

impl AnalysisKind {
    /// Number of analysis kinds.
    pub const COUNT: usize = 8;

    /// Every kind, in batch execution order.
    pub const ALL: [AnalysisKind; Self::COUNT] = [
        AnalysisKind::XyAperture,
        AnalysisKind::FreqMapXy,
        AnalysisKind::FreqMapMomentum,
        AnalysisKind::ChaosMapXy,
        AnalysisKind::ChaosMapMomentum,
        AnalysisKind::TuneShiftWithAmplitude,
        AnalysisKind::NonlinearChromaticity,
        AnalysisKind::MomentumAperture,
    ];

    /// Dense 0-based index for per-kind storage.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable tag used in serialized form and diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            AnalysisKind::XyAperture => "xy-aperture",
            AnalysisKind::FreqMapXy => "freq-map-xy",
            AnalysisKind::FreqMapMomentum => "freq-map-momentum",
            AnalysisKind::ChaosMapXy => "chaos-map-xy",
            AnalysisKind::ChaosMapMomentum => "chaos-map-momentum",
            AnalysisKind::TuneShiftWithAmplitude => "tune-shift-with-amplitude",
            AnalysisKind::NonlinearChromaticity => "nonlinear-chromaticity",
            AnalysisKind::MomentumAperture => "momentum-aperture",
        }
    }

    /// Human-readable label for selector widgets.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisKind::XyAperture => "Dynamic aperture (x-y)",
            AnalysisKind::FreqMapXy => "Frequency map (x-y)",
            AnalysisKind::FreqMapMomentum => "Frequency map (delta-x)",
            AnalysisKind::ChaosMapXy => "Chaos map (x-y)",
            AnalysisKind::ChaosMapMomentum => "Chaos map (delta-x)",
            AnalysisKind::TuneShiftWithAmplitude => "Tune shift with amplitude",
            AnalysisKind::NonlinearChromaticity => "Nonlinear chromaticity",
            AnalysisKind::MomentumAperture => "Momentum aperture",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_dense_and_ordered() {
        for (i, kind) in AnalysisKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn tags_are_unique() {
        for a in AnalysisKind::ALL {
            for b in AnalysisKind::ALL {
                if a != b {
                    assert_ne!(a.tag(), b.tag());
                }
            }
        }
    }
}
