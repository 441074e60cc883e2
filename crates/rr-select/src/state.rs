//! Per-kind selection flags and their catalog-wide aggregates.

use rr_core::AnalysisKind;
use serde::{Deserialize, Serialize};

/// Tri-state selection for one analysis kind.
///
/// `recalc` and `replot` keep their stored value while `include` is false;
/// only their downstream effect is gated. Re-enabling `include` therefore
/// restores the prior choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindFlags {
    pub include: bool,
    pub recalc: bool,
    pub replot: bool,
}

impl Default for KindFlags {
    fn default() -> Self {
        Self {
            include: true,
            recalc: true,
            replot: true,
        }
    }
}

/// Per-kind selection flags plus the catalog-wide aggregates.
///
/// Each aggregate is the logical AND of its per-kind flag across all kinds;
/// the invariant holds after every mutating call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    flags: [KindFlags; AnalysisKind::COUNT],
    include_all: bool,
    recalc_all: bool,
    replot_all: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Fresh state: every kind included with recalc/replot set. The
    /// aggregates hold their AND by construction.
    pub fn new() -> Self {
        Self {
            flags: [KindFlags::default(); AnalysisKind::COUNT],
            include_all: true,
            recalc_all: true,
            replot_all: true,
        }
    }

    pub fn flags(&self, kind: AnalysisKind) -> KindFlags {
        self.flags[kind.index()]
    }

    pub fn include_all(&self) -> bool {
        self.include_all
    }

    pub fn recalc_all(&self) -> bool {
        self.recalc_all
    }

    pub fn replot_all(&self) -> bool {
        self.replot_all
    }

    /// Recalc takes effect downstream only while the kind is included.
    pub fn effective_recalc(&self, kind: AnalysisKind) -> bool {
        let flags = self.flags(kind);
        flags.include && flags.recalc
    }

    /// Replot takes effect downstream only while the kind is included.
    pub fn effective_replot(&self, kind: AnalysisKind) -> bool {
        let flags = self.flags(kind);
        flags.include && flags.replot
    }

    /// Kinds whose include flag is set, in batch order.
    pub fn included_kinds(&self) -> impl Iterator<Item = AnalysisKind> + '_ {
        AnalysisKind::ALL
            .into_iter()
            .filter(|kind| self.flags[kind.index()].include)
    }

    /// Set one kind's include flag. Stored recalc/replot are untouched.
    pub fn set_include(&mut self, kind: AnalysisKind, value: bool) {
        self.flags[kind.index()].include = value;
        self.include_all = self.flags.iter().all(|f| f.include);
    }

    pub fn set_recalc(&mut self, kind: AnalysisKind, value: bool) {
        self.flags[kind.index()].recalc = value;
        self.recalc_all = self.flags.iter().all(|f| f.recalc);
    }

    pub fn set_replot(&mut self, kind: AnalysisKind, value: bool) {
        self.flags[kind.index()].replot = value;
        self.replot_all = self.flags.iter().all(|f| f.replot);
    }

    /// Push `value` to every kind's include flag; the aggregate then holds
    /// `value` by construction.
    pub fn set_include_all(&mut self, value: bool) {
        for flags in &mut self.flags {
            flags.include = value;
        }
        self.include_all = value;
    }

    pub fn set_recalc_all(&mut self, value: bool) {
        for flags in &mut self.flags {
            flags.recalc = value;
        }
        self.recalc_all = value;
    }

    pub fn set_replot_all(&mut self, value: bool) {
        for flags in &mut self.flags {
            flags.replot = value;
        }
        self.replot_all = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disable_then_enable_preserves_stored_flags() {
        let mut state = SelectionState::new();
        let kind = AnalysisKind::FreqMapXy;

        state.set_recalc(kind, false);
        state.set_replot(kind, true);
        state.set_include(kind, false);

        // Stored values survive the disable.
        assert!(!state.flags(kind).recalc);
        assert!(state.flags(kind).replot);
        assert!(!state.effective_recalc(kind));
        assert!(!state.effective_replot(kind));

        state.set_include(kind, true);
        assert!(!state.flags(kind).recalc);
        assert!(state.flags(kind).replot);
        assert!(state.effective_replot(kind));
    }

    #[test]
    fn unchecking_one_kind_clears_the_aggregate() {
        let mut state = SelectionState::new();
        assert!(state.include_all());

        state.set_include(AnalysisKind::MomentumAperture, false);

        assert!(!state.include_all());
        assert!(state.flags(AnalysisKind::XyAperture).include);
        assert!(!state.flags(AnalysisKind::MomentumAperture).include);
    }

    #[test]
    fn rechecking_the_last_kind_restores_the_aggregate() {
        let mut state = SelectionState::new();
        state.set_include(AnalysisKind::ChaosMapXy, false);
        assert!(!state.include_all());

        state.set_include(AnalysisKind::ChaosMapXy, true);
        assert!(state.include_all());
    }

    #[test]
    fn aggregate_edit_pushes_down_to_every_kind() {
        let mut state = SelectionState::new();
        state.set_recalc_all(false);
        for kind in AnalysisKind::ALL {
            assert!(!state.flags(kind).recalc);
        }
        assert!(!state.recalc_all());

        state.set_recalc_all(true);
        for kind in AnalysisKind::ALL {
            assert!(state.flags(kind).recalc);
        }
        assert!(state.recalc_all());
    }

    #[test]
    fn aggregates_are_independent_of_include() {
        let mut state = SelectionState::new();
        state.set_include(AnalysisKind::XyAperture, false);

        // recalc_all still reflects stored recalc flags only.
        assert!(state.recalc_all());

        state.set_recalc(AnalysisKind::XyAperture, false);
        assert!(!state.recalc_all());
    }

    #[test]
    fn included_kinds_follow_batch_order() {
        let mut state = SelectionState::new();
        state.set_include(AnalysisKind::FreqMapXy, false);
        state.set_include(AnalysisKind::NonlinearChromaticity, false);

        let included: Vec<AnalysisKind> = state.included_kinds().collect();
        assert_eq!(included.len(), AnalysisKind::COUNT - 2);
        assert!(!included.contains(&AnalysisKind::FreqMapXy));
        let positions: Vec<usize> = included.iter().map(|k| k.index()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn aggregates_match(state: &SelectionState) -> bool {
        let include = AnalysisKind::ALL.iter().all(|k| state.flags(*k).include);
        let recalc = AnalysisKind::ALL.iter().all(|k| state.flags(*k).recalc);
        let replot = AnalysisKind::ALL.iter().all(|k| state.flags(*k).replot);
        state.include_all() == include
            && state.recalc_all() == recalc
            && state.replot_all() == replot
    }

    proptest! {
        #[test]
        fn aggregates_track_every_mutation(
            ops in prop::collection::vec(
                (0u8..6, 0usize..AnalysisKind::COUNT, any::<bool>()),
                1..64,
            )
        ) {
            let mut state = SelectionState::new();
            prop_assert!(aggregates_match(&state));

            for (op, idx, value) in ops {
                let kind = AnalysisKind::ALL[idx];
                match op {
                    0 => state.set_include(kind, value),
                    1 => state.set_recalc(kind, value),
                    2 => state.set_replot(kind, value),
                    3 => state.set_include_all(value),
                    4 => state.set_recalc_all(value),
                    _ => state.set_replot_all(value),
                }
                prop_assert!(aggregates_match(&state));
            }
        }
    }
}
