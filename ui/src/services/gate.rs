//! Banner Entry Gate
//!
//! The composite precondition that must hold before the banner may appear.
//! Pure function of five already-resolved facts; failing any of them is a
//! silent no-op for the caller, never an error.

/// Resolved facts the gate decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateInputs {
    pub platform_supported: bool,
    pub app_id_present: bool,
    pub standalone: bool,
    pub dismissed: bool,
    pub installed: bool,
}

/// Why the banner stays hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateBlocker {
    UnsupportedPlatform,
    MissingAppId,
    StandaloneMode,
    Dismissed,
    Installed,
}

/// First failing check, in resolution order, or `None` when the banner may
/// show.
pub fn first_blocker(inputs: &GateInputs) -> Option<GateBlocker> {
    if !inputs.platform_supported {
        return Some(GateBlocker::UnsupportedPlatform);
    }
    if !inputs.app_id_present {
        return Some(GateBlocker::MissingAppId);
    }
    if inputs.standalone {
        return Some(GateBlocker::StandaloneMode);
    }
    if inputs.dismissed {
        return Some(GateBlocker::Dismissed);
    }
    if inputs.installed {
        return Some(GateBlocker::Installed);
    }
    None
}

pub fn banner_eligible(inputs: &GateInputs) -> bool {
    first_blocker(inputs).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_truth_table_over_all_input_combinations() {
        for bits in 0u32..32 {
            let inputs = GateInputs {
                platform_supported: bits & 1 != 0,
                app_id_present: bits & 2 != 0,
                standalone: bits & 4 != 0,
                dismissed: bits & 8 != 0,
                installed: bits & 16 != 0,
            };
            let expected = inputs.platform_supported
                && inputs.app_id_present
                && !inputs.standalone
                && !inputs.dismissed
                && !inputs.installed;
            assert_eq!(
                banner_eligible(&inputs),
                expected,
                "gate mismatch for {inputs:?}"
            );
            assert_eq!(first_blocker(&inputs).is_none(), expected);
        }
    }

    #[test]
    fn blocker_reports_the_first_failing_check() {
        let all_blocked = GateInputs {
            platform_supported: false,
            app_id_present: false,
            standalone: true,
            dismissed: true,
            installed: true,
        };
        assert_eq!(
            first_blocker(&all_blocked),
            Some(GateBlocker::UnsupportedPlatform)
        );

        let installed_only = GateInputs {
            platform_supported: true,
            app_id_present: true,
            standalone: false,
            dismissed: false,
            installed: true,
        };
        assert_eq!(first_blocker(&installed_only), Some(GateBlocker::Installed));
    }
}
