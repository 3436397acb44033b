use super::labels::Label;
use log::debug;

/// One ordered candidate: if `check` yields a reason, `result` wins.
pub struct Arm<L, I> {
    pub result: L,
    check: fn(&I) -> Option<String>,
}

impl<L: Label, I> Arm<L, I> {
    pub fn new(result: L, check: fn(&I) -> Option<String>) -> Self {
        Self { result, check }
    }
}

/// Deterministic resolution: no scores, no confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<L> {
    pub value: L,
    pub evidence: Vec<String>,
    pub forced: bool,
}

impl<L: Label> Resolution<L> {
    pub fn forced(value: L) -> Self {
        Self {
            value,
            evidence: vec![format!("override: {}={}", L::OVERRIDE_KEY, value)],
            forced: true,
        }
    }
}

/// Evaluates arms top to bottom and takes the first that holds.
pub struct FirstMatch<L, I> {
    arms: Vec<Arm<L, I>>,
    fallback: L,
    fallback_reason: fn(&I) -> String,
}

impl<L: Label, I> FirstMatch<L, I> {
    pub fn new(fallback: L, fallback_reason: fn(&I) -> String) -> Self {
        Self {
            arms: Vec::new(),
            fallback,
            fallback_reason,
        }
    }

    pub fn arm(mut self, result: L, check: fn(&I) -> Option<String>) -> Self {
        self.arms.push(Arm::new(result, check));
        self
    }

    pub fn resolve(&self, input: &I, choice: Option<L>) -> Resolution<L> {
        if let Some(value) = choice {
            debug!("{}: override {}", L::AXIS, value);
            return Resolution::forced(value);
        }

        for arm in &self.arms {
            if let Some(reason) = (arm.check)(input) {
                debug!("{}: {} ({})", L::AXIS, arm.result, reason);
                return Resolution {
                    value: arm.result,
                    evidence: vec![reason],
                    forced: false,
                };
            }
        }

        Resolution {
            value: self.fallback,
            evidence: vec![(self.fallback_reason)(input)],
            forced: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::labels::PackageManager;

    #[test]
    fn test_first_holding_arm_wins() {
        let resolver: FirstMatch<PackageManager, u32> =
            FirstMatch::new(PackageManager::Npm, |_| "fallback".to_string())
                .arm(PackageManager::Pnpm, |n| (*n > 10).then(|| "big".to_string()))
                .arm(PackageManager::Yarn, |n| (*n > 5).then(|| "medium".to_string()));

        assert_eq!(resolver.resolve(&20, None).value, PackageManager::Pnpm);
        assert_eq!(resolver.resolve(&7, None).evidence, vec!["medium"]);
        assert_eq!(resolver.resolve(&1, None).value, PackageManager::Npm);

        let forced = resolver.resolve(&20, Some(PackageManager::Bun));
        assert_eq!(forced.value, PackageManager::Bun);
        assert_eq!(forced.evidence, vec!["override: package_manager=bun"]);
    }
}
