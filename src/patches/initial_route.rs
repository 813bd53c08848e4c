//! Default-route patch for `app/_layout.tsx`.
//!
//! Pins the initial route state so the layout no longer starts undefined
//! until storage resolves. The resolution branch itself was reviewed together
//! with this change and stays as-is; its substitution is intentionally
//! identical on both sides.

use crate::domain::{FilePatch, PatchOp, Substitution};

const LAYOUT_FILE: &str = "app/_layout.tsx";

const STATE_NEEDLE: &str = r"  const [isReady, setIsReady] = useState(false);
  const [initialRoute, setInitialRoute] = useState<string | undefined>(undefined);
";

const STATE_REPLACEMENT: &str = r"  const [isReady, setIsReady] = useState(false);
  const [initialRoute, setInitialRoute] = useState<string>('onboarding/index');
";

// Intentionally identical on both sides; see the module doc.
const ROUTE_RESOLUTION_BRANCH: &str = r#"        if (FORCE_ONBOARDING_ENABLED || forceFromStorage) {
          await clearOnboardingFlag();
          setInitialRoute("onboarding/index");
        } else {
          const hasCompleted = await getHasCompletedOnboarding();
          setInitialRoute(hasCompleted ? "(tabs)" : "onboarding/index");
        }
"#;

pub static INITIAL_ROUTE: FilePatch = FilePatch {
    id: "initial-route",
    target: LAYOUT_FILE,
    summary: "Pin the initial route default to the onboarding entry screen",
    ops: &[
        PatchOp::Substitute(Substitution {
            label: "initial-route-default",
            needle: STATE_NEEDLE,
            replacement: STATE_REPLACEMENT,
        }),
        PatchOp::Substitute(Substitution {
            label: "route-resolution-branch",
            needle: ROUTE_RESOLUTION_BRANCH,
            replacement: ROUTE_RESOLUTION_BRANCH,
        }),
    ],
};
