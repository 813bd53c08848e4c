//! Onboarding card patch for `app/onboarding/index.tsx`.
//!
//! Swaps the card's render block for the welcome-variant layout. The range
//! runs from the icon lookup line down to the permission CTA guard; the
//! replacement re-introduces both boundary lines, so re-running the patch
//! finds the same range and splices in identical text.

use crate::domain::{BlockSplice, FilePatch, PatchOp};

const ONBOARDING_FILE: &str = "app/onboarding/index.tsx";

const CARD_START_MARKER: &str = "const Icon = iconMap[item.icon];";

const CARD_END_MARKER: &str = "{showPermissionCta && (";

const CARD_RENDER_BLOCK: &[&str] = &[
    "  const Icon = iconMap[item.icon];",
    "  const showPermissionCta = Boolean(item.requiresPermission);",
    "  const isWelcomeVariant = item.variant === 'welcome';",
    "",
    "  return (",
    "    <View style={[styles.slideContainer, { width }]}> ",
    "      <View style={styles.slideCard}>",
    "        {isWelcomeVariant ? (",
    "          <Image",
    "            source={welcomeLogo}",
    "            style={styles.welcomeGraphic}",
    r#"            accessibilityRole="image""#,
    r#"            accessibilityLabel="MyPlantScan logo""#,
    "            accessibilityIgnoresInvertColors",
    "          />",
    "        ) : (",
    "          Icon && (",
    "            <View style={[styles.iconBadge, { backgroundColor: item.accent }]}>",
    "              <Icon size={40} color={Colors.white} strokeWidth={2} />",
    "            </View>",
    "          )",
    "        )}",
    "",
    "        <Text style={[styles.slideTitle, isWelcomeVariant && styles.welcomeTitle]}>",
    "          {item.title}",
    "        </Text>",
    "        <Text",
    "          style={[styles.slideDescription, isWelcomeVariant && styles.welcomeDescription]}",
    "        >",
    "          {item.description}",
    "        </Text>",
    "",
    "        {showPermissionCta && (",
];

pub static ONBOARDING_CARD: FilePatch = FilePatch {
    id: "onboarding-card",
    target: ONBOARDING_FILE,
    summary: "Replace the onboarding card render block with the welcome-variant layout",
    ops: &[PatchOp::SpliceBlock(BlockSplice {
        label: "card-render-block",
        start_marker: CARD_START_MARKER,
        end_marker: CARD_END_MARKER,
        replacement: CARD_RENDER_BLOCK,
    })],
};
