use std::fs;
use std::path::Path;

use flowpatch::application::patch::run_patch;
use flowpatch::domain::{BlockSplice, FilePatch, PatchOp, Substitution};
use flowpatch::patches;
use tempfile::tempdir;

fn substitution(patch: &FilePatch, idx: usize) -> Substitution {
    match patch.ops[idx] {
        PatchOp::Substitute(sub) => sub,
        PatchOp::SpliceBlock(_) => panic!("expected a substitution"),
    }
}

fn splice(patch: &FilePatch) -> BlockSplice {
    match patch.ops[0] {
        PatchOp::SpliceBlock(block) => block,
        PatchOp::Substitute(_) => panic!("expected a splice"),
    }
}

fn write_fixture(root: &Path, target: &str, contents: &str) {
    let path = root.join(target);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read_fixture(root: &Path, target: &str) -> String {
    fs::read_to_string(root.join(target)).unwrap()
}

#[test]
fn initial_route_patch_rewrites_default_state() {
    let patch = patches::find("initial-route").unwrap();
    let default_state = substitution(patch, 0);
    let resolution = substitution(patch, 1);

    let dir = tempdir().unwrap();
    let input = format!(
        "export default function RootLayout() {{\n{}{}}}\n",
        default_state.needle, resolution.needle
    );
    write_fixture(dir.path(), patch.target, &input);

    let report = run_patch(dir.path(), patch, false).unwrap();

    assert!(report.changed);
    assert!(!report.operations[1].changed());
    let expected = format!(
        "export default function RootLayout() {{\n{}{}}}\n",
        default_state.replacement, resolution.needle
    );
    assert_eq!(read_fixture(dir.path(), patch.target), expected);
}

#[test]
fn initial_route_patch_reports_already_patched_file() {
    let patch = patches::find("initial-route").unwrap();
    let default_state = substitution(patch, 0);

    let dir = tempdir().unwrap();
    let input = format!("prefix\n{}suffix\n", default_state.replacement);
    write_fixture(dir.path(), patch.target, &input);

    let report = run_patch(dir.path(), patch, false).unwrap();

    assert!(!report.changed);
    assert!(!report.operations[0].changed());
    assert_eq!(read_fixture(dir.path(), patch.target), input);
}

#[test]
fn onboarding_card_patch_splices_render_block() {
    let patch = patches::find("onboarding-card").unwrap();
    let block = splice(patch);

    let dir = tempdir().unwrap();
    let input = "\
const OnboardingCard = ({ item, width }) => {
  const Icon = iconMap[item.icon];
  const showPermissionCta = item.requiresPermission;

  return (
    <View>
        {showPermissionCta && (
          <PermissionSection />
        )}
    </View>
  );
};
";
    write_fixture(dir.path(), patch.target, input);

    let report = run_patch(dir.path(), patch, false).unwrap();

    assert!(report.changed);
    let mut expected_lines = vec!["const OnboardingCard = ({ item, width }) => {"];
    expected_lines.extend_from_slice(block.replacement);
    expected_lines.extend_from_slice(&[
        "          <PermissionSection />",
        "        )}",
        "    </View>",
        "  );",
        "};",
    ]);
    let expected = expected_lines.join("\n") + "\n";
    assert_eq!(read_fixture(dir.path(), patch.target), expected);
}

#[test]
fn onboarding_card_patch_is_idempotent() {
    let patch = patches::find("onboarding-card").unwrap();
    let block = splice(patch);

    let dir = tempdir().unwrap();
    let mut lines = vec!["header"];
    lines.extend_from_slice(block.replacement);
    lines.push("tail");
    let input = lines.join("\n") + "\n";
    write_fixture(dir.path(), patch.target, &input);

    let report = run_patch(dir.path(), patch, false).unwrap();

    assert!(!report.changed);
    assert_eq!(read_fixture(dir.path(), patch.target), input);
}

#[test]
fn onboarding_card_patch_aborts_without_end_marker() {
    let patch = patches::find("onboarding-card").unwrap();

    let dir = tempdir().unwrap();
    let input = "const Icon = iconMap[item.icon];\nno permission guard here\n";
    write_fixture(dir.path(), patch.target, input);

    let err = run_patch(dir.path(), patch, false).unwrap_err();

    assert!(err.root_cause().to_string().contains("end marker"));
    assert_eq!(read_fixture(dir.path(), patch.target), input);
}

#[test]
fn dry_run_previews_the_whole_catalog_without_writing() {
    let dir = tempdir().unwrap();

    let route = patches::find("initial-route").unwrap();
    let default_state = substitution(route, 0);
    let route_input = format!("top\n{}bottom\n", default_state.needle);
    write_fixture(dir.path(), route.target, &route_input);

    let card = patches::find("onboarding-card").unwrap();
    let card_input =
        "  const Icon = iconMap[item.icon];\nold body\n        {showPermissionCta && (\ntail\n";
    write_fixture(dir.path(), card.target, card_input);

    for patch in patches::CATALOG {
        let report = run_patch(dir.path(), patch, true).unwrap();
        assert!(report.changed);
        assert!(report.diff.is_some());
    }

    assert_eq!(read_fixture(dir.path(), route.target), route_input);
    assert_eq!(read_fixture(dir.path(), card.target), card_input);
}
