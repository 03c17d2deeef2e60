use scad_core::files::{FailureKind, FileOpOutcome, Workspace};
use tempfile::TempDir;

fn scratch_workspace() -> (TempDir, Workspace) {
    let dir = TempDir::new().expect("failed to create scratch directory");
    let workspace = Workspace::new(dir.path());
    (dir, workspace)
}

fn read_raw(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name))
        .unwrap_or_else(|err| panic!("failed to read {name}: {err}"))
}

#[test]
fn write_refuses_to_clobber_without_overwrite() {
    let (dir, workspace) = scratch_workspace();

    let first = workspace.write_file("f", "x", false);
    assert!(matches!(first, FileOpOutcome::Success(_)));
    assert!(first.render().contains("was created"));

    let second = workspace.write_file("f", "y", false);
    assert!(matches!(second, FileOpOutcome::Warning(_)));
    assert!(second.render().starts_with("⚠️"));
    assert_eq!(read_raw(&dir, "f"), "x");
}

#[test]
fn write_with_overwrite_replaces_content() {
    let (dir, workspace) = scratch_workspace();

    let _ = workspace.write_file("f", "x", false);
    let replaced = workspace.write_file("f", "y", true);
    assert!(replaced.render().contains("was overwritten"));
    assert_eq!(read_raw(&dir, "f"), "y");
}

#[test]
fn write_blank_filename_is_rejected_before_io() {
    let (dir, workspace) = scratch_workspace();

    let outcome = workspace.write_file("   ", "content", true);
    assert_eq!(outcome.failure_kind(), Some(FailureKind::InvalidInput));
    assert_eq!(
        std::fs::read_dir(dir.path()).expect("scratch dir should list").count(),
        0,
        "no file should be created for a blank filename"
    );
}

#[test]
fn append_to_missing_file_is_not_found_and_creates_nothing() {
    let (dir, workspace) = scratch_workspace();

    let outcome = workspace.append_to_file("missing.txt", "data");
    assert_eq!(outcome.failure_kind(), Some(FailureKind::NotFound));
    assert!(!dir.path().join("missing.txt").exists());
}

#[test]
fn append_requires_content() {
    let (_dir, workspace) = scratch_workspace();

    let _ = workspace.write_file("notes.txt", "start", false);
    let outcome = workspace.append_to_file("notes.txt", "   ");
    assert_eq!(outcome.failure_kind(), Some(FailureKind::InvalidInput));
}

#[test]
fn append_adds_newline_separated_content() {
    let (dir, workspace) = scratch_workspace();

    let _ = workspace.write_file("part.scad", "cube(1);", false);
    let outcome = workspace.append_to_file("part.scad", "sphere(2);");
    assert!(outcome.render().contains("📐 OpenSCAD"));
    assert_eq!(read_raw(&dir, "part.scad"), "cube(1);\nsphere(2);");
}

#[test]
fn read_frames_content_and_tags_scad_files() {
    let (_dir, workspace) = scratch_workspace();

    let _ = workspace.write_file("a.scad", "cube(1);", false);
    let rendered = workspace.read_file("a.scad").render();
    assert!(rendered.starts_with("📄 File: a.scad (8 characters) 📐 OpenSCAD\n---\n"));
    assert!(rendered.contains("cube(1);"));
    assert!(rendered.ends_with("\n---"));
}

#[test]
fn read_distinguishes_missing_from_blank() {
    let (_dir, workspace) = scratch_workspace();

    let missing = workspace.read_file("ghost.scad");
    assert_eq!(missing.failure_kind(), Some(FailureKind::NotFound));
    assert!(missing.render().contains("'ghost.scad' not found"));

    let blank = workspace.read_file("  ");
    assert_eq!(blank.failure_kind(), Some(FailureKind::InvalidInput));
}

#[test]
fn read_is_idempotent() {
    let (_dir, workspace) = scratch_workspace();

    let _ = workspace.write_file("f.txt", "stable", false);
    let first = workspace.read_file("f.txt").render();
    let second = workspace.read_file("f.txt").render();
    assert_eq!(first, second);
}

#[test]
fn list_partitions_scad_from_other_files() {
    let (_dir, workspace) = scratch_workspace();

    let _ = workspace.write_file("a.scad", "cube(1);", false);
    let _ = workspace.write_file("b.txt", "notes", false);

    let everything = workspace.list_files("").render();
    assert!(everything.contains("📐 OpenSCAD Files:\n- a.scad"));
    assert!(everything.contains("📄 Other Files:\n- b.txt"));

    let filtered = workspace.list_files("scad").render();
    assert!(filtered.contains("a.scad"));
    assert!(!filtered.contains("b.txt"));
}

#[test]
fn list_reports_empty_directory() {
    let (_dir, workspace) = scratch_workspace();

    let rendered = workspace.list_files("stl").render();
    assert_eq!(rendered, "📂 No files found with pattern '*.stl'.");
}
