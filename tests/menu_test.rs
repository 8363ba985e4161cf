/*!
 * Menu Synthesis Tests
 * Scenario coverage for the action synthesizer
 */

use deskfiles::assoc::HandlerDirectory;
use deskfiles::menu::{synthesize, Facts, MenuAction, MenuEntry};
use deskfiles::resolve::{extension_of, Resolved};
use deskfiles::HandlerId;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn facts_for(path: &str) -> Facts {
    let path = PathBuf::from(path);
    let ext = extension_of(&path);
    Facts {
        target: path.clone(),
        path_ext: ext.clone(),
        target_ext: ext,
        is_shortcut: false,
        active_handler: None,
        container_id: None,
        caller_read_only: false,
        resolved: Resolved::default(),
        selection: vec![path.clone()],
        handlers: vec![],
        default_handler: None,
        path,
    }
}

fn labels(entries: &[MenuEntry]) -> Vec<Option<&str>> {
    entries.iter().map(|e| e.label()).collect()
}

fn contains_label(entries: &[MenuEntry], label: &str) -> bool {
    entries.iter().any(|e| e.label() == Some(label))
}

const MUTATION_LABELS: &[&str] = &[
    "Cut",
    "Copy",
    "Delete",
    "Rename",
    "Extract Here",
    "Add to archive...",
    "Download",
    "Create shortcut",
];

#[test]
fn scenario_a_pdf_without_default_handler() {
    let mut facts = facts_for("/Documents/report.pdf");
    facts.handlers = vec![HandlerId::PdfViewer];

    let menu = synthesize(&facts, &HandlerDirectory::builtin());

    assert_eq!(
        labels(&menu),
        vec![
            Some("Open with"),
            None,
            Some("Add to archive..."),
            Some("Download"),
            None,
            Some("Cut"),
            Some("Copy"),
            None,
            Some("Delete"),
            Some("Rename"),
        ]
    );

    // No default handler, not a shortcut, has an extension
    assert!(!contains_label(&menu, "Create shortcut"));

    // "Open with" carries the PDF viewer
    match &menu[0] {
        MenuEntry::Submenu { items, .. } => {
            assert_eq!(items.len(), 1);
            match &items[0] {
                MenuEntry::Item(item) => {
                    assert_eq!(item.action, MenuAction::OpenWith { handler: HandlerId::PdfViewer })
                }
                other => panic!("expected item, got {other:?}"),
            }
        }
        other => panic!("expected submenu, got {other:?}"),
    }
}

#[test]
fn scenario_b_archive_extract_above_archive_and_download() {
    let mut facts = facts_for("/Mounted/archive.zip");
    facts.handlers = vec![HandlerId::FileBrowser];
    facts.default_handler = Some(HandlerId::FileBrowser);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    let labels = labels(&menu);

    let extract = labels.iter().position(|l| *l == Some("Extract Here")).unwrap();
    assert_eq!(labels[extract + 1], Some("Add to archive..."));
    assert_eq!(labels[extract + 2], Some("Download"));
}

#[test]
fn disk_images_are_mounted_not_extracted() {
    let mut facts = facts_for("/Documents/game.iso");
    facts.default_handler = Some(HandlerId::FileBrowser);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    assert!(!contains_label(&menu, "Extract Here"));
    assert!(contains_label(&menu, "Add to archive..."));
}

#[test]
fn scenario_c_image_wallpaper_submenu() {
    let facts = facts_for("/Pictures/photo.png");
    let menu = synthesize(&facts, &HandlerDirectory::builtin());

    let submenu = menu
        .iter()
        .find(|e| e.label() == Some("Set as desktop background"))
        .expect("wallpaper submenu present");

    match submenu {
        MenuEntry::Submenu { items, .. } => {
            let modes: Vec<_> = items.iter().map(|e| e.label().unwrap()).collect();
            assert_eq!(modes, vec!["Fill", "Fit", "Stretch", "Tile", "Center"]);
            let actions: Vec<_> = items
                .iter()
                .map(|e| match e {
                    MenuEntry::Item(item) => item.action.clone(),
                    other => panic!("expected item, got {other:?}"),
                })
                .collect();
            let mut distinct = actions.clone();
            distinct.dedup();
            assert_eq!(distinct.len(), 5);
        }
        other => panic!("expected submenu, got {other:?}"),
    }
}

#[test]
fn scenario_d_open_with_falls_back_to_text_editor() {
    let mut facts = facts_for("/Documents/report.pdf");
    facts.handlers = vec![HandlerId::PdfViewer];
    facts.active_handler = Some(HandlerId::PdfViewer);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    let submenu = menu
        .iter()
        .find(|e| e.label() == Some("Open with"))
        .expect("open with present");

    match submenu {
        MenuEntry::Submenu { items, .. } => {
            assert_eq!(items.len(), 1);
            match &items[0] {
                MenuEntry::Item(item) => assert_eq!(
                    item.action,
                    MenuAction::OpenWith { handler: HandlerId::TextEditor }
                ),
                other => panic!("expected item, got {other:?}"),
            }
        }
        other => panic!("expected submenu, got {other:?}"),
    }
}

#[test]
fn scenario_e_network_shortcut_has_no_location() {
    let mut facts = facts_for("/Desktop/Example.url");
    facts.is_shortcut = true;
    facts.target = PathBuf::from("https://example.com");
    facts.target_ext = extension_of(&facts.target);
    facts.active_handler = Some(HandlerId::Browser);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    assert!(!contains_label(&menu, "Open file location"));
    assert!(!contains_label(&menu, "Open folder location"));
}

#[test]
fn shortcut_location_label_branches_on_target_extension() {
    let dir = HandlerDirectory::builtin();

    let mut folder = facts_for("/Desktop/Projects.url");
    folder.is_shortcut = true;
    folder.target = PathBuf::from("/Documents/Projects");
    folder.target_ext = String::new();
    folder.active_handler = Some(HandlerId::FileBrowser);
    assert!(contains_label(&synthesize(&folder, &dir), "Open folder location"));

    let mut file = facts_for("/Desktop/Report.url");
    file.is_shortcut = true;
    file.target = PathBuf::from("/Documents/report.pdf");
    file.target_ext = "pdf".into();
    file.active_handler = Some(HandlerId::PdfViewer);
    assert!(contains_label(&synthesize(&file, &dir), "Open file location"));
}

#[test]
fn shortcut_to_root_has_no_location() {
    let mut facts = facts_for("/Desktop/Root.url");
    facts.is_shortcut = true;
    facts.target = PathBuf::from("/");
    facts.target_ext = String::new();
    facts.active_handler = Some(HandlerId::FileBrowser);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    assert!(!contains_label(&menu, "Open folder location"));
}

#[test]
fn open_in_new_window_requires_browser_container_and_non_mountable() {
    let dir = HandlerDirectory::builtin();

    let mut folder = facts_for("/Documents/Projects");
    folder.active_handler = Some(HandlerId::FileBrowser);
    folder.container_id = Some("fm-1".into());
    assert!(contains_label(&synthesize(&folder, &dir), "Open in new window"));

    // Mounting an archive is navigation, not a new window
    let mut archive = facts_for("/Documents/archive.zip");
    archive.active_handler = Some(HandlerId::FileBrowser);
    archive.container_id = Some("fm-1".into());
    assert!(!contains_label(&synthesize(&archive, &dir), "Open in new window"));

    // No container window known
    let mut detached = facts_for("/Documents/Projects");
    detached.active_handler = Some(HandlerId::FileBrowser);
    assert!(!contains_label(&synthesize(&detached, &dir), "Open in new window"));
}

#[test]
fn open_is_first_and_primary_when_handler_known() {
    let mut facts = facts_for("/Documents/notes.txt");
    facts.handlers = vec![HandlerId::TextEditor];
    facts.default_handler = Some(HandlerId::TextEditor);
    facts.active_handler = Some(HandlerId::TextEditor);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    match &menu[0] {
        MenuEntry::Item(item) => {
            assert_eq!(item.label, "Open");
            assert!(item.primary);
            assert!(item.icon.is_some());
        }
        other => panic!("expected open item, got {other:?}"),
    }
}

#[test]
fn caller_read_only_suppresses_mutation_block() {
    let mut facts = facts_for("/Mounted/archive.zip");
    facts.caller_read_only = true;

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    for label in MUTATION_LABELS {
        assert!(!contains_label(&menu, label), "{label} should be suppressed");
    }
}

#[test]
fn resolver_read_only_suppresses_mutation_block() {
    let mut facts = facts_for("/Mounted/usb");
    facts.resolved.read_only = true;
    facts.resolved.is_mount_root = true;

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    for label in MUTATION_LABELS {
        assert!(!contains_label(&menu, label), "{label} should be suppressed");
    }
}

#[test]
fn wallpaper_survives_read_only() {
    let mut facts = facts_for("/Mounted/usb/photo.png");
    facts.caller_read_only = true;

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    assert!(contains_label(&menu, "Set as desktop background"));
}

#[test]
fn create_shortcut_for_plain_folders_and_shortcuts() {
    let dir = HandlerDirectory::builtin();

    let folder = facts_for("/Documents/Projects");
    assert!(contains_label(&synthesize(&folder, &dir), "Create shortcut"));

    let mut shortcut = facts_for("/Desktop/Report.url");
    shortcut.is_shortcut = true;
    shortcut.target = PathBuf::from("/Documents/report.pdf");
    shortcut.target_ext = "pdf".into();
    assert!(contains_label(&synthesize(&shortcut, &dir), "Create shortcut"));

    let mut with_default = facts_for("/Pictures/photo.png");
    with_default.default_handler = Some(HandlerId::ImageViewer);
    assert!(contains_label(&synthesize(&with_default, &dir), "Create shortcut"));
}

#[test]
fn empty_path_omits_path_dependent_mutations() {
    let facts = facts_for("");
    let menu = synthesize(&facts, &HandlerDirectory::builtin());

    assert!(!contains_label(&menu, "Download"));
    assert!(!contains_label(&menu, "Add to archive..."));
    // The rest of the mutation block still applies
    assert!(contains_label(&menu, "Cut"));
    assert!(contains_label(&menu, "Delete"));
}

#[test]
fn synthesis_is_idempotent() {
    let mut facts = facts_for("/Pictures/photo.png");
    facts.handlers = vec![HandlerId::ImageViewer];
    facts.default_handler = Some(HandlerId::ImageViewer);
    facts.active_handler = Some(HandlerId::ImageViewer);
    facts.container_id = Some("fm-1".into());

    let dir = HandlerDirectory::builtin();
    assert_eq!(synthesize(&facts, &dir), synthesize(&facts, &dir));
}

#[test]
fn unknown_extension_yields_menu_without_error() {
    let facts = facts_for("/Documents/blob.xyz");
    let menu = synthesize(&facts, &HandlerDirectory::builtin());

    // Fallback opener injected, mutation block intact
    assert!(contains_label(&menu, "Open with"));
    assert!(contains_label(&menu, "Delete"));
}

#[test]
fn menu_serializes_for_the_ui_layer() {
    let mut facts = facts_for("/Documents/notes.txt");
    facts.handlers = vec![HandlerId::TextEditor];
    facts.active_handler = Some(HandlerId::TextEditor);

    let menu = synthesize(&facts, &HandlerDirectory::builtin());
    let json = serde_json::to_value(&menu).unwrap();

    let first = &json[0];
    assert_eq!(first["kind"], "item");
    assert_eq!(first["label"], "Open");
    assert_eq!(first["primary"], true);
    assert_eq!(first["action"]["op"], "open");
}
