mod common;

use common::{init_logging, sample_selection};
use upload_preview::commands::show::render_panel;
use upload_preview::config::{PanelConfig, default_panels};
use upload_preview::error::ElementKind;
use upload_preview::{
    DisplayList, FileDescriptor, FileListRenderer, MemoryList, Page, PreviewError, format_bytes,
    show_files,
};

fn design_page() -> Page {
    Page::from_panels(&[PanelConfig::with_prefix("design", "Pipe Design Files")])
}

#[test]
fn test_render_matches_selection_order() {
    init_logging();
    let files = sample_selection();
    let mut names = MemoryList::new();
    let mut sizes = MemoryList::new();

    FileListRenderer::new().render(&files, &mut names, &mut sizes);

    assert_eq!(names.entries().len(), files.len());
    assert_eq!(sizes.entries().len(), files.len());
    for (k, file) in files.iter().enumerate() {
        assert_eq!(names.entries()[k].text, file.name);
        assert_eq!(sizes.entries()[k].text, format_bytes(file.size));
    }
    assert_eq!(sizes.texts(), vec!["1.50 KB", "0.01 KB", "3.00 MB"]);
}

#[test]
fn test_show_files_by_id() {
    init_logging();
    let mut page = design_page();
    page.select_files("design_input", sample_selection()).unwrap();

    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();

    let names = page.container("design_names").unwrap();
    assert_eq!(
        names.texts(),
        vec!["storm_pipes.csv", "inlets.csv", "network_export.csv"]
    );
    assert!(names.entries().iter().all(|e| e.class == "text-truncate"));
}

#[test]
fn test_render_twice_keeps_only_latest_selection() {
    init_logging();
    let mut page = design_page();
    page.select_files("design_input", sample_selection()).unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();

    page.select_files("design_input", vec![FileDescriptor::new("only.csv", 1024 * 1024)])
        .unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();

    assert_eq!(page.container("design_names").unwrap().texts(), vec!["only.csv"]);
    assert_eq!(page.container("design_sizes").unwrap().texts(), vec!["1.00 MB"]);
}

#[test]
fn test_render_is_idempotent() {
    let mut page = design_page();
    page.select_files("design_input", sample_selection()).unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();
    let first = page.container("design_sizes").unwrap().clone();

    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();
    assert_eq!(page.container("design_sizes").unwrap(), &first);
}

#[test]
fn test_empty_selection_clears_containers() {
    let mut page = design_page();
    page.select_files("design_input", sample_selection()).unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();

    page.select_files("design_input", Vec::new()).unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();

    assert!(page.container("design_names").unwrap().entries().is_empty());
    assert!(page.container("design_sizes").unwrap().entries().is_empty());
}

#[test]
fn test_missing_element_leaves_page_untouched() {
    let mut page = design_page();
    page.select_files("design_input", sample_selection()).unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();
    page.remove("design_sizes");

    page.select_files("design_input", Vec::new()).unwrap();
    let err = show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap_err();

    assert!(matches!(err, PreviewError::MissingElement(ref id) if id == "design_sizes"));
    // 查找失败时不应清空已有内容
    assert_eq!(page.container("design_names").unwrap().entries().len(), 3);
}

#[test]
fn test_wrong_element_kind() {
    let mut page = design_page();
    let err = show_files(&mut page, "design_names", "design_input", "design_sizes").unwrap_err();
    assert!(matches!(
        err,
        PreviewError::WrongElementKind {
            expected: ElementKind::FileInput,
            ..
        }
    ));
}

#[test]
fn test_render_panel_leaves_other_panels_alone() {
    let view = render_panel(&default_panels(), "velocity", sample_selection()).unwrap();
    assert_eq!(view.panel, "velocity");
    assert_eq!(view.names.len(), 3);
    assert_eq!(view.sizes[2].text, "3.00 MB");

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["sizes"][0]["tag"], "li");
    assert_eq!(json["names"][0]["tag"], "div");
}

#[test]
fn test_render_panel_unknown_panel() {
    let err = render_panel(&default_panels(), "missing", Vec::new()).unwrap_err();
    assert!(matches!(err, PreviewError::PanelNotFound(_)));
}

#[test]
fn test_shared_container_gets_name_then_size() {
    let mut page = Page::new();
    page.add_file_input("file_input");
    page.add_container("file_list");
    page.select_files("file_input", sample_selection()).unwrap();

    show_files(&mut page, "file_input", "file_list", "file_list").unwrap();

    assert_eq!(
        page.container("file_list").unwrap().texts(),
        vec![
            "storm_pipes.csv",
            "1.50 KB",
            "inlets.csv",
            "0.01 KB",
            "network_export.csv",
            "3.00 MB"
        ]
    );
}

#[test]
fn test_size_just_below_pb_shows_as_pb() {
    let mut page = design_page();
    page.select_files("design_input", vec![FileDescriptor::new("a.csv", (1 << 50) - 1)])
        .unwrap();
    show_files(&mut page, "design_input", "design_names", "design_sizes").unwrap();
    assert_eq!(page.container("design_sizes").unwrap().texts(), vec!["1.00 PB"]);
}
