use crate::error::{ElementKind, Result};
use crate::preview::model::{DisplayList, Entry, FileSelection};
use crate::preview::page::{Page, RenderTargets};
use crate::utils::format_bytes;
use tracing::debug;

/// Mirrors a file input's selection into a names list and a sizes list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileListRenderer;

impl FileListRenderer {
    pub fn new() -> Self {
        Self
    }

    /// 清空两个容器，再按选择顺序逐个追加文件名与大小
    pub fn render<S: FileSelection + ?Sized>(
        &self,
        selection: &S,
        names: &mut dyn DisplayList,
        sizes: &mut dyn DisplayList,
    ) {
        names.clear();
        sizes.clear();

        for index in 0..selection.len() {
            let Some(file) = selection.get(index) else {
                break;
            };
            names.append(Entry::div(file.name.clone()));
            sizes.append(Entry::list_item(format_bytes(file.size)));
        }

        debug!(
            files = selection.len(),
            total_bytes = selection.total_size(),
            "rendered file list"
        );
    }

    /// 名称与大小写入同一个容器时，每个文件依次追加名称、大小
    pub fn render_shared<S: FileSelection + ?Sized>(&self, selection: &S, list: &mut dyn DisplayList) {
        list.clear();

        for index in 0..selection.len() {
            let Some(file) = selection.get(index) else {
                break;
            };
            list.append(Entry::div(file.name.clone()));
            list.append(Entry::list_item(format_bytes(file.size)));
        }

        debug!(files = selection.len(), "rendered file list into shared container");
    }
}

/// 按 id 查找文件框和两个容器后渲染
///
/// All three ids are resolved before anything is cleared, so a failed call
/// leaves the page as it was.
pub fn show_files(page: &mut Page, input_id: &str, names_id: &str, sizes_id: &str) -> Result<()> {
    page.expect_kind(input_id, ElementKind::FileInput)?;
    page.expect_kind(names_id, ElementKind::Container)?;
    page.expect_kind(sizes_id, ElementKind::Container)?;

    let renderer = FileListRenderer::new();
    match page.render_handles(input_id, names_id, sizes_id)? {
        (files, RenderTargets::Split { names, sizes }) => renderer.render(files, names, sizes),
        (files, RenderTargets::Shared(list)) => renderer.render_shared(files, list),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::model::{EntryTag, FileDescriptor, MemoryList};

    #[test]
    fn test_render_direct_handles() {
        let files = vec![
            FileDescriptor::new("pipes.csv", 1536),
            FileDescriptor::new("nodes.csv", 10),
        ];
        let mut names = MemoryList::new();
        let mut sizes = MemoryList::new();

        FileListRenderer::new().render(&files, &mut names, &mut sizes);

        assert_eq!(names.texts(), vec!["pipes.csv", "nodes.csv"]);
        assert_eq!(sizes.texts(), vec!["1.50 KB", "0.01 KB"]);
        assert!(names.entries().iter().all(|e| e.tag == EntryTag::Div));
        assert!(sizes.entries().iter().all(|e| e.tag == EntryTag::ListItem));
    }

    #[test]
    fn test_empty_selection_clears() {
        let mut names = MemoryList::new();
        let mut sizes = MemoryList::new();
        names.append(Entry::div("stale.csv"));
        sizes.append(Entry::list_item("1.00 KB"));

        let empty: Vec<FileDescriptor> = Vec::new();
        FileListRenderer::new().render(&empty, &mut names, &mut sizes);

        assert!(names.entries().is_empty());
        assert!(sizes.entries().is_empty());
    }

    #[test]
    fn test_same_container_interleaves_names_and_sizes() {
        let mut page = Page::new();
        page.add_file_input("input");
        page.add_container("list");
        page.select_files(
            "input",
            vec![FileDescriptor::new("a.csv", 1536), FileDescriptor::new("b.csv", 10)],
        )
        .unwrap();

        show_files(&mut page, "input", "list", "list").unwrap();
        show_files(&mut page, "input", "list", "list").unwrap();

        let list = page.container("list").unwrap();
        assert_eq!(list.texts(), vec!["a.csv", "1.50 KB", "b.csv", "0.01 KB"]);
        assert_eq!(list.entries()[0].tag, EntryTag::Div);
        assert_eq!(list.entries()[1].tag, EntryTag::ListItem);
    }
}
