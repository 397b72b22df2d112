use crate::config::PanelConfig;
use crate::error::{ElementKind, PreviewError, Result};
use crate::preview::model::{FileDescriptor, MemoryList};
use serde::Serialize;
use std::collections::HashMap;

/// 页面上的元素：文件选择框或展示容器
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    FileInput { files: Vec<FileDescriptor> },
    Container { list: MemoryList },
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::FileInput { .. } => ElementKind::FileInput,
            Element::Container { .. } => ElementKind::Container,
        }
    }
}

/// In-memory stand-in for the upload page's document, addressed by element id.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置的面板构建页面，每个面板一个文件框和两个容器
    pub fn from_panels(panels: &[PanelConfig]) -> Self {
        let mut page = Self::new();
        for panel in panels {
            page.add_file_input(&panel.input_id);
            page.add_container(&panel.names_id);
            page.add_container(&panel.sizes_id);
        }
        page
    }

    pub fn add_file_input(&mut self, id: &str) {
        self.elements
            .insert(id.to_string(), Element::FileInput { files: Vec::new() });
    }

    pub fn add_container(&mut self, id: &str) {
        self.elements.insert(
            id.to_string(),
            Element::Container {
                list: MemoryList::new(),
            },
        );
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// 替换文件框中的当前选择，模拟用户重新选择文件
    pub fn select_files(&mut self, input_id: &str, selection: Vec<FileDescriptor>) -> Result<()> {
        match self.elements.get_mut(input_id) {
            Some(Element::FileInput { files }) => {
                *files = selection;
                Ok(())
            }
            Some(_) => Err(PreviewError::WrongElementKind {
                id: input_id.to_string(),
                expected: ElementKind::FileInput,
            }),
            None => Err(PreviewError::MissingElement(input_id.to_string())),
        }
    }

    pub fn files(&self, input_id: &str) -> Result<&[FileDescriptor]> {
        match self.elements.get(input_id) {
            Some(Element::FileInput { files }) => Ok(files),
            Some(_) => Err(PreviewError::WrongElementKind {
                id: input_id.to_string(),
                expected: ElementKind::FileInput,
            }),
            None => Err(PreviewError::MissingElement(input_id.to_string())),
        }
    }

    pub fn container(&self, id: &str) -> Result<&MemoryList> {
        match self.elements.get(id) {
            Some(Element::Container { list }) => Ok(list),
            Some(_) => Err(PreviewError::WrongElementKind {
                id: id.to_string(),
                expected: ElementKind::Container,
            }),
            None => Err(PreviewError::MissingElement(id.to_string())),
        }
    }

    /// Checks that `id` resolves to an element of the given kind.
    pub fn expect_kind(&self, id: &str, expected: ElementKind) -> Result<()> {
        match self.elements.get(id) {
            Some(element) if element.kind() == expected => Ok(()),
            Some(_) => Err(PreviewError::WrongElementKind {
                id: id.to_string(),
                expected,
            }),
            None => Err(PreviewError::MissingElement(id.to_string())),
        }
    }

    /// Borrows the input's files and the target container(s) at once.
    ///
    /// When `names_id == sizes_id` both lists go into the one container.
    pub(crate) fn render_handles(
        &mut self,
        input_id: &str,
        names_id: &str,
        sizes_id: &str,
    ) -> Result<(&[FileDescriptor], RenderTargets<'_>)> {
        // 同一个元素不可能既是文件框又是容器
        if input_id == names_id || input_id == sizes_id {
            return Err(match self.elements.get(input_id) {
                None => PreviewError::MissingElement(input_id.to_string()),
                Some(Element::FileInput { .. }) => PreviewError::WrongElementKind {
                    id: input_id.to_string(),
                    expected: ElementKind::Container,
                },
                Some(Element::Container { .. }) => PreviewError::WrongElementKind {
                    id: input_id.to_string(),
                    expected: ElementKind::FileInput,
                },
            });
        }

        if names_id == sizes_id {
            let [input, list] = self.elements.get_disjoint_mut([input_id, names_id]);
            let files = as_files(input, input_id)?;
            let list = as_container(list, names_id)?;
            return Ok((files, RenderTargets::Shared(list)));
        }

        let [input, names, sizes] = self
            .elements
            .get_disjoint_mut([input_id, names_id, sizes_id]);
        let files = as_files(input, input_id)?;
        let names = as_container(names, names_id)?;
        let sizes = as_container(sizes, sizes_id)?;
        Ok((files, RenderTargets::Split { names, sizes }))
    }
}

/// 渲染目标：两个独立容器，或同一个容器
pub(crate) enum RenderTargets<'a> {
    Split {
        names: &'a mut MemoryList,
        sizes: &'a mut MemoryList,
    },
    Shared(&'a mut MemoryList),
}

fn as_files<'a>(element: Option<&'a mut Element>, id: &str) -> Result<&'a [FileDescriptor]> {
    match element {
        Some(Element::FileInput { files }) => Ok(files.as_slice()),
        Some(_) => Err(PreviewError::WrongElementKind {
            id: id.to_string(),
            expected: ElementKind::FileInput,
        }),
        None => Err(PreviewError::MissingElement(id.to_string())),
    }
}

fn as_container<'a>(element: Option<&'a mut Element>, id: &str) -> Result<&'a mut MemoryList> {
    match element {
        Some(Element::Container { list }) => Ok(list),
        Some(_) => Err(PreviewError::WrongElementKind {
            id: id.to_string(),
            expected: ElementKind::Container,
        }),
        None => Err(PreviewError::MissingElement(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_files_on_container_fails() {
        let mut page = Page::new();
        page.add_container("design_names");
        let err = page
            .select_files("design_names", vec![FileDescriptor::new("a.csv", 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            PreviewError::WrongElementKind {
                expected: ElementKind::FileInput,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_container() {
        let page = Page::new();
        let err = page.container("nope").unwrap_err();
        assert!(matches!(err, PreviewError::MissingElement(id) if id == "nope"));
    }

    #[test]
    fn test_render_handles_split_and_shared() {
        let mut page = Page::new();
        page.add_file_input("input");
        page.add_container("names");
        page.add_container("sizes");

        let (files, targets) = page.render_handles("input", "names", "sizes").unwrap();
        assert!(files.is_empty());
        assert!(matches!(targets, RenderTargets::Split { .. }));

        let (_, targets) = page.render_handles("input", "names", "names").unwrap();
        assert!(matches!(targets, RenderTargets::Shared(_)));
    }

    #[test]
    fn test_render_handles_input_reused_as_container() {
        let mut page = Page::new();
        page.add_file_input("input");
        page.add_container("sizes");
        let err = page.render_handles("input", "input", "sizes").err().unwrap();
        assert!(matches!(
            err,
            PreviewError::WrongElementKind {
                expected: ElementKind::Container,
                ..
            }
        ));
    }

    #[test]
    fn test_render_handles_missing_container() {
        let mut page = Page::new();
        page.add_file_input("input");
        page.add_container("names");
        let err = page.render_handles("input", "names", "sizes").err().unwrap();
        assert!(matches!(err, PreviewError::MissingElement(id) if id == "sizes"));
    }

    #[test]
    fn test_expect_kind() {
        let mut page = Page::new();
        page.add_file_input("design_input");
        assert!(page.expect_kind("design_input", ElementKind::FileInput).is_ok());
        assert!(page.expect_kind("design_input", ElementKind::Container).is_err());
    }
}
