use serde::{Deserialize, Serialize};

/// 文件选择框中的单个文件（只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            modified: None,
        }
    }

    pub fn with_modified(mut self, modified: i64) -> Self {
        self.modified = Some(modified);
        self
    }
}

/// Ordered, indexable view over the files currently selected in an input.
pub trait FileSelection {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&FileDescriptor>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn total_size(&self) -> u64 {
        (0..self.len())
            .filter_map(|i| self.get(i))
            .map(|f| f.size)
            .sum()
    }
}

impl FileSelection for [FileDescriptor] {
    fn len(&self) -> usize {
        <[FileDescriptor]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&FileDescriptor> {
        <[FileDescriptor]>::get(self, index)
    }
}

impl FileSelection for Vec<FileDescriptor> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&FileDescriptor> {
        self.as_slice().get(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTag {
    Div,
    #[serde(rename = "li")]
    ListItem,
}

pub const TRUNCATE_CLASS: &str = "text-truncate";

/// 渲染到容器中的一个子元素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub tag: EntryTag,
    pub class: String,
    pub text: String,
}

impl Entry {
    pub fn div(text: impl Into<String>) -> Self {
        Self {
            tag: EntryTag::Div,
            class: TRUNCATE_CLASS.to_string(),
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self {
            tag: EntryTag::ListItem,
            class: TRUNCATE_CLASS.to_string(),
            text: text.into(),
        }
    }
}

/// A display container whose children are replaced wholesale on each render.
pub trait DisplayList {
    fn clear(&mut self);
    fn append(&mut self, entry: Entry);
    fn entries(&self) -> &[Entry];

    fn texts(&self) -> Vec<&str> {
        self.entries().iter().map(|e| e.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryList {
    entries: Vec<Entry>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayList for MemoryList {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_total_size() {
        let files = vec![FileDescriptor::new("a.csv", 10), FileDescriptor::new("b.csv", 32)];
        assert_eq!(FileSelection::len(&files), 2);
        assert_eq!(files.total_size(), 42);
        assert!(!FileSelection::is_empty(&files));
    }

    #[test]
    fn test_memory_list_clear() {
        let mut list = MemoryList::new();
        list.append(Entry::div("a.csv"));
        list.append(Entry::div("b.csv"));
        assert_eq!(list.texts(), vec!["a.csv", "b.csv"]);
        list.clear();
        assert!(list.entries().is_empty());
    }

    #[test]
    fn test_entry_serializes_tag() {
        let json = serde_json::to_string(&Entry::list_item("1.00 KB")).unwrap();
        assert_eq!(json, r#"{"tag":"li","class":"text-truncate","text":"1.00 KB"}"#);
    }
}
