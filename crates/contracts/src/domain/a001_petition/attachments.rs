/// File attached to a petition. Only metadata is kept here; the browser
/// owns the file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Size in kilobytes, one decimal place.
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

/// Attachments in insertion order, unique by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentList {
    items: Vec<Attachment>,
}

impl AttachmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a file with the same name is already attached.
    pub fn add(&mut self, attachment: Attachment) -> bool {
        if self.contains(&attachment.name) {
            return false;
        }
        self.items.push(attachment);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<Attachment> {
        let idx = self.items.iter().position(|a| a.name == name)?;
        Some(self.items.remove(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_by_name() {
        let mut list = AttachmentList::new();
        assert!(list.add(Attachment::new("vekaletname.pdf", 2048)));
        assert!(!list.add(Attachment::new("vekaletname.pdf", 10)));
        assert!(list.add(Attachment::new("dekont.jpg", 512)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut list = AttachmentList::new();
        list.add(Attachment::new("a.pdf", 1));
        list.add(Attachment::new("b.pdf", 1));
        assert_eq!(list.remove("a.pdf").map(|a| a.name), Some("a.pdf".into()));
        assert!(list.remove("a.pdf").is_none());
        let names: Vec<_> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["b.pdf"]);
    }

    #[test]
    fn test_size_label() {
        assert_eq!(Attachment::new("x", 1536).size_label(), "1.5 KB");
    }
}
