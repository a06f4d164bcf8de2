use crate::dom::Document;

/// Post-render steps that depend on nodes created by rendering.
/// A step becomes runnable as soon as its dependency is in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    GenerateFilterButtons,
    SyncThemeSelector,
    EnableScrollSpy,
}

impl Deferred {
    pub fn dependency(self) -> &'static str {
        match self {
            Deferred::GenerateFilterButtons => "#filterButtons",
            Deferred::SyncThemeSelector => ".theme-selector select option",
            Deferred::EnableScrollSpy => "#main-content section",
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<Deferred>,
}

impl TaskQueue {
    pub fn schedule(&mut self, task: Deferred) {
        if !self.pending.contains(&task) {
            self.pending.push(task);
        }
    }

    /// Remove and return every task whose dependency is present, in
    /// scheduling order.
    pub fn take_ready(&mut self, doc: &Document) -> Vec<Deferred> {
        let (ready, waiting): (Vec<Deferred>, Vec<Deferred>) = self
            .pending
            .drain(..)
            .partition(|t| doc.contains(t.dependency()));
        self.pending = waiting;
        ready
    }

    pub fn pending(&self) -> &[Deferred] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_dependency() {
        let mut queue = TaskQueue::default();
        queue.schedule(Deferred::GenerateFilterButtons);
        queue.schedule(Deferred::SyncThemeSelector);
        queue.schedule(Deferred::SyncThemeSelector);

        let doc = Document::parse(
            r#"<html><body><div class="theme-selector"><select></select></div></body></html>"#,
        )
        .unwrap();
        assert!(queue.take_ready(&doc).is_empty());

        let doc = Document::parse(
            r#"<div class="theme-selector"><select><option value="github">GitHub</option></select></div>"#,
        )
        .unwrap();
        assert_eq!(queue.take_ready(&doc), vec![Deferred::SyncThemeSelector]);
        assert_eq!(queue.pending(), &[Deferred::GenerateFilterButtons]);

        let doc = Document::parse(r#"<div id="filterButtons"></div>"#).unwrap();
        assert_eq!(queue.take_ready(&doc), vec![Deferred::GenerateFilterButtons]);
        assert!(queue.pending().is_empty());
    }
}
