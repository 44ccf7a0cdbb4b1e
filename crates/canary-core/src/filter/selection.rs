use canary_model::Label;

/// Position of the first selected label with the same id, or `None`.
pub fn index_of(selected: &[Label], label: &Label) -> Option<usize> {
    selected.iter().position(|l| l.id() == label.id())
}

/// Ordered set of active label filters, owned by the caller.
///
/// Membership is by label id; order is the order in which labels were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<Label>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the label if it is selected, otherwise append it.
    ///
    /// Returns `true` if the label is selected after the call.
    pub fn toggle(&mut self, label: Label) -> bool {
        match index_of(&self.labels, &label) {
            Some(idx) => {
                self.labels.remove(idx);
                false
            }
            None => {
                self.labels.push(label);
                true
            }
        }
    }

    pub fn contains(&self, label: &Label) -> bool {
        index_of(&self.labels, label).is_some()
    }

    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

impl FromIterator<Label> for Selection {
    /// Builds a selection, keeping the first label of each id.
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for label in iter {
            if !selection.contains(&label) {
                selection.labels.push(label);
            }
        }
        selection
    }
}

impl AsRef<[Label]> for Selection {
    fn as_ref(&self) -> &[Label] {
        self.as_slice()
    }
}
