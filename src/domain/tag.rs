/// A git tag resolved to the commit it marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    /// Id of the commit the tag points at (annotated tags already peeled)
    pub target: String,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            target: target.into(),
        }
    }
}
