//! Synthetic command trees for unit tests.

use crate::error::ExtractionError;
use crate::node::CommandNode;
use crate::schema::CommandOption;

/// In-memory command used to drive the walker without clap.
#[derive(Debug, Clone)]
pub(crate) struct FakeNode {
    pub(crate) path: String,
    pub(crate) children: Vec<FakeNode>,
    pub(crate) is_available: bool,
    pub(crate) is_help_topic: bool,
    pub(crate) should_fail: bool,
}

impl FakeNode {
    /// Creates the root of a tree.
    pub(crate) fn root(name: &str) -> Self {
        Self {
            path: name.to_owned(),
            children: Vec::new(),
            is_available: true,
            is_help_topic: false,
            should_fail: false,
        }
    }

    /// Adds an available child named `name` built by `build`.
    pub(crate) fn child(mut self, name: &str, build: impl FnOnce(Self) -> Self) -> Self {
        let node = Self::root(&format!("{} {name}", self.path));
        self.children.push(build(node));
        self
    }

    /// Adds an available leaf child.
    pub(crate) fn leaf(self, name: &str) -> Self {
        self.child(name, |node| node)
    }

    pub(crate) const fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    pub(crate) const fn help_topic(mut self) -> Self {
        self.is_help_topic = true;
        self
    }

    pub(crate) const fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl CommandNode for FakeNode {
    fn name(&self) -> String {
        self.path
            .rsplit(' ')
            .next()
            .unwrap_or(&self.path)
            .to_owned()
    }

    fn command_path(&self) -> String {
        self.path.clone()
    }

    fn children(&self) -> Result<Vec<Self>, ExtractionError> {
        Ok(self.children.clone())
    }

    fn is_available(&self) -> bool {
        self.is_available
    }

    fn is_help_topic(&self) -> bool {
        self.is_help_topic
    }

    fn synopsis(&self) -> String {
        format!("{} synopsis", self.name())
    }

    fn description(&self) -> String {
        String::new()
    }

    fn example(&self) -> String {
        String::new()
    }

    fn options(&self) -> Result<Vec<CommandOption>, ExtractionError> {
        if self.should_fail {
            return Err(ExtractionError::DuplicateOption {
                command: self.path.clone(),
                option: "output".to_owned(),
            });
        }
        Ok(vec![CommandOption {
            name: "help".to_owned(),
            shorthand: "h".to_owned(),
            default_value: "false".to_owned(),
            usage: format!("help for {}", self.name()),
        }])
    }

    fn inherited_options(&self) -> Result<Vec<CommandOption>, ExtractionError> {
        Ok(Vec::new())
    }

    fn see_also(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Names of the documented records, in output order.
pub(crate) fn doc_names(docs: &[crate::schema::CommandDoc]) -> Vec<&str> {
    docs.iter().map(|doc| doc.name.as_str()).collect()
}
