//! Declarative command description.

use std::fmt;
use std::sync::Arc;

use ubot_core::Message;

/// Extra condition a message must satisfy after its text matched.
pub type MessagePredicate = Arc<dyn Fn(&Message) -> bool + Send + Sync>;

/// What a module declares for one command. Immutable once registered.
///
/// ```
/// use ubot_dispatch::CommandSpec;
///
/// let spec = CommandSpec::new("setlang").requires_args().outgoing();
/// assert!(spec.requires_args && spec.outgoing_only && !spec.admin_only);
/// ```
#[derive(Clone)]
pub struct CommandSpec {
    pub name: String,
    /// The command does not match without a non-blank remainder.
    pub requires_args: bool,
    /// Only messages sent by the controlling account match.
    pub outgoing_only: bool,
    /// Only chats where the acting account is admin match; checked per dispatch.
    pub admin_only: bool,
    pub predicates: Vec<MessagePredicate>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_args: false,
            outgoing_only: false,
            admin_only: false,
            predicates: Vec::new(),
        }
    }

    pub fn requires_args(mut self) -> Self {
        self.requires_args = true;
        self
    }

    pub fn outgoing(mut self) -> Self {
        self.outgoing_only = true;
        self
    }

    pub fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }

    /// Adds an arbitrary predicate over the triggering message.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Message) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Arc::new(predicate));
        self
    }

    pub fn group_only(self) -> Self {
        self.filter(|message| message.chat.is_group_like())
    }

    pub fn private_only(self) -> Self {
        self.filter(|message| !message.chat.is_group_like())
    }

    /// Names must be non-empty and free of whitespace.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("command name is empty".to_string());
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(format!("command name {:?} contains whitespace", self.name));
        }
        Ok(())
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("requires_args", &self.requires_args)
            .field("outgoing_only", &self.outgoing_only)
            .field("admin_only", &self.admin_only)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let spec = CommandSpec::new("link").outgoing().admin_only().group_only();
        assert_eq!(spec.name, "link");
        assert!(spec.outgoing_only);
        assert!(spec.admin_only);
        assert!(!spec.requires_args);
        assert_eq!(spec.predicates.len(), 1);
    }

    #[test]
    fn test_validate_rejects_empty_and_whitespace() {
        assert!(CommandSpec::new("").validate().is_err());
        assert!(CommandSpec::new("set lang").validate().is_err());
        assert!(CommandSpec::new("set\tlang").validate().is_err());
        assert!(CommandSpec::new("setlang").validate().is_ok());
    }
}
