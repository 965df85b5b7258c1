//! Compiles a [`CommandSpec`] into a message predicate.

use regex::Regex;
use tracing::warn;
use ubot_core::{Message, Transport};

use crate::error::DispatchError;
use crate::spec::CommandSpec;

/// Routing predicate for one command: `<prefix><name>` followed by end of text or by one
/// whitespace character and the argument remainder.
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    spec: CommandSpec,
    pattern: Regex,
}

impl CommandMatcher {
    /// Rejects malformed specs here so that dispatch never sees them.
    pub fn compile(prefix: &str, spec: CommandSpec) -> Result<Self, DispatchError> {
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(DispatchError::InvalidPrefix(prefix.to_string()));
        }
        spec.validate().map_err(DispatchError::InvalidCommand)?;
        let pattern = format!(
            r"(?s)^{}{}(?:\s(?P<args>.*))?$",
            regex::escape(prefix),
            regex::escape(&spec.name)
        );
        let pattern =
            Regex::new(&pattern).map_err(|e| DispatchError::InvalidCommand(e.to_string()))?;
        Ok(Self { spec, pattern })
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Argument capture of `text` if it invokes this command, ignoring direction and chat.
    pub fn capture(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let args = caps.name("args").map(|m| m.as_str()).unwrap_or("");
        if self.spec.requires_args && args.trim().is_empty() {
            return None;
        }
        Some(args.to_string())
    }

    /// Every check that needs no network: text, direction and extra predicates.
    pub fn match_message(&self, message: &Message) -> Option<String> {
        if self.spec.outgoing_only && !message.is_outgoing() {
            return None;
        }
        let args = self.capture(&message.content)?;
        if !self.spec.predicates.iter().all(|predicate| predicate(message)) {
            return None;
        }
        Some(args)
    }

    /// Full predicate. Admin rights are asked from the transport on every call since they
    /// can change between messages; a failed lookup does not match.
    pub async fn evaluate(&self, message: &Message, transport: &dyn Transport) -> Option<String> {
        let args = self.match_message(message)?;
        if self.spec.admin_only {
            match transport.is_chat_admin(&message.chat).await {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    warn!(
                        command = %self.spec.name,
                        chat_id = message.chat.id,
                        error = %e,
                        "Admin lookup failed, command not matched"
                    );
                    return None;
                }
            }
        }
        Some(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(spec: CommandSpec) -> CommandMatcher {
        CommandMatcher::compile(".", spec).unwrap()
    }

    #[test]
    fn test_capture_without_args() {
        let m = matcher(CommandSpec::new("ping"));
        assert_eq!(m.capture(".ping"), Some(String::new()));
        assert_eq!(m.capture(".ping "), Some(String::new()));
        assert_eq!(m.capture(".ping extra"), Some("extra".to_string()));
    }

    #[test]
    fn test_capture_requires_boundary_after_name() {
        let m = matcher(CommandSpec::new("ping"));
        assert_eq!(m.capture(".pingpong"), None);
        assert_eq!(m.capture("ping"), None);
        assert_eq!(m.capture("x.ping"), None);
        assert_eq!(m.capture(" .ping"), None);
    }

    #[test]
    fn test_capture_is_case_sensitive() {
        let m = matcher(CommandSpec::new("ping"));
        assert_eq!(m.capture(".Ping"), None);
        assert_eq!(m.capture(".PING"), None);
    }

    #[test]
    fn test_requires_args() {
        let m = matcher(CommandSpec::new("trt").requires_args());
        assert_eq!(m.capture(".trt"), None);
        assert_eq!(m.capture(".trt "), None);
        assert_eq!(m.capture(".trt   \n"), None);
        assert_eq!(m.capture(".trt hello world"), Some("hello world".to_string()));
    }

    #[test]
    fn test_capture_keeps_multiline_remainder_verbatim() {
        let m = matcher(CommandSpec::new("trt").requires_args());
        assert_eq!(
            m.capture(".trt line one\nline two "),
            Some("line one\nline two ".to_string())
        );
        assert_eq!(m.capture(".trt\nnext line"), Some("next line".to_string()));
    }

    #[test]
    fn test_prefix_is_escaped() {
        let m = CommandMatcher::compile("$", CommandSpec::new("ping")).unwrap();
        assert_eq!(m.capture("$ping"), Some(String::new()));
        let m = CommandMatcher::compile("!!", CommandSpec::new("a.b")).unwrap();
        assert_eq!(m.capture("!!a.b"), Some(String::new()));
        assert_eq!(m.capture("!!axb"), None);
    }

    #[test]
    fn test_compile_rejects_malformed() {
        assert!(matches!(
            CommandMatcher::compile(".", CommandSpec::new("")),
            Err(DispatchError::InvalidCommand(_))
        ));
        assert!(matches!(
            CommandMatcher::compile(".", CommandSpec::new("two words")),
            Err(DispatchError::InvalidCommand(_))
        ));
        assert!(matches!(
            CommandMatcher::compile("", CommandSpec::new("ping")),
            Err(DispatchError::InvalidPrefix(_))
        ));
    }
}
