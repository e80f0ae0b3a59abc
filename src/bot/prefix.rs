//! Chat message commands such as `!generate 30 1 5`.

/// A chat message split into a command name and its arguments.
#[derive(Debug, PartialEq)]
pub struct PrefixInvocation<'a> {
    /// Lower-cased command name.
    pub name: String,
    pub words: Vec<&'a str>,
}

/// Splits `content` into a command invocation if it starts with `prefix`.
///
/// The command name must follow the prefix directly: `! generate` is not a command.
pub fn split_command<'a>(prefix: &str, content: &'a str) -> Option<PrefixInvocation<'a>> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut words = rest.split_whitespace();
    let name = words.next()?.to_lowercase();

    Some(PrefixInvocation {
        name,
        words: words.collect(),
    })
}
