//! Tab completion of command names.
//!
//! Prefix matching against the command table plus the built-in `help`.
//! Pure function over the table; the shell decides how to render the result.

use super::Command;

/// Completion candidates for one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<'t, const MAX_MATCHES: usize> {
    /// Matching names in table order (first `MAX_MATCHES` only)
    pub matches: heapless::Vec<&'t str, MAX_MATCHES>,

    /// Total number of matching names (may exceed `matches.len()`)
    pub count: usize,

    /// Longest prefix shared by every match
    pub common: &'t str,
}

impl<'t, const MAX_MATCHES: usize> Completion<'t, MAX_MATCHES> {
    /// Result with no candidates.
    pub fn empty() -> Self {
        Self {
            matches: heapless::Vec::new(),
            count: 0,
            common: "",
        }
    }

    /// Exactly one candidate matched.
    pub fn is_unique(&self) -> bool {
        self.count == 1
    }

    /// Nothing matched.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Collect completion candidates for `prefix`.
///
/// Candidates are table names followed by the built-in `help`. Table entries
/// that the built-in listing shadows (`help`, `?`) are skipped, as are
/// duplicate names.
///
/// # Examples
///
/// ```rust,ignore
/// // table: status, stats, echo
/// let c = suggest::<8>(TABLE, "st");
/// assert_eq!(c.count, 2);
/// assert_eq!(c.common, "stat");
/// ```
pub fn suggest<'t, const MAX_MATCHES: usize>(
    table: &'t [Command],
    prefix: &str,
) -> Completion<'t, MAX_MATCHES> {
    let mut result = Completion::empty();

    for (index, cmd) in table.iter().enumerate() {
        // Shadowed by the built-in listing, or already offered
        if super::BUILTIN_HELP.contains(&cmd.name)
            || table[..index].iter().any(|earlier| earlier.name == cmd.name)
        {
            continue;
        }
        result.offer(cmd.name, prefix);
    }
    result.offer(super::BUILTIN_HELP[0], prefix);

    result
}

impl<'t, const MAX_MATCHES: usize> Completion<'t, MAX_MATCHES> {
    fn offer(&mut self, name: &'t str, prefix: &str) {
        if !name.starts_with(prefix) {
            return;
        }

        self.common = if self.count == 0 {
            name
        } else {
            common_prefix(self.common, name)
        };
        self.count += 1;
        let _ = self.matches.push(name);
    }
}

/// Longest common prefix of `a` and `b`, cut at a char boundary.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();

    while !a.is_char_boundary(len) {
        len -= 1;
    }

    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Invocation;
    use crate::error::ExitCode;

    fn noop(_inv: &mut Invocation<'_>) -> ExitCode {
        ExitCode::Success
    }

    const TABLE: &[Command] = &[
        Command::new("status", "", noop),
        Command::new("stats", "", noop),
        Command::new("echo", "", noop),
        Command::new("help", "shadowed", noop),
        Command::new("echo", "duplicate", noop),
    ];

    #[test]
    fn test_single_match() {
        let c = suggest::<8>(TABLE, "ec");
        assert!(c.is_unique());
        assert_eq!(c.common, "echo");
        assert_eq!(c.matches.as_slice(), &["echo"]);
    }

    #[test]
    fn test_multiple_matches_common_prefix() {
        let c = suggest::<8>(TABLE, "st");
        assert_eq!(c.count, 2);
        assert_eq!(c.common, "stat");
        assert_eq!(c.matches.as_slice(), &["status", "stats"]);
    }

    #[test]
    fn test_no_match() {
        let c = suggest::<8>(TABLE, "xyz");
        assert!(c.is_empty());
        assert_eq!(c.common, "");
    }

    #[test]
    fn test_builtin_help_offered_once() {
        let c = suggest::<8>(TABLE, "h");
        assert!(c.is_unique());
        assert_eq!(c.common, "help");
    }

    #[test]
    fn test_empty_prefix_lists_everything() {
        let c = suggest::<8>(TABLE, "");
        assert_eq!(c.matches.as_slice(), &["status", "stats", "echo", "help"]);
        assert_eq!(c.common, "");
    }

    #[test]
    fn test_match_list_is_bounded() {
        let c = suggest::<2>(TABLE, "");
        assert_eq!(c.count, 4);
        assert_eq!(c.matches.len(), 2);
    }

    #[test]
    fn test_common_prefix_char_boundary() {
        assert_eq!(common_prefix("añb", "añc"), "añ");
        assert_eq!(common_prefix("ab", "abc"), "ab");
        assert_eq!(common_prefix("x", "y"), "");
        assert_eq!(common_prefix("é", "è"), "");
    }
}
