//! Command keyword registry and boundary-checked matching.
//!
//! A [`CommandRegistry`] is built once at startup and shared read-only
//! afterwards; [`CommandRegistry::match_line`] is a pure function of the
//! input line. The boundary rule is a single predicate shared by every
//! spec, so adding a command cannot reintroduce a prefix-collision bug
//! ("listen" never matches "list", "hazelnut" never matches "hazel").

use serde::Serialize;

/// One recognizable command keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    name: String,
    requires_payload: bool,
}

impl CommandSpec {
    /// Create a spec. The keyword is stored lowercase; matching is
    /// case-insensitive.
    pub fn new(name: impl Into<String>, requires_payload: bool) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            requires_payload,
        }
    }

    /// The command keyword (lowercase).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the command carries a free-text payload after the keyword.
    /// Commands without a payload ignore the rest of the line entirely.
    pub fn requires_payload(&self) -> bool {
        self.requires_payload
    }
}

/// May `c` legally follow a matched keyword?
///
/// End-of-input also qualifies; that case is handled at the call site since
/// there is no character to test.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '~' | '!')
}

/// An immutable, ordered set of command specifications.
#[derive(Debug, Clone, Serialize)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

/// The outcome of a successful registry match: which spec matched and what
/// remains of the line after the keyword.
#[derive(Debug, Clone, Copy)]
pub struct CommandMatch<'r, 'i> {
    /// The matched command specification.
    pub spec: &'r CommandSpec,
    /// Remainder of the input after the keyword. A single whitespace, `~`,
    /// or `!` boundary character is consumed; a `:` boundary is preserved
    /// so the payload split sees it.
    pub rest: &'i str,
}

impl CommandRegistry {
    /// Build a registry from explicit specs. Order is kept and only breaks
    /// ties between equal-length keywords.
    pub fn new(specs: Vec<CommandSpec>) -> Self {
        Self { specs }
    }

    /// The six commands understood by the reminder bot.
    pub fn standard() -> Self {
        Self::new(vec![
            CommandSpec::new("remind", true),
            CommandSpec::new("list", false),
            CommandSpec::new("clear", true),
            CommandSpec::new("clearall", false),
            CommandSpec::new("renum", false),
            CommandSpec::new("hazel", false),
        ])
    }

    /// The registered specs, in registration order.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Decide which command (if any) a line invokes.
    ///
    /// A spec matches when the line starts with its keyword
    /// (case-insensitively) and the character immediately after the keyword
    /// is end-of-input, whitespace, `:`, `~`, or `!`. Among
    /// boundary-qualified specs the longest keyword wins, so "clearall"
    /// beats "clear" on the line "clearall" while "clear 2" still matches
    /// "clear".
    pub fn match_line<'r, 'i>(&'r self, input: &'i str) -> Option<CommandMatch<'r, 'i>> {
        let mut best: Option<&CommandSpec> = None;

        for spec in &self.specs {
            let kw = spec.name();
            // `get` returns None when kw.len() is not a char boundary, which
            // also rejects the match.
            let Some(prefix) = input.get(..kw.len()) else {
                continue;
            };
            if !prefix.eq_ignore_ascii_case(kw) {
                continue;
            }
            match input[kw.len()..].chars().next() {
                None => {}
                Some(c) if is_boundary(c) => {}
                Some(_) => continue,
            }
            if best.is_none_or(|b| kw.len() > b.name().len()) {
                best = Some(spec);
            }
        }

        let spec = best?;
        let after = &input[spec.name().len()..];
        let rest = match after.chars().next() {
            Some(c) if c != ':' && is_boundary(c) => &after[c.len_utf8()..],
            _ => after,
        };
        Some(CommandMatch { spec, rest })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CommandRegistry {
        CommandRegistry::standard()
    }

    #[test]
    fn test_match_each_boundary_character() {
        let reg = registry();
        for line in ["list", "list ", "list:", "list~", "list!"] {
            let m = reg.match_line(line).unwrap();
            assert_eq!(m.spec.name(), "list", "line: {line:?}");
        }
    }

    #[test]
    fn test_non_boundary_characters_disqualify() {
        let reg = registry();
        assert!(reg.match_line("listen this is not a list").is_none());
        assert!(reg.match_line("clearance sale").is_none());
        assert!(reg.match_line("hazelnut").is_none());
        assert!(reg.match_line("renum-extra-random-characters").is_none());
        assert!(reg.match_line("remind2").is_none());
    }

    #[test]
    fn test_longest_keyword_wins() {
        let reg = registry();
        assert_eq!(reg.match_line("clearall").unwrap().spec.name(), "clearall");
        assert_eq!(reg.match_line("clearall ").unwrap().spec.name(), "clearall");
        // "clearall" does not boundary-qualify here, so "clear" wins.
        assert_eq!(reg.match_line("clear 2").unwrap().spec.name(), "clear");
        assert!(reg.match_line("clearallrandomchar").is_none());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let reg = registry();
        for line in ["list", "List", "LIST", "ReMiNd me"] {
            assert!(reg.match_line(line).is_some(), "line: {line:?}");
        }
    }

    #[test]
    fn test_rest_consumes_one_non_colon_boundary() {
        let reg = registry();
        assert_eq!(reg.match_line("remind me to x").unwrap().rest, "me to x");
        assert_eq!(reg.match_line("hazel!").unwrap().rest, "");
        assert_eq!(reg.match_line("hazel~").unwrap().rest, "");
        // Colon boundary is preserved for the payload split.
        assert_eq!(reg.match_line("remind:today 9:00am").unwrap().rest, ":today 9:00am");
    }

    #[test]
    fn test_unmatchable_inputs_do_not_panic() {
        let reg = registry();
        assert!(reg.match_line("").is_none());
        assert!(reg.match_line("   ").is_none());
        assert!(reg.match_line("remin").is_none());
        assert!(reg.match_line("日本語のテキスト").is_none());
        assert!(reg.match_line("lis\u{30c8}").is_none());
    }

    #[test]
    fn test_equal_length_tie_keeps_registration_order() {
        let reg = CommandRegistry::new(vec![
            CommandSpec::new("ping", false),
            CommandSpec::new("PING", true),
        ]);
        let m = reg.match_line("ping").unwrap();
        assert!(!m.spec.requires_payload());
    }
}
