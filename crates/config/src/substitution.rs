//! Placeholder substitution for resolved values.
//!
//! Responsibilities:
//! - Replace `{name}` placeholders with raw values from the base `[DEFAULT]` section.
//! - Replace the runtime tokens `{{USER}}`, `{{DATE}}`, `{{GIT_BRANCH}}` and `{{CWD}}`.
//! - Provide the `TokenSource` seam so runtime values can be injected in tests.
//!
//! Does NOT handle:
//! - `${section:key}` interpolation, which runs earlier on the base file only.
//!
//! Invariants:
//! - Both passes scan left to right once; substituted text is never re-scanned.
//! - Unknown placeholders and tokens are left verbatim.
//! - Runtime lookups never fail: missing values become empty strings.
//! - Each runtime value is computed at most once per `TokenCache`.

use std::borrow::Cow;
use std::cell::OnceCell;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::constants::{DATE_TOKEN_FORMAT, USER_ENV_VAR, USERNAME_ENV_VAR};
use crate::loader::{SectionMap, env_var};

/// The runtime tokens recognized inside `{{...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    User,
    Date,
    GitBranch,
    Cwd,
}

impl Token {
    pub const ALL: [Token; 4] = [Token::User, Token::Date, Token::GitBranch, Token::Cwd];

    /// Name as written between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Token::User => "USER",
            Token::Date => "DATE",
            Token::GitBranch => "GIT_BRANCH",
            Token::Cwd => "CWD",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Source of the values behind the runtime tokens.
///
/// Each lookup is optional; the substitution engine falls back to an empty string.
pub trait TokenSource {
    fn user(&self) -> Option<String>;
    fn date(&self) -> String;
    fn git_branch(&self) -> Option<String>;
    fn cwd(&self) -> Option<String>;
}

/// Token values taken from the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTokens;

impl TokenSource for SystemTokens {
    fn user(&self) -> Option<String> {
        env_var(USER_ENV_VAR)
            .filter(|user| !user.is_empty())
            .or_else(|| env_var(USERNAME_ENV_VAR).filter(|user| !user.is_empty()))
    }

    fn date(&self) -> String {
        chrono::Local::now().format(DATE_TOKEN_FORMAT).to_string()
    }

    fn git_branch(&self) -> Option<String> {
        let output = Command::new("git")
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => String::from_utf8(out.stdout)
                .ok()
                .map(|branch| branch.trim().to_string()),
            Ok(out) => {
                debug!(status = %out.status, "git branch lookup failed");
                None
            }
            Err(e) => {
                debug!(error = %e, "git not available for branch lookup");
                None
            }
        }
    }

    fn cwd(&self) -> Option<String> {
        std::env::current_dir()
            .ok()
            .map(|path| path.to_string_lossy().into_owned())
    }
}

/// Memoizes token values from a `TokenSource` for the duration of one load.
pub struct TokenCache<'a> {
    source: &'a dyn TokenSource,
    user: OnceCell<String>,
    date: OnceCell<String>,
    git_branch: OnceCell<String>,
    cwd: OnceCell<String>,
}

impl<'a> TokenCache<'a> {
    pub fn new(source: &'a dyn TokenSource) -> Self {
        Self {
            source,
            user: OnceCell::new(),
            date: OnceCell::new(),
            git_branch: OnceCell::new(),
            cwd: OnceCell::new(),
        }
    }

    /// Value of `token`, computing it on first use.
    pub fn resolve(&self, token: Token) -> &str {
        match token {
            Token::User => self
                .user
                .get_or_init(|| self.source.user().unwrap_or_default()),
            Token::Date => self.date.get_or_init(|| self.source.date()),
            Token::GitBranch => self
                .git_branch
                .get_or_init(|| self.source.git_branch().unwrap_or_default()),
            Token::Cwd => self.cwd.get_or_init(|| self.source.cwd().unwrap_or_default()),
        }
    }
}

/// Replace `{name}` with the DEFAULT value of `name`.
pub fn substitute_defaults<'a>(input: &'a str, defaults: &SectionMap) -> Cow<'a, str> {
    if defaults.is_empty() || !input.contains('{') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut modified = false;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let matched = after.find('}').and_then(|end| {
            defaults
                .get(&after[..end])
                .map(|value| (value, &after[end + 1..]))
        });
        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
                modified = true;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if modified {
        trace!(input, output = %out, "Substituted DEFAULT placeholders");
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}

/// Replace the recognized `{{NAME}}` runtime tokens.
pub fn substitute_tokens<'a>(input: &'a str, tokens: &TokenCache<'_>) -> Cow<'a, str> {
    if !input.contains("{{") {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut modified = false;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let matched = after.find("}}").and_then(|end| {
            Token::from_name(&after[..end]).map(|token| (token, &after[end + 2..]))
        });
        match matched {
            Some((token, tail)) => {
                out.push_str(tokens.resolve(token));
                rest = tail;
                modified = true;
            }
            None => {
                // Advance one brace so `{{{USER}}}` still finds the inner token.
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }
    out.push_str(rest);

    if modified {
        trace!(input, output = %out, "Substituted runtime tokens");
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::cell::Cell;

    struct FixedTokens {
        branch_calls: Cell<usize>,
    }

    impl FixedTokens {
        fn new() -> Self {
            Self {
                branch_calls: Cell::new(0),
            }
        }
    }

    impl TokenSource for FixedTokens {
        fn user(&self) -> Option<String> {
            Some("jerry".to_string())
        }
        fn date(&self) -> String {
            "20240101".to_string()
        }
        fn git_branch(&self) -> Option<String> {
            self.branch_calls.set(self.branch_calls.get() + 1);
            None
        }
        fn cwd(&self) -> Option<String> {
            Some("/work".to_string())
        }
    }

    fn defaults(pairs: &[(&str, &str)]) -> SectionMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_placeholders() {
        let defaults = defaults(&[("user", "alice"), ("suffix", "_prod")]);
        assert_eq!(
            substitute_defaults("dataset_{user}{suffix}", &defaults),
            "dataset_alice_prod"
        );
    }

    #[test]
    fn test_default_placeholders_are_not_recursive() {
        let defaults = defaults(&[("a", "{b}"), ("b", "x")]);
        assert_eq!(substitute_defaults("{a}-{b}", &defaults), "{b}-x");
    }

    #[test]
    fn test_unknown_default_placeholders_are_kept() {
        let defaults = defaults(&[("user", "alice")]);
        let input = "{missing} {user";
        assert!(matches!(substitute_defaults(input, &defaults), Cow::Borrowed(_)));
    }

    #[test]
    fn test_runtime_tokens() {
        let source = FixedTokens::new();
        let cache = TokenCache::new(&source);
        assert_eq!(
            substitute_tokens("{{USER}}/{{DATE}}/{{CWD}}/[{{GIT_BRANCH}}]", &cache),
            "jerry/20240101//work/[]"
        );
    }

    #[test]
    fn test_unknown_tokens_are_kept() {
        let source = FixedTokens::new();
        let cache = TokenCache::new(&source);
        assert_eq!(substitute_tokens("{{HOME}}-{{USER", &cache), "{{HOME}}-{{USER");
        assert_eq!(substitute_tokens("{{{USER}}}", &cache), "{jerry}");
    }

    #[test]
    fn test_branch_lookup_is_cached() {
        let source = FixedTokens::new();
        let cache = TokenCache::new(&source);
        substitute_tokens("{{GIT_BRANCH}}", &cache);
        substitute_tokens("{{GIT_BRANCH}}-{{GIT_BRANCH}}", &cache);
        assert_eq!(source.branch_calls.get(), 1);
    }

    #[test]
    fn test_tokens_never_run_without_placeholders() {
        let source = FixedTokens::new();
        let cache = TokenCache::new(&source);
        substitute_tokens("plain value", &cache);
        assert_eq!(source.branch_calls.get(), 0);
    }

    #[test]
    #[serial]
    fn test_system_user_falls_back_to_username() {
        temp_env::with_vars([("USER", None), ("USERNAME", Some("winuser"))], || {
            assert_eq!(SystemTokens.user(), Some("winuser".to_string()));
        });
        temp_env::with_vars([("USER", Some("")), ("USERNAME", None::<&str>)], || {
            assert_eq!(SystemTokens.user(), None);
        });
    }

    #[test]
    fn test_system_date_is_eight_digits() {
        let date = SystemTokens.date();
        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_system_cwd_is_absolute() {
        let cwd = SystemTokens.cwd().unwrap();
        assert!(std::path::Path::new(&cwd).is_absolute());
    }
}
