/// Options recovered from a `tree`-style argument list.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TranslatedArgs {
    /// Target path; the last non-flag token, `.` when none is given
    pub path: String,
    /// From `-L <n>` or `-L<n>`
    pub max_depth: Option<usize>,
    /// From `-a` or `--all`
    pub show_hidden: bool,
}

impl Default for TranslatedArgs {
    fn default() -> Self {
        Self {
            path: ".".to_owned(),
            max_depth: None,
            show_hidden: false,
        }
    }
}

/// Forward-only cursor over argument tokens with one token of lookahead.
pub struct ArgCursor<'a, S> {
    tokens: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> ArgCursor<'a, S> {
    pub fn new(tokens: &'a [S]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Index of the next token to be returned by `advance`.
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).map(|token| token.as_ref())
    }

    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }
}

/// Translate `tree`-style flags into scan options and a target path.
///
/// Unrecognized flags are skipped. A `-L` without a valid number leaves the
/// depth unset and the following token is read on its own.
pub fn translate<S: AsRef<str>>(tokens: &[S]) -> TranslatedArgs {
    translate_onto(TranslatedArgs::default(), tokens)
}

/// Like [`translate`], starting from `base` instead of the defaults.
pub fn translate_onto<S: AsRef<str>>(base: TranslatedArgs, tokens: &[S]) -> TranslatedArgs {
    let mut cursor = ArgCursor::new(tokens);
    let mut translated = base;

    while let Some(token) = cursor.advance() {
        if token == "-L" {
            if let Some(depth) = cursor.peek().and_then(parse_depth) {
                translated.max_depth = Some(depth);
                cursor.advance();
            }
        } else if let Some(suffix) = token.strip_prefix("-L") {
            if let Some(depth) = parse_depth(suffix) {
                translated.max_depth = Some(depth);
            }
        } else if token == "-a" || token == "--all" {
            translated.show_hidden = true;
        } else if !token.starts_with('-') {
            translated.path = token.to_owned();
        } else {
            log::debug!("ignoring unsupported tree flag {token}");
        }
    }

    translated
}

fn parse_depth(raw: &str) -> Option<usize> {
    raw.parse().ok()
}
