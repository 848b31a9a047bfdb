//! Ordered class-string composition.

/// Builder that joins class tokens with single spaces in insertion order.
///
/// Empty contributions are skipped, so absent tokens never produce doubled separators. The
/// caller override is appended verbatim by [`ClassList::finish`] and always ends up last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    buf: String,
}

impl ClassList {
    /// Starts a list with the kind's base token.
    pub fn new(base: &str) -> Self {
        Self::default().token(base)
    }

    /// Appends a token group unless it is empty.
    pub fn token(mut self, token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            return self;
        }
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(token);
        self
    }

    /// Appends `token` only when `active` is set.
    pub fn token_if(self, active: bool, token: &str) -> Self {
        if active {
            self.token(token)
        } else {
            self
        }
    }

    /// Appends the caller override unmodified and returns the composed string.
    pub fn finish(mut self, caller: Option<&str>) -> String {
        if let Some(caller) = caller.filter(|caller| !caller.trim().is_empty()) {
            if !self.buf.is_empty() {
                self.buf.push(' ');
            }
            self.buf.push_str(caller);
        }
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_empty_contributions_without_double_spaces() {
        let class = ClassList::new("")
            .token("container-max")
            .token("")
            .token_if(false, "w-full")
            .finish(Some(""));
        assert_eq!(class, "container-max");
    }

    #[test]
    fn caller_override_is_appended_verbatim_and_last() {
        let class = ClassList::new("btn")
            .token("btn-ghost")
            .finish(Some("mt-4  hover:underline"));
        assert_eq!(class, "btn btn-ghost mt-4  hover:underline");
    }

    #[test]
    fn multi_class_groups_are_kept_intact() {
        let class = ClassList::new("grid grid-cols-1").finish(None);
        assert_eq!(class, "grid grid-cols-1");
    }
}
