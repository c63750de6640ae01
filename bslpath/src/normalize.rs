//! Folding a [`RuleTable`] over an input path.

use std::borrow::Cow;

use crate::rule::{ReplacementRule, RuleTable};

/// One rule that matched while a path was being normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    /// Zero-based position of the rule in its table.
    pub index: usize,
    pub rule: ReplacementRule<'a>,
    /// The path after this rule was applied.
    pub result: String,
}

/// Replaces the first occurrence of `search` in `haystack`.
///
/// Returns the input borrowed when there is no match. An empty `search`
/// matches at offset 0.
pub fn replace_first<'h>(haystack: &'h str, search: &str, replace: &str) -> Cow<'h, str> {
    match haystack.find(search) {
        Some(start) => {
            let end = start + search.len();
            let mut out = String::with_capacity(haystack.len() - search.len() + replace.len());
            out.push_str(&haystack[..start]);
            out.push_str(replace);
            out.push_str(&haystack[end..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(haystack),
    }
}

/// Converts a configuration source path to its legacy dotted identifier
/// using [`DEFAULT_RULES`](crate::DEFAULT_RULES).
///
/// ```
/// assert_eq!(
///     bslpath::normalize("src/configuration/Catalogs.Module.bsl"),
///     "Справочники.Модуль"
/// );
/// ```
pub fn normalize(path: &str) -> String {
    RuleTable::default().apply(path)
}

impl<'a> RuleTable<'a> {
    pub fn apply(&self, path: &str) -> String {
        self.fold(path, |_, _, _| {})
    }

    /// Like [`apply`](Self::apply), but records every rule that matched.
    /// The last step's `result` equals the return value of `apply` whenever
    /// at least one rule matched.
    pub fn explain(&self, path: &str) -> Vec<Step<'a>> {
        let mut steps = Vec::new();
        self.fold(path, |index, rule, result| {
            steps.push(Step {
                index,
                rule,
                result: result.to_string(),
            })
        });
        steps
    }

    fn fold<F>(&self, path: &str, mut on_match: F) -> String
    where
        F: FnMut(usize, ReplacementRule<'a>, &str),
    {
        let mut current = path.to_string();
        for (index, rule) in self.rules().iter().enumerate() {
            let next = match replace_first(&current, rule.search, rule.replace) {
                Cow::Owned(next) => next,
                Cow::Borrowed(_) => continue,
            };
            log::trace!(
                "rule #{} {:?} -> {:?}: {:?}",
                index + 1,
                rule.search,
                rule.replace,
                next
            );
            on_match(index, *rule, &next);
            current = next;
        }
        log::debug!("normalize({:?}) = {:?}", path, current);
        current
    }
}
