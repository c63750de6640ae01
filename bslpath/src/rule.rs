//! Replacement rules and the tables they are folded over.

use std::borrow::Cow;

use crate::error::Error;

/// A literal `search` -> `replace` pair. Only the first occurrence of
/// `search` is replaced when the rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRule<'a> {
    pub search: &'a str,
    pub replace: &'a str,
}

impl<'a> ReplacementRule<'a> {
    pub const fn new(search: &'a str, replace: &'a str) -> Self {
        Self { search, replace }
    }

    /// Parses a `SEARCH=REPLACE` definition, splitting at the first `=`.
    pub fn from_definition(definition: &'a str) -> Result<Self, Error> {
        definition
            .split_once('=')
            .map(|(search, replace)| Self::new(search, replace))
            .ok_or_else(|| Error::MalformedRule(definition.to_string()))
    }
}

/// Built-in rules producing 1C:Enterprise object identifiers. Order matters.
pub const DEFAULT_RULES: &[ReplacementRule<'static>] = &[
    ReplacementRule::new("src/configuration/", ""),
    ReplacementRule::new("src/Configuration/", ""),
    ReplacementRule::new("/Ext/Form/", "."),
    ReplacementRule::new("/Form/", "."),
    ReplacementRule::new("/Forms/", "."),
    ReplacementRule::new("/Ext/", "."),
    ReplacementRule::new("/", "."),
    ReplacementRule::new(".bsl", ""),
    ReplacementRule::new(".ObjectModule", ".МодульОбъекта"),
    ReplacementRule::new(".CommandModule", ".МодульКоманды"),
    ReplacementRule::new(".ManagerModule", ".МодульМенеджера"),
    ReplacementRule::new(".Module", ".Модуль"),
    ReplacementRule::new("DataProcessors.", "Обработки."),
    ReplacementRule::new("DataProcessors/", "Обработки."),
    ReplacementRule::new("CommonModules.", "ОбщиеМодули."),
    ReplacementRule::new("CommonModules/", "ОбщиеМодули."),
    ReplacementRule::new("CommonForms.", "ОбщиеФормы."),
    ReplacementRule::new("CommonForms/", "ОбщиеФормы."),
    ReplacementRule::new("Catalogs.", "Справочники."),
    ReplacementRule::new("Catalogs/", "Справочники."),
    ReplacementRule::new("ExchangePlans.", "ПланыОбмена."),
    ReplacementRule::new("ExchangePlans/", "ПланыОбмена."),
    ReplacementRule::new("Ext.ManagedApplicationModule", "МодульУправляемогоПриложения"),
    ReplacementRule::new("Ext.OrdinaryApplicationModule", "МодульОбычногоПриложения"),
    ReplacementRule::new("InformationRegisters.", "РегистрыСведений."),
    ReplacementRule::new("InformationRegisters/", "РегистрыСведений."),
    ReplacementRule::new("Commands.", "."),
    ReplacementRule::new("Commands/", "."),
    ReplacementRule::new("src.", ""),
    ReplacementRule::new("src/", ""),
];

/// An ordered, immutable sequence of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable<'a> {
    rules: Cow<'a, [ReplacementRule<'a>]>,
}

impl<'a> RuleTable<'a> {
    /// Builds a table from caller-supplied rules.
    ///
    /// Fails if any rule has an empty search value, since that would match
    /// at the start of every input.
    pub fn new<R>(rules: R) -> Result<Self, Error>
    where
        R: Into<Cow<'a, [ReplacementRule<'a>]>>,
    {
        let rules = rules.into();
        if let Some(index) = rules.iter().position(|rule| rule.search.is_empty()) {
            return Err(Error::EmptySearchValue { index });
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ReplacementRule<'a>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable<'static> {
    fn default() -> Self {
        Self {
            rules: Cow::Borrowed(DEFAULT_RULES),
        }
    }
}
