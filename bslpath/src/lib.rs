pub mod error;
pub mod normalize;
pub mod rule;

pub use error::Error;
pub use normalize::{Step, normalize, replace_first};
pub use rule::{DEFAULT_RULES, ReplacementRule, RuleTable};
