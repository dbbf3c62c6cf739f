pub mod engine;
pub mod error;
pub mod eval;
pub mod report;

pub use engine::RuleEngine;
pub use error::{EngineError, Result};
pub use eval::{Evaluator, RuleContext, RuleLookup, combine, resolve_operand};
pub use report::{SummaryReport, render_text_report};
