pub mod condition;
pub mod operand;
pub mod operator;
pub mod rule;
pub mod rule_set;
