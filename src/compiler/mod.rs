//! 编译模块：将单位规则编译为可执行的折叠器
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledUnitRule, UnitFolder, UnitMatcher};
pub use self::compiler::RuleCompiler;
