//! 命令行工具支持模块
//!
//! 查询命令、控制台命令、补全器和结果打印器

mod commands;
mod completer;
mod printer;

pub use commands::{
    execute, execute_console_command, execute_line, is_console_command, parse_command_line,
    Command, CommandResult, ConsoleState,
};
pub use completer::RoadCompleter;
pub use printer::{format_path, format_weight, OutputMode, Printer};
