//! 查询命令与控制台命令处理
//!
//! 命令行子命令与交互式控制台共用同一套查询命令；以 : 开头的是控制台命令

use std::fs::File;
use std::io::Write;

use clap::{Parser, Subcommand};

use super::printer::{OutputMode, Printer};
use crate::algorithm::{PathFinder, ShortestPathEngine, TraversalStrategy};
use crate::error::Result;
use crate::graph::Graph;
use crate::report::{DegreeTable, DistanceTable, NetworkReport, NetworkSnapshot, PathReport};
use crate::sample::{DEFAULT_GOAL, DEFAULT_START};

/// 路网查询命令
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 顶点数与边数
    Stats,
    /// 边列表及权重
    Edges,
    /// 各顶点的度数
    Degrees,
    /// 顶点的邻居（按加边顺序）
    Neighbors { vertex: String },
    /// BFS 路径（最少跳数）
    Bfs { start: String, goal: String },
    /// DFS 路径（不保证最短）
    Dfs { start: String, goal: String },
    /// Dijkstra 最短路径
    Shortest { source: String, target: String },
    /// 全源最短路径表，可只显示一个源点
    AllPairs { source: Option<String> },
    /// 连通分量
    Components,
    /// 导出路网快照（JSON，可再次导入）
    Export,
    /// 完整报告：规模、度数、BFS/DFS 路径和全源最短路径
    Report {
        #[arg(default_value = DEFAULT_START)]
        start: String,
        #[arg(default_value = DEFAULT_GOAL)]
        goal: String,
    },
}

/// 执行查询命令，返回渲染后的输出
pub fn execute(
    graph: &Graph,
    printer: &Printer,
    command: &Command,
    parallel: bool,
) -> Result<String> {
    match command {
        Command::Stats => printer.print_stats(&NetworkSnapshot::from_graph(graph)),
        Command::Edges => printer.print_edges(&NetworkSnapshot::from_graph(graph)),
        Command::Degrees => printer.print_degrees(&DegreeTable::from_graph(graph)),
        Command::Neighbors { vertex } => {
            let neighbors = graph.weighted_neighbors(vertex)?;
            match printer.mode() {
                OutputMode::Json => Ok(serde_json::to_string_pretty(&neighbors)?),
                OutputMode::Table => {
                    let mut output = format!("{} 的邻居 ({}):\n", vertex, neighbors.len());
                    for (name, weight) in neighbors {
                        output.push_str(&format!("  {} ({})\n", name, weight));
                    }
                    Ok(output)
                }
            }
        }
        Command::Bfs { start, goal } => printer.print_path(&PathReport::traverse(
            graph,
            TraversalStrategy::Bfs,
            start,
            goal,
        )?),
        Command::Dfs { start, goal } => printer.print_path(&PathReport::traverse(
            graph,
            TraversalStrategy::Dfs,
            start,
            goal,
        )?),
        Command::Shortest { source, target } => {
            printer.print_path(&PathReport::shortest(graph, source, target)?)
        }
        Command::AllPairs { source } => {
            let engine = ShortestPathEngine::new(graph);
            if let Some(source) = source {
                // 提前校验源点名称
                graph.resolve(source)?;
            }
            let all_pairs = if parallel {
                engine.all_pairs_parallel()
            } else {
                engine.all_pairs()
            };
            let mut table = DistanceTable::from_all_pairs(graph, &all_pairs);
            if let Some(source) = source {
                table.entries.retain(|e| &e.source == source);
            }
            printer.print_distance_table(&table)
        }
        Command::Components => {
            let components: Vec<Vec<String>> = PathFinder::new(graph)
                .connected_components()
                .iter()
                .map(|c| graph.names_of(c))
                .collect();
            match printer.mode() {
                OutputMode::Json => Ok(serde_json::to_string_pretty(&components)?),
                OutputMode::Table => {
                    let mut output = format!("连通分量: {}\n", components.len());
                    for (i, component) in components.iter().enumerate() {
                        output.push_str(&format!("  {}: {}\n", i + 1, component.join(", ")));
                    }
                    Ok(output)
                }
            }
        }
        Command::Export => Ok(serde_json::to_string_pretty(&NetworkSnapshot::from_graph(
            graph,
        ))?),
        Command::Report { start, goal } => {
            printer.print_report(&NetworkReport::build(graph, start, goal, parallel)?)
        }
    }
}

/// 控制台中的一行查询命令
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

/// 控制台命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台状态
#[derive(Default)]
pub struct ConsoleState {
    /// 打印器
    pub printer: Printer,
    /// 是否使用并行全源最短路径
    pub parallel: bool,
    /// 输出到文件
    pub tee_file: Option<File>,
}

impl ConsoleState {
    pub fn new(printer: Printer, parallel: bool) -> Self {
        Self {
            printer,
            parallel,
            tee_file: None,
        }
    }

    /// 写入输出（同时写入 stdout 和 tee 文件）
    pub fn write_output(&mut self, content: &str) {
        print!("{}", content);
        if let Some(ref mut file) = self.tee_file {
            let _ = file.write_all(content.as_bytes());
        }
    }
}

/// 检查输入是否是控制台命令
pub fn is_console_command(input: &str) -> bool {
    input.trim().starts_with(':')
}

/// 把一行输入解析为查询命令
pub fn parse_command_line(input: &str) -> std::result::Result<Command, String> {
    ConsoleLine::try_parse_from(input.split_whitespace())
        .map(|line| line.command)
        .map_err(|e| e.to_string())
}

/// 处理控制台中的一行输入
pub fn execute_line(input: &str, state: &mut ConsoleState, graph: &Graph) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }
    if is_console_command(input) {
        return execute_console_command(input, state);
    }

    match parse_command_line(input) {
        Ok(command) => match execute(graph, &state.printer, &command, state.parallel) {
            Ok(output) => CommandResult::Message(output),
            Err(e) => CommandResult::Error(e.to_string()),
        },
        Err(e) => CommandResult::Error(e),
    }
}

/// 解析并执行控制台命令
pub fn execute_console_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let cmd_line = input.trim().trim_start_matches(':');

    let parts: Vec<&str> = cmd_line.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "help" | "h" => CommandResult::Message(get_help_text()),

        "quit" | "q" | "exit" | "e" => CommandResult::Exit,

        "mode" => match args {
            "table" => {
                state.printer.set_mode(OutputMode::Table);
                CommandResult::Message("Output mode: table".to_string())
            }
            "json" => {
                state.printer.set_mode(OutputMode::Json);
                CommandResult::Message("Output mode: json".to_string())
            }
            _ => CommandResult::Error("Usage: :mode table|json".to_string()),
        },

        "parallel" => match args {
            "on" => {
                state.parallel = true;
                CommandResult::Message("Parallel all-pairs enabled".to_string())
            }
            "off" => {
                state.parallel = false;
                CommandResult::Message("Parallel all-pairs disabled".to_string())
            }
            _ => CommandResult::Error("Usage: :parallel on|off".to_string()),
        },

        "tee" => {
            let args_parts: Vec<&str> = args.split_whitespace().collect();
            let (overwrite, filename) = if args_parts.first() == Some(&"-o") {
                (true, args_parts.get(1).copied())
            } else {
                (false, args_parts.first().copied())
            };

            if let Some(filename) = filename {
                let file = if overwrite {
                    File::create(filename)
                } else {
                    File::options().create(true).append(true).open(filename)
                };

                match file {
                    Ok(f) => {
                        state.tee_file = Some(f);
                        CommandResult::Message(format!("Logging to {}", filename))
                    }
                    Err(e) => CommandResult::Error(format!("Cannot open file: {}", e)),
                }
            } else {
                CommandResult::Error("Usage: :tee [-o] <filename>".to_string())
            }
        }

        "notee" => {
            if state.tee_file.take().is_some() {
                CommandResult::Message("Stopped logging".to_string())
            } else {
                CommandResult::Message("No active logging".to_string())
            }
        }

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        _ => CommandResult::Error(format!("Unknown command: {}. Type :help for help.", cmd)),
    }
}

fn get_help_text() -> String {
    r#"
╔═══════════════════════════════════════════════════════════════╗
║                       Query Commands                          ║
╠═══════════════════════════════════════════════════════════════╣
║ stats                      Vertex and edge counts             ║
║ edges                      Edge list with weights             ║
║ degrees                    Degree of every vertex             ║
║ neighbors <v>              Neighbors in edge insertion order  ║
║ bfs <start> <goal>         Fewest-hop path                    ║
║ dfs <start> <goal>         Depth-first path (not minimal)     ║
║ shortest <source> <target> Dijkstra shortest path             ║
║ all-pairs [source]         All-pairs shortest path table      ║
║ components                 Connected components               ║
║ export                     Network snapshot as JSON           ║
║ report [start] [goal]      Full network report                ║
╠═══════════════════════════════════════════════════════════════╣
║                      Console Commands                         ║
╠═══════════════════════════════════════════════════════════════╣
║ :help, :h                  Show this help                     ║
║ :quit, :q, :exit, :e       Exit the program                   ║
║ :mode table|json           Switch output mode                 ║
║ :parallel on|off           Parallel all-pairs computation     ║
║ :tee [-o] <filename>       Log output to file (-o: overwrite) ║
║ :notee                     Stop logging to file               ║
║ :clear                     Clear the screen                   ║
╚═══════════════════════════════════════════════════════════════╝
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::city_network;

    #[test]
    fn test_parse_command_line() {
        assert_eq!(parse_command_line("stats").unwrap(), Command::Stats);
        assert_eq!(
            parse_command_line("bfs Home RiverPort").unwrap(),
            Command::Bfs {
                start: "Home".to_string(),
                goal: "RiverPort".to_string(),
            }
        );
        assert_eq!(
            parse_command_line("all-pairs").unwrap(),
            Command::AllPairs { source: None }
        );
        assert_eq!(
            parse_command_line("report").unwrap(),
            Command::Report {
                start: "Home".to_string(),
                goal: "RiverPort".to_string(),
            }
        );
        assert!(parse_command_line("bfs Home").is_err());
        assert!(parse_command_line("teleport Home").is_err());
    }

    #[test]
    fn test_execute_shortest() {
        let graph = city_network().unwrap();
        let printer = Printer::default();

        let output = execute(
            &graph,
            &printer,
            &Command::Shortest {
                source: "Home".to_string(),
                target: "RiverPort".to_string(),
            },
            false,
        )
        .unwrap();
        assert!(output.contains("Home -> Market -> Park -> RiverPort"));
    }

    #[test]
    fn test_execute_all_pairs_single_source() {
        let graph = city_network().unwrap();
        let printer = Printer::new(OutputMode::Json);

        let output = execute(
            &graph,
            &printer,
            &Command::AllPairs {
                source: Some("Park".to_string()),
            },
            true,
        )
        .unwrap();
        let table: DistanceTable = serde_json::from_str(&output).unwrap();
        assert_eq!(table.entries.len(), 8);
        assert!(table.entries.iter().all(|e| e.source == "Park"));
    }

    #[test]
    fn test_execute_unknown_vertex() {
        let graph = city_network().unwrap();
        let mut state = ConsoleState::default();

        match execute_line("neighbors Airport", &mut state, &graph) {
            CommandResult::Error(message) => assert!(message.contains("Airport")),
            _ => panic!("expected an error"),
        }
    }

    #[test]
    fn test_console_commands() {
        let graph = city_network().unwrap();
        let mut state = ConsoleState::default();

        assert!(matches!(
            execute_line(":mode json", &mut state, &graph),
            CommandResult::Message(_)
        ));
        assert_eq!(state.printer.mode(), OutputMode::Json);
        assert!(matches!(
            execute_line(":parallel on", &mut state, &graph),
            CommandResult::Message(_)
        ));
        assert!(state.parallel);
        assert!(matches!(
            execute_line(":quit", &mut state, &graph),
            CommandResult::Exit
        ));
        assert!(matches!(
            execute_line("   ", &mut state, &graph),
            CommandResult::Continue
        ));
    }
}
