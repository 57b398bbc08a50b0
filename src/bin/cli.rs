//! RoadGraph CLI 工具
//!
//! 查询路网结构、BFS/DFS 路径和全源最短路径；`console` 子命令进入交互模式

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use roadgraph::cli::{
    execute, execute_line, Command, CommandResult, ConsoleState, OutputMode, Printer,
    RoadCompleter,
};
use roadgraph::graph::Graph;
use roadgraph::import::{load_network, NetworkFormat};
use roadgraph::sample::{city_network, DEFAULT_GOAL, DEFAULT_START};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roadgraph-cli")]
#[command(about = "RoadGraph 城市路网命令行工具")]
#[command(version)]
struct Args {
    /// 路网文件（CSV 边表或 JSON 文档），缺省使用内置样例路网
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// CSV 顶点表（表头 name），用于固定顶点顺序或加入孤立顶点
    #[arg(long)]
    vertices: Option<PathBuf>,

    /// 输入格式: csv, json（缺省按扩展名推断）
    #[arg(short, long)]
    format: Option<NetworkFormat>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 并行计算全源最短路径
    #[arg(short, long)]
    parallel: bool,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    #[command(flatten)]
    Query(Command),
    /// 交互式控制台
    Console,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let graph = open_graph(&args)?;
    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let printer = Printer::new(mode);

    match args.command {
        Some(CliCommand::Console) => run_console(&graph, printer, args.parallel),
        Some(CliCommand::Query(command)) => {
            let output = execute(&graph, &printer, &command, args.parallel)?;
            print_output(&output);
            Ok(())
        }
        None => {
            let command = Command::Report {
                start: DEFAULT_START.to_string(),
                goal: DEFAULT_GOAL.to_string(),
            };
            let output = execute(&graph, &printer, &command, args.parallel)
                .context("默认报告需要样例路网中的 Home 与 RiverPort 顶点")?;
            print_output(&output);
            Ok(())
        }
    }
}

fn open_graph(args: &Args) -> Result<Graph> {
    match &args.network {
        Some(path) => {
            let (graph, stats) = load_network(path, args.vertices.as_deref(), args.format)
                .with_context(|| format!("无法导入路网: {}", path.display()))?;
            info!(
                vertices = stats.vertices_imported,
                edges = stats.edges_imported,
                duration_ms = stats.duration_ms,
                "已加载路网"
            );
            Ok(graph)
        }
        None => {
            if args.vertices.is_some() {
                warn!("未指定 --network，忽略 --vertices");
            }
            Ok(city_network()?)
        }
    }
}

fn print_output(output: &str) {
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("roadgraph");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("history.txt"))
}

fn run_console(graph: &Graph, printer: Printer, parallel: bool) -> Result<()> {
    println!("{}", "RoadGraph CLI - 城市路网图".bold());
    println!("{}", "==========================".bold());
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());
    println!("\n输入 ':help' 查看命令列表，':quit' 退出\n");

    let mut editor: Editor<RoadCompleter, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(RoadCompleter::new(graph)));

    let history = history_path();
    if let Some(path) = &history {
        // 首次运行时历史文件不存在
        let _ = editor.load_history(path);
    }

    let mut state = ConsoleState::new(printer, parallel);
    loop {
        match editor.readline("roadgraph> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match execute_line(&line, &mut state, graph) {
                    CommandResult::Continue => {}
                    CommandResult::Exit => break,
                    CommandResult::Message(output) => {
                        state.write_output(&output);
                        if !output.ends_with('\n') {
                            state.write_output("\n");
                        }
                    }
                    CommandResult::Error(message) => {
                        println!("{} {}", "错误:".red(), message);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = editor.save_history(path) {
            warn!(error = %e, "无法保存历史记录");
        }
    }

    println!("再见！");
    Ok(())
}
