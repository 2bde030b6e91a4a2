use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xshell::{Shell, cmd};

#[derive(Parser)]
#[command(name = "xtask", about = "Hookdrop 开发任务自动化")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 构建所有组件 (release)
    Build,
    /// 运行桌面界面 (开发模式)
    Gui {
        /// 日志级别 (trace, debug, info, warn, error)
        #[arg(short, long, default_value = "info")]
        log_level: String,
    },
    /// 运行无界面接收服务 (开发模式)
    Serve {
        /// 存储目录
        #[arg(short, long)]
        dir: Option<String>,
        /// 监听端口
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// 运行测试
    Test,
    /// 运行测试并生成覆盖率报告
    Coverage,
    /// 打包发布 (tar.gz)
    Dist,
    /// 清理构建产物
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    // 确保在项目根目录执行
    let project_root = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir)
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default(),
        Err(_) => std::env::current_dir()?,
    };
    sh.change_dir(&project_root);

    match cli.command {
        Commands::Build => build(&sh)?,
        Commands::Gui { log_level } => gui(&sh, &log_level)?,
        Commands::Serve { dir, port } => serve(&sh, dir, port)?,
        Commands::Test => test(&sh)?,
        Commands::Coverage => coverage(&sh)?,
        Commands::Dist => dist(&sh)?,
        Commands::Clean => clean(&sh)?,
    }

    Ok(())
}

fn build(sh: &Shell) -> Result<()> {
    println!("🔨 构建所有组件...");
    cmd!(
        sh,
        "cargo build --release -p hookdrop-server -p hookdrop-cli -p hookdrop-gui"
    )
    .run()?;
    println!("✅ 构建完成");
    Ok(())
}

fn gui(sh: &Shell, log_level: &str) -> Result<()> {
    println!("🖥️  启动桌面界面...");
    let rust_log = format!("{log_level},hookdrop_core={log_level}");
    let _env = sh.push_env("RUST_LOG", rust_log);
    cmd!(sh, "cargo run -p hookdrop-gui").run()?;
    Ok(())
}

fn serve(sh: &Shell, dir: Option<String>, port: Option<u16>) -> Result<()> {
    println!("🚀 启动接收服务...");
    let mut args = Vec::new();
    if let Some(dir) = dir {
        args.push("--dir".to_string());
        args.push(dir);
    }
    if let Some(port) = port {
        args.push("--port".to_string());
        args.push(port.to_string());
    }
    cmd!(sh, "cargo run -p hookdrop-server -- {args...}").run()?;
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 运行测试...");
    cmd!(sh, "cargo test --workspace").run()?;
    println!("✅ 测试完成");
    Ok(())
}

fn coverage(sh: &Shell) -> Result<()> {
    println!("📊 运行测试覆盖率分析...");

    // 检查 cargo-tarpaulin 是否安装
    if cmd!(sh, "cargo tarpaulin --version").run().is_err() {
        println!("📦 安装 cargo-tarpaulin...");
        cmd!(sh, "cargo install cargo-tarpaulin").run()?;
    }

    println!("🔍 分析中...");
    cmd!(
        sh,
        "cargo tarpaulin --packages hookdrop-core --out Html --output-dir target/coverage"
    )
    .run()?;

    println!("✅ 覆盖率报告已生成");
    println!("   HTML 报告: target/coverage/tarpaulin-report.html");
    Ok(())
}

fn dist(sh: &Shell) -> Result<()> {
    println!("📦 打包发布...");

    build(sh)?;

    let version = env!("CARGO_PKG_VERSION");
    let dist_name = format!("hookdrop-{version}-{}-{}", std::env::consts::OS, std::env::consts::ARCH);
    let out = format!("dist/{dist_name}");

    sh.create_dir(&out)?;
    for bin in ["hookdrop-server", "hookdrop-gui"] {
        sh.copy_file(format!("target/release/{bin}"), &out)?;
    }
    sh.copy_file("target/release/hookdrop-cli", format!("{out}/hookdrop"))?;
    if sh.path_exists("README.md") {
        sh.copy_file("README.md", &out)?;
    }

    let _dir = sh.push_dir("dist");
    cmd!(sh, "tar -czvf {dist_name}.tar.gz {dist_name}").run()?;

    println!("✅ 打包完成: dist/{dist_name}.tar.gz");
    Ok(())
}

fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 清理构建产物...");
    cmd!(sh, "cargo clean").run()?;
    sh.remove_path("dist")?;
    println!("✅ 清理完成");
    Ok(())
}
