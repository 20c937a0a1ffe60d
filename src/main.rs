mod api;
mod app;
mod async_ops_state;
mod cli;
mod client;
mod error;
mod event;
mod logging;
mod model;
mod remote;
mod storage;
mod sync;
mod theme;
mod ui;
mod view;

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use remote::{HttpTaskApi, TaskApi};
use storage::config::{self, Config};

/// 启动 TUI 界面
fn run_tui(rt: &tokio::runtime::Runtime, config: &Config, base_url: &str) -> io::Result<()> {
    let api = match HttpTaskApi::new(base_url, config.api.timeout()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let api_label = api.base_url().to_string();
    let api: Arc<dyn TaskApi> = Arc::new(api);

    // 后台请求通过 tokio::spawn 执行
    let _guard = rt.enter();

    let mut terminal = ratatui::init();
    let mut app = App::new(api, config, api_label);
    tracing::info!(base_url = %app.api_label, theme = app.theme.label(), "starting TUI");
    app.refresh();

    let result = run(&mut terminal, &mut app);

    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut last_refresh = Instant::now();

    loop {
        // 定时自动刷新（默认关闭）
        if let Some(interval) = app.auto_refresh {
            if last_refresh.elapsed() >= interval && !app.async_ops.has_active_operation() {
                app.refresh();
                last_refresh = Instant::now();
            }
        }

        // 应用后台请求结果
        app.poll_sync_results();

        terminal.draw(|frame| ui::tasks::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}

/// 执行一次性命令并打印结果
fn run_once<F>(rt: &tokio::runtime::Runtime, base_url: &str, fut: F)
where
    F: std::future::Future<Output = error::Result<String>>,
{
    match rt.block_on(fut) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_request() {
                eprintln!("Is the task API reachable at {}?", base_url);
            }
            std::process::exit(1);
        }
    }
}

fn show_config(config: &Config, api_url: Option<&str>, init: bool) {
    let path = config::config_path();
    if init && !path.exists() {
        if let Err(e) = config::save_config(config) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Wrote {}", path.display());
    }

    println!("# {}", path.display());
    match config::render_config(&config.effective(api_url)) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    let api_url = cli.api_url.as_deref();

    let (target, directive) = command.log_setup();
    if let Err(e) = logging::init(target, directive) {
        eprintln!("Failed to set up logging: {}", e);
    }

    // 在日志初始化之后加载，配置解析失败的警告才会被记录
    let config = config::load_config();
    let base_url = config.resolve_base_url(api_url);
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Tui => {
            run_tui(&rt, &config, &base_url)?;
        }
        Commands::List { filter, search } => {
            run_once(&rt, &base_url, async {
                let mut client = cli::tasks::build_client(&config, api_url)?;
                cli::tasks::list(&mut client, filter, &search).await
            });
        }
        Commands::Add { title } => {
            let title = title.join(" ");
            run_once(&rt, &base_url, async {
                let mut client = cli::tasks::build_client(&config, api_url)?;
                cli::tasks::add(&mut client, &title).await
            });
        }
        Commands::Toggle { id } => {
            run_once(&rt, &base_url, async {
                let mut client = cli::tasks::build_client(&config, api_url)?;
                cli::tasks::toggle(&mut client, &id).await
            });
        }
        Commands::Delete { id } => {
            run_once(&rt, &base_url, async {
                let mut client = cli::tasks::build_client(&config, api_url)?;
                cli::tasks::delete(&mut client, &id).await
            });
        }
        Commands::Serve { port, host, prefix } => {
            rt.block_on(cli::serve::execute(&host, port, &prefix));
        }
        Commands::Config { init } => {
            show_config(&config, api_url, init);
        }
    }

    Ok(())
}
