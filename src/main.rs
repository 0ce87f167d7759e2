use clap::Parser;
use std::collections::HashSet;
use tlb_report::{cli, config, error, export, report, scanner};
use tlb_report_common::{report_keys, WORKLOADS};
use cli::{Cli, Commands, ExportFormat};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Parse {
        results_dir: None,
        output: None,
        format: ExportFormat::default(),
    });

    match command {
        Commands::Parse { results_dir, output, format } => {
            let config = Config::load_or_default().with_overrides(results_dir, output);
            println!("📊 tlb-report - 結果集計\n");

            // 1. 集計
            println!("[1/2] 結果ファイルを集計中... ({})", config.results_dir.display());
            let report = report::build_report(&config.results_dir, WORKLOADS);
            println!("✔ {}行を作成\n", report.rows.len());

            // 2. 出力
            println!("[2/2] 出力中... (形式: {})", format);
            let written = export::export_rows(&report.rows, format, &config.output)?;
            for path in &written {
                println!("✔ 結果を保存: {}", path.display());
            }

            println!("\n集計:");
            println!("  行数: {}", report.rows.len());
            println!("  結果ファイルあり: {}", report.found_count());
            println!("  結果ファイルなし: {}", report.missing_count());

            println!("\n✅ 完了");
        }

        Commands::List { results_dir } => {
            let config = Config::load_or_default().with_overrides(results_dir, None);
            let files = scanner::scan_results(&config.results_dir)?;

            println!("結果フォルダ: {}\n", config.results_dir.display());

            let found: HashSet<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
            let mut expected = HashSet::new();

            for (pair, tlb_type) in report_keys(WORKLOADS) {
                let name = scanner::result_file_name(tlb_type, &pair.first, &pair.second);
                let mark = if found.contains(name.as_str()) { "✔" } else { "✘" };
                println!("  {} {:<14} {:<10} {}", mark, pair.label(), tlb_type.label(), name);
                expected.insert(name);
            }

            let extra: Vec<_> = files
                .iter()
                .filter(|f| !expected.contains(&f.file_name))
                .collect();
            if !extra.is_empty() {
                println!("\n対象外の結果ファイル:");
                for file in extra {
                    println!("  - {} ({}, {}+{})", file.file_name, file.tlb_type, file.first, file.second);
                }
            }
        }

        Commands::Config { show, init } => {
            let config = Config::load()?;

            if init {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !init {
                println!("設定:");
                println!("  結果フォルダ: {}", config.results_dir.display());
                println!("  出力ファイル: {}", config.output.display());
                println!("  ワークロード: {}", WORKLOADS.join(", "));
            }
        }
    }

    Ok(())
}
