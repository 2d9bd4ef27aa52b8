//! bin2cpp - BINARY TO C++ ARRAY CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use bin2cpp::{
    cli::Args,
    converter::{collect_matches, process_inputs, ConvertOptions, ConvertResult},
    error::Bin2CppError,
    report::Report,
    stats::{format_bytes, Statistics},
};

/// 분류되지 않은 실패의 종료 코드
const EXIT_UNSPECIFIED: u8 = 3;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\n{} {:#}", "❌".bright_red(), err);
            let code = err
                .downcast_ref::<Bin2CppError>()
                .map(Bin2CppError::exit_code)
                .unwrap_or(EXIT_UNSPECIFIED);
            ExitCode::from(code)
        }
    }
}

/// 로그 출력 설정
fn init_logging(args: &Args) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_directive()))
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    print_header(args);

    if args.dry_run {
        return run_dry_run(&args.paths);
    }

    let options = ConvertOptions::new().with_staging_dir(args.temp_dir.clone());
    let mut stats = Statistics::new();

    let results = process_inputs(&args.paths, &options, |result| {
        stats.record(result);
        if args.verbose {
            print_converted(result);
        }
    })?;

    if results.is_empty() {
        println!("{}", "⚠️ 일치하는 파일이 없습니다.".yellow());
    }

    if let Some(ref report_path) = args.report {
        Report::new(&results)
            .write_to(report_path)
            .with_context(|| format!("리포트 저장 실패: {:?}", report_path))?;
        println!(
            "\n{} 리포트 저장: {:?}",
            "📝".bright_cyan(),
            report_path
        );
    }

    stats.print_summary();
    println!("\n{} 변환 완료\n", "✅".bright_green());

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 BINARY TO C++ ARRAY CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());

    for path in &args.paths {
        println!("  {} 입력: {:?}", "📂".bright_cyan(), path);
    }

    if let Some(ref dir) = args.temp_dir {
        println!("  {} 임시 디렉토리: {:?}", "🗂️".bright_yellow(), dir);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 변환된 파일 한 줄 출력
fn print_converted(result: &ConvertResult) {
    println!(
        "  {} {:?} → {:?}, {:?} ({})",
        "✓".green(),
        result.unit.input.file_name().unwrap_or_default(),
        result.unit.source_path.file_name().unwrap_or_default(),
        result.unit.header_path.file_name().unwrap_or_default(),
        format_bytes(result.encoded_bytes)
    );
}

/// 드라이런: 일치하는 파일 목록만 출력
fn run_dry_run(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        return Err(Bin2CppError::NoInputPaths.into());
    }

    println!("\n{}", "📋 변환 예정 파일 목록:".bright_cyan());

    let mut count = 0usize;
    for path in paths {
        for entry in collect_matches(path)? {
            count += 1;
            let size = match entry.size() {
                Ok(size) => format_bytes(size),
                Err(_) => "?".to_string(),
            };
            let kind = if entry.is_dir() { " (디렉토리)" } else { "" };
            println!("  {}. {:?} [{}]{}", count, entry.path, size, kind);
        }
    }

    println!(
        "\n{} 총 {} 개의 파일이 변환될 예정입니다.\n",
        "ℹ️".bright_blue(),
        count.to_string().bright_green()
    );

    Ok(())
}
