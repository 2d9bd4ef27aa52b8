//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// bin2cpp CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "bin2cpp",
    author = "YourName <your@email.com>",
    version,
    about = "BINARY TO C++ ARRAY CONVERTER - 바이너리 파일을 C++ 바이트 배열 소스/헤더로 변환",
    long_about = r#"
BINARY TO C++ ARRAY CONVERTER
=============================

일치하는 각 입력 파일 X 옆에 두 파일을 생성합니다:
  X.cpp  - const uint8_t X[] { 0x.., ... };
  X.h    - constexpr size_t X_size{ N }; extern const uint8_t X[];

파일 이름에 와일드카드를 쓸 수 있습니다:
  ?  임의의 한 문자
  *  임의의 한 문자 이상

예제:
  bin2cpp assets/logo.png
  bin2cpp "assets/*.png" "shaders/*.spv"
  bin2cpp "assets/*.png" --dry-run
  bin2cpp "assets/*.png" --report generated.json
"#
)]
pub struct Args {
    /// 변환할 입력 경로 (파일 이름에 ?, * 사용 가능)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// 임시 파일을 만들 디렉토리 (기본값: 시스템 임시 디렉토리)
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 일치하는 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 생성된 파일 목록을 저장할 JSON 리포트 경로
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Args {
    /// 로그 필터 지시문
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "bin2cpp=debug"
        } else {
            "bin2cpp=info"
        }
    }
}
