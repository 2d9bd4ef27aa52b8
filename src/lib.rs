//! bin2cpp - BINARY TO C++ ARRAY CONVERTER
//!
//! 바이너리 파일(이미지, 셰이더, blob 등)을 C++ 바이트 배열 소스와 헤더로 변환하여
//! 실행 파일에 직접 포함할 수 있게 해 주는 빌드용 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **와일드카드 매칭**: `?`(한 문자), `*`(한 문자 이상)로 디렉토리 항목 선택
//! - 🧱 **결정적 출력**: 같은 입력은 항상 바이트 단위로 같은 결과
//! - 🔒 **원자적 배치**: 임시 파일에 다 쓴 뒤 이름 변경으로 배치
//! - 🧪 **드라이런 모드**: 변환 없이 일치하는 파일 목록 확인
//! - 📝 **JSON 리포트**: 생성된 파일 목록을 빌드 시스템에 전달
//!
//! # 예제
//!
//! ```bash
//! # assets/logo.png → assets/logo.cpp, assets/logo.h
//! bin2cpp assets/logo.png
//!
//! # 여러 패턴
//! bin2cpp "assets/*.png" "shaders/*.spv"
//! ```

pub mod artifact;
pub mod cli;
pub mod converter;
pub mod declaration;
pub mod directory;
pub mod encoder;
pub mod error;
pub mod pattern;
pub mod report;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use converter::{
    collect_matches, convert, process_input, process_inputs, ConversionUnit, ConvertOptions,
    ConvertResult,
};
pub use error::{Bin2CppError, Result};
pub use pattern::PatternMatcher;
pub use report::Report;
pub use stats::{format_bytes, Statistics};
