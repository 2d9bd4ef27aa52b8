//! 변환 처리 모듈
//!
//! 입력 경로 인자 단위로 디렉토리를 탐색하고, 일치한 파일마다
//! 존재 확인 → 소스 생성 → 헤더 생성 순서로 처리합니다.
//! 첫 번째 실패에서 남은 파일 처리를 중단합니다.

use std::path::{Path, PathBuf};

use crate::declaration::emit_declaration;
use crate::directory::{list_matches, FileEntry, PathArgument};
use crate::encoder::encode;
use crate::error::{Bin2CppError, Result};

/// 생성되는 소스 파일 확장자
pub const SOURCE_EXTENSION: &str = "cpp";

/// 생성되는 헤더 파일 확장자
pub const HEADER_EXTENSION: &str = "h";

/// 파일 하나의 변환 작업 단위
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionUnit {
    /// 입력 파일 경로
    pub input: PathBuf,
    /// 확장자를 뺀 파일 이름 (배열 심볼 이름)
    pub stem: String,
    /// 소스 파일 최종 경로
    pub source_path: PathBuf,
    /// 헤더 파일 최종 경로
    pub header_path: PathBuf,
}

impl ConversionUnit {
    /// 입력 경로에서 변환 단위 생성
    ///
    /// 출력 파일은 입력 파일과 같은 디렉토리에 놓입니다. stem은 정제하지 않습니다.
    pub fn new(input: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = input.parent().unwrap_or_else(|| Path::new(""));

        Self {
            input: input.to_path_buf(),
            source_path: dir.join(format!("{}.{}", stem, SOURCE_EXTENSION)),
            header_path: dir.join(format!("{}.{}", stem, HEADER_EXTENSION)),
            stem,
        }
    }
}

/// C 식별자로 쓸 수 있는 이름인지 확인
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// 임시 파일을 만들 디렉토리
    pub staging_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성 (시스템 임시 디렉토리 사용)
    pub fn new() -> Self {
        Self {
            staging_dir: std::env::temp_dir(),
        }
    }

    /// 임시 디렉토리 설정 (None이면 기본값 유지)
    pub fn with_staging_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.staging_dir = dir;
        }
        self
    }
}

/// 파일 하나의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    /// 변환 단위
    pub unit: ConversionUnit,
    /// 소스에 인코딩된 바이트 수
    pub encoded_bytes: u64,
    /// 헤더에 선언된 크기
    pub declared_size: u64,
    /// 두 출력 파일의 총 크기
    pub bytes_written: u64,
}

/// 파일 하나를 변환
///
/// # Arguments
/// * `path` - 입력 파일 경로
/// * `options` - 변환 옵션
///
/// # Returns
/// 변환 결과 또는 첫 번째로 발생한 에러
pub fn convert(path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
    if !path.exists() {
        return Err(Bin2CppError::InputVanished {
            path: path.to_path_buf(),
        });
    }

    let unit = ConversionUnit::new(path);
    if !is_identifier(&unit.stem) {
        tracing::warn!(stem = %unit.stem, "stem is not a valid C identifier");
    }

    tracing::debug!(input = %path.display(), "encode");
    let (encoded_bytes, source_len) = encode(&unit, &options.staging_dir)?;

    tracing::debug!(input = %path.display(), "declare");
    let (declared_size, header_len) = emit_declaration(&unit, &options.staging_dir)?;

    Ok(ConvertResult {
        unit,
        encoded_bytes,
        declared_size,
        bytes_written: source_len + header_len,
    })
}

/// 입력 경로 인자와 일치하는 항목 수집 (변환 없음)
pub fn collect_matches(arg: &Path) -> Result<Vec<FileEntry>> {
    let argument = PathArgument::parse(arg)?;
    let matcher = argument.matcher()?;
    let entries = list_matches(&argument.directory, &matcher)?.collect::<Result<Vec<_>>>()?;
    Ok(entries)
}

/// 입력 경로 인자 하나를 처리
///
/// # Arguments
/// * `arg` - 와일드카드를 포함할 수 있는 입력 경로
/// * `options` - 변환 옵션
/// * `on_converted` - 파일 하나의 변환이 끝날 때마다 호출
pub fn process_input<F>(
    arg: &Path,
    options: &ConvertOptions,
    mut on_converted: F,
) -> Result<Vec<ConvertResult>>
where
    F: FnMut(&ConvertResult),
{
    let argument = PathArgument::parse(arg)?;
    let matcher = argument.matcher()?;

    let mut results = Vec::new();
    for entry in list_matches(&argument.directory, &matcher)? {
        let result = convert(&entry?.path, options)?;
        on_converted(&result);
        results.push(result);
    }

    Ok(results)
}

/// 입력 경로 인자들을 순서대로 처리
///
/// 첫 번째로 실패한 인자에서 멈춥니다.
pub fn process_inputs<F>(
    args: &[PathBuf],
    options: &ConvertOptions,
    mut on_converted: F,
) -> Result<Vec<ConvertResult>>
where
    F: FnMut(&ConvertResult),
{
    if args.is_empty() {
        return Err(Bin2CppError::NoInputPaths);
    }

    let mut results = Vec::new();
    for arg in args {
        results.extend(process_input(arg, options, &mut on_converted)?);
    }

    Ok(results)
}
