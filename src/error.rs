//! 에러 타입 정의 모듈
//!
//! bin2cpp에서 발생할 수 있는 모든 에러 타입과 종료 코드 매핑을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// bin2cpp에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum Bin2CppError {
    /// 입력 경로가 하나도 주어지지 않음
    #[error("입력 경로가 지정되지 않았습니다")]
    NoInputPaths,

    /// 입력 디렉토리가 존재하지 않음
    #[error("디렉토리를 찾을 수 없습니다: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// 입력 디렉토리 경로가 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 열거 후 변환 전에 입력 파일이 사라짐
    #[error("입력 파일이 더 이상 존재하지 않습니다: {path}")]
    InputVanished { path: PathBuf },

    /// 바이너리 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({file}): {reason}")]
    ReadError { file: PathBuf, reason: String },

    /// 임시 파일 생성/쓰기 또는 원자적 이동 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },
}

impl Bin2CppError {
    /// 프로세스 종료 코드
    ///
    /// 경로 관련 오류는 1, 읽기 오류는 2, 쓰기 오류는 3을 반환합니다.
    pub fn exit_code(&self) -> u8 {
        match self {
            Bin2CppError::NoInputPaths
            | Bin2CppError::DirectoryNotFound { .. }
            | Bin2CppError::NotADirectory { .. }
            | Bin2CppError::InvalidPattern { .. }
            | Bin2CppError::InputVanished { .. } => 1,
            Bin2CppError::ReadError { .. } => 2,
            Bin2CppError::WriteError { .. } => 3,
        }
    }
}

/// bin2cpp 결과 타입 별칭
pub type Result<T> = std::result::Result<T, Bin2CppError>;
