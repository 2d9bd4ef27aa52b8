//! 원자적 출력 파일 모듈
//!
//! 출력 내용을 임시 디렉토리의 임시 파일에 모두 쓴 뒤 한 번의 이름 변경으로
//! 최종 위치에 배치합니다. 커밋되지 않은 임시 파일은 drop 시 삭제됩니다.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

use crate::error::{Bin2CppError, Result};

/// 배치 대기 중인 출력 파일
#[derive(Debug)]
pub struct AtomicArtifact {
    temp: NamedTempFile,
    target: PathBuf,
}

impl AtomicArtifact {
    /// `staging_dir`에 임시 파일 생성
    ///
    /// # Arguments
    /// * `staging_dir` - 임시 파일을 만들 디렉토리
    /// * `target` - 커밋 시 배치될 최종 경로
    pub fn create(staging_dir: &Path, target: &Path) -> Result<Self> {
        let prefix = target
            .file_stem()
            .map(|s| format!("{}.", s.to_string_lossy()))
            .unwrap_or_default();
        let suffix = target
            .extension()
            .map(|s| format!(".{}", s.to_string_lossy()))
            .unwrap_or_default();

        let temp = Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(staging_dir)
            .map_err(|e| Bin2CppError::WriteError {
                file: staging_dir.to_path_buf(),
                reason: format!("임시 파일 생성 실패: {}", e),
            })?;

        Ok(Self {
            temp,
            target: target.to_path_buf(),
        })
    }

    /// 임시 파일 핸들
    pub fn file_mut(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// 임시 파일 경로
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// 최종 배치 경로
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// 쓰기 에러를 최종 경로 기준의 `WriteError`로 변환
    pub fn write_error(&self, e: std::io::Error) -> Bin2CppError {
        Bin2CppError::WriteError {
            file: self.target.clone(),
            reason: e.to_string(),
        }
    }

    /// 임시 파일을 최종 경로로 이동
    ///
    /// # Returns
    /// 배치된 파일의 바이트 수
    pub fn commit(mut self) -> Result<u64> {
        self.temp.flush().map_err(|e| self.write_error(e))?;
        let len = self
            .temp
            .as_file()
            .metadata()
            .map(|m| m.len())
            .map_err(|e| self.write_error(e))?;

        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| Bin2CppError::WriteError {
                file: target.clone(),
                reason: format!("파일 이동 실패: {}", e.error),
            })?;

        tracing::debug!(path = %target.display(), bytes = len, "published");
        Ok(len)
    }
}
