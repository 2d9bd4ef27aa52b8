//! 생성 결과 리포트 모듈
//!
//! 빌드 시스템이 생성된 파일 목록을 읽을 수 있도록 JSON 매니페스트를 작성합니다.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::converter::ConvertResult;
use crate::error::{Bin2CppError, Result};

/// 입력 파일 하나에 대한 생성 기록
#[derive(Debug, Serialize)]
pub struct ArtifactRecord {
    pub input: PathBuf,
    pub stem: String,
    pub size: u64,
    pub source: PathBuf,
    pub header: PathBuf,
}

impl From<&ConvertResult> for ArtifactRecord {
    fn from(result: &ConvertResult) -> Self {
        Self {
            input: result.unit.input.clone(),
            stem: result.unit.stem.clone(),
            size: result.declared_size,
            source: result.unit.source_path.clone(),
            header: result.unit.header_path.clone(),
        }
    }
}

/// 전체 리포트
#[derive(Debug, Serialize)]
pub struct Report {
    pub artifacts: Vec<ArtifactRecord>,
}

impl Report {
    /// 변환 결과 목록으로 리포트 생성
    pub fn new(results: &[ConvertResult]) -> Self {
        Self {
            artifacts: results.iter().map(ArtifactRecord::from).collect(),
        }
    }

    /// 리포트를 JSON 파일로 저장
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let to_error = |reason: String| Bin2CppError::WriteError {
            file: path.to_path_buf(),
            reason,
        };

        let file = File::create(path).map_err(|e| to_error(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| to_error(e.to_string()))?;
        writeln!(writer).map_err(|e| to_error(e.to_string()))?;
        writer.flush().map_err(|e| to_error(e.to_string()))?;

        Ok(())
    }
}
