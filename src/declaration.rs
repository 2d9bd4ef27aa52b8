//! 헤더 파일 생성 모듈

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::artifact::AtomicArtifact;
use crate::converter::ConversionUnit;
use crate::error::{Bin2CppError, Result};

/// 헤더 파일 내용 렌더링
///
/// # Examples
/// ```
/// use bin2cpp::declaration::render_declaration;
///
/// let text = render_declaration("logo", 3);
/// assert!(text.contains("constexpr size_t logo_size{ 3 };"));
/// ```
pub fn render_declaration(stem: &str, size: u64) -> String {
    format!(
        "#pragma once\nconstexpr size_t {stem}_size{{ {size} }};\nextern const uint8_t {stem}[];\n"
    )
}

/// 입력 파일 크기 조회
///
/// 인코더와 독립적으로 파일 시스템에서 직접 조회합니다.
fn input_size(path: &Path) -> Result<u64> {
    fs::metadata(path).map(|m| m.len()).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Bin2CppError::InputVanished {
            path: path.to_path_buf(),
        },
        _ => Bin2CppError::ReadError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        },
    })
}

/// 변환 단위의 헤더 파일 생성
///
/// # Returns
/// (선언한 배열 크기, 배치된 헤더 파일 크기)
pub fn emit_declaration(unit: &ConversionUnit, staging_dir: &Path) -> Result<(u64, u64)> {
    let size = input_size(&unit.input)?;
    let mut artifact = AtomicArtifact::create(staging_dir, &unit.header_path)?;

    let text = render_declaration(&unit.stem, size);
    if let Err(e) = artifact.file_mut().write_all(text.as_bytes()) {
        return Err(artifact.write_error(e));
    }

    let written = artifact.commit()?;
    Ok((size, written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_declaration() {
        assert_eq!(
            render_declaration("logo", 3),
            "#pragma once\nconstexpr size_t logo_size{ 3 };\nextern const uint8_t logo[];\n"
        );
    }

    #[test]
    fn test_render_zero_size() {
        assert!(render_declaration("empty", 0).contains("empty_size{ 0 }"));
    }

    #[test]
    fn test_emit_declaration() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("blob.bin");
        fs::write(&input, vec![0u8; 5000]).unwrap();

        let unit = ConversionUnit::new(&input);
        let (size, written) = emit_declaration(&unit, temp_dir.path()).unwrap();

        let header = fs::read_to_string(temp_dir.path().join("blob.h")).unwrap();
        assert_eq!(size, 5000);
        assert_eq!(written, header.len() as u64);
        assert!(header.contains("constexpr size_t blob_size{ 5000 };"));
    }

    #[test]
    fn test_emit_declaration_vanished_input() {
        let temp_dir = TempDir::new().unwrap();
        let unit = ConversionUnit::new(&temp_dir.path().join("gone.bin"));

        let result = emit_declaration(&unit, temp_dir.path());
        assert!(matches!(result, Err(Bin2CppError::InputVanished { .. })));
        assert!(!temp_dir.path().join("gone.h").exists());
    }
}
