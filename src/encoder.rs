//! 바이너리 인코더 모듈
//!
//! 입력 파일을 4096바이트 청크 단위로 순차 읽어 `const uint8_t <stem>[]`
//! 배열 정의 소스 파일을 생성합니다.

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::artifact::AtomicArtifact;
use crate::converter::ConversionUnit;
use crate::error::{Bin2CppError, Result};

/// 한 번에 읽는 청크 크기
pub const CHUNK_SIZE: usize = 4096;

/// 한 줄에 출력하는 바이트 수
pub const BYTES_PER_LINE: usize = 32;

/// 스트림 인코딩 실패 원인
#[derive(Debug)]
pub enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

/// 청크 버퍼를 끝까지(또는 EOF까지) 채움
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// 한 청크를 ` 0xHH,` 형식으로 렌더링
///
/// 청크 안에서 32바이트마다 줄을 바꾸고, 청크 끝에 줄바꿈을 하나 더 붙입니다.
fn render_chunk(chunk: &[u8], out: &mut String) {
    use std::fmt::Write as _;

    for (i, byte) in chunk.iter().enumerate() {
        let _ = write!(out, " 0x{:02x},", byte);
        if i % BYTES_PER_LINE == BYTES_PER_LINE - 1 {
            out.push('\n');
        }
    }
    out.push('\n');
}

/// 바이트 스트림을 배열 정의 소스로 인코딩
///
/// # Arguments
/// * `stem` - 배열 심볼 이름 (헤더 파일 이름에도 사용)
/// * `reader` - 입력 바이트 스트림
/// * `writer` - 소스 출력 대상
///
/// # Returns
/// 인코딩한 바이트 수
pub fn encode_to<R: Read, W: Write>(
    stem: &str,
    mut reader: R,
    mut writer: W,
) -> std::result::Result<u64, StreamError> {
    writeln!(writer, "#include <cstdint>").map_err(StreamError::Write)?;
    writeln!(writer, "#include \"{}.h\"", stem).map_err(StreamError::Write)?;
    writeln!(writer, "const uint8_t {}[] {{", stem).map_err(StreamError::Write)?;

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut text = String::with_capacity(CHUNK_SIZE * 6 + CHUNK_SIZE / BYTES_PER_LINE + 1);
    let mut total = 0u64;

    loop {
        let n = fill_chunk(&mut reader, &mut buf).map_err(StreamError::Read)?;
        if n == 0 {
            break;
        }

        text.clear();
        render_chunk(&buf[..n], &mut text);
        writer
            .write_all(text.as_bytes())
            .map_err(StreamError::Write)?;
        total += n as u64;

        if n < CHUNK_SIZE {
            break;
        }
    }

    writeln!(writer, "}};").map_err(StreamError::Write)?;
    writer.flush().map_err(StreamError::Write)?;

    Ok(total)
}

/// 입력 파일 열기
fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Bin2CppError::InputVanished {
            path: path.to_path_buf(),
        },
        _ => Bin2CppError::ReadError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        },
    })
}

/// 변환 단위의 소스 파일 생성
///
/// 임시 파일에 모두 쓴 뒤 입력 파일 옆의 `<stem>.cpp`로 원자적으로 배치합니다.
///
/// # Returns
/// (인코딩한 바이트 수, 배치된 소스 파일 크기)
pub fn encode(unit: &ConversionUnit, staging_dir: &Path) -> Result<(u64, u64)> {
    let input = open_input(&unit.input)?;
    let mut artifact = AtomicArtifact::create(staging_dir, &unit.source_path)?;

    let encoded = {
        let writer = BufWriter::new(artifact.file_mut());
        encode_to(&unit.stem, input, writer)
    };

    let bytes = match encoded {
        Ok(bytes) => bytes,
        Err(StreamError::Read(e)) => {
            return Err(Bin2CppError::ReadError {
                file: unit.input.clone(),
                reason: e.to_string(),
            })
        }
        Err(StreamError::Write(e)) => return Err(artifact.write_error(e)),
    };

    let written = artifact.commit()?;
    Ok((bytes, written))
}
