//! 디렉토리 탐색 모듈
//!
//! 입력 경로 인자를 디렉토리와 파일 이름 패턴으로 나누고,
//! 디렉토리의 직계 항목 중 패턴과 일치하는 항목만 지연 열거합니다.

use std::io;
use std::path::{is_separator, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Bin2CppError, Result};
use crate::pattern::PatternMatcher;

/// 분해된 입력 경로 인자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArgument {
    /// 탐색할 디렉토리 (없으면 현재 디렉토리)
    pub directory: PathBuf,
    /// 파일 이름 패턴 (없으면 전체 일치)
    pub pattern: Option<String>,
}

impl PathArgument {
    /// 입력 경로를 디렉토리와 파일 이름 패턴으로 분해
    ///
    /// # Examples
    /// ```
    /// use bin2cpp::directory::PathArgument;
    /// use std::path::{Path, PathBuf};
    ///
    /// let arg = PathArgument::parse(Path::new("assets/*.png")).unwrap();
    /// assert_eq!(arg.directory, PathBuf::from("assets"));
    /// assert_eq!(arg.pattern.as_deref(), Some("*.png"));
    /// ```
    pub fn parse(arg: &Path) -> Result<Self> {
        let raw = arg.as_os_str().to_string_lossy();
        let trailing_separator = raw.chars().last().map(is_separator).unwrap_or(false);

        match arg.file_name() {
            Some(name) if !trailing_separator => {
                let pattern = name
                    .to_str()
                    .ok_or_else(|| Bin2CppError::InvalidPattern {
                        pattern: name.to_string_lossy().into_owned(),
                    })?
                    .to_string();
                let directory = arg
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));

                Ok(Self {
                    directory,
                    pattern: Some(pattern),
                })
            }
            _ => {
                let directory = if raw.is_empty() {
                    PathBuf::from(".")
                } else {
                    arg.to_path_buf()
                };

                Ok(Self {
                    directory,
                    pattern: None,
                })
            }
        }
    }

    /// 패턴 매처 컴파일
    pub fn matcher(&self) -> Result<PatternMatcher> {
        PatternMatcher::new(self.pattern.as_deref())
    }
}

/// 패턴과 일치한 디렉토리 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 항목 경로
    pub path: PathBuf,
}

impl FileEntry {
    /// 파일 크기 (필요할 때만 조회)
    pub fn size(&self) -> io::Result<u64> {
        std::fs::metadata(&self.path).map(|m| m.len())
    }

    /// 디렉토리 여부
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }
}

/// 디렉토리의 직계 항목 중 패턴과 일치하는 항목을 열거
///
/// 하위 디렉토리로 내려가지 않으며, 정렬하지 않고 파일 시스템이 돌려주는
/// 순서 그대로 내보냅니다. 방문한 모든 항목은 일치 여부와 관계없이 로그에 남습니다.
///
/// # Arguments
/// * `directory` - 탐색할 디렉토리
/// * `matcher` - 항목 이름에 적용할 패턴
///
/// # Returns
/// 일치한 항목의 지연 이터레이터. 디렉토리가 없으면 `DirectoryNotFound`
pub fn list_matches<'a>(
    directory: &Path,
    matcher: &'a PatternMatcher,
) -> Result<impl Iterator<Item = Result<FileEntry>> + 'a> {
    if !directory.exists() {
        return Err(Bin2CppError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }
    if !directory.is_dir() {
        return Err(Bin2CppError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let root = directory.to_path_buf();
    let walker = WalkDir::new(directory).min_depth(1).max_depth(1);

    Ok(walker.into_iter().filter_map(move |entry| match entry {
        Ok(entry) => {
            let matched = matcher.matches_file_name(entry.path());
            tracing::info!(path = %entry.path().display(), matched, "visit");
            matched.then(|| {
                Ok(FileEntry {
                    path: entry.into_path(),
                })
            })
        }
        Err(e) => {
            let file = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            Some(Err(Bin2CppError::ReadError {
                file,
                reason: e.to_string(),
            }))
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_parse_with_directory() {
        let arg = PathArgument::parse(Path::new("assets/*.png")).unwrap();
        assert_eq!(arg.directory, PathBuf::from("assets"));
        assert_eq!(arg.pattern.as_deref(), Some("*.png"));
    }

    #[test]
    fn test_parse_bare_file_name() {
        let arg = PathArgument::parse(Path::new("logo.png")).unwrap();
        assert_eq!(arg.directory, PathBuf::from("."));
        assert_eq!(arg.pattern.as_deref(), Some("logo.png"));
    }

    #[test]
    fn test_parse_trailing_separator() {
        let arg = PathArgument::parse(Path::new("assets/")).unwrap();
        assert_eq!(arg.directory, PathBuf::from("assets/"));
        assert!(arg.pattern.is_none());
    }

    #[test]
    fn test_parse_current_dir() {
        let arg = PathArgument::parse(Path::new(".")).unwrap();
        assert_eq!(arg.directory, PathBuf::from("."));
        assert!(arg.pattern.is_none());

        let arg = PathArgument::parse(Path::new("")).unwrap();
        assert_eq!(arg.directory, PathBuf::from("."));
    }

    #[test]
    fn test_list_matches_filters_and_stays_shallow() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.bin"), [1u8]).unwrap();
        fs::write(temp_dir.path().join("b.bin"), [2u8]).unwrap();
        fs::write(temp_dir.path().join("c.txt"), "text").unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("d.bin"), [3u8]).unwrap();

        let matcher = PatternMatcher::new(Some("*.bin")).unwrap();
        let mut names: Vec<String> = list_matches(temp_dir.path(), &matcher)
            .unwrap()
            .map(|e| e.unwrap())
            .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.bin", "b.bin"]);
    }

    #[test]
    fn test_list_matches_yields_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("data.bin")).unwrap();

        let matcher = PatternMatcher::new(Some("*.bin")).unwrap();
        let entries: Vec<FileEntry> = list_matches(temp_dir.path(), &matcher)
            .unwrap()
            .map(|e| e.unwrap())
            .collect();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_dir());
    }

    #[test]
    fn test_list_matches_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let matcher = PatternMatcher::new(None).unwrap();
        let result = list_matches(&temp_dir.path().join("missing"), &matcher);

        assert!(matches!(
            result,
            Err(Bin2CppError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_list_matches_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.bin");
        fs::write(&file, [0u8]).unwrap();

        let matcher = PatternMatcher::new(None).unwrap();
        let result = list_matches(&file, &matcher);

        assert!(matches!(result, Err(Bin2CppError::NotADirectory { .. })));
    }

    /// 로그 출력을 모으는 공유 버퍼
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_list_matches_logs_every_visited_entry() {
        let temp_dir = TempDir::new().unwrap();
        let matched = temp_dir.path().join("logo.png");
        let skipped = temp_dir.path().join("notes.txt");
        fs::write(&matched, [1u8]).unwrap();
        fs::write(&skipped, "text").unwrap();

        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        let matcher = PatternMatcher::new(Some("*.png")).unwrap();
        let entries: Vec<FileEntry> = tracing::subscriber::with_default(subscriber, || {
            list_matches(temp_dir.path(), &matcher)
                .unwrap()
                .map(|e| e.unwrap())
                .collect()
        });

        let log = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(log.contains(&matched.display().to_string()));
        assert!(log.contains(&skipped.display().to_string()));
        assert!(log.contains("matched=true"));
        assert!(log.contains("matched=false"));
    }

    #[test]
    fn test_entry_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("three.bin");
        fs::write(&path, [1u8, 2, 3]).unwrap();

        let entry = FileEntry { path };
        assert_eq!(entry.size().unwrap(), 3);
    }
}
