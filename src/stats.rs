//! 통계 및 유틸리티 모듈
//!
//! 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::converter::ConvertResult;

/// 변환 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 변환한 파일 수
    pub converted: usize,
    /// 인코딩한 총 바이트
    pub bytes_read: u64,
    /// 생성한 출력 파일 총 바이트
    pub bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 변환 결과 하나를 반영
    pub fn record(&mut self, result: &ConvertResult) {
        self.converted += 1;
        self.bytes_read += result.encoded_bytes;
        self.bytes_written += result.bytes_written;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 변환 파일:    {}",
            "📁".bright_cyan(),
            self.converted.to_string().green()
        );
        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use bin2cpp::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ConversionUnit;
    use std::path::Path;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.000초");
        assert_eq!(format_duration(Duration::from_secs(65)), "1분 5초");
    }

    #[test]
    fn test_record() {
        let mut stats = Statistics::new();
        let result = ConvertResult {
            unit: ConversionUnit::new(Path::new("a.bin")),
            encoded_bytes: 10,
            declared_size: 10,
            bytes_written: 150,
        };

        stats.record(&result);
        stats.record(&result);

        assert_eq!(stats.converted, 2);
        assert_eq!(stats.bytes_read, 20);
        assert_eq!(stats.bytes_written, 300);
    }
}
