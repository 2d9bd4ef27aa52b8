//! 패턴 매칭 모듈
//!
//! 와일드카드 파일 이름 패턴(`.`, `?`, `*`)을 토큰으로 분해한 뒤
//! `glob::Pattern`으로 낮춰서 디렉토리 항목 이름 전체와 비교합니다.

use glob::Pattern;
use std::path::Path;

use crate::error::{Bin2CppError, Result};

/// 패턴 토큰
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// 그대로 일치해야 하는 문자
    Literal(char),
    /// 임의의 한 문자 (`?`)
    AnyOne,
    /// 임의의 한 문자 이상 (`*`)
    AnyOneOrMore,
}

/// 패턴 문자열을 토큰 목록으로 분해
///
/// `.`을 포함한 나머지 문자는 모두 리터럴입니다.
/// `[`, `]`, `(`, `)`, `+`, `^`, `$`, `\` 같은 문자도 리터럴로 취급하므로,
/// 이 문자들을 정규식 메타문자로 그대로 넘기던 기존 정규식 기반 변환과는 동작이 다릅니다.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    pattern
        .chars()
        .map(|c| match c {
            '?' => Token::AnyOne,
            '*' => Token::AnyOneOrMore,
            other => Token::Literal(other),
        })
        .collect()
}

/// 토큰 목록을 glob 패턴 문자열로 변환
///
/// glob의 `*`는 빈 문자열과도 일치하므로 `AnyOneOrMore`는 `?*`로 낮춥니다.
fn lower(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() * 2);
    let mut buf = [0u8; 4];
    for token in tokens {
        match token {
            Token::Literal(c) => out.push_str(&Pattern::escape(c.encode_utf8(&mut buf))),
            Token::AnyOne => out.push('?'),
            Token::AnyOneOrMore => out.push_str("?*"),
        }
    }
    out
}

/// 컴파일된 패턴 매처
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    source: String,
    pattern: Pattern,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 와일드카드 패턴 문자열 (None이면 `*`와 동일)
    ///
    /// # Returns
    /// 컴파일된 `PatternMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use bin2cpp::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("a?c")).unwrap();
    /// assert!(matcher.matches("abc"));
    /// assert!(!matcher.matches("ac"));
    /// ```
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let source = pattern.unwrap_or("*").to_string();
        let lowered = lower(&tokenize(&source));
        let pattern = Pattern::new(&lowered).map_err(|_| Bin2CppError::InvalidPattern {
            pattern: source.clone(),
        })?;

        Ok(Self { source, pattern })
    }

    /// 이름 전체가 패턴과 일치하는지 확인
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches(name)
    }

    /// 경로의 파일 이름이 패턴과 일치하는지 확인
    ///
    /// 파일 이름이 없거나 UTF-8이 아니면 일치하지 않습니다.
    pub fn matches_file_name(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|s| s.to_str())
            .map(|s| self.matches(s))
            .unwrap_or(false)
    }

    /// 원본 패턴 문자열
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
