// Formatters - 파일 크기, 날짜, 해상도 포맷팅

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

/// 수정 시각 표시 형식
///
/// 항상 "YYYY-MM-DD HH:MM:SS" 형식 (19자)
pub fn format_date_full(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 출력 파일 이름용 타임스탬프 ("YYYYmmddHHMMSS")
pub fn file_timestamp(time: DateTime<Local>) -> String {
    time.format("%Y%m%d%H%M%S").to_string()
}

/// 이미지 해상도 ("W x H")
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{} x {}", width, height)
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3_670_016), "3.5 MB");
        assert_eq!(format_file_size(2_147_483_648), "2.0 GB");
    }

    #[test]
    fn test_format_date_full() {
        let formatted = format_date_full(SystemTime::now());
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_file_timestamp() {
        let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single().unwrap();
        assert_eq!(file_timestamp(time), "20240309070501");
    }

    #[test]
    fn test_format_dimensions() {
        assert_eq!(format_dimensions(1920, 1080), "1920 x 1080");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "group", "groups"), "0 groups");
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(3, "file", "files"), "3 files");
    }
}
